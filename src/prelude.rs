// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use platform_hello::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::{AppState, create_metrics_router, create_router};

// Metrics registry
pub use crate::metrics::MetricsRegistry;
