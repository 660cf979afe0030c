// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod root;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::{index, not_found};
