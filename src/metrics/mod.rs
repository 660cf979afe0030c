// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics module for the platform hello service
//!
//! Contains the Prometheus metrics registry holding the request counter.

mod registry;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
