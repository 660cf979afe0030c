// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics registry

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide metrics registry.
///
/// Cloning is cheap: all handles share the same underlying registry and
/// counter storage, so any clone observes increments made through any
/// other clone.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // Total inbound HTTP requests, exposed as `app_requests_total`
    http_requests: Counter,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Counter::default();
        registry.register(
            "app_requests",
            "Total HTTP requests",
            http_requests.clone(),
        );

        // prometheus-client registers no process collectors on its own,
        // so the start-time gauge is set here once at construction.
        let process_start_time = Gauge::<i64>::default();
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            process_start_time.clone(),
        );
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        process_start_time.set(now as i64);

        Self {
            registry: Arc::new(Mutex::new(registry)),
            http_requests,
        }
    }

    /// Counts one inbound HTTP request.
    ///
    /// Called by the application middleware for every request before any
    /// routing decision; the underlying counter is atomic.
    pub fn record_request(&self) {
        self.http_requests.inc();
    }

    /// Current request count
    pub fn request_count(&self) -> u64 {
        self.http_requests.get()
    }

    /// Encodes the registry in OpenMetrics text format
    pub async fn encode_metrics(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_starts_at_zero() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.request_count(), 0);
    }

    #[test]
    fn test_record_request_increments() {
        let registry = MetricsRegistry::new();
        registry.record_request();
        registry.record_request();
        registry.record_request();
        assert_eq!(registry.request_count(), 3);
    }

    #[test]
    fn test_clones_share_counter_storage() {
        let registry = MetricsRegistry::new();
        let clone = registry.clone();
        clone.record_request();
        assert_eq!(registry.request_count(), 1);
    }

    #[test]
    fn test_fresh_registry_is_independent() {
        let first = MetricsRegistry::new();
        first.record_request();
        let second = MetricsRegistry::new();
        assert_eq!(second.request_count(), 0);
    }

    #[tokio::test]
    async fn test_encode_contains_request_counter() {
        let registry = MetricsRegistry::new();
        let body = registry.encode_metrics().await.unwrap();
        assert!(body.contains("# TYPE app_requests counter"));
        assert!(body.contains("# HELP app_requests Total HTTP requests"));
        assert!(body.contains("app_requests_total 0"));
    }

    #[tokio::test]
    async fn test_encode_reflects_increments() {
        let registry = MetricsRegistry::new();
        for _ in 0..5 {
            registry.record_request();
        }
        let body = registry.encode_metrics().await.unwrap();
        assert!(body.contains("app_requests_total 5"));
    }

    #[tokio::test]
    async fn test_encode_contains_process_start_time() {
        let registry = MetricsRegistry::new();
        let body = registry.encode_metrics().await.unwrap();
        let value: i64 = body
            .lines()
            .find(|l| l.starts_with("process_start_time_seconds "))
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|v| v.parse().ok())
            .expect("process_start_time_seconds sample missing");
        assert!(value > 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_exact() {
        let registry = MetricsRegistry::new();
        let mut handles = Vec::new();
        for _ in 0..100 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.record_request();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(registry.request_count(), 100);
    }
}
