//! Metrics setup and update for the bridge.

use prometheus::{IntCounter, Registry};

/// Request counters, registered against a caller-supplied registry.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub request_total: IntCounter,
    pub service_error_total: IntCounter,
    pub local_error_total: IntCounter,
}

impl Metrics {
    /// Set up counters used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let request_total = add_int_counter_metric(
            metrics_registry,
            "supabridge_request_total",
            "Total requests sent to the REST service.",
        )?;

        let service_error_total = add_int_counter_metric(
            metrics_registry,
            "supabridge_service_error_total",
            "Total errors reported by the REST service.",
        )?;

        let local_error_total = add_int_counter_metric(
            metrics_registry,
            "supabridge_local_error_total",
            "Total requests that failed before or outside the REST service.",
        )?;

        Ok(Self {
            request_total,
            service_error_total,
            local_error_total,
        })
    }

    pub fn record_request(&self) {
        self.request_total.inc();
    }

    pub fn record_service_error(&self) {
        self.service_error_total.inc();
    }

    pub fn record_local_error(&self) {
        self.local_error_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_registered_once() {
        let mut registry = Registry::new();
        let metrics = Metrics::initialize(&mut registry).unwrap();
        metrics.record_request();

        let families = registry.gather();
        let names: Vec<&str> = families.iter().map(|family| family.get_name()).collect();
        assert!(names.contains(&"supabridge_request_total"));
        assert_eq!(metrics.request_total.get(), 1);

        assert!(Metrics::initialize(&mut registry).is_err());
    }
}
