use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

pub struct DashboardMetrics {
    pub registry: Registry,
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub permission_decisions_total: IntCounterVec,
    pub access_denied_total: IntCounterVec,
}

static METRICS: OnceLock<DashboardMetrics> = OnceLock::new();

fn build_metrics() -> Result<DashboardMetrics, prometheus::Error> {
    let registry = Registry::new();

    let http_requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )?;

    let http_request_duration_seconds = HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        ),
        &["method", "path", "status"],
    )?;

    let permission_decisions_total = IntCounterVec::new(
        Opts::new(
            "permission_decisions_total",
            "Permission sets evaluated, by deciding rule",
        ),
        &["rule"],
    )?;

    let access_denied_total = IntCounterVec::new(
        Opts::new(
            "access_denied_total",
            "Requests denied for a missing capability",
        ),
        &["capability", "surface"],
    )?;

    registry.register(Box::new(http_requests_total.clone()))?;
    registry.register(Box::new(http_request_duration_seconds.clone()))?;
    registry.register(Box::new(permission_decisions_total.clone()))?;
    registry.register(Box::new(access_denied_total.clone()))?;

    Ok(DashboardMetrics {
        registry,
        http_requests_total,
        http_request_duration_seconds,
        permission_decisions_total,
        access_denied_total,
    })
}

/// Registers the collectors. Safe to call more than once.
pub fn init_metrics() {
    metrics();
}

/// `None` only if the collectors could not be registered.
pub fn metrics() -> Option<&'static DashboardMetrics> {
    if let Some(existing) = METRICS.get() {
        return Some(existing);
    }

    match build_metrics() {
        Ok(built) => Some(METRICS.get_or_init(|| built)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to register metrics");
            None
        }
    }
}

pub fn record_http_request(method: &str, path: &str, status: &str, seconds: f64) {
    if let Some(m) = metrics() {
        m.http_requests_total
            .with_label_values(&[method, path, status])
            .inc();
        m.http_request_duration_seconds
            .with_label_values(&[method, path, status])
            .observe(seconds);
    }
}

pub fn record_permission_decision(rule: &str) {
    if let Some(m) = metrics() {
        m.permission_decisions_total.with_label_values(&[rule]).inc();
    }
}

pub fn record_access_denied(capability: &str, surface: &str) {
    if let Some(m) = metrics() {
        m.access_denied_total
            .with_label_values(&[capability, surface])
            .inc();
    }
}

pub fn get_metrics() -> Result<String, prometheus::Error> {
    let Some(m) = metrics() else {
        return Ok(String::new());
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = m.registry.gather();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
