use std::sync::atomic::{AtomicU64, Ordering};

use checkpoint_domain::{Decision, DecisionResult};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct Metrics {
    evaluations: AtomicU64,
    allowed: AtomicU64,
    conditional: AtomicU64,
    disallowed: AtomicU64,
    alerts: AtomicU64,
    failures: AtomicU64,
    releases: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub evaluations: u64,
    pub allowed: u64,
    pub conditional: u64,
    pub disallowed: u64,
    pub alerts: u64,
    pub failures: u64,
    pub releases: u64,
}

impl Metrics {
    pub fn record_decision(&self, result: &DecisionResult) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        let bucket = match result.decision() {
            Decision::Allow => &self.allowed,
            Decision::Conditional => &self.conditional,
            Decision::Disallow => &self.disallowed,
        };
        bucket.fetch_add(1, Ordering::Relaxed);
        if result.requires_immediate_alert() {
            self.alerts.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_release(&self) {
        self.releases.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            allowed: self.allowed.load(Ordering::Relaxed),
            conditional: self.conditional.load(Ordering::Relaxed),
            disallowed: self.disallowed.load(Ordering::Relaxed),
            alerts: self.alerts.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            releases: self.releases.load(Ordering::Relaxed),
        }
    }

    pub fn render_prometheus(&self) -> String {
        let s = self.snapshot();

        format!(
            "# TYPE checkpoint_evaluations_total counter\n\
checkpoint_evaluations_total {}\n\
# TYPE checkpoint_decisions_total counter\n\
checkpoint_decisions_total{{decision=\"ALLOW\"}} {}\n\
checkpoint_decisions_total{{decision=\"CONDITIONAL\"}} {}\n\
checkpoint_decisions_total{{decision=\"DISALLOW\"}} {}\n\
# TYPE checkpoint_alerts_total counter\n\
checkpoint_alerts_total {}\n\
# TYPE checkpoint_evaluation_failures_total counter\n\
checkpoint_evaluation_failures_total {}\n\
# TYPE checkpoint_releases_total counter\n\
checkpoint_releases_total {}\n",
            s.evaluations, s.allowed, s.conditional, s.disallowed, s.alerts, s.failures, s.releases
        )
    }
}
