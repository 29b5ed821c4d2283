use metrics::counter;

/// Counters for identity replication outcomes
#[derive(Debug, Clone)]
pub struct SyncMetrics {
    prefix: &'static str,
}

impl SyncMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "hd_identity.sync",
        }
    }

    pub fn upserted(&self) {
        counter!(format!("{}.upserts", self.prefix)).increment(1);
    }

    /// Email was namespaced and the retry succeeded
    pub fn conflict_rewritten(&self) {
        counter!(format!("{}.conflict_rewrites", self.prefix)).increment(1);
    }

    pub fn conflict(&self) {
        counter!(format!("{}.conflicts", self.prefix)).increment(1);
    }

    /// Storage failed but an existing replica was served
    pub fn degraded(&self) {
        counter!(format!("{}.degraded", self.prefix)).increment(1);
    }

    pub fn failure(&self) {
        counter!(format!("{}.failures", self.prefix)).increment(1);
    }
}

impl Default for SyncMetrics {
    fn default() -> Self {
        Self::new()
    }
}
