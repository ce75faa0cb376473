/// Per-target failure recorded while processing a bulk request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BulkItemFailure {
    pub user_id: String,
    pub error: String,
}

/// Aggregate result of a bulk request. Targets are processed independently, so a
/// failure on one never prevents the next from being attempted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BulkOperationOutcome {
    success_count: usize,
    failures: Vec<BulkItemFailure>,
}

impl BulkOperationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, user_id: impl Into<String>, error: impl Into<String>) {
        self.failures.push(BulkItemFailure {
            user_id: user_id.into(),
            error: error.into(),
        });
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[BulkItemFailure] {
        &self.failures
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failures.len()
    }

    pub fn is_partial_failure(&self) -> bool {
        self.success_count > 0 && !self.failures.is_empty()
    }
}
