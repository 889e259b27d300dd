use std::fmt;

/// The outcome of one sample
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
    /// The operator declined to overwrite the config file
    Skipped,
}

/// Running totals for a batch
///
/// A skipped run is not counted as failed, but the batch only succeeds when every run in it
/// succeeded, so a skip still fails the batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchResult {
    pub fn record(&mut self, status: RunStatus) {
        self.total += 1;
        match status {
            RunStatus::Succeeded => self.succeeded += 1,
            RunStatus::Failed => self.failed += 1,
            RunStatus::Skipped => self.skipped += 1,
        }
    }

    /// True if every run in the batch succeeded
    pub fn is_success(&self) -> bool {
        self.succeeded == self.total
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} completed successfully", self.succeeded, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(statuses: &[RunStatus]) -> BatchResult {
        let mut result = BatchResult::default();
        statuses.iter().for_each(|s| result.record(*s));
        result
    }

    #[test]
    fn one_failure_fails_the_batch() {
        let result = batch(&[RunStatus::Succeeded, RunStatus::Failed, RunStatus::Succeeded]);
        assert_eq!(result.to_string(), "2/3 completed successfully");
        assert_eq!(result.failed, 1);
        assert!(!result.is_success());
    }

    #[test]
    fn skip_is_not_a_failure_but_fails_the_batch() {
        let result = batch(&[RunStatus::Succeeded, RunStatus::Skipped]);
        assert_eq!(result.to_string(), "1/2 completed successfully");
        assert_eq!(result.failed, 0);
        assert_eq!(result.skipped, 1);
        assert!(!result.is_success());
    }

    #[test]
    fn lone_skip_fails_the_batch() {
        let result = batch(&[RunStatus::Skipped]);
        assert_eq!(result.to_string(), "0/1 completed successfully");
        assert!(!result.is_success());
    }

    #[test]
    fn empty_batch_is_trivially_successful() {
        assert!(BatchResult::default().is_success());
    }
}
