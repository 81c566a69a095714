use serde::{Serialize, Deserialize};

/// Lifecycle status of one image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
    Retrying,
}

impl LoadStatus {
    /// `Loaded` and `Failed` admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadStatus::Loaded | LoadStatus::Failed)
    }
}

/// One image's loading lifecycle, owned by its batch for its whole life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadTask {
    pub identifier: String,
    pub status: LoadStatus,
    pub retry_count: u32,
}

/// Retry and timeout policy for one preload run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloadConfig {
    pub max_retries: u32,
    pub retry_backoff_ms: u32,
    pub safety_timeout_ms: u32,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            retry_backoff_ms: RETRY_BACKOFF_MS,
            safety_timeout_ms: SAFETY_TIMEOUT_MS,
        }
    }
}

/// What the driver should do after a failed load attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailureAction {
    /// Re-issue the load once the backoff delay has passed.
    Retry,
    /// Retry budget exhausted; the task is terminal. `progress` carries the
    /// fraction to report, or `None` when completion was already claimed.
    GiveUp { progress: Option<f64> },
}

/// Run-time state for one preload invocation.
///
/// `completed_count` equals the number of terminal tasks at all times, no
/// matter the order load results arrive in, and completion is claimed
/// exactly once: either when the last task turns terminal or when the
/// driver's safety timeout forces it.
#[derive(Debug, Clone)]
pub struct PreloadBatch {
    tasks: Vec<LoadTask>,
    completed_count: usize,
    completion_claimed: bool,
    config: PreloadConfig,
}

impl PreloadBatch {
    pub fn new(identifiers: Vec<String>, config: PreloadConfig) -> Self {
        let tasks = identifiers
            .into_iter()
            .map(|identifier| LoadTask {
                identifier,
                status: LoadStatus::Pending,
                retry_count: 0,
            })
            .collect();
        Self {
            tasks,
            completed_count: 0,
            completion_claimed: false,
            config,
        }
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn task(&self, index: usize) -> Option<&LoadTask> {
        self.tasks.get(index)
    }

    pub fn config(&self) -> &PreloadConfig {
        &self.config
    }

    pub fn completion_claimed(&self) -> bool {
        self.completion_claimed
    }

    /// Fraction of tasks that reached a terminal status, in `[0, 1]`.
    /// An empty batch counts as fully loaded.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            1.0
        } else {
            self.completed_count as f64 / self.tasks.len() as f64
        }
    }

    /// Marks a task `Loaded`. Returns the progress fraction to report, or
    /// `None` when there is nothing to surface: the task was already
    /// terminal, or completion was claimed before this result arrived.
    pub fn record_loaded(&mut self, index: usize) -> Option<f64> {
        let task = self.tasks.get_mut(index)?;
        if task.status.is_terminal() {
            return None;
        }
        task.status = LoadStatus::Loaded;
        self.completed_count += 1;
        if self.completion_claimed {
            None
        } else {
            Some(self.progress())
        }
    }

    /// Records a failed attempt. Returns `None` when the task is unknown or
    /// already terminal.
    pub fn record_failure(&mut self, index: usize) -> Option<FailureAction> {
        let max_retries = self.config.max_retries;
        let task = self.tasks.get_mut(index)?;
        if task.status.is_terminal() {
            return None;
        }
        if task.retry_count < max_retries {
            task.status = LoadStatus::Retrying;
            Some(FailureAction::Retry)
        } else {
            task.status = LoadStatus::Failed;
            log::debug!(
                "preload: giving up on {} after {} attempts",
                task.identifier,
                task.retry_count + 1
            );
            self.completed_count += 1;
            let progress = if self.completion_claimed {
                None
            } else {
                Some(self.progress())
            };
            Some(FailureAction::GiveUp { progress })
        }
    }

    /// Puts a `Retrying` task back in flight. Returns the attempt number to
    /// bake into the cache-defeating identifier.
    pub fn record_reissue(&mut self, index: usize) -> Option<u32> {
        let task = self.tasks.get_mut(index)?;
        if task.status != LoadStatus::Retrying {
            return None;
        }
        task.retry_count += 1;
        task.status = LoadStatus::Pending;
        Some(task.retry_count)
    }

    /// True exactly once, when every task is terminal.
    pub fn poll_completion(&mut self) -> bool {
        if self.completion_claimed || self.completed_count < self.tasks.len() {
            return false;
        }
        self.completion_claimed = true;
        true
    }

    /// Safety-timeout escape hatch: claims completion regardless of how many
    /// tasks are still in flight. True unless completion was already claimed.
    pub fn force_completion(&mut self) -> bool {
        if self.completion_claimed {
            return false;
        }
        self.completion_claimed = true;
        true
    }
}

/// Appends a retry token so a re-issued fetch bypasses whatever cache entry
/// the failed attempt left behind.
pub fn retry_identifier(identifier: &str, attempt: u32) -> String {
    if identifier.contains('?') {
        format!("{}&retry={}", identifier, attempt)
    } else {
        format!("{}?retry={}", identifier, attempt)
    }
}

// Retry and completion policy
pub const MAX_RETRIES: u32 = 3;          // Attempts after the initial load
pub const RETRY_BACKOFF_MS: u32 = 1000;  // Constant backoff between attempts
pub const SAFETY_TIMEOUT_MS: u32 = 5000; // Completion fires no later than this

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(identifiers: &[&str]) -> PreloadBatch {
        PreloadBatch::new(
            identifiers.iter().map(|s| s.to_string()).collect(),
            PreloadConfig::default(),
        )
    }

    #[test]
    fn all_loads_succeeding_complete_once() {
        let mut b = batch(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(b.record_loaded(0), Some(1.0 / 3.0));
        assert!(!b.poll_completion());
        assert_eq!(b.record_loaded(1), Some(2.0 / 3.0));
        assert_eq!(b.record_loaded(2), Some(1.0));
        assert!(b.poll_completion());
        assert!(!b.poll_completion());
    }

    #[test]
    fn failures_retry_until_budget_exhausted() {
        let mut b = batch(&["a.jpg"]);
        for attempt in 1..=MAX_RETRIES {
            assert_eq!(b.record_failure(0), Some(FailureAction::Retry));
            assert_eq!(b.task(0).unwrap().status, LoadStatus::Retrying);
            assert_eq!(b.record_reissue(0), Some(attempt));
            assert_eq!(b.task(0).unwrap().status, LoadStatus::Pending);
        }
        assert_eq!(
            b.record_failure(0),
            Some(FailureAction::GiveUp { progress: Some(1.0) })
        );
        assert_eq!(b.task(0).unwrap().status, LoadStatus::Failed);
        assert_eq!(b.task(0).unwrap().retry_count, MAX_RETRIES);
        assert!(b.poll_completion());
    }

    #[test]
    fn empty_batch_completes_immediately() {
        let mut b = batch(&[]);
        assert_eq!(b.progress(), 1.0);
        assert!(b.poll_completion());
        assert!(!b.poll_completion());
    }

    #[test]
    fn safety_timeout_claims_completion_once() {
        let mut b = batch(&["a.jpg", "b.jpg"]);
        assert_eq!(b.record_loaded(0), Some(0.5));
        assert!(b.force_completion());
        assert!(!b.force_completion());
        // late arrivals keep the books straight but are not re-surfaced
        assert_eq!(b.record_loaded(1), None);
        assert_eq!(b.completed_count(), 2);
        assert!(!b.poll_completion());
    }

    #[test]
    fn completion_is_order_insensitive() {
        let config = PreloadConfig {
            max_retries: 0,
            ..PreloadConfig::default()
        };
        let mut b = PreloadBatch::new(vec!["a.jpg".to_string(), "b.jpg".to_string()], config);
        assert_eq!(
            b.record_failure(1),
            Some(FailureAction::GiveUp { progress: Some(0.5) })
        );
        assert!(!b.poll_completion());
        assert_eq!(b.record_loaded(0), Some(1.0));
        assert!(b.poll_completion());
    }

    #[test]
    fn duplicate_identifiers_are_tracked_independently() {
        let mut b = batch(&["a.jpg", "a.jpg"]);
        assert_eq!(b.record_loaded(0), Some(0.5));
        assert_eq!(b.record_loaded(1), Some(1.0));
        assert!(b.poll_completion());
    }

    #[test]
    fn terminal_tasks_ignore_further_reports() {
        let mut b = batch(&["a.jpg", "b.jpg"]);
        assert_eq!(b.record_loaded(0), Some(0.5));
        assert_eq!(b.record_loaded(0), None);
        assert_eq!(b.record_failure(0), None);
        assert_eq!(b.completed_count(), 1);
    }

    #[test]
    fn reissue_requires_a_retrying_task() {
        let mut b = batch(&["a.jpg"]);
        assert_eq!(b.record_reissue(0), None);
        assert_eq!(b.record_failure(0), Some(FailureAction::Retry));
        assert_eq!(b.record_reissue(0), Some(1));
        assert_eq!(b.record_reissue(0), None);
    }

    #[test]
    fn retry_identifier_appends_cache_buster() {
        assert_eq!(retry_identifier("gift.jpg", 1), "gift.jpg?retry=1");
        assert_eq!(retry_identifier("gift.jpg?v=2", 3), "gift.jpg?v=2&retry=3");
    }
}
