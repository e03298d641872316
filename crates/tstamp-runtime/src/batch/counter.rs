/// Where a batch stands after a completion was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// Requests are still outstanding.
    Pending,
    /// This completion brought `success` to `total`.
    Succeeded,
    /// This completion accounted for the last request and at least one failed.
    Exhausted,
}

/// Success and failure tally of one batch.
///
/// `success + fail` never exceeds `total`: completions past the total are
/// ignored and reported as [`Tally::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchCounter {
    total: usize,
    success: usize,
    fail: usize,
}

impl BatchCounter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            success: 0,
            fail: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn success(&self) -> usize {
        self.success
    }

    pub fn fail(&self) -> usize {
        self.fail
    }

    pub fn settled(&self) -> usize {
        self.success + self.fail
    }

    pub fn is_settled(&self) -> bool {
        self.settled() == self.total
    }

    pub fn record_success(&mut self) -> Tally {
        if self.is_settled() {
            return Tally::Pending;
        }
        self.success += 1;
        if self.success == self.total {
            Tally::Succeeded
        } else if self.is_settled() {
            Tally::Exhausted
        } else {
            Tally::Pending
        }
    }

    pub fn record_failure(&mut self) -> Tally {
        if self.is_settled() {
            return Tally::Pending;
        }
        self.fail += 1;
        if self.is_settled() {
            Tally::Exhausted
        } else {
            Tally::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_successes_finish_on_last() {
        let mut counter = BatchCounter::new(3);
        assert_eq!(counter.record_success(), Tally::Pending);
        assert_eq!(counter.record_success(), Tally::Pending);
        assert_eq!(counter.record_success(), Tally::Succeeded);
        assert_eq!(counter.success(), 3);
        assert!(counter.is_settled());
    }

    #[test]
    fn test_last_failure_exhausts() {
        let mut counter = BatchCounter::new(3);
        assert_eq!(counter.record_failure(), Tally::Pending);
        assert_eq!(counter.record_success(), Tally::Pending);
        assert_eq!(counter.record_failure(), Tally::Exhausted);
        assert_eq!((counter.success(), counter.fail()), (1, 2));
    }

    #[test]
    fn test_success_after_failures_exhausts() {
        let mut counter = BatchCounter::new(2);
        assert_eq!(counter.record_failure(), Tally::Pending);
        assert_eq!(counter.record_success(), Tally::Exhausted);
    }

    #[test]
    fn test_completions_past_total_are_ignored() {
        let mut counter = BatchCounter::new(1);
        assert_eq!(counter.record_success(), Tally::Succeeded);
        assert_eq!(counter.record_failure(), Tally::Pending);
        assert_eq!(counter.record_success(), Tally::Pending);
        assert_eq!(counter.settled(), 1);
    }

    #[test]
    fn test_empty_batch_is_settled() {
        let counter = BatchCounter::new(0);
        assert!(counter.is_settled());
        assert_eq!(counter.total(), 0);
    }
}
