/// Sequence stamps for palette queries. Only the most recently issued stamp
/// may install results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryTracker {
    latest: u64,
}

impl QueryTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest
    }

    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_stamp_supersedes_older() {
        let mut tracker = QueryTracker::default();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert!(!tracker.is_latest(a));
        assert!(tracker.is_latest(b));
        assert_eq!(tracker.latest(), b);
    }
}
