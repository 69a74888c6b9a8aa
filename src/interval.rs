use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval [start, stop] on a single coordinate axis.
///
/// Both bounds are included. `length` uses the exclusive-width convention
/// (`stop - start`), matching the upstream track semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: u64,
    pub stop: u64,
}

impl Interval {
    /// Invariant: `start <= stop`.
    pub fn new(start: u64, stop: u64) -> Self {
        debug_assert!(start <= stop, "interval start must not exceed stop");
        Self { start, stop }
    }

    pub fn length(&self) -> u64 {
        self.stop - self.start
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }

    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.start <= other.start && self.stop >= other.stop
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_exclusive_width() {
        assert_eq!(Interval::new(10, 20).length(), 10);
        assert_eq!(Interval::new(5, 5).length(), 0);
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(10, 20);
        assert!(a.intersects(&Interval::new(15, 25)));
        assert!(a.intersects(&Interval::new(20, 30)));
        assert!(a.intersects(&Interval::new(0, 10)));
        assert!(a.intersects(&Interval::new(12, 18)));
        assert!(!a.intersects(&Interval::new(21, 30)));
        assert!(!a.intersects(&Interval::new(0, 9)));
    }

    #[test]
    fn test_contains_interval() {
        let a = Interval::new(10, 20);
        assert!(a.contains_interval(&Interval::new(10, 20)));
        assert!(a.contains_interval(&Interval::new(12, 18)));
        assert!(!a.contains_interval(&Interval::new(9, 20)));
        assert!(!a.contains_interval(&Interval::new(15, 21)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(3, 7).to_string(), "[3, 7]");
    }
}
