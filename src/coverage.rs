//! Tracking of contig ranges whose data has been fully retrieved.

use crate::contig_interval::{ContigInterval, coalesce};

/// An ordered, coalesced set of covered ranges.
///
/// Invariant: after every mutation, no two entries for the same contig
/// intersect or are adjacent. Because of that, a query is covered iff a
/// single entry contains it in full, so `is_covered` never has to reason
/// about unions of entries.
#[derive(Debug, Clone, Default)]
pub struct CoverageTracker<C: Ord + Eq> {
    ranges: Vec<ContigInterval<C>>,
}

impl<C: Ord + Eq> CoverageTracker<C> {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn from_ranges(ranges: Vec<ContigInterval<C>>) -> Self {
        Self {
            ranges: coalesce(ranges),
        }
    }

    /// True iff the query's full extent has already been retrieved.
    pub fn is_covered(&self, query: &ContigInterval<C>) -> bool {
        self.ranges.iter().any(|r| r.contains_interval(query))
    }

    /// Insert a range and re-coalesce. May be called before the range's
    /// data has actually arrived.
    pub fn mark_covered(&mut self, range: ContigInterval<C>) {
        let mut ranges = std::mem::take(&mut self.ranges);
        ranges.push(range);
        self.ranges = coalesce(ranges);
    }

    pub fn ranges(&self) -> &[ContigInterval<C>] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(contig: &str, start: u64, stop: u64) -> ContigInterval<String> {
        ContigInterval::new(contig.to_string(), start, stop)
    }

    #[test]
    fn test_empty_tracker_covers_nothing() {
        let tracker: CoverageTracker<String> = CoverageTracker::new();
        assert!(!tracker.is_covered(&ci("chr1", 0, 0)));
    }

    #[test]
    fn test_marked_range_is_covered() {
        let mut tracker = CoverageTracker::new();
        tracker.mark_covered(ci("chr1", 10, 100));
        assert!(tracker.is_covered(&ci("chr1", 10, 100)));
        assert!(tracker.is_covered(&ci("chr1", 20, 80)));
        assert!(!tracker.is_covered(&ci("chr1", 5, 50)));
        assert!(!tracker.is_covered(&ci("chr1", 50, 101)));
        assert!(!tracker.is_covered(&ci("chr2", 20, 80)));
    }

    #[test]
    fn test_adjacent_marks_cover_their_union() {
        let mut tracker = CoverageTracker::new();
        tracker.mark_covered(ci("chr1", 10, 20));
        tracker.mark_covered(ci("chr1", 21, 30));
        // spans both original marks; covered only because they merged
        assert!(tracker.is_covered(&ci("chr1", 12, 28)));
        assert_eq!(tracker.ranges(), &[ci("chr1", 10, 30)]);
    }

    #[test]
    fn test_gap_breaks_coverage() {
        let mut tracker = CoverageTracker::new();
        tracker.mark_covered(ci("chr1", 10, 20));
        tracker.mark_covered(ci("chr1", 25, 30));
        assert!(!tracker.is_covered(&ci("chr1", 12, 28)));
        assert_eq!(tracker.ranges().len(), 2);
    }

    #[test]
    fn test_contigs_are_independent() {
        let mut tracker = CoverageTracker::new();
        tracker.mark_covered(ci("chr1", 10, 20));
        tracker.mark_covered(ci("chr2", 21, 30));
        assert_eq!(tracker.ranges().len(), 2);
        assert!(!tracker.is_covered(&ci("chr2", 10, 20)));
    }

    #[test]
    fn test_ranges_stay_coalesced_after_every_insert() {
        let mut tracker = CoverageTracker::new();
        for (start, stop) in [(40, 50), (10, 20), (21, 30), (31, 39)] {
            tracker.mark_covered(ci("chr1", start, stop));
        }
        assert_eq!(tracker.ranges(), &[ci("chr1", 10, 50)]);
    }
}
