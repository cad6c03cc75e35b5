//! Version range algebra: inclusive `[low, high]` intervals over `u32` and
//! canonical sets of them (sorted, disjoint, non-adjacent).

use std::fmt;

/// An inclusive range of consecutive version numbers. Invariant: `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionRange {
    low: u32,
    high: u32,
}

impl VersionRange {
    /// Build a range, rejecting inverted bounds.
    pub fn new(low: u32, high: u32) -> Option<VersionRange> {
        if low <= high {
            Some(VersionRange { low, high })
        } else {
            None
        }
    }

    /// A range holding exactly one version.
    pub fn single(version: u32) -> VersionRange {
        VersionRange { low: version, high: version }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn contains(&self, version: u32) -> bool {
        self.low <= version && version <= self.high
    }

    /// Number of versions covered. Never zero; `u64` because `[0, u32::MAX]`
    /// covers 2^32 versions.
    pub fn count(&self) -> u64 {
        u64::from(self.high) - u64::from(self.low) + 1
    }
}

impl fmt::Display for VersionRange {
    /// A single version prints bare; a wider range prints as `low-high`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// A canonical set of version ranges: sorted ascending by `low`, pairwise
/// disjoint, and non-adjacent (touching ranges are coalesced on construction).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<VersionRange>,
}

impl RangeSet {
    /// Merge arbitrary ranges into canonical form: sort by `low`, then extend
    /// the current range whenever the next one overlaps or is adjacent.
    pub fn from_ranges<I>(ranges: I) -> RangeSet
    where
        I: IntoIterator<Item = VersionRange>,
    {
        let mut raw: Vec<VersionRange> = ranges.into_iter().collect();
        raw.sort();

        let mut merged: Vec<VersionRange> = Vec::with_capacity(raw.len());
        for r in raw {
            match merged.last_mut() {
                Some(last) if r.low <= last.high.saturating_add(1) => {
                    last.high = last.high.max(r.high);
                }
                _ => merged.push(r),
            }
        }
        RangeSet { ranges: merged }
    }

    /// True iff some range contains `version`. Binary search over the sorted
    /// disjoint ranges.
    pub fn contains(&self, version: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.low <= version);
        idx > 0 && self.ranges[idx - 1].high >= version
    }

    /// Union with another set, re-canonicalized.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        RangeSet::from_ranges(self.ranges.iter().chain(other.ranges.iter()).copied())
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionRange> {
        self.ranges.iter()
    }

    /// Every individual version in the set, ascending.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(|r| r.low..=r.high)
    }

    /// Total number of individual versions covered.
    pub fn version_count(&self) -> u64 {
        self.ranges.iter().map(|r| r.count()).sum()
    }
}

impl fmt::Display for RangeSet {
    /// Ranges comma-joined in ascending order, e.g. `1-4,6,9-10`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}
