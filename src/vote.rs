//! Threshold voting over protocol lists.
//!
//! Each voter submits one encoded protocol list. The aggregator counts, per
//! `(protocol name, version)` pair, how many voters support that exact
//! version, and keeps the pairs whose count meets the threshold.

use std::collections::BTreeMap;

use tracing::warn;

use crate::list::ProtocolList;
use crate::parser::parse;
use crate::ranges::{RangeSet, VersionRange};

/// Per-(name, version) supporter counts. Transient: built during one
/// aggregation and consumed when the output list is produced.
#[derive(Debug, Default)]
struct VoteTally {
    counts: BTreeMap<String, BTreeMap<u32, usize>>,
}

impl VoteTally {
    /// Count every version of every entry in one voter's list. A canonical
    /// list mentions each `(name, version)` pair at most once, so a single
    /// increment per pair equals "number of voters whose list contains it".
    fn record(&mut self, list: &ProtocolList) {
        for (name, versions) in list.iter() {
            let per_version = self.counts.entry(name.to_string()).or_default();
            for v in versions.versions() {
                *per_version.entry(v).or_insert(0) += 1;
            }
        }
    }

    /// Keep the versions meeting `threshold` and canonicalize per name.
    ///
    /// The comparison is signed: with `threshold <= 0` every version any
    /// voter mentioned qualifies. That degenerate case is deliberate and
    /// must not be clamped away.
    fn into_list(self, threshold: i32) -> ProtocolList {
        let mut out = ProtocolList::default();
        for (name, per_version) in self.counts {
            let kept: Vec<VersionRange> = per_version
                .into_iter()
                .filter(|&(_, count)| count as i64 >= i64::from(threshold))
                .map(|(v, _)| VersionRange::single(v))
                .collect();
            if !kept.is_empty() {
                out.insert(name, RangeSet::from_ranges(kept));
            }
        }
        out
    }
}

/// Aggregate many encoded protocol lists into one threshold-filtered list.
///
/// Each input is parsed independently; a malformed input is skipped with a
/// warning so one bad voter cannot block the whole computation. The output
/// contains exactly the versions supported by at least `threshold` voters,
/// canonicalized and encoded.
pub fn compute_vote<S: AsRef<str>>(votes: &[S], threshold: i32) -> String {
    let mut tally = VoteTally::default();
    for vote in votes {
        match parse(vote.as_ref()) {
            Ok(list) => tally.record(&list),
            Err(e) => warn!(error = %e, "skipping malformed protocol vote"),
        }
    }
    tally.into_list(threshold).to_string()
}
