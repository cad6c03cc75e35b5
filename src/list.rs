//! Structured protocol lists and their canonical text encoding.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::parser::{parse, ParseError};
use crate::ranges::RangeSet;

/// A set of protocol entries with unique names, each mapped to a canonical
/// [`RangeSet`] of supported versions.
///
/// Names are kept as open strings so lists can carry subprotocols this build
/// does not recognize yet. Entries iterate in ascending name order, which is
/// also the canonical encoding order. A `ProtocolList` is immutable once
/// built: new lists come from [`parse`](crate::parse), [`union`](Self::union),
/// or the vote aggregator, never from in-place mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolList {
    entries: BTreeMap<String, RangeSet>,
}

impl ProtocolList {
    /// The versions declared for `name`, if the list has such an entry.
    pub fn get(&self, name: &str) -> Option<&RangeSet> {
        self.entries.get(name)
    }

    /// Entries in canonical (ascending name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RangeSet)> {
        self.entries.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Per-name union of two lists. A name present in only one input passes
    /// through unchanged; a name present in both gets its ranges merged.
    pub fn union(&self, other: &ProtocolList) -> ProtocolList {
        let mut entries = self.entries.clone();
        for (name, set) in &other.entries {
            entries
                .entry(name.clone())
                .and_modify(|mine| *mine = mine.union(set))
                .or_insert_with(|| set.clone());
        }
        ProtocolList { entries }
    }

    /// Insert a canonical entry while building a list. Empty range sets are
    /// dropped rather than encoded as `Name=`.
    pub(crate) fn insert(&mut self, name: String, versions: RangeSet) {
        if !versions.is_empty() {
            self.entries.insert(name, versions);
        }
    }
}

impl fmt::Display for ProtocolList {
    /// The canonical text form: entries space-joined in ascending name order,
    /// each as `Name=` followed by its comma-joined ranges. Equal canonical
    /// lists always encode identically.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (name, set)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, set)?;
        }
        Ok(())
    }
}

impl FromStr for ProtocolList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
