//! Parse protocol-list text into a [`ProtocolList`] using PEST.
//!
//! Parsing is all-or-nothing: a malformed list yields an error and no partial
//! structure. Unrecognized protocol names are not errors; they are kept
//! verbatim for forward compatibility. Raw ranges are canonicalized (sorted,
//! merged) before the list is returned, so `parse` never produces
//! overlapping or adjacent ranges.

use pest::Parser;
use pest_derive::Parser as PestParser;

use crate::list::ProtocolList;
use crate::ranges::{RangeSet, VersionRange};

/// Upper bound on how many individual versions one entry may cover.
///
/// Voting and support checking walk entries version by version; without this
/// cap a single `N=0-4294967295` entry would make those walks unbounded.
pub const MAX_VERSIONS_TO_EXPAND: u64 = 500;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct ListParser;

/// Why a protocol list failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not match the `Name=VersionSpec` grammar (empty name,
    /// empty version spec, stray `=`, non-numeric token, and so on).
    #[error("malformed protocol list: {0}")]
    Syntax(String),
    /// A version token is numeric but does not fit in a `u32`.
    #[error("protocol version out of range: {0}")]
    BadVersion(String),
    /// A range with `low > high`.
    #[error("inverted version range: {low}-{high}")]
    InvertedRange { low: u32, high: u32 },
    /// The same protocol name appeared twice in one list.
    #[error("duplicate protocol name: {0}")]
    DuplicateName(String),
    /// One entry covers more than [`MAX_VERSIONS_TO_EXPAND`] versions.
    #[error("too many versions to expand in entry: {0}")]
    TooManyVersions(String),
}

/// Parse a protocol list. Empty or whitespace-only text is the empty list.
pub fn parse(text: &str) -> Result<ProtocolList, ParseError> {
    let mut pairs = ListParser::parse(Rule::list, text)
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    let list = pairs
        .next()
        .ok_or_else(|| ParseError::Syntax("empty parse".to_string()))?;

    let mut out = ProtocolList::default();
    for entry in list.into_inner() {
        if entry.as_rule() != Rule::entry {
            continue;
        }
        let mut inner = entry.into_inner();
        let name = inner
            .next()
            .ok_or_else(|| ParseError::Syntax("entry: missing name".to_string()))?
            .as_str();
        let versions = inner
            .next()
            .ok_or_else(|| ParseError::Syntax("entry: missing versions".to_string()))?;
        if out.get(name).is_some() {
            return Err(ParseError::DuplicateName(name.to_string()));
        }
        out.insert(name.to_string(), build_versions(versions, name)?);
    }
    Ok(out)
}

fn build_versions(
    pair: pest::iterators::Pair<Rule>,
    name: &str,
) -> Result<RangeSet, ParseError> {
    let mut ranges = Vec::new();
    for item in pair.into_inner() {
        let mut bounds = item.into_inner();
        let low = parse_version(
            bounds
                .next()
                .ok_or_else(|| ParseError::Syntax("item: missing version".to_string()))?,
        )?;
        let high = match bounds.next() {
            Some(p) => parse_version(p)?,
            None => low,
        };
        let range =
            VersionRange::new(low, high).ok_or(ParseError::InvertedRange { low, high })?;
        ranges.push(range);
    }

    let set = RangeSet::from_ranges(ranges);
    if set.version_count() > MAX_VERSIONS_TO_EXPAND {
        return Err(ParseError::TooManyVersions(name.to_string()));
    }
    Ok(set)
}

fn parse_version(pair: pest::iterators::Pair<Rule>) -> Result<u32, ParseError> {
    pair.as_str()
        .parse()
        .map_err(|_| ParseError::BadVersion(pair.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_versions_and_ranges() {
        let list = parse("Link=1,3-5 Cons=1").expect("parse");
        let link = list.get("Link").expect("Link entry");
        assert!(link.contains(1));
        assert!(!link.contains(2));
        assert!(link.contains(4));
        assert!(list.get("Cons").expect("Cons entry").contains(1));
    }

    #[test]
    fn raw_ranges_are_canonicalized() {
        let list = parse("Link=3,1,2,2-4").expect("parse");
        assert_eq!(list.to_string(), "Link=1-4");
    }

    #[test]
    fn empty_input_is_the_empty_list() {
        assert!(parse("").expect("empty").is_empty());
        assert!(parse("  \t ").expect("blank").is_empty());
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(parse("Link"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link="), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("=1"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link=a"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link=1-"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link=-2"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link=1,"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("Link=1=2"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn rejects_versions_beyond_u32() {
        assert!(matches!(
            parse("Link=4294967296"),
            Err(ParseError::BadVersion(_))
        ));
        // u32::MAX itself is representable.
        let list = parse("Link=4294967295").expect("parse");
        assert!(list.get("Link").expect("entry").contains(u32::MAX));
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            parse("Link=5-1"),
            Err(ParseError::InvertedRange { low: 5, high: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_names_outright() {
        assert_eq!(
            parse("Link=1 Link=2"),
            Err(ParseError::DuplicateName("Link".to_string()))
        );
    }

    #[test]
    fn caps_per_entry_expansion() {
        assert!(parse("Link=1-500").is_ok());
        assert_eq!(
            parse("Link=1-501"),
            Err(ParseError::TooManyVersions("Link".to_string()))
        );
        // The cap applies to the canonical set, so overlap is not double-counted.
        assert!(parse("Link=1-400,101-500").is_ok());
    }

    #[test]
    fn keeps_unknown_names() {
        let list = parse("Wombat=9 Link=1").expect("parse");
        assert!(list.get("Wombat").expect("entry").contains(9));
    }
}
