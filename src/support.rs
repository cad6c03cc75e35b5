//! The compiled-in support registry and the queries answered against it.
//!
//! The registry declares, per recognized subprotocol, the version range this
//! build actually implements. It is parsed once on first use and read-only
//! afterwards, so concurrent callers need no synchronization.

use once_cell::sync::Lazy;

use crate::list::ProtocolList;
use crate::parser::parse;
use crate::proto::Protocol;
use crate::ranges::{RangeSet, VersionRange};

/// Protocol versions this build implements, one entry per recognized
/// subprotocol.
const SUPPORTED_PROTOCOLS: &[&str] = &[
    "Cons=1-2",
    "Desc=1-2",
    "DirCache=1-2",
    "HSDir=1-2",
    "HSIntro=3-4",
    "HSRend=1-2",
    "Link=1-4",
    "LinkAuth=1,3",
    "Microdesc=1-2",
    "Relay=1-2",
];

static SUPPORTED: Lazy<ProtocolList> = Lazy::new(|| {
    // The table above is compiled in; a parse failure is a programming error
    // caught by the registry tests, not a runtime condition.
    parse(&SUPPORTED_PROTOCOLS.join(" ")).expect("supported-protocol table is well-formed")
});

/// This build's registry encoded as canonical protocol-list text.
pub fn get_supported_protocols() -> String {
    SUPPORTED.to_string()
}

/// True iff this build supports `version` of `proto`.
pub fn is_supported_here(proto: Protocol, version: u32) -> bool {
    SUPPORTED
        .get(proto.name())
        .map_or(false, |versions| versions.contains(version))
}

/// True iff `list` parses and includes support for `version` of `proto`.
/// A malformed list or a missing entry is "not supported", never an error.
pub fn list_supports_protocol(list: &str, proto: Protocol, version: u32) -> bool {
    match parse(list) {
        Ok(parsed) => parsed
            .get(proto.name())
            .map_or(false, |versions| versions.contains(version)),
        Err(_) => false,
    }
}

/// Check every version required by `list` against this build's registry.
///
/// Returns `(true, "")` when nothing is missing; otherwise `false` plus the
/// unsupported versions re-encoded as a canonical protocol list. Entries with
/// unrecognized names are never checked and never reported missing. If the
/// input does not parse there is no structure to report, so the result is
/// `(false, "")`.
///
/// The walk is per individual version, quadratic-ish in the total number of
/// required versions. That bound is intentional and relied on by callers; the
/// expansion cap at parse time keeps it small.
pub fn all_supported(list: &str) -> (bool, String) {
    let parsed = match parse(list) {
        Ok(p) => p,
        Err(_) => return (false, String::new()),
    };

    let mut missing = ProtocolList::default();
    for (name, versions) in parsed.iter() {
        let Ok(proto) = name.parse::<Protocol>() else {
            // Unknown subprotocol: a newer peer may require it, but we cannot
            // evaluate it, so it never counts as missing.
            continue;
        };
        let unsupported: Vec<VersionRange> = versions
            .versions()
            .filter(|&v| !is_supported_here(proto, v))
            .map(VersionRange::single)
            .collect();
        if !unsupported.is_empty() {
            missing.insert(name.to_string(), RangeSet::from_ranges(unsupported));
        }
    }

    if missing.is_empty() {
        (true, String::new())
    } else {
        (false, missing.to_string())
    }
}
