//! Infer protocol lists for software releases that predate protocol
//! advertisement.
//!
//! Early releases never reported a protocol list of their own, but what they
//! implemented is frozen historical knowledge. A static table maps minimum
//! release versions to the list such a release would have reported; the
//! mapper returns the entry with the greatest minimum not exceeding the
//! queried version.

use once_cell::sync::Lazy;
use std::str::FromStr;

/// A dotted software release version with an optional trailing qualifier,
/// e.g. `0.2.9.3-alpha`.
///
/// Ordering is derived field by field: the four numeric components first,
/// then the qualifier as a plain byte-wise string. An untagged release
/// therefore orders before a tagged one with the same numbers, matching the
/// comparison the historical table was built against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TorVersion {
    major: u32,
    minor: u32,
    micro: u32,
    patch: u32,
    status: String,
}

/// The version string could not be parsed as `a.b.c[.d][-qualifier]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable software version: {0}")]
pub struct InvalidVersion(pub String);

impl FromStr for TorVersion {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (numbers, status) = match s.split_once('-') {
            Some((n, tag)) => (n, tag),
            None => (s, ""),
        };

        let mut parts = [0u32; 4];
        let mut count = 0;
        for piece in numbers.split('.') {
            if count == parts.len() {
                return Err(InvalidVersion(s.to_string()));
            }
            parts[count] = piece
                .parse()
                .map_err(|_| InvalidVersion(s.to_string()))?;
            count += 1;
        }
        if count < 3 {
            return Err(InvalidVersion(s.to_string()));
        }

        Ok(TorVersion {
            major: parts[0],
            minor: parts[1],
            micro: parts[2],
            patch: parts[3],
            status: status.to_string(),
        })
    }
}

/// Which protocol list each historical release line would have reported,
/// ascending by minimum version. The final entry is empty: from that release
/// on, software advertises its own protocol line and inferring one would be
/// wrong.
const LEGACY_PROTOCOLS: &[(&str, &str)] = &[
    (
        "0.2.4.19",
        "Cons=1 Desc=1 DirCache=1 HSDir=1 HSIntro=3 HSRend=1 Link=1-4 \
         LinkAuth=1 Microdesc=1 Relay=1-2",
    ),
    (
        "0.2.7.5",
        "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 HSRend=1 Link=1-4 \
         LinkAuth=1 Microdesc=1-2 Relay=1-2",
    ),
    (
        "0.2.9.1-alpha",
        "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 HSRend=1-2 Link=1-4 \
         LinkAuth=1 Microdesc=1-2 Relay=1-2",
    ),
    ("0.2.9.3-alpha", ""),
];

static LEGACY_TABLE: Lazy<Vec<(TorVersion, &'static str)>> = Lazy::new(|| {
    LEGACY_PROTOCOLS
        .iter()
        .map(|&(min, list)| {
            // Compiled-in thresholds; the table tests keep them parseable.
            let version = min.parse().expect("legacy table version is well-formed");
            (version, list)
        })
        .collect()
});

/// The protocol list a release of the given version would have reported, or
/// empty text if the version predates every table entry or fails to parse.
pub fn compute_for_old_tor(version: &str) -> String {
    let Ok(version) = version.parse::<TorVersion>() else {
        return String::new();
    };
    LEGACY_TABLE
        .iter()
        .rev()
        .find(|(min, _)| *min <= version)
        .map(|&(_, list)| list.to_string())
        .unwrap_or_default()
}
