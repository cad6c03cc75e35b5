//! The closed set of recognized subprotocols.
//!
//! Protocol lists on the wire may carry names outside this set; those stay as
//! plain strings in [`crate::ProtocolList`] so that older software tolerates
//! names introduced by newer peers. Only names in this enumeration ever
//! participate in support decisions.

use std::fmt;
use std::str::FromStr;

/// A recognized capability axis of the protocol suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Consensus document format.
    Cons,
    /// Relay descriptor format.
    Desc,
    /// Directory-cache behavior.
    DirCache,
    /// Hidden-service directory.
    HSDir,
    /// Hidden-service introduction point.
    HSIntro,
    /// Hidden-service rendezvous point.
    HSRend,
    /// Link protocol (channel handshake and cell framing).
    Link,
    /// Link authentication.
    LinkAuth,
    /// Microdescriptor format.
    Microdesc,
    /// Relay cell commands.
    Relay,
}

impl Protocol {
    /// The canonical name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Protocol::Cons => "Cons",
            Protocol::Desc => "Desc",
            Protocol::DirCache => "DirCache",
            Protocol::HSDir => "HSDir",
            Protocol::HSIntro => "HSIntro",
            Protocol::HSRend => "HSRend",
            Protocol::Link => "Link",
            Protocol::LinkAuth => "LinkAuth",
            Protocol::Microdesc => "Microdesc",
            Protocol::Relay => "Relay",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is not a recognized subprotocol. Not a parse
/// failure: unrecognized names are valid list entries, they just map to no
/// [`Protocol`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized protocol name: {0}")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cons" => Ok(Protocol::Cons),
            "Desc" => Ok(Protocol::Desc),
            "DirCache" => Ok(Protocol::DirCache),
            "HSDir" => Ok(Protocol::HSDir),
            "HSIntro" => Ok(Protocol::HSIntro),
            "HSRend" => Ok(Protocol::HSRend),
            "Link" => Ok(Protocol::Link),
            "LinkAuth" => Ok(Protocol::LinkAuth),
            "Microdesc" => Ok(Protocol::Microdesc),
            "Relay" => Ok(Protocol::Relay),
            other => Err(UnknownProtocol(other.to_string())),
        }
    }
}
