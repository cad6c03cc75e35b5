//! # protover — subprotocol capability versioning
//!
//! Participants of the network place separate version numbers on each
//! component of the protocol suite ("subprotocols") instead of coupling
//! capability agreement to software release numbers. Relays advertise which
//! subprotocol versions they implement, clients use those lists to decide
//! what a relay can be asked to do, and directory authorities vote the lists
//! into a required/recommended baseline for the whole network.
//!
//! This crate is the data-model core of that scheme:
//!
//! - parse and canonically re-encode the textual list format
//!   (`Name=v[,v|lo-hi]*` entries, space-separated),
//! - range algebra over inclusive `u32` version intervals,
//! - support queries against this build's compiled-in registry,
//! - threshold voting over many lists,
//! - inference of lists for releases too old to advertise their own.
//!
//! Transport, document assembly, and configuration are external
//! collaborators; the list text is the only wire format owned here. All
//! operations are pure synchronous functions over immutable inputs, so they
//! are freely callable from multiple threads.
//!
//! ## Example
//!
//! ```
//! use protover::{compute_vote, all_supported};
//!
//! let vote = compute_vote(&["Link=1-2", "Link=2-3", "Link=2"], 2);
//! assert_eq!(vote, "Link=2");
//!
//! let (ok, missing) = all_supported("Link=1 Wombat=9");
//! assert!(ok);
//! assert!(missing.is_empty());
//! ```

pub mod ffi;
pub mod legacy;
pub mod list;
pub mod parser;
pub mod proto;
pub mod ranges;
pub mod support;
pub mod vote;

pub use legacy::{compute_for_old_tor, InvalidVersion, TorVersion};
pub use list::ProtocolList;
pub use parser::{parse, ParseError, MAX_VERSIONS_TO_EXPAND};
pub use proto::{Protocol, UnknownProtocol};
pub use ranges::{RangeSet, VersionRange};
pub use support::{
    all_supported, get_supported_protocols, is_supported_here, list_supports_protocol,
};
pub use vote::compute_vote;
