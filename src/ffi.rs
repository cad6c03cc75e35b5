//! C-ABI boundary, only to be called from a foreign runtime.
//!
//! Every text value crosses the boundary the same way: this crate allocates a
//! NUL-terminated C string and hands ownership to the caller exactly once.
//! The caller copies it into its own memory domain and then releases the
//! original through [`protover_free_string`], never through its own
//! allocator, and never more than once. Null and invalid-UTF-8 inputs are
//! answered with an error value; nothing here panics across the boundary.

use libc::{c_char, c_int, c_uint, size_t};
use std::ffi::{CStr, CString};
use std::ptr;

use crate::legacy::compute_for_old_tor;
use crate::proto::Protocol;
use crate::support::{
    all_supported, get_supported_protocols, is_supported_here, list_supports_protocol,
};
use crate::vote::compute_vote;

/// Map a foreign protocol discriminant to [`Protocol`]. The numbering is
/// order-dependent and shared with the C header; renumbering one side
/// requires renumbering the other.
fn protocol_from_discriminant(value: c_uint) -> Option<Protocol> {
    match value {
        0 => Some(Protocol::Link),
        1 => Some(Protocol::LinkAuth),
        2 => Some(Protocol::Relay),
        3 => Some(Protocol::DirCache),
        4 => Some(Protocol::HSDir),
        5 => Some(Protocol::HSIntro),
        6 => Some(Protocol::HSRend),
        7 => Some(Protocol::Desc),
        8 => Some(Protocol::Microdesc),
        9 => Some(Protocol::Cons),
        _ => None,
    }
}

/// Borrow a C string as `&str`, or `None` when null or not UTF-8.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string valid for the
/// duration of the call.
unsafe fn borrow_c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Move an owned string across the boundary. Our encodings never contain
/// interior NULs, but a defensive null is returned rather than a panic if one
/// ever appears.
fn give_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Release a string previously returned by this crate. Passing null is a
/// no-op. This is the only valid release path for such strings.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from one of the functions in this
/// module, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn protover_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Returns 1 when every protocol version in `list` is supported here,
/// 0 otherwise. On 0, `missing_out` (if non-null) receives the encoded list
/// of unsupported versions, owned by the caller.
///
/// # Safety
///
/// `list` must be null or a valid NUL-terminated string; `missing_out` must
/// be null or a valid pointer to write to.
#[no_mangle]
pub unsafe extern "C" fn protover_all_supported(
    list: *const c_char,
    missing_out: *mut *mut c_char,
) -> c_int {
    let Some(list) = borrow_c_str(list) else {
        return 1;
    };

    let (supported, missing) = all_supported(list);
    if supported {
        return 1;
    }
    if !missing_out.is_null() {
        *missing_out = give_string(missing);
    }
    0
}

/// Returns 1 iff `list` parses and includes `version` of the protocol named
/// by `protocol` (shared discriminant numbering).
///
/// # Safety
///
/// `list` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn protover_list_supports_protocol(
    list: *const c_char,
    protocol: c_uint,
    version: u32,
) -> c_int {
    let Some(list) = borrow_c_str(list) else {
        return 0;
    };
    let Some(proto) = protocol_from_discriminant(protocol) else {
        return 0;
    };
    list_supports_protocol(list, proto, version) as c_int
}

/// This build's registry as an owned, canonically encoded C string.
#[no_mangle]
pub extern "C" fn protover_get_supported_protocols() -> *mut c_char {
    give_string(get_supported_protocols())
}

/// Aggregate `n_votes` encoded lists with the given threshold. Null or
/// non-UTF-8 array elements are skipped like any other malformed voter.
/// The result is an owned C string, empty when nothing meets the threshold.
///
/// # Safety
///
/// `votes` must be null or point to `n_votes` valid `const char *` elements,
/// each null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn protover_compute_vote(
    votes: *const *const c_char,
    n_votes: size_t,
    threshold: c_int,
) -> *mut c_char {
    if votes.is_null() {
        return give_string(String::new());
    }
    let raw = std::slice::from_raw_parts(votes, n_votes);
    let votes: Vec<&str> = raw.iter().filter_map(|&p| borrow_c_str(p)).collect();
    give_string(compute_vote(&votes, threshold))
}

/// Returns 1 iff this build supports `version` of the protocol named by
/// `protocol` (shared discriminant numbering).
#[no_mangle]
pub extern "C" fn protover_is_supported_here(protocol: c_uint, version: u32) -> c_int {
    match protocol_from_discriminant(protocol) {
        Some(proto) => is_supported_here(proto, version) as c_int,
        None => 0,
    }
}

/// The inferred protocol list for a pre-advertisement software release, as an
/// owned C string. Empty on unparseable or too-old versions.
///
/// # Safety
///
/// `version` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn protover_compute_for_old_tor(version: *const c_char) -> *mut c_char {
    let Some(version) = borrow_c_str(version) else {
        return give_string(String::new());
    };
    give_string(compute_for_old_tor(version))
}
