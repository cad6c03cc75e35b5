//! Parser fuzz target: feed arbitrary bytes to the protocol-list parser.
//! The parser must not panic; it should return Ok(ProtocolList) or
//! Err(ParseError). Build with: cargo fuzz run parse_fuzz (requires nightly
//! and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    if let Ok(list) = protover::parse(s) {
        // A successful parse must re-encode to text that parses identically.
        let encoded = list.to_string();
        let reparsed = protover::parse(&encoded).expect("canonical text parses");
        assert_eq!(reparsed, list);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run parse_fuzz");
}
