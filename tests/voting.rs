//! Public-API tests: threshold voting and legacy version mapping.

use protover::{compute_for_old_tor, compute_vote, parse, TorVersion};

// ==================== computeVote ====================

#[test]
fn vote_keeps_versions_meeting_threshold() {
    let votes = ["Link=1-2", "Link=2-3", "Link=2"];
    assert_eq!(compute_vote(&votes, 2), "Link=2");
}

#[test]
fn vote_counts_per_exact_version_not_per_range() {
    // Version 3 is in two voters' ranges even though the ranges differ.
    let votes = ["Link=1-4", "Link=3-5"];
    assert_eq!(compute_vote(&votes, 2), "Link=3-4");
    assert_eq!(compute_vote(&votes, 1), "Link=1-5");
}

#[test]
fn vote_output_is_canonical() {
    let votes = ["Relay=1 Link=2", "Link=2 Relay=1", "Link=1-3"];
    assert_eq!(compute_vote(&votes, 2), "Link=2 Relay=1");

    // Contiguous surviving versions collapse into ranges.
    let votes = ["HSDir=1-3", "HSDir=1-3"];
    assert_eq!(compute_vote(&votes, 2), "HSDir=1-3");
}

#[test]
fn one_bad_voter_cannot_block_aggregation() {
    let votes = ["Link=1-2", "Link=2=3", "Link=garbage", "Link=2"];
    assert_eq!(compute_vote(&votes, 2), "Link=2");
}

#[test]
fn duplicate_names_within_one_vote_disqualify_that_vote() {
    let votes = ["Link=1 Link=2", "Link=1", "Link=1"];
    assert_eq!(compute_vote(&votes, 3), "");
    assert_eq!(compute_vote(&votes, 2), "Link=1");
}

#[test]
fn threshold_at_or_below_zero_keeps_every_mentioned_version() {
    let votes = ["Link=1 Desc=7", "Cons=2"];
    assert_eq!(compute_vote(&votes, 0), "Cons=2 Desc=7 Link=1");
    assert_eq!(compute_vote(&votes, -1), "Cons=2 Desc=7 Link=1");
}

#[test]
fn vote_with_no_inputs_or_no_survivors_is_empty() {
    let none: [&str; 0] = [];
    assert_eq!(compute_vote(&none, 1), "");
    assert_eq!(compute_vote(&["Link=1", "Link=2"], 2), "");
}

#[test]
fn vote_result_reparses_cleanly() {
    let votes = ["Link=1-4 Wombat=9", "Link=2-5 Wombat=9"];
    let out = compute_vote(&votes, 2);
    assert_eq!(out, "Link=2-4 Wombat=9");
    assert_eq!(parse(&out).expect("vote output parses").to_string(), out);
}

// ==================== computeForOldTor ====================

#[test]
fn old_releases_map_to_their_table_entry() {
    assert_eq!(
        compute_for_old_tor("0.2.4.19"),
        "Cons=1 Desc=1 DirCache=1 HSDir=1 HSIntro=3 HSRend=1 Link=1-4 \
         LinkAuth=1 Microdesc=1 Relay=1-2"
    );
    assert_eq!(
        compute_for_old_tor("0.2.9.1-alpha"),
        "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 HSRend=1-2 Link=1-4 \
         LinkAuth=1 Microdesc=1-2 Relay=1-2"
    );
    // Between two thresholds: the greatest not exceeding the version wins.
    assert_eq!(
        compute_for_old_tor("0.2.8.9"),
        compute_for_old_tor("0.2.7.5")
    );
}

#[test]
fn inferred_lists_parse_and_are_canonical() {
    let text = compute_for_old_tor("0.2.7.5");
    assert_eq!(parse(&text).expect("legacy list parses").to_string(), text);
}

#[test]
fn versions_outside_the_table_map_to_empty() {
    assert_eq!(compute_for_old_tor("0.2.4.18"), "");
    assert_eq!(compute_for_old_tor("0.0.2"), "");
    assert_eq!(compute_for_old_tor("0.2.9.4-alpha"), "");
    assert_eq!(compute_for_old_tor("0.3.5.7"), "");
    assert_eq!(compute_for_old_tor("wombat"), "");
    assert_eq!(compute_for_old_tor(""), "");
}

#[test]
fn version_ordering_is_numeric_then_qualifier() {
    let a: TorVersion = "0.2.9.9".parse().expect("a");
    let b: TorVersion = "0.2.9.10".parse().expect("b");
    assert!(a < b);

    let tagged: TorVersion = "0.2.9.3-alpha".parse().expect("tagged");
    let untagged: TorVersion = "0.2.9.3".parse().expect("untagged");
    assert!(untagged < tagged);
}
