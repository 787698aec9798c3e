use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use rstest::rstest;
use version_number::{VersionNumber, descending, latest};

fn v(version: &str) -> VersionNumber {
    VersionNumber::new(version)
}

fn hash_of(version: &VersionNumber) -> u64 {
    let mut hasher = DefaultHasher::new();
    version.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn wildcard_release_snapshot_chain() {
    let chain = [
        "2.0.*",
        "2.0.1",
        "2.0.1-SNAPSHOT",
        "2.0.0.99",
        "2.0.0",
        "2.0.ea",
    ];
    for pair in chain.windows(2) {
        assert!(v(pair[0]).is_newer_than(&v(pair[1])), "{} > {}", pair[0], pair[1]);
    }
}

#[test]
fn early_access_ordering() {
    assert!(v("2.0.ea2").is_newer_than(&v("2.0.ea1")));
    assert!(v("2.0.ea1").is_newer_than(&v("2.0.ea")));
    assert_eq!(v("2.0.ea"), v("2.0.ea0"));
}

#[test]
fn trailing_zeros_are_insignificant() {
    assert_eq!(v("1.0.0"), v("1"));
    assert_eq!(v("2.0"), v("2.0.0"));
    assert_eq!(hash_of(&v("2.0")), hash_of(&v("2.0.0")));
}

#[test]
fn timestamped_snapshot_matches_literal_snapshot() {
    assert_eq!(v("2.0.3-20170207.105042-1"), v("2.0.3-SNAPSHOT"));
    assert!(v("2.0.3").is_newer_than(&v("2.0.3-20170207.105042-1")));
    assert!(v("2.0.3-20170207.105042-13").is_newer_than(&v("2.0.3-20170207.105042-2")));
}

#[rstest]
#[case("2.32.3.1-SNAPSHOT", &[2, 32, 3, 1, -1])]
#[case("2.0.3", &[2, 0, 3, -1])]
#[case("", &[-1])]
fn digit_at_positions(#[case] version: &str, #[case] expected: &[i64]) {
    let version = v(version);
    let actual: Vec<i64> = (0..expected.len() as i64)
        .map(|idx| version.digit_at(idx))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(version.digit_at(-1), -1);
}

#[rstest]
#[case("3.12.0.0", "3.12.0-44.v1234deadbeef")]
#[case("3.12.0-44.v1234deadbeef", "3.12.0-55.v1234deadbeef")]
#[case("3.12.0-55.v1234deadbeef", "3.12.1-66.v1234deadbeef")]
#[case("99.v1234deadbeef", "99.5.vabcd1234abcd")]
#[case("99.5.vabcd1234abcd", "99.10.vabcd1234abcd")]
#[case("99.10.vabcd1234abcd", "100.vdead9876beef")]
#[case("1.1", "391.ve4a_38c1b_cf4b_")]
#[case("1.1", "200.vabcd1234abcd")]
#[case("200.vabcd1234abcd", "391-ve4a_38c1b_cf4b_")]
fn incremental_build_versions(#[case] older: &str, #[case] newer: &str) {
    assert!(v(older).is_older_than(&v(newer)), "{older} < {newer}");
    assert!(v(newer).is_newer_than(&v(older)), "{newer} > {older}");
}

#[test]
fn descending_comparator_with_sort_by() {
    let mut versions: Vec<VersionNumber> = ["1.2", "1.10", "1.10-SNAPSHOT", "1.9.9", "2.0-rc1"]
        .into_iter()
        .map(v)
        .collect();
    versions.sort_by(descending);
    let sorted: Vec<&str> = versions.iter().map(VersionNumber::as_str).collect();
    assert_eq!(sorted, ["2.0-rc1", "1.10", "1.10-SNAPSHOT", "1.9.9", "1.2"]);
    assert_eq!(latest(&versions).map(VersionNumber::as_str), Some("2.0-rc1"));
}

#[test]
fn serde_roundtrip_keeps_original_text() {
    let version = v("1.12-SNAPSHOT (private-08/24/2008 12:13-hudson)");
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, "\"1.12-SNAPSHOT (private-08/24/2008 12:13-hudson)\"");

    let parsed: VersionNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_str(), version.as_str());
    assert!(parsed.is_snapshot());
}

#[test]
fn from_str_never_fails() {
    let parsed: VersionNumber = "not a version at all".parse().unwrap();
    assert_eq!(parsed.as_str(), "not a version at all");
}

/// Dot-separated numbers and pre-release qualifiers. Wildcards, dashes and qualifiers
/// at or above a plain release are left out because their ordering is not transitive.
fn ordered_version() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        (0u32..20).prop_map(|n| n.to_string()),
        prop::sample::select(vec!["alpha", "beta", "milestone", "rc", "snapshot", "ea", "cr"])
            .prop_map(str::to_string),
        (prop::sample::select(vec!["alpha", "beta", "rc", "ea"]), 0u32..4)
            .prop_map(|(qualifier, n)| format!("{qualifier}{n}")),
    ];
    prop::collection::vec(segment, 1..5).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn parsing_is_total(s in "\\PC*") {
        let version = VersionNumber::new(&s);
        prop_assert_eq!(version.as_str(), s.as_str());
        let _ = version.digit(3);
        let _ = version.digit_at(3);
    }

    #[test]
    fn ordering_is_reflexive(s in "\\PC*") {
        let version = VersionNumber::new(&s);
        prop_assert_eq!(version.cmp(&version.clone()), Ordering::Equal);
        prop_assert_eq!(&version, &version.clone());
    }

    #[test]
    fn trailing_zero_is_insignificant(s in ordered_version()) {
        prop_assert_eq!(VersionNumber::new(&s), VersionNumber::new(&format!("{s}.0")));
    }

    #[test]
    fn ordering_is_antisymmetric(a in ordered_version(), b in ordered_version()) {
        let (a, b) = (VersionNumber::new(&a), VersionNumber::new(&b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(
        a in ordered_version(),
        b in ordered_version(),
        c in ordered_version(),
    ) {
        let mut versions = [a, b, c].map(|s| VersionNumber::new(&s));
        versions.sort();
        prop_assert!(versions[0] <= versions[1]);
        prop_assert!(versions[1] <= versions[2]);
        prop_assert!(versions[0] <= versions[2]);
    }

    #[test]
    fn equality_agrees_with_ordering(a in ordered_version(), b in ordered_version()) {
        let (a, b) = (VersionNumber::new(&a), VersionNumber::new(&b));
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
