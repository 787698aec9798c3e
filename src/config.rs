//! Process-wide constants shared by the version engine and the Java layer

// =============================================================================
// Snapshot-related constants
// =============================================================================

/// Literal snapshot marker, also the text substituted for any detected snapshot suffix
pub const SNAPSHOT_MARKER: &str = "-SNAPSHOT";

/// Pattern of a trailing snapshot suffix, with an optional parenthesized comment.
///
/// Group 1 is the suffix stored on the version, group 2 the ignored comment.
pub const SNAPSHOT_PATTERN: &str =
    r"^.*((?:-[0-9]{8}\.[0-9]{6}-[0-9]+)|-SNAPSHOT)( \(.*\))?$";

/// Length of the `yyyyMMdd.HHmmss` part of a timestamped snapshot
pub const SNAPSHOT_TIMESTAMP_LEN: usize = 15;

/// chrono format of the `yyyyMMdd.HHmmss` part of a timestamped snapshot
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d.%H%M%S";

// =============================================================================
// Qualifier constants
// =============================================================================

/// Known qualifiers, oldest first. The empty qualifier is a plain release.
pub const QUALIFIERS: &[&str] = &["snapshot", "alpha", "beta", "milestone", "rc", "", "sp"];

/// Qualifier aliases, applied after one-letter expansion
pub const QUALIFIER_ALIASES: &[(&str, &str)] =
    &[("ga", ""), ("final", ""), ("cr", "rc"), ("ea", "rc")];

/// One-letter qualifiers expanded when directly followed by a digit (`a1` is `alpha-1`)
pub const QUALIFIER_ABBREVIATIONS: &[(char, &str)] =
    &[('a', "alpha"), ('b', "beta"), ('m', "milestone")];

// =============================================================================
// Java specification constants
// =============================================================================

/// Last release still spelled `1.x`; later releases use the bare major number
pub const LAST_LEGACY_JAVA_RELEASE: i32 = 8;

/// Known Java releases and their class file major versions
pub const JAVA_RELEASE_TO_CLASS: &[(i64, i64)] = &[
    (1, 45),
    (2, 46),
    (3, 47),
    (4, 48),
    (5, 49),
    (6, 50),
    (7, 51),
    (8, 52),
    (9, 53),
    (10, 54),
    (11, 55),
    (12, 56),
    (13, 57),
    (14, 58),
    (15, 59),
    (16, 60),
    (17, 61),
    (18, 62),
    (19, 63),
    (20, 64),
];
