//! Snapshot suffix detection and ordering
//!
//! A version may end with `-SNAPSHOT` or a Maven timestamped snapshot
//! (`-yyyyMMdd.HHmmss-N`), optionally followed by a ` (comment)`. The suffix is pulled
//! out before tokenization and consulted only when the item trees tie.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use num_bigint::BigUint;
use regex::Regex;
use tracing::debug;

use crate::config::{
    SNAPSHOT_MARKER, SNAPSHOT_PATTERN, SNAPSHOT_TIMESTAMP_FORMAT, SNAPSHOT_TIMESTAMP_LEN,
};

static SNAPSHOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNAPSHOT_PATTERN).expect("snapshot pattern is valid"));

/// Snapshot suffix of a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Snapshot {
    /// The literal `-SNAPSHOT` marker
    Literal,
    /// `-yyyyMMdd.HHmmss-N`, stored verbatim including the leading dash
    Timestamped(String),
}

impl Snapshot {
    /// The suffix as it appeared in the version string
    pub fn as_str(&self) -> &str {
        match self {
            Snapshot::Literal => SNAPSHOT_MARKER,
            Snapshot::Timestamped(raw) => raw,
        }
    }

    pub fn is_timestamped(&self) -> bool {
        matches!(self, Snapshot::Timestamped(_))
    }

    /// Build time of a timestamped snapshot.
    ///
    /// Returns `None` for the literal marker or when the digits are not a valid calendar
    /// date and time.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let stamp = self.timestamp_str()?;
        NaiveDateTime::parse_from_str(stamp, SNAPSHOT_TIMESTAMP_FORMAT).ok()
    }

    /// Trailing build number of a timestamped snapshot
    pub fn build_number(&self) -> Option<BigUint> {
        let Snapshot::Timestamped(raw) = self else {
            return None;
        };
        let digits = raw.get(SNAPSHOT_TIMESTAMP_LEN + 2..)?;
        BigUint::parse_bytes(digits.as_bytes(), 10)
    }

    /// Order two snapshots of otherwise equal versions.
    ///
    /// A literal marker cannot be ordered against anything, so it ties with every
    /// snapshot. Timestamped snapshots compare by time, then by build number.
    pub fn compare(&self, other: &Snapshot) -> Ordering {
        let (Some(left), Some(right)) = (self.timestamp_str(), other.timestamp_str()) else {
            return Ordering::Equal;
        };

        left.cmp(right)
            .then_with(|| self.build_number().cmp(&other.build_number()))
    }

    /// Whether two snapshots denote the same build; a literal marker matches any snapshot
    pub fn is_compatible(&self, other: &Snapshot) -> bool {
        match (self, other) {
            (Snapshot::Timestamped(a), Snapshot::Timestamped(b)) => a == b,
            _ => true,
        }
    }

    fn timestamp_str(&self) -> Option<&str> {
        match self {
            Snapshot::Literal => None,
            Snapshot::Timestamped(raw) => raw.get(1..=SNAPSHOT_TIMESTAMP_LEN),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a trailing snapshot suffix off a raw version string.
///
/// Returns the text to tokenize, where the suffix and any comment are replaced by
/// `-SNAPSHOT`, together with the extracted snapshot.
pub fn extract(version: &str) -> (String, Option<Snapshot>) {
    let Some(captures) = SNAPSHOT_RE.captures(version) else {
        return (version.to_string(), None);
    };
    let Some(suffix) = captures.get(1) else {
        return (version.to_string(), None);
    };

    let snapshot = if suffix.as_str() == SNAPSHOT_MARKER {
        Snapshot::Literal
    } else {
        Snapshot::Timestamped(suffix.as_str().to_string())
    };
    debug!("Extracted snapshot suffix '{}' from '{}'", snapshot, version);

    let tokenized = format!("{}{}", &version[..suffix.start()], SNAPSHOT_MARKER);
    (tokenized, Some(snapshot))
}
