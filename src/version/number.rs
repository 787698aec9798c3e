//! The [`VersionNumber`] value type

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::item::{self, Item};
use crate::version::parser;
use crate::version::snapshot::{self, Snapshot};

/// Immutable, ordered version number.
///
/// Any string is accepted. Trailing zeros and release qualifiers are insignificant
/// (`1.0.0 == 1`), `*` is an upper bound within its prefix (`2.0.* > 2.0.1`) and a
/// snapshot is older than the release it leads to (`2.0.1-SNAPSHOT < 2.0.1`).
///
/// ```
/// use version_number::VersionNumber;
///
/// let snapshot = VersionNumber::new("2.0.1-SNAPSHOT");
/// assert!(snapshot.is_older_than(&VersionNumber::new("2.0.1")));
/// assert!(snapshot.is_newer_than(&VersionNumber::new("2.0.0.99")));
/// assert_eq!(VersionNumber::new("1.0.0"), VersionNumber::new("1"));
/// ```
#[derive(Debug, Clone)]
pub struct VersionNumber {
    value: String,
    snapshot: Option<Snapshot>,
    items: Vec<Item>,
    canonical: String,
}

impl VersionNumber {
    /// Parse a version string. This never fails.
    pub fn new(version: &str) -> Self {
        let (text, snapshot) = snapshot::extract(version);
        let items = parser::parse(&text);
        let canonical = item::render(&items);

        Self {
            value: version.to_string(),
            snapshot,
            items,
            canonical,
        }
    }

    /// The string this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Rendering of the normalized item tree, e.g. `(1,2,(3))`
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn is_release(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn is_older_than(&self, other: &VersionNumber) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn is_newer_than(&self, other: &VersionNumber) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn is_older_than_or_equal_to(&self, other: &VersionNumber) -> bool {
        self.cmp(other) != Ordering::Greater
    }

    pub fn is_newer_than_or_equal_to(&self, other: &VersionNumber) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// The `idx`-th integer component, skipping components that are not integers.
    ///
    /// Only top-level components count. An index past the last integer yields the last
    /// one; a version without integers yields 0. Values beyond `u64` saturate.
    pub fn digit(&self, idx: usize) -> u64 {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Integer(value) => Some(value),
                _ => None,
            })
            .take(idx.saturating_add(1))
            .last()
            .map_or(0, |value| value.to_u64().unwrap_or(u64::MAX))
    }

    /// The integer at position `idx`, counting every top-level component.
    ///
    /// Returns -1 when `idx` is negative or out of range, or when any component up to and
    /// including `idx` is not an integer. Values beyond `i64` saturate.
    pub fn digit_at(&self, idx: i64) -> i64 {
        let Ok(idx) = usize::try_from(idx) else {
            return -1;
        };

        for (position, item) in self.items.iter().enumerate() {
            let Item::Integer(value) = item else {
                return -1;
            };
            if position == idx {
                return value.to_i64().unwrap_or(i64::MAX);
            }
        }
        -1
    }
}

/// Reverse of the natural order, newest first.
///
/// The order is not total: an integer ties with `*` at the same position while `*` is
/// greater than the integer. `sort_by(descending)` over a collection mixing both, such as
/// `1.2.*` and `1.2.3`, can panic. [`latest`] accepts such collections.
pub fn descending(a: &VersionNumber, b: &VersionNumber) -> Ordering {
    b.cmp(a)
}

/// The newest of `versions`; the first one wins among equals
pub fn latest(versions: &[VersionNumber]) -> Option<&VersionNumber> {
    versions.iter().reduce(|best, candidate| {
        if candidate.is_newer_than(best) {
            candidate
        } else {
            best
        }
    })
}

/// Two versions are equal when their normalized trees match and their snapshots do not
/// contradict each other. A literal `-SNAPSHOT` matches any timestamped snapshot.
impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        if self.canonical != other.canonical {
            return false;
        }
        match (&self.snapshot, &other.snapshot) {
            (None, None) => true,
            (Some(a), Some(b)) => a.is_compatible(b),
            _ => false,
        }
    }
}

impl Eq for VersionNumber {}

/// Only the canonical form is hashed, so equal versions always share a hash.
impl Hash for VersionNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Item trees decide first; on a tie a release beats a snapshot, and two snapshots fall
/// back to [`Snapshot::compare`].
///
/// `2.0.1` compares equal to `2.0.*` but `2.0.*` is greater than `2.0.1`, so sorting
/// versions that mix `*` and integers at the same position can panic.
impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        item::compare_lists(&self.items, &other.items).then_with(|| {
            match (&self.snapshot, &other.snapshot) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.compare(b),
            }
        })
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for VersionNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for VersionNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionNumber {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(&value))
    }
}
