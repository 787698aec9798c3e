//! Parsed version items and their ordering
//!
//! A version string is parsed into a tree of [`Item`]s. Items compare against each other
//! with type-directed rules, and against a *missing* item (`None`) when one list is
//! shorter than the other.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::version::qualifier::{self, QualifierKey};

/// One parsed component of a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// Numeric component of arbitrary size
    Integer(BigUint),
    /// Normalized qualifier such as `alpha`, `rc` or an unknown word
    Qualifier(String),
    /// Group of items opened by a dash followed by a digit (`1-1`)
    List(Vec<Item>),
    /// `*`, greater than any concrete component
    Wildcard,
}

impl Item {
    /// Build a qualifier item from a lower-cased token
    pub fn qualifier(token: &str, followed_by_digit: bool) -> Self {
        Item::Qualifier(qualifier::normalize(token, followed_by_digit))
    }

    /// Build an integer item from a run of ASCII digits
    pub fn integer(digits: &str) -> Self {
        Item::Integer(BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default())
    }

    /// Whether the item is equivalent to being absent: zero, the release qualifier
    /// or an empty list. Wildcards are never null.
    pub fn is_null(&self) -> bool {
        match self {
            Item::Integer(value) => value.is_zero(),
            Item::Qualifier(value) => qualifier::comparable(value) == QualifierKey::release(),
            Item::List(items) => items.is_empty(),
            Item::Wildcard => false,
        }
    }

    /// Compare with another item, `None` standing for a missing item.
    ///
    /// The rules are not symmetric: an integer ties with a wildcard while a wildcard is
    /// greater than an integer.
    pub fn compare_to(&self, other: Option<&Item>) -> Ordering {
        let Some(other) = other else {
            return self.compare_to_missing();
        };

        match (self, other) {
            (Item::Integer(a), Item::Integer(b)) => a.cmp(b),
            (Item::Integer(_), Item::Qualifier(_) | Item::List(_)) => Ordering::Greater,
            (Item::Integer(_), Item::Wildcard) => Ordering::Equal,

            (Item::Qualifier(a), Item::Qualifier(b)) => {
                qualifier::comparable(a).cmp(&qualifier::comparable(b))
            }
            (Item::Qualifier(_), _) => Ordering::Less,

            (Item::List(a), Item::List(b)) => compare_lists(a, b),
            (Item::List(_), Item::Qualifier(_)) => Ordering::Greater,
            (Item::List(_), Item::Integer(_) | Item::Wildcard) => Ordering::Less,

            (Item::Wildcard, Item::Wildcard) => Ordering::Equal,
            (Item::Wildcard, _) => Ordering::Greater,
        }
    }

    fn compare_to_missing(&self) -> Ordering {
        match self {
            // 1.0 == 1, 1.1 > 1
            Item::Integer(value) => {
                if value.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            // 1-rc < 1, 1-sp > 1
            Item::Qualifier(value) => qualifier::comparable(value).cmp(&QualifierKey::release()),
            // 1-0 == 1-
            Item::List(items) => items
                .first()
                .map_or(Ordering::Equal, |first| first.compare_to(None)),
            // 1.* > 1.99 > 1
            Item::Wildcard => Ordering::Greater,
        }
    }
}

/// Compare two lists element by element, padding the shorter one with missing items
pub fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
    let len = left.len().max(right.len());
    for i in 0..len {
        let result = match (left.get(i), right.get(i)) {
            (Some(l), r) => l.compare_to(r),
            (None, Some(r)) => r.compare_to(None).reverse(),
            (None, None) => Ordering::Equal,
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Strip trailing null items: `0`, the release qualifier and empty lists
pub fn normalize(items: &mut Vec<Item>) {
    while items.last().is_some_and(Item::is_null) {
        items.pop();
    }
}

/// Render a list as `(a,b,...)`, the canonical form of a version
pub fn render(items: &[Item]) -> String {
    let rendered: Vec<String> = items.iter().map(Item::to_string).collect();
    format!("({})", rendered.join(","))
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(value) => write!(f, "{value}"),
            Item::Qualifier(value) => f.write_str(value),
            Item::List(items) => f.write_str(&render(items)),
            Item::Wildcard => f.write_str("*"),
        }
    }
}
