//! Qualifier normalization and ordering
//!
//! Qualifiers are the textual parts of a version (`alpha`, `rc`, `sp`, ...). Known
//! qualifiers are ordered by their position in [`QUALIFIERS`]; unknown ones sort after
//! every known qualifier and lexically among themselves.

use crate::config::{QUALIFIER_ABBREVIATIONS, QUALIFIER_ALIASES, QUALIFIERS};

/// Sort key of a qualifier; every known qualifier sorts before any unknown one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualifierKey<'a> {
    /// Index into the known qualifier table
    Known(usize),
    /// Qualifier missing from the table
    Unknown(&'a str),
}

impl QualifierKey<'_> {
    /// Key of the empty qualifier, i.e. a plain release
    pub fn release() -> QualifierKey<'static> {
        QualifierKey::Known(release_index())
    }
}

/// Normalize a lower-cased qualifier token.
///
/// A single `a`, `b` or `m` directly followed by a digit expands to `alpha`, `beta` or
/// `milestone`; the result is then resolved through the alias table (`ga` and `final`
/// become the empty qualifier, `cr` and `ea` become `rc`).
pub fn normalize(token: &str, followed_by_digit: bool) -> String {
    let expanded = if followed_by_digit {
        expand_abbreviation(token).unwrap_or(token)
    } else {
        token
    };

    QUALIFIER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == expanded)
        .map_or(expanded, |(_, target)| target)
        .to_string()
}

/// Sort key for an already normalized qualifier
pub fn comparable(qualifier: &str) -> QualifierKey<'_> {
    QUALIFIERS
        .iter()
        .position(|known| *known == qualifier)
        .map_or(QualifierKey::Unknown(qualifier), QualifierKey::Known)
}

fn expand_abbreviation(token: &str) -> Option<&'static str> {
    let mut chars = token.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return None;
    };
    QUALIFIER_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == first)
        .map(|(_, expanded)| *expanded)
}

fn release_index() -> usize {
    QUALIFIERS
        .iter()
        .position(|known| known.is_empty())
        .unwrap_or(QUALIFIERS.len())
}
