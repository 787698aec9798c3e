//! Java specification versions (JEP 223)
//!
//! Releases up to 8 are spelled `1.x`, later ones by their bare major number. Inputs in
//! either spelling are normalized, so `8` and `1.8` are the same version, as are `11` and
//! `1.11`. Release and class file versions are looked up in a fixed table.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{JAVA_RELEASE_TO_CLASS, LAST_LEGACY_JAVA_RELEASE};
use crate::error::JavaVersionError;
use crate::version::VersionNumber;

static RELEASE_TO_CLASS: LazyLock<HashMap<i64, i64>> =
    LazyLock::new(|| JAVA_RELEASE_TO_CLASS.iter().copied().collect());

static CLASS_TO_RELEASE: LazyLock<HashMap<i64, i64>> = LazyLock::new(|| {
    JAVA_RELEASE_TO_CLASS
        .iter()
        .map(|&(release, class)| (class, release))
        .collect()
});

macro_rules! java_version {
    ($($name:ident => $version:literal),* $(,)?) => {
        $(
            #[doc = concat!("Java specification version `", $version, "`")]
            pub static $name: LazyLock<JavaSpecificationVersion> =
                LazyLock::new(|| JavaSpecificationVersion::from_normalized($version.to_string()));
        )*
    };
}

java_version! {
    JAVA_5 => "1.5",
    JAVA_6 => "1.6",
    JAVA_7 => "1.7",
    JAVA_8 => "1.8",
    JAVA_9 => "9",
    JAVA_10 => "10",
    JAVA_11 => "11",
    JAVA_12 => "12",
    JAVA_13 => "13",
}

/// A Java specification version such as `1.8` or `17`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaSpecificationVersion {
    version: VersionNumber,
}

impl JavaSpecificationVersion {
    /// Parse and normalize a specification version.
    ///
    /// Accepts the legacy `1.x` form (exactly one part after `1.`) and bare majors.
    /// Majors of 8 and below are rewritten to `1.x`.
    pub fn new(version: &str) -> Result<Self, JavaVersionError> {
        normalize(version).map(Self::from_normalized)
    }

    fn from_normalized(normalized: String) -> Self {
        Self {
            version: VersionNumber::new(&normalized),
        }
    }

    /// Specification version of a release number: `8` gives `1.8`, `11` gives `11`
    pub fn from_release_version(release: i64) -> Self {
        if release > i64::from(LAST_LEGACY_JAVA_RELEASE) {
            Self::from_normalized(release.to_string())
        } else {
            Self::from_normalized(format!("1.{release}"))
        }
    }

    /// Specification version of a class file major version, e.g. `52` gives `1.8`
    pub fn from_class_version(class_version: i64) -> Result<Self, JavaVersionError> {
        let Some(&release) = CLASS_TO_RELEASE.get(&class_version) else {
            debug!("No release known for class version {}", class_version);
            return Err(JavaVersionError::UnknownClassVersion(class_version));
        };
        Ok(Self::from_release_version(release))
    }

    /// Release number: `1.8` gives 8, `17` gives 17
    pub fn to_release_version(&self) -> i64 {
        let first = self.version.digit_at(0);
        if first == 1 {
            self.version.digit_at(1)
        } else {
            first
        }
    }

    /// Class file major version, e.g. 52 for `1.8`
    pub fn to_class_version(&self) -> Result<i64, JavaVersionError> {
        let release = self.to_release_version();
        let Some(&class_version) = RELEASE_TO_CLASS.get(&release) else {
            debug!("No class version known for release {}", release);
            return Err(JavaVersionError::UnknownReleaseVersion(release));
        };
        Ok(class_version)
    }

    pub fn as_version(&self) -> &VersionNumber {
        &self.version
    }

    pub fn is_older_than(&self, other: &JavaSpecificationVersion) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn is_newer_than(&self, other: &JavaSpecificationVersion) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

fn normalize(input: &str) -> Result<String, JavaVersionError> {
    let mut version = input.trim();

    if version.starts_with("1.") {
        let mut parts: Vec<&str> = version.split('.').collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        let [_, minor] = parts[..] else {
            return Err(JavaVersionError::Malformed {
                input: input.to_string(),
                reason: "there should be exactly one dot and something after it".to_string(),
            });
        };
        version = minor;
    }

    let major: i32 = version.parse().map_err(|_| JavaVersionError::Malformed {
        input: input.to_string(),
        reason: format!("'{version}' is not a number"),
    })?;

    if major > LAST_LEGACY_JAVA_RELEASE {
        Ok(version.to_string())
    } else {
        Ok(format!("1.{version}"))
    }
}

impl AsRef<VersionNumber> for JavaSpecificationVersion {
    fn as_ref(&self) -> &VersionNumber {
        &self.version
    }
}

impl fmt::Display for JavaSpecificationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.version, f)
    }
}

impl FromStr for JavaSpecificationVersion {
    type Err = JavaVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for JavaSpecificationVersion {
    type Error = JavaVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<JavaSpecificationVersion> for String {
    fn from(value: JavaSpecificationVersion) -> Self {
        value.version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.6", "1.6")]
    #[case("1.8", "1.8")]
    #[case("9", "9")]
    #[case("11", "11")]
    #[case("1.9", "9")]
    #[case("1.12", "12")]
    #[case("8", "1.8")]
    #[case("5", "1.5")]
    #[case(" 17 ", "17")]
    #[case("1.8.", "1.8")]
    fn normalize_accepts_both_spellings(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input).unwrap(), expected);
    }

    #[rstest]
    #[case("1.1.1")]
    #[case("1.")]
    #[case("fubar")]
    #[case("")]
    #[case("1.x")]
    #[case("99999999999")]
    fn normalize_rejects_malformed_input(#[case] input: &str) {
        assert!(matches!(
            normalize(input),
            Err(JavaVersionError::Malformed { .. })
        ));
    }

    #[test]
    fn lookup_tables_are_inverse() {
        for (release, class) in RELEASE_TO_CLASS.iter() {
            assert_eq!(CLASS_TO_RELEASE.get(class), Some(release));
        }
    }

    #[test]
    fn serde_uses_normalized_string() {
        let version: JavaSpecificationVersion = serde_json::from_str("\"8\"").unwrap();
        assert_eq!(version, *JAVA_8);
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.8\"");
        assert!(serde_json::from_str::<JavaSpecificationVersion>("\"1.1.1\"").is_err());
    }
}
