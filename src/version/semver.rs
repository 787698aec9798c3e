//! Conversions from `semver` versions
//!
//! Build metadata (`+...`) is dropped: it does not take part in SemVer precedence and
//! this grammar has no notion of it.

use semver::Version;

use crate::version::number::VersionNumber;

impl From<&Version> for VersionNumber {
    fn from(version: &Version) -> Self {
        let text = if version.pre.is_empty() {
            format!("{}.{}.{}", version.major, version.minor, version.patch)
        } else {
            format!(
                "{}.{}.{}-{}",
                version.major, version.minor, version.patch, version.pre
            )
        };
        VersionNumber::new(&text)
    }
}

impl From<Version> for VersionNumber {
    fn from(version: Version) -> Self {
        VersionNumber::from(&version)
    }
}
