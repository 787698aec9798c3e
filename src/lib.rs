//! Maven-like version numbers with wildcard, early-access and snapshot support
//!
//! - [`version`]: parsing and ordering of arbitrary version strings
//! - [`java`]: Java specification versions and their class file versions
//! - [`config`]: fixed tables the ordering is built on
//! - [`error`]: errors of the Java layer; version parsing itself never fails

pub mod config;
pub mod error;
pub mod java;
pub mod version;

pub use error::JavaVersionError;
pub use java::JavaSpecificationVersion;
pub use version::{Item, Snapshot, VersionNumber, descending, latest};
