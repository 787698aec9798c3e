//! Version number engine
//!
//! ```text
//! raw string ──▶ snapshot ──▶ parser ──▶ item tree ──▶ VersionNumber
//!               (extract)   (tokenize)  (normalize)    (Ord / Eq)
//! ```
//!
//! # Modules
//!
//! - [`snapshot`]: detects `-SNAPSHOT` / `-yyyyMMdd.HHmmss-N` suffixes and orders them
//! - [`parser`]: tokenizes a version string into nested item lists
//! - [`item`]: item types, normalization and the type-directed comparison rules
//! - [`qualifier`]: qualifier aliases and the qualifier order
//! - [`number`]: the [`VersionNumber`] value type
//! - [`semver`]: conversions from `semver::Version`

pub mod item;
pub mod number;
pub mod parser;
pub mod qualifier;
pub mod semver;
pub mod snapshot;

pub use item::Item;
pub use number::{VersionNumber, descending, latest};
pub use snapshot::Snapshot;
