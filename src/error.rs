use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JavaVersionError {
    #[error("Malformed Java specification version '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("Unknown class version for release version: {0}")]
    UnknownReleaseVersion(i64),

    #[error("Unknown Java specification version for class version: {0}")]
    UnknownClassVersion(i64),
}
