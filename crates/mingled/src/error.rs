//! Error types for the resolver.

/// Result type alias for resolver construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a resolver.
///
/// Resolution itself is total: an unrecognized token is reported as
/// `None`, never as an error. Only construction (compiling the rule
/// table) can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule pattern failed to compile.
    #[error("invalid rule pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a pattern error.
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
