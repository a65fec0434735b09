//! Error types for patch application.

use thiserror::Error;

/// Errors that can occur while applying a unified diff.
///
/// Patch application is all-or-nothing: any error aborts the whole call and
/// no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// A line expected to be a hunk header did not match the header grammar.
    #[error("malformed hunk header at patch line {line_number}: {line:?}")]
    MalformedPatch {
        /// The offending line, without its terminator
        line: String,
        /// 1-based position of the line within the patch
        line_number: usize,
    },

    /// A hunk addressed a source line outside the applicable range.
    ///
    /// Raised when a header's target position falls before the current source
    /// cursor or past the end of the source, or when a context/deletion line
    /// would consume a source line that does not exist.
    #[error(
        "hunk at patch line {line_number} addresses source line {source_line}, \
         outside the applicable range (source has {source_len} lines)"
    )]
    OutOfRangeHunk {
        /// 1-based patch position of the hunk's header line
        line_number: usize,
        /// 1-based source line the hunk tried to address
        source_line: usize,
        /// Total number of lines in the source
        source_len: usize,
    },
}

/// Result type for patch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
