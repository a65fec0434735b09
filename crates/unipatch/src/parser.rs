//! Hunk header parsing for unified diffs.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{PatchError, Result};

/// Regex pattern to match a hunk header like `@@ -12,3 +14,4 @@` (counts optional)
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@$").expect("Invalid hunk header regex")
});

/// A parsed `@@ -old_start[,old_count] +new_start[,new_count] @@` header.
///
/// Start fields are 1-based line numbers exactly as written in the patch.
/// A `None` count means the unified-diff default of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// Start line of the hunk in the old document
    pub old_start: usize,
    /// Number of old-document lines the hunk covers
    pub old_count: Option<usize>,
    /// Start line of the hunk in the new document
    pub new_start: usize,
    /// Number of new-document lines the hunk covers
    pub new_count: Option<usize>,
}

impl HunkHeader {
    /// Parse a patch line as a hunk header.
    ///
    /// The line may carry its terminator; it is trimmed before matching.
    /// `line_number` is the 1-based position of the line within the patch,
    /// used only for diagnostics.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let malformed = || PatchError::MalformedPatch {
            line: trimmed.to_string(),
            line_number,
        };

        let caps = HUNK_HEADER_REGEX.captures(trimmed).ok_or_else(malformed)?;

        // Numeric overflow of a field is treated the same as a grammar failure
        let required = |idx: usize| caps[idx].parse::<usize>().map_err(|_| malformed());
        let optional = |idx: usize| match caps.get(idx) {
            Some(m) => m.as_str().parse::<usize>().map(Some).map_err(|_| malformed()),
            None => Ok(None),
        };

        Ok(Self {
            old_start: required(1)?,
            old_count: optional(2)?,
            new_start: required(3)?,
            new_count: optional(4)?,
        })
    }
}
