//! Apply unified diffs to in-memory text by hunk header position.
//!
//! The engine trusts hunk header line numbers: context and deletion lines are
//! never compared against the source content. Hunks are applied strictly in
//! order, interleaved with verbatim copies of the untouched source spans, so
//! line endings survive byte-exact.

use tracing::{debug, trace};

use crate::error::{PatchError, Result};
use crate::parser::HunkHeader;

/// Which way a patch is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Produce the "new" text from the "old" text
    #[default]
    Forward,
    /// Recover the "old" text from the "new" text
    Revert,
}

impl Direction {
    /// Tag character whose body lines are emitted into the output.
    /// The opposite tag's lines are consumed from the source unseen.
    fn sign(self) -> char {
        match self {
            Direction::Forward => '+',
            Direction::Revert => '-',
        }
    }

    /// Header group whose coordinates address the document being patched.
    /// Forward application walks the source in old-file coordinates, revert
    /// walks it in new-file coordinates.
    fn source_group(self, header: &HunkHeader) -> (usize, Option<usize>) {
        match self {
            Direction::Forward => (header.old_start, header.old_count),
            Direction::Revert => (header.new_start, header.new_count),
        }
    }
}

/// Apply a unified diff to `source`, returning the patched text.
///
/// `patch` may start with `---`/`+++` file-identity headers (ignored) and
/// must then consist of zero or more hunks, each a `@@ -l,n +l,n @@` header
/// followed by body lines tagged `' '`, `'+'`, `'-'`, or a `\` continuation
/// marker. Line terminators in the source and the patch are preserved as-is.
///
/// Fails with [`PatchError::MalformedPatch`] on a bad header and
/// [`PatchError::OutOfRangeHunk`] when a hunk addresses lines the source does
/// not have; no partial output is ever returned.
pub fn apply_patch(source: &str, patch: &str, direction: Direction) -> Result<String> {
    let src: Vec<&str> = source.split_inclusive('\n').collect();
    let lines: Vec<&str> = patch.split_inclusive('\n').collect();
    let sign = direction.sign();

    let mut out = String::with_capacity(source.len() + patch.len());
    let mut cursor = 0; // next unconsumed source line, monotonic
    let mut i = 0;

    while i < lines.len() && (lines[i].starts_with("---") || lines[i].starts_with("+++")) {
        i += 1;
    }

    while i < lines.len() {
        let header_line = i + 1;
        let header = HunkHeader::parse(lines[i], header_line)?;
        i += 1;

        let (start, count) = direction.source_group(&header);
        let out_of_range = |source_line| PatchError::OutOfRangeHunk {
            line_number: header_line,
            source_line,
            source_len: src.len(),
        };

        // A zero count reports the line before the change, so the 0-based
        // target is `start` itself rather than `start - 1`.
        let target = if count == Some(0) {
            start
        } else {
            start.checked_sub(1).ok_or_else(|| out_of_range(start))?
        };
        if target < cursor || target > src.len() {
            return Err(out_of_range(start));
        }

        trace!(
            header_line,
            old_start = header.old_start,
            new_start = header.new_start,
            target,
            "applying hunk"
        );

        // Untouched span between the previous hunk and this one
        for line in &src[cursor..target] {
            out.push_str(line);
        }
        cursor = target;

        while i < lines.len() && !lines[i].starts_with('@') {
            // A following `\ No newline at end of file` marker strips this
            // line's terminator and consumes no coordinate of its own
            let line = if lines.get(i + 1).is_some_and(|next| next.starts_with('\\')) {
                let stripped = strip_terminator(lines[i]);
                i += 2;
                stripped
            } else {
                let line = lines[i];
                i += 1;
                line
            };

            let Some(tag) = line.chars().next() else {
                continue;
            };
            let content = &line[tag.len_utf8()..];

            if tag == sign || tag == ' ' {
                out.push_str(content);
            }
            if tag != sign {
                // Lines present on the input side consume a source line
                if cursor >= src.len() {
                    return Err(out_of_range(cursor + 1));
                }
                cursor += 1;
            }
        }
    }

    // Remaining source after the last hunk
    for line in &src[cursor..] {
        out.push_str(line);
    }

    debug!(
        source_lines = src.len(),
        consumed = cursor,
        output_bytes = out.len(),
        "patch applied"
    );
    Ok(out)
}

/// Drop a single trailing line terminator, if any.
fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
