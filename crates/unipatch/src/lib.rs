//! Unified-diff patch application.
//!
//! This crate reconstructs a document's text from a unified diff: forward to
//! produce the post-patch text, or in revert mode to recover the pre-patch
//! text. Only application is in scope; diff generation, three-way merges, and
//! fuzzy context matching are not.
//!
//! The engine is position-driven: it trusts the `@@ -l,n +l,n @@` header line
//! numbers and never compares context or deletion lines against the source.
//! It is a pure function over two in-memory strings with no I/O and no state
//! across calls, so it is safe to invoke concurrently on independent inputs.
//!
//! # Usage
//!
//! ```rust
//! use unipatch::{apply_patch, Direction};
//!
//! let source = "a\nb\nc\n";
//! let patch = "@@ -2,1 +2,1 @@\n-b\n+B\n";
//!
//! let patched = apply_patch(source, patch, Direction::Forward).unwrap();
//! assert_eq!(patched, "a\nB\nc\n");
//!
//! let reverted = apply_patch(&patched, patch, Direction::Revert).unwrap();
//! assert_eq!(reverted, source);
//! ```

mod applier;
mod error;
mod parser;

pub use applier::{apply_patch, Direction};
pub use error::{PatchError, Result};
pub use parser::HunkHeader;
