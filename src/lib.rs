//! # Edit distance with replayable edit scripts
//!
//! Three algorithmically distinct aligners for unit-cost Levenshtein
//! distance over arbitrary symbol slices:
//!
//! 1. **Quadratic**: fills the full cost and trace matrices and backtracks a
//!    minimal script. Ties prefer diagonal, then delete, then insert.
//! 2. **Divide and conquer**: Hirschberg's split on forward/backward score
//!    rows; same output contract in `O(m + n)` auxiliary space.
//! 3. **Banded**: decides whether the distance is at most `k`, touching only
//!    a diagonal band of width `2k + 1` and abandoning as soon as a whole row
//!    exceeds `k`.
//!
//! Scripts record raw positions in source coordinates; [`replay`] applies
//! them to a copy of the source, correcting for index drift, and returns
//! every intermediate state.
//!
//! ## Usage Example
//!
//! ```
//! use levenshtein_trio::{align_quadratic, distance_within_threshold, replay, symbols};
//!
//! let source = symbols("kitten");
//! let target = symbols("sitting");
//! let alignment = align_quadratic(&source, &target);
//! assert_eq!(alignment.distance, 3);
//!
//! let trace = replay(&source, &alignment.script);
//! assert_eq!(trace.final_sequence, target);
//! assert_eq!(trace.snapshots.len(), alignment.script.len() + 1);
//!
//! assert_eq!(distance_within_threshold(b"flaw", b"lawn", 1), None);
//! assert_eq!(distance_within_threshold(b"flaw", b"lawn", 2), Some(2));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`EditKind`],
//!   [`EditOperation`], [`EditScript`], [`Alignment`], [`AppliedOperation`]
//!   and [`Replay`], so scripts and replays can be exported and reloaded.

#![warn(missing_docs, missing_debug_implementations)]

pub mod align; // The three aligners and the score-row engine
pub mod matrix; // Pairwise distance matrices
pub mod report; // Text rendering
pub mod script; // Edit operations, scripts and replay
pub mod spelling; // Dictionary-backed correction

// Re-exports for convenience
pub use align::{
    align_divide_and_conquer, align_quadratic, align_quadratic_with_tables,
    distance_within_threshold, levenshtein_distance, normalized_distance, Alignment, Strategy,
    Threshold,
};
pub use script::{replay, AppliedOperation, EditKind, EditOperation, EditScript, Replay};

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum AlignError {
    /// Negative distance bound.
    #[error("invalid threshold {0}: must be a non-negative integer")]
    InvalidThreshold(i64),

    /// Dictionary built from no usable words.
    #[error("dictionary contains no words")]
    EmptyDictionary,

    /// Two records share a label in a distance-matrix input.
    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),

    /// A tabular input row could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Split text into symbols (Unicode scalar values).
pub fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}
