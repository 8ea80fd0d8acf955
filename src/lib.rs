//! Two-way comparison and reconciliation of document versions.
//!
//! Two texts are tokenized, aligned on their longest common subsequence and
//! turned into a [`ComparisonResult`]: each document's view as a list of
//! common and changed [`Segment`]-s plus a table of numbered disagreements.
//! A [`Reconciler`] then collects one choice per disagreement and assembles
//! the merged document.
//!
//! ```
//! use consent_reconcile::{Reconciler, Side, compare};
//!
//! let comparison = compare(
//!     "The patient agrees to procedure X.",
//!     "The patient agrees to procedure Y.",
//! )
//! .unwrap();
//!
//! let mut reconciler = Reconciler::new(comparison).unwrap();
//! reconciler.select(1, Side::B).unwrap();
//!
//! assert_eq!(reconciler.assemble().unwrap(), "The patient agrees to procedure Y.");
//! ```

mod alignment;
mod comparison;
mod errors;
mod reconciler;
mod tokenizer;
mod utils;

pub use alignment::{AlignmentAlgorithm, DEFAULT_LCS_CELL_LIMIT, RunPair, align, align_with};
pub use comparison::{
    ComparisonOptions, compare, compare_bytes, compare_with_options, compare_with_tokenizer,
    comparison_result::ComparisonResult,
    diff_record::{DiffRecord, DisagreementId},
    diff_table::build_table,
    segment::{Segment, SegmentKind, render},
};
pub use errors::{ErrorKind, ReconcileError};
pub use reconciler::{
    Reconciler, ReconcilerState,
    merged_span::{MergedSpan, Origin},
    selection::Selection,
};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, tokenize,
    character_tokenizer::character_tokenizer,
    line_tokenizer::line_tokenizer,
    token::{Token, join_tokens},
    word_tokenizer::word_tokenizer,
};
pub use utils::{side::Side, string_or_nothing::string_or_nothing};

#[cfg(feature = "wasm")]
pub mod wasm;
