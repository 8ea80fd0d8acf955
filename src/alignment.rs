//! Aligning two token sequences into alternating common and changed runs.

mod lcs;
mod myers;
mod raw_operation;
mod run_pair;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use run_pair::RunPair;

use crate::{ReconcileError, tokenizer::token::Token};
use raw_operation::RawOperation;

/// Upper bound on the number of LCS table cells held in memory at once.
/// Tables above it are checkpointed, and when even the checkpoints don't fit
/// `AlignmentAlgorithm::Auto` switches to Myers' algorithm.
pub const DEFAULT_LCS_CELL_LIMIT: usize = 1 << 25;

/// The diff algorithm used to align two documents.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentAlgorithm {
    /// `Lcs` while its table fits the cell limit, `Myers` otherwise.
    #[default]
    Auto,
    /// Dynamic-programming LCS with leftmost tie-breaking. Inputs whose table
    /// doesn't fit the cell limit are rejected.
    Lcs,
    /// Myers' `O((N+M)D)` algorithm.
    Myers,
}

/// Align `tokens_a` and `tokens_b` with the automatic algorithm choice and
/// the default cell limit.
#[must_use]
pub fn align(tokens_a: &[Token], tokens_b: &[Token]) -> Vec<RunPair> {
    run_pair::group_runs(auto_diff(tokens_a, tokens_b, DEFAULT_LCS_CELL_LIMIT))
}

/// Align two token sequences into `RunPair`-s.
///
/// Runs partition both sequences: concatenating the side-A (side-B) tokens
/// of the result gives back `tokens_a` (`tokens_b`). Common and changed runs
/// alternate, so there's at most one changed run between two common ones.
///
/// # Errors
///
/// `ReconcileError::Input` if `AlignmentAlgorithm::Lcs` is requested for
/// documents whose table can't be held in `lcs_cell_limit` cells.
pub fn align_with(
    tokens_a: &[Token],
    tokens_b: &[Token],
    algorithm: AlignmentAlgorithm,
    lcs_cell_limit: usize,
) -> Result<Vec<RunPair>, ReconcileError> {
    debug!(
        "Aligning {} and {} tokens using {algorithm:?}",
        tokens_a.len(),
        tokens_b.len()
    );

    let operations = match algorithm {
        AlignmentAlgorithm::Auto => auto_diff(tokens_a, tokens_b, lcs_cell_limit),
        AlignmentAlgorithm::Lcs => lcs::lcs_diff(tokens_a, tokens_b, lcs_cell_limit)
            .ok_or_else(|| {
                ReconcileError::input(format!(
                    "aligning {} and {} tokens with LCS needs more than {lcs_cell_limit} \
                     table cells, use the automatic or the Myers algorithm",
                    tokens_a.len(),
                    tokens_b.len()
                ))
            })?,
        AlignmentAlgorithm::Myers => myers::myers_diff(tokens_a, tokens_b),
    };

    Ok(run_pair::group_runs(operations))
}

fn auto_diff<'a>(
    tokens_a: &'a [Token],
    tokens_b: &'a [Token],
    lcs_cell_limit: usize,
) -> Vec<RawOperation<'a>> {
    lcs::lcs_diff(tokens_a, tokens_b, lcs_cell_limit).unwrap_or_else(|| {
        debug!("The LCS table does not fit {lcs_cell_limit} cells, falling back to Myers");
        myers::myers_diff(tokens_a, tokens_b)
    })
}
