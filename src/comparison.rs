//! Turning two documents into a `ComparisonResult`.

pub mod comparison_result;
pub mod diff_record;
pub mod diff_table;
pub mod segment;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AlignmentAlgorithm, BuiltinTokenizer, ComparisonResult, DEFAULT_LCS_CELL_LIMIT,
    ReconcileError, RunPair, Side, Tokenizer, align_with,
    tokenizer::token::join_tokens,
    utils::string_or_nothing::string_or_nothing,
};
use diff_record::DisagreementId;

/// Knobs of a single comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonOptions {
    pub tokenizer: BuiltinTokenizer,
    pub algorithm: AlignmentAlgorithm,
    pub lcs_cell_limit: usize,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            tokenizer: BuiltinTokenizer::Word,
            algorithm: AlignmentAlgorithm::Auto,
            lcs_cell_limit: DEFAULT_LCS_CELL_LIMIT,
        }
    }
}

/// Compare two versions of a document word by word.
///
/// ```
/// use consent_reconcile::{Side, compare};
///
/// let result = compare(
///     "The patient agrees to procedure X.",
///     "The patient agrees to procedure Y.",
/// )
/// .unwrap();
///
/// assert_eq!(result.diff_table().len(), 1);
/// assert_eq!(result.diff_table()[0].text(Side::A), "X");
/// assert_eq!(result.diff_table()[0].text(Side::B), "Y");
/// ```
///
/// # Errors
///
/// `ReconcileError::InternalAlignment` if the produced result violates its
/// invariants, which would be a bug.
pub fn compare(a: &str, b: &str) -> Result<ComparisonResult, ReconcileError> {
    compare_with_options(a, b, &ComparisonOptions::default())
}

/// Compare two documents with the given tokenizer and alignment settings.
///
/// # Errors
///
/// `ReconcileError::Input` if `AlignmentAlgorithm::Lcs` is requested for
/// documents too large for `lcs_cell_limit`, and the errors of [`compare`].
pub fn compare_with_options(
    a: &str,
    b: &str,
    options: &ComparisonOptions,
) -> Result<ComparisonResult, ReconcileError> {
    compare_tokens(a, b, &*options.tokenizer, options.algorithm, options.lcs_cell_limit)
}

/// Compare two documents with a custom tokenizer.
///
/// # Errors
///
/// `ReconcileError::Input` if joining the tokens doesn't give back the
/// document, and the errors of [`compare`].
pub fn compare_with_tokenizer(
    a: &str,
    b: &str,
    tokenizer: &Tokenizer,
) -> Result<ComparisonResult, ReconcileError> {
    compare_tokens(
        a,
        b,
        tokenizer,
        AlignmentAlgorithm::Auto,
        DEFAULT_LCS_CELL_LIMIT,
    )
}

/// Compare two raw payloads, rejecting anything that isn't UTF-8 text.
///
/// # Errors
///
/// `ReconcileError::Input` if either payload is binary, and the errors of
/// [`compare`].
pub fn compare_bytes(
    a: &[u8],
    b: &[u8],
    options: &ComparisonOptions,
) -> Result<ComparisonResult, ReconcileError> {
    let a = string_or_nothing(a)
        .ok_or_else(|| ReconcileError::input("document A is not valid UTF-8 text"))?;
    let b = string_or_nothing(b)
        .ok_or_else(|| ReconcileError::input("document B is not valid UTF-8 text"))?;

    compare_with_options(a, b, options)
}

fn compare_tokens(
    a: &str,
    b: &str,
    tokenizer: &Tokenizer,
    algorithm: AlignmentAlgorithm,
    lcs_cell_limit: usize,
) -> Result<ComparisonResult, ReconcileError> {
    let tokens_a = tokenizer(a);
    let tokens_b = tokenizer(b);

    for (side, text, tokens) in [(Side::A, a, &tokens_a), (Side::B, b, &tokens_b)] {
        if join_tokens(tokens) != text {
            return Err(ReconcileError::input(format!(
                "the tokenizer does not reproduce document {side}"
            )));
        }
    }

    let runs = align_with(&tokens_a, &tokens_b, algorithm, lcs_cell_limit)?;
    let result = ComparisonResult::from_runs(&runs);

    result.validate()?;
    for (side, text) in [(Side::A, a), (Side::B, b)] {
        if result.document(side) != text {
            return Err(ReconcileError::internal(format!(
                "the segments of document {side} do not reproduce it"
            )));
        }
    }

    debug!(
        "Found {} disagreements across {} segments",
        result.diff_table().len(),
        result.segments_a().len()
    );

    Ok(result)
}

/// Pair every run with its disagreement id: changed runs are numbered from 1
/// in order, common runs get `None`.
fn numbered_runs(runs: &[RunPair]) -> impl Iterator<Item = (Option<DisagreementId>, &RunPair)> {
    runs.iter().scan(0, |counter, run| {
        if run.is_changed() {
            *counter += 1;
            Some((Some(*counter), run))
        } else {
            Some((None, run))
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorKind, SegmentKind, tokenizer::token::Token};

    #[test]
    fn test_identical_documents() {
        let text = "אני החתום/ה מטה מאשר/ת.\nSigned.";
        let result = compare(text, text).unwrap();

        assert!(result.is_identical());
        for side in [Side::A, Side::B] {
            assert_eq!(result.segments(side).len(), 1);
            assert_eq!(result.segments(side)[0].kind(), SegmentKind::Common);
            assert_eq!(result.segments(side)[0].text(), text);
        }
    }

    #[test]
    fn test_disjoint_documents() {
        let result = compare("alpha beta", "1.2").unwrap();

        assert_eq!(result.diff_table().len(), 1);
        assert_eq!(result.diff_table()[0].text_a(), "alpha beta");
        assert_eq!(result.diff_table()[0].text_b(), "1.2");
    }

    #[test]
    fn test_empty_documents() {
        let result = compare("", "").unwrap();
        assert!(result.segments_a().is_empty());
        assert!(result.is_identical());

        let result = compare("", "added").unwrap();
        assert_eq!(result.diff_table().len(), 1);
        assert_eq!(result.diff_table()[0].text_a(), "");
        assert_eq!(result.segments_a(), [crate::Segment::changed(String::new(), 1)]);
    }

    #[test]
    fn test_line_tokenizer() {
        let options = ComparisonOptions {
            tokenizer: BuiltinTokenizer::Line,
            ..ComparisonOptions::default()
        };
        let result = compare_with_options(
            "Header\nI agree to X\nFooter\n",
            "Header\nI agree to Y\nFooter\n",
            &options,
        )
        .unwrap();

        assert_eq!(result.diff_table().len(), 1);
        assert_eq!(result.diff_table()[0].text_a(), "I agree to X");
        assert_eq!(result.diff_table()[0].text_b(), "I agree to Y");
    }

    #[test]
    fn test_compare_bytes_rejects_binary() {
        let error = compare_bytes(b"%PDF\0\x01", b"text", &ComparisonOptions::default());
        assert_eq!(error.map_err(|error| error.kind()), Err(ErrorKind::Input));

        let error = compare_bytes(b"text", &[0xc3, 0x28], &ComparisonOptions::default());
        assert_eq!(error.map_err(|error| error.kind()), Err(ErrorKind::Input));

        assert!(compare_bytes(b"a b", b"a c", &ComparisonOptions::default()).is_ok());
    }

    #[test]
    fn test_lossy_tokenizer_is_rejected() {
        let lossy = |text: &str| -> Vec<Token> {
            text.split_whitespace().map(Token::from).collect()
        };

        let error = compare_with_tokenizer("a b", "a c", &lossy).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_explicit_lcs_respects_the_cell_limit() {
        let options = ComparisonOptions {
            algorithm: AlignmentAlgorithm::Lcs,
            lcs_cell_limit: 8,
            ..ComparisonOptions::default()
        };

        let error = compare_with_options("first draft", "second version", &options).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Input);

        let auto = ComparisonOptions {
            algorithm: AlignmentAlgorithm::Auto,
            ..options
        };
        let result = compare_with_options("first draft", "second version", &auto).unwrap();
        assert_eq!(result.diff_table().len(), 2);
    }
}
