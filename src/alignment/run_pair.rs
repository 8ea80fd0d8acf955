use crate::{
    Side,
    tokenizer::token::{Token, join_tokens},
};

use super::raw_operation::RawOperation;

/// A maximal span of the alignment: either tokens present in both documents
/// or the two documents' competing tokens between the same pair of common
/// anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPair {
    Common(Vec<Token>),
    Changed { a: Vec<Token>, b: Vec<Token> },
}

impl RunPair {
    /// The tokens this run contributes to the given document.
    #[must_use]
    pub fn tokens(&self, side: Side) -> &[Token] {
        match (self, side) {
            (RunPair::Common(tokens), _)
            | (RunPair::Changed { a: tokens, .. }, Side::A)
            | (RunPair::Changed { b: tokens, .. }, Side::B) => tokens,
        }
    }

    #[must_use]
    pub fn text(&self, side: Side) -> String { join_tokens(self.tokens(side)) }

    #[must_use]
    pub fn is_changed(&self) -> bool { matches!(self, RunPair::Changed { .. }) }
}

/// Collapse a token-level edit script into alternating runs. Everything
/// between two `Equal` stretches becomes one `Changed` run, regardless of how
/// the deletions and insertions are interleaved.
pub fn group_runs<'a>(operations: impl IntoIterator<Item = RawOperation<'a>>) -> Vec<RunPair> {
    let mut runs = Vec::new();
    let mut common = Vec::new();
    let mut changed_a = Vec::new();
    let mut changed_b = Vec::new();

    for operation in operations {
        if operation.is_equal() {
            flush_changed(&mut runs, &mut changed_a, &mut changed_b);
        } else {
            flush_common(&mut runs, &mut common);
        }

        match operation {
            RawOperation::Equal(token) => common.push(token.clone()),
            RawOperation::Delete(token) => changed_a.push(token.clone()),
            RawOperation::Insert(token) => changed_b.push(token.clone()),
        }
    }

    flush_common(&mut runs, &mut common);
    flush_changed(&mut runs, &mut changed_a, &mut changed_b);

    runs
}

fn flush_common(runs: &mut Vec<RunPair>, common: &mut Vec<Token>) {
    if !common.is_empty() {
        runs.push(RunPair::Common(std::mem::take(common)));
    }
}

fn flush_changed(runs: &mut Vec<RunPair>, changed_a: &mut Vec<Token>, changed_b: &mut Vec<Token>) {
    if !changed_a.is_empty() || !changed_b.is_empty() {
        runs.push(RunPair::Changed {
            a: std::mem::take(changed_a),
            b: std::mem::take(changed_b),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_interleaved_changes_become_one_run() {
        let (x, y, p, q, z) = (
            Token::from("x"),
            Token::from("y"),
            Token::from("p"),
            Token::from("q"),
            Token::from("z"),
        );
        let runs = group_runs([
            RawOperation::Equal(&x),
            RawOperation::Insert(&p),
            RawOperation::Delete(&y),
            RawOperation::Insert(&q),
            RawOperation::Equal(&z),
        ]);

        assert_eq!(
            runs,
            vec![
                RunPair::Common(vec![x]),
                RunPair::Changed {
                    a: vec![y],
                    b: vec![p, q]
                },
                RunPair::Common(vec![z]),
            ]
        );
        assert_eq!(runs[1].text(Side::A), "y");
        assert_eq!(runs[1].text(Side::B), "pq");
        assert_eq!(runs[0].text(Side::B), "x");
    }

    #[test]
    fn test_trailing_change_is_flushed() {
        let (x, y) = (Token::from("x"), Token::from("y"));
        let runs = group_runs([RawOperation::Equal(&x), RawOperation::Delete(&y)]);

        assert_eq!(runs.len(), 2);
        assert!(runs[1].is_changed());
        assert_eq!(runs[1].text(Side::B), "");
    }

    #[test]
    fn test_no_operations() {
        assert!(group_runs([]).is_empty());
    }
}
