use crate::tokenizer::token::Token;

/// A single step of an edit script turning document A into document B.
///
/// Every operation wraps exactly one token borrowed from the input sequences;
/// `Equal` tokens come from document A (they are identical in B).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOperation<'a> {
    Equal(&'a Token),
    Delete(&'a Token),
    Insert(&'a Token),
}

impl RawOperation<'_> {
    pub fn is_equal(&self) -> bool { matches!(self, RawOperation::Equal(_)) }
}

/// Turn the edit script back into the two documents' token sequences.
#[cfg(test)]
pub fn replay<'a>(operations: &[RawOperation<'a>]) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    for operation in operations {
        match operation {
            RawOperation::Equal(token) => {
                a.push(token.original());
                b.push(token.original());
            }
            RawOperation::Delete(token) => a.push(token.original()),
            RawOperation::Insert(token) => b.push(token.original()),
        }
    }

    (a, b)
}
