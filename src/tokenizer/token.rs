#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A comparison unit of a document: a word, a whitespace run, a punctuation
/// mark, a line, or a character, depending on the tokenizer used.
///
/// Tokens are compared by exact string equality and keep their surface text
/// untouched, so joining the tokens of a document in order reproduces the
/// document byte-for-byte.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    original: String,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self { Token::new(text.to_owned()) }
}

impl From<String> for Token {
    fn from(text: String) -> Self { Token::new(text) }
}

impl Token {
    #[must_use]
    pub fn new(original: String) -> Self { Token { original } }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }
}

/// Concatenate the surface text of `tokens`.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String { tokens.iter().map(Token::original).collect() }
