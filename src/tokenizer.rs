use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use token::Token;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns the list of tokens which, joined,
/// give back the same string.
pub type Tokenizer = dyn Fn(&str) -> Vec<Token> + Send + Sync;

/// Split `text` into words, whitespace runs and punctuation marks.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> { word_tokenizer::word_tokenizer(text) }

/// The tokenizers shipped with the crate.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTokenizer {
    /// Words, whitespace runs and single punctuation marks.
    Word,
    /// Lines and line terminators.
    Line,
    /// Unicode scalar values.
    Character,
}

impl Default for BuiltinTokenizer {
    fn default() -> Self { BuiltinTokenizer::Word }
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
        }
    }
}

impl std::fmt::Display for BuiltinTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuiltinTokenizer::Word => write!(f, "word"),
            BuiltinTokenizer::Line => write!(f, "line"),
            BuiltinTokenizer::Character => write!(f, "character"),
        }
    }
}
