use unicode_segmentation::UnicodeSegmentation;

use super::token::Token;

/// Splits text on Unicode word boundaries (UAX #29). Words keep their
/// combining marks, emoji modifiers and joiners, every punctuation mark is a
/// token of its own and consecutive whitespace is merged into a single
/// token, so a changed word is never glued to its neighbours.
///
/// ## Example
///
/// ```not_rust
/// "Hi there,  you!" -> ["Hi", " ", "there", ",", "  ", "you", "!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut whitespace_start = None;

    for (index, segment) in text.split_word_bound_indices() {
        let is_whitespace = segment.chars().all(char::is_whitespace);

        match (whitespace_start, is_whitespace) {
            (Some(_), true) => {}
            (None, true) => whitespace_start = Some(index),
            (Some(start), false) => {
                result.push(text[start..index].into());
                result.push(segment.into());
                whitespace_start = None;
            }
            (None, false) => result.push(segment.into()),
        }
    }

    if let Some(start) = whitespace_start {
        result.push(text[start..].into());
    }

    result
}
