use super::token::Token;

/// Splits text into UTF-8 characters.
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
pub fn character_tokenizer(text: &str) -> Vec<Token> {
    text.chars().map(|char| Token::new(char.to_string())).collect()
}
