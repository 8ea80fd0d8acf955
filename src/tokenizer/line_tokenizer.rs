use super::token::Token;

/// Splits text into lines, preserving line endings as separate tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "\n", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "\r\n", "Line 2"]
/// ```
pub fn line_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            if i > line_start {
                result.push(text[line_start..i].into());
            }
            result.push("\n".into());
            line_start = i + 1;
        } else if c == '\r' && chars.peek() == Some(&(i + 1, '\n')) {
            if i > line_start {
                result.push(text[line_start..i].into());
            }
            chars.next();
            result.push("\r\n".into());
            line_start = i + 2;
        }
    }

    if line_start < text.len() {
        result.push(text[line_start..].into());
    }

    result
}
