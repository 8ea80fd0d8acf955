/// A helper for building a string in-order based on an original string and a
/// series of insertions, deletions, and copies applied to it. It is safe to use
/// with UTF-8 strings as all operations are based on character indices. The
/// methods must be called in-order.
pub struct StringBuilder<'a> {
    original: std::str::Chars<'a>,
    buffer: String,
}

impl StringBuilder<'_> {
    pub fn new(original: &str) -> StringBuilder<'_> {
        StringBuilder {
            original: original.chars(),
            buffer: String::with_capacity(original.len()),
        }
    }

    /// Insert a string at the end of the built buffer.
    pub fn insert(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Skip copying `length` characters from the original string to the built
    /// buffer.
    pub fn delete(&mut self, length: usize) {
        if length == 0 {
            return;
        }

        self.original.nth(length - 1);
    }

    /// Copy `length` characters from the original string to the built buffer.
    pub fn retain(&mut self, length: usize) {
        self.buffer.extend(self.original.by_ref().take(length));
    }

    /// Number of characters not yet retained or deleted.
    pub fn remaining(&self) -> usize { self.original.clone().count() }

    /// Returns the built buffer.
    pub fn build(self) -> String { self.buffer }
}

impl std::fmt::Debug for StringBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringBuilder")
            .field("buffer", &self.buffer)
            .field("remaining", &self.original.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_string_builder() {
        let original = "aaa bbb ccc";
        let mut builder = StringBuilder::new(original);

        builder.insert("ddd");
        builder.delete(3);
        builder.retain(8);
        builder.insert(" eee");

        assert_eq!(builder.remaining(), 0);
        assert_eq!(builder.build(), "ddd bbb ccc eee");

        let original = "abcde";
        let mut builder = StringBuilder::new(original);

        builder.retain(1);
        builder.delete(3);
        builder.retain(1);

        assert_eq!(builder.build(), "ae");
    }

    #[test]
    fn test_empty_original() {
        let mut builder = StringBuilder::new("");

        builder.insert("test");
        assert_eq!(builder.build(), "test");
    }

    #[test]
    fn test_unicode_characters() {
        let original = "אני מסכים";
        let mut builder = StringBuilder::new(original);

        builder.retain(4);
        builder.delete(5);
        builder.insert("מסרב");

        assert_eq!(builder.remaining(), 0);
        assert_eq!(builder.build(), "אני מסרב");
    }
}
