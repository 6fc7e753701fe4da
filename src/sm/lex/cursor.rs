use std::ops::Range;

/// A forward-only scanner over chart text, holding a byte index into it.
pub struct Cursor<'a> {
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self { index: 0, source }
    }

    /// Move cursor through the next `#name:` opener, and return the range of the opener.
    ///
    /// A `#` not followed by exactly `name` and `:` is skipped, so `#SUBTITLE:` never matches the
    /// name `TITLE`. Returns `None` and moves to the end if no opener remains.
    pub fn next_opener(&mut self, name: &str) -> Option<Range<usize>> {
        while let Some(offset) = self.source[self.index..].find('#') {
            let hash = self.index + offset;
            let after_hash = &self.source[hash + 1..];
            if after_hash
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with(':'))
            {
                let end = hash + 1 + name.len() + 1;
                self.index = end;
                return Some(hash..end);
            }
            self.index = hash + 1;
        }
        self.index = self.source.len();
        None
    }

    /// Move cursor through the next `terminator`, and return the range of the text before it.
    ///
    /// The returned range may be empty, or may span lines. Returns `None` without moving if the
    /// terminator does not appear in the rest of the source.
    pub fn next_until(&mut self, terminator: char) -> Option<Range<usize>> {
        let offset = self.source[self.index..].find(terminator)?;
        let ret = self.index..self.index + offset;
        self.index = ret.end + terminator.len_utf8();
        Some(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn opener_and_terminator() {
        let source = "#SUBTITLE:b;\n#TITLE:a;";
        let mut cursor = Cursor::new(source);

        assert_eq!(cursor.next_opener("TITLE"), Some(13..20));
        assert_eq!(cursor.index, 20);
        let value = cursor.next_until(';').unwrap();
        assert_eq!(&source[value], "a");
        assert_eq!(cursor.index, source.len());
    }

    #[test]
    fn opener_needs_colon() {
        let source = "#TITLE a;\n#TITLES:b;\n#TITLE";
        let mut cursor = Cursor::new(source);
        assert_eq!(cursor.next_opener("TITLE"), None);
        assert_eq!(cursor.index, source.len());
    }

    #[test]
    fn missing_terminator_keeps_position() {
        let mut cursor = Cursor::new("#OFFSET:0.1");
        assert!(cursor.next_opener("OFFSET").is_some());
        assert_eq!(cursor.next_until(';'), None);
        assert_eq!(cursor.index, 8);
    }

    #[test]
    fn multibyte_text() {
        let source = "#ARTIST:ななひら;#TITLE:テスト;";
        let mut cursor = Cursor::new(source);
        assert!(cursor.next_opener("TITLE").is_some());
        let value = cursor.next_until(';').unwrap();
        assert_eq!(&source[value], "テスト");
    }
}
