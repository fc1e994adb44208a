//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which owns the scan position
//! while the scanner walks the source text. It steps over whole UTF-8
//! characters and tracks line/column information for token spans.

/// A forward-only cursor over source text.
///
/// The cursor never moves backwards: every method either leaves the
/// position untouched or advances it. Lookahead is done with [`peek`]
/// and [`remaining`] without consuming anything.
///
/// # Example
///
/// ```
/// use minic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current(), Some('i'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('n'));
/// ```
///
/// [`peek`]: Cursor::peek
/// [`remaining`]: Cursor::remaining
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek(0), Some('/'));
    /// assert_eq!(cursor.peek(1), Some('*'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return self.current();
        }
        self.remaining().chars().nth(offset)
    }

    /// Consumes the current character and returns it.
    ///
    /// Returns `None` and leaves the cursor where it is at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("count1 = 0");
    /// cursor.advance_while(|c| c.is_ascii_alphanumeric());
    /// assert_eq!(cursor.remaining(), " = 0");
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advances by `count` bytes, clamped to the end of the source.
    ///
    /// `count` must land on a character boundary; callers obtain it from a
    /// match against [`remaining`](Cursor::remaining).
    pub fn advance_bytes(&mut self, count: usize) {
        let end = self.position + count.min(self.source.len() - self.position);
        for c in self.source[self.position..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position = end;
    }

    /// Advances to the end of the source.
    pub fn advance_to_end(&mut self) {
        self.advance_bytes(self.source.len() - self.position);
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("'a'");
    /// assert!(cursor.eat('\''));
    /// assert!(!cursor.eat('\''));
    /// assert_eq!(cursor.current(), Some('a'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
