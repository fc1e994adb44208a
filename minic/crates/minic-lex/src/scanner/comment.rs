//! Comment scanning.
//!
//! Comments are kept as tokens rather than skipped. Block comments do not
//! nest, and an unterminated block comment runs to end of input.

use crate::token::{Category, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a comment starting at `/`.
    ///
    /// Returns `None` without moving the cursor when the `/` does not open
    /// a `//` or `/*` comment.
    pub fn scan_comment(&mut self) -> Option<Token> {
        match self.cursor.peek(1)? {
            '/' => self.scan_line_comment(),
            '*' => self.scan_block_comment(),
            _ => return None,
        }
        Some(self.make_token(Category::Comment))
    }

    /// Consumes `//` through end of line. The newline is not consumed.
    fn scan_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }

    /// Consumes `/*` through the first `*/` after it, or to end of input.
    fn scan_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        match self.cursor.remaining().find("*/") {
            Some(offset) => self.cursor.advance_bytes(offset + 2),
            None => self.cursor.advance_to_end(),
        }
    }
}
