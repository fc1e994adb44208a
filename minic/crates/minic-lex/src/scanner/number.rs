//! Numeric constant scanning.

use crate::token::{Category, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a numeric constant.
    ///
    /// Consumes digits and at most one `.`. A second `.` ends the literal
    /// and is left for the dispatcher, so `1.2.3` scans as `1.2` followed
    /// later by `3`. Signs are never part of the literal.
    pub fn scan_number(&mut self) -> Token {
        let mut seen_dot = false;

        while let Some(c) = self.cursor.current() {
            match c {
                '0'..='9' => {},
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.cursor.advance();
        }

        self.make_token(Category::NumericConstant)
    }
}
