//! Identifier and keyword scanning.

use crate::chars::is_ident_continue;
use crate::token::{Category, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes the maximal run of ASCII alphanumerics and underscores. The
    /// whole run is classified, so `intx` is an identifier, not `int`
    /// followed by `x`.
    pub fn scan_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_continue);

        let word = self.cursor.slice_from(self.token_start);
        if self.vocabulary.is_keyword(word) {
            self.make_token(Category::Keyword)
        } else {
            self.make_token(Category::Identifier)
        }
    }
}
