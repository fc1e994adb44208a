//! Character constant scanning.
//!
//! No validation happens here: `'ab'`, `'a` and a lone `'` all come out as
//! best-effort character constants.

use crate::token::{Category, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a character constant starting at `'`.
    ///
    /// Consumes the opening quote, then either a backslash and the escaped
    /// character or exactly one raw character (whatever it is), then the
    /// closing quote if one follows. Stops early at end of input.
    pub fn scan_char_constant(&mut self) -> Token {
        self.cursor.advance();

        // An escape is the backslash plus one more character.
        self.cursor.eat('\\');
        self.cursor.advance();

        self.cursor.eat('\'');
        self.make_token(Category::CharacterConstant)
    }
}
