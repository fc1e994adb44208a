//! Character classification for the dispatcher.
//!
//! Identifiers are ASCII-only: `[A-Za-z_][A-Za-z0-9_]*`. Whitespace uses the
//! full Unicode definition so that any blank character is skipped.

/// The class of the character under the cursor, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any whitespace character.
    Blank,
    /// `/`, which may open a comment.
    Slash,
    /// ASCII letter or underscore.
    IdentStart,
    /// ASCII digit.
    Digit,
    /// `'`, which opens a character constant.
    Quote,
    /// Anything else: operator, special character, or unrecognized.
    Other,
}

impl CharClass {
    /// Classifies `c`.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::chars::CharClass;
    ///
    /// assert_eq!(CharClass::of('_'), CharClass::IdentStart);
    /// assert_eq!(CharClass::of('\t'), CharClass::Blank);
    /// assert_eq!(CharClass::of('é'), CharClass::Other);
    /// ```
    pub fn of(c: char) -> Self {
        match c {
            c if c.is_whitespace() => CharClass::Blank,
            '/' => CharClass::Slash,
            c if is_ident_start(c) => CharClass::IdentStart,
            '0'..='9' => CharClass::Digit,
            '\'' => CharClass::Quote,
            _ => CharClass::Other,
        }
    }
}

/// Checks if a character can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
