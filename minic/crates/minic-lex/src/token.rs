//! Token definitions.
//!
//! A [`Token`] pairs a [`Category`] with the exact source text (the lexeme)
//! it was scanned from, plus the [`Span`] locating that text.

use std::fmt;

/// The closed set of lexeme families the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A reserved word such as `int` or `return`.
    Keyword,
    /// A name that is not a reserved word.
    Identifier,
    /// A decimal literal with at most one decimal point, e.g. `3.14`.
    NumericConstant,
    /// A single-quoted literal, e.g. `'a'` or `'\n'`.
    CharacterConstant,
    /// An arithmetic, assignment or comparison operator.
    Operator,
    /// One of `( ) { } [ ] , ;`.
    SpecialCharacter,
    /// A `//` line comment or `/* */` block comment, markers included.
    Comment,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Keyword,
        Category::Identifier,
        Category::NumericConstant,
        Category::CharacterConstant,
        Category::Operator,
        Category::SpecialCharacter,
        Category::Comment,
    ];

    /// Returns the human-readable name used in token tables.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::Category;
    ///
    /// assert_eq!(Category::NumericConstant.name(), "Numeric constants");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "Keywords",
            Category::Identifier => "Identifiers",
            Category::NumericConstant => "Numeric constants",
            Category::CharacterConstant => "Character constants",
            Category::Operator => "Operators",
            Category::SpecialCharacter => "Special characters",
            Category::Comment => "Comments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Location of a lexeme in the source.
///
/// `start..end` is a half-open byte range; `line` and `column` are the
/// 1-based position of the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based, in characters).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A classified lexeme.
///
/// Tokens are created once by the scanner and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: Category,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: Category, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The token's category.
    pub fn kind(&self) -> Category {
        self.kind
    }

    /// The exact source text of the token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Where the token was found.
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_are_distinct() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_display_respects_width() {
        assert_eq!(format!("{:12}|", Category::Operator), "Operators   |");
        assert_eq!(Category::Comment.to_string(), "Comments");
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(4, 9, 1, 5);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3, 1, 4).is_empty());
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(Category::Identifier, "count", Span::new(0, 5, 1, 1));
        assert_eq!(token.kind(), Category::Identifier);
        assert_eq!(token.lexeme(), "count");
        assert_eq!(token.span().end, 5);
    }
}
