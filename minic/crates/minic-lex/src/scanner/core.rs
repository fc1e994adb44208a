//! Core scanner implementation.
//!
//! This module contains the Scanner struct and the dispatch loop that routes
//! each position to the sub-scanner for its character class.

use tracing::{debug, trace};

use crate::chars::CharClass;
use crate::cursor::Cursor;
use crate::token::{Category, Span, Token};
use crate::vocabulary::Vocabulary;

/// Scanner for MiniC source code.
///
/// Walks the source once, left to right, and produces classified tokens.
/// Whitespace and unrecognized characters are skipped without producing
/// a token; there are no scan errors.
///
/// # Example
///
/// ```
/// use minic_lex::{Category, Scanner};
///
/// let tokens = Scanner::new("x == 1").tokenize();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [Category::Identifier, Category::Operator, Category::NumericConstant]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Shared cursor, advanced by every sub-scanner.
    pub(super) cursor: Cursor<'a>,

    /// Keyword, operator and special-character sets.
    pub(super) vocabulary: Vocabulary,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Passes through the dispatch loop since the last reset.
    steps: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` with the MiniC vocabulary.
    pub fn new(source: &'a str) -> Self {
        Self::with_vocabulary(source, Vocabulary::default())
    }

    /// Creates a scanner over `source` with a custom vocabulary.
    pub fn with_vocabulary(source: &'a str, vocabulary: Vocabulary) -> Self {
        Self {
            cursor: Cursor::new(source),
            vocabulary,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            steps: 0,
        }
    }

    /// Scans the rest of the input and returns the tokens in source order.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            tokens = tokens.len(),
            bytes = self.cursor.source().len(),
            steps = self.steps,
            "scan complete"
        );
        tokens
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Skips whitespace and unrecognized characters until a token is found.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let c = self.cursor.current()?;
            self.steps += 1;
            self.begin_token();

            match CharClass::of(c) {
                CharClass::Blank => {
                    self.cursor.advance();
                    continue;
                },
                CharClass::Slash => {
                    if let Some(comment) = self.scan_comment() {
                        return Some(comment);
                    }
                },
                CharClass::IdentStart => return Some(self.scan_identifier()),
                CharClass::Digit => return Some(self.scan_number()),
                CharClass::Quote => return Some(self.scan_char_constant()),
                CharClass::Other => {},
            }

            if let Some(operator) = self.scan_operator() {
                return Some(operator);
            }

            if self.vocabulary.is_special_character(c) {
                self.cursor.advance();
                return Some(self.make_token(Category::SpecialCharacter));
            }

            trace!(
                character = ?c,
                offset = self.cursor.position(),
                "skipping unrecognized character"
            );
            self.cursor.advance();
        }
    }

    /// Rewinds to the start of the source so it can be scanned again.
    pub fn reset(&mut self) {
        self.cursor = Cursor::new(self.cursor.source());
        self.steps = 0;
        self.begin_token();
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns how many times the dispatch loop has run since the last reset.
    ///
    /// Every pass consumes at least one character, so this never exceeds the
    /// number of characters scanned.
    pub fn dispatch_steps(&self) -> usize {
        self.steps
    }

    /// Returns the vocabulary this scanner classifies against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Marks the current position as the start of the next token.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token from `token_start` to the current position.
    pub(super) fn make_token(&self, kind: Category) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_lexemes(source: &str) -> Vec<(Category, String)> {
        Scanner::new(source)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert!(kinds_and_lexemes(" \t\r\n ").is_empty());
    }

    #[test]
    fn test_special_characters() {
        let tokens = kinds_and_lexemes("(){}[],;");
        assert_eq!(tokens.len(), 8);
        assert!(tokens
            .iter()
            .all(|(kind, lexeme)| *kind == Category::SpecialCharacter && lexeme.len() == 1));
    }

    #[test]
    fn test_unrecognized_characters_dropped() {
        assert_eq!(
            kinds_and_lexemes("a @ # $ b"),
            vec![
                (Category::Identifier, "a".to_string()),
                (Category::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_bang_is_dropped() {
        assert_eq!(
            kinds_and_lexemes("!x"),
            vec![(Category::Identifier, "x".to_string())]
        );
    }

    #[test]
    fn test_slash_falls_through_to_operator() {
        assert_eq!(
            kinds_and_lexemes("a / b"),
            vec![
                (Category::Identifier, "a".to_string()),
                (Category::Operator, "/".to_string()),
                (Category::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_slash_is_operator() {
        assert_eq!(
            kinds_and_lexemes("/"),
            vec![(Category::Operator, "/".to_string())]
        );
    }

    #[test]
    fn test_spans_track_lines() {
        let tokens = Scanner::new("int\n  x;").tokenize();
        assert_eq!(tokens[1].lexeme(), "x");
        assert_eq!(tokens[1].span(), Span::new(6, 7, 2, 3));
        assert_eq!(tokens[2].span(), Span::new(7, 8, 2, 4));
    }

    #[test]
    fn test_iterator_matches_scan() {
        let source = "while (i < 10) i = i + 1;";
        let collected: Vec<Token> = Scanner::new(source).collect();
        assert_eq!(collected, Scanner::new(source).tokenize());
    }

    #[test]
    fn test_reset_rescans_from_start() {
        let mut scanner = Scanner::new("int x;");
        let first = scanner.tokenize();
        assert!(scanner.tokenize().is_empty());
        scanner.reset();
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.dispatch_steps(), 0);
        assert_eq!(scanner.tokenize(), first);
    }

    #[test]
    fn test_tokenize_on_mut_binding() {
        let mut scanner = Scanner::new("char c = 'x';");
        let tokens: Vec<Token> = scanner.tokenize();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].kind(), Category::CharacterConstant);
        assert_eq!(scanner.position(), 13);
    }

    #[test]
    fn test_dispatch_steps_count_skipped_characters() {
        let mut scanner = Scanner::new("  @ x");
        let tokens = scanner.tokenize();
        assert_eq!(tokens.len(), 1);
        // Three blanks, one dropped '@', one identifier.
        assert_eq!(scanner.dispatch_steps(), 5);
    }

    #[test]
    fn test_vocabulary_accessor() {
        let scanner = Scanner::new("");
        assert!(scanner.vocabulary().is_keyword("main"));
        assert!(!scanner.vocabulary().is_keyword("let"));

        let custom = Scanner::with_vocabulary("", Vocabulary::new(["let"], ["=>"], [';']));
        assert!(custom.vocabulary().is_keyword("let"));
        assert_eq!(custom.vocabulary().match_operator("=> x"), Some("=>"));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary::new(["let"], ["=>", "="], [';']);
        let tokens: Vec<_> = Scanner::with_vocabulary("let f => main;", vocab)
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (Category::Keyword, "let".to_string()),
                (Category::Identifier, "f".to_string()),
                (Category::Operator, "=>".to_string()),
                (Category::Identifier, "main".to_string()),
                (Category::SpecialCharacter, ";".to_string()),
            ]
        );
    }
}
