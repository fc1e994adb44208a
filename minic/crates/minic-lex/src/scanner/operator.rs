//! Operator scanning.
//!
//! Operators are matched by maximal munch against the vocabulary, which
//! keeps its operator list ordered longest first.

use crate::token::{Category, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans the longest operator at the cursor.
    ///
    /// Returns `None` without moving the cursor if no operator matches.
    ///
    /// Handles: `+`, `-`, `*`, `/`, `=`, `==`, `<`, `>`, `<=`, `>=`, `!=`
    pub fn scan_operator(&mut self) -> Option<Token> {
        let len = self
            .vocabulary
            .match_operator(self.cursor.remaining())?
            .len();
        self.cursor.advance_bytes(len);
        Some(self.make_token(Category::Operator))
    }
}

#[cfg(test)]
mod tests {
    use crate::Scanner;

    fn scan_op(source: &str) -> Option<String> {
        Scanner::new(source)
            .scan_operator()
            .map(|t| t.lexeme().to_string())
    }

    #[test]
    fn test_single_char_operators() {
        for op in ["+", "-", "*", "/", "=", "<", ">"] {
            assert_eq!(scan_op(op).as_deref(), Some(op));
        }
    }

    #[test]
    fn test_eq_eq() {
        assert_eq!(scan_op("==").as_deref(), Some("=="));
    }

    #[test]
    fn test_triple_eq_takes_two() {
        assert_eq!(scan_op("===").as_deref(), Some("=="));
    }

    #[test]
    fn test_lt_eq() {
        assert_eq!(scan_op("<=").as_deref(), Some("<="));
    }

    #[test]
    fn test_gt_eq() {
        assert_eq!(scan_op(">=").as_deref(), Some(">="));
    }

    #[test]
    fn test_not_eq() {
        assert_eq!(scan_op("!=").as_deref(), Some("!="));
    }

    #[test]
    fn test_bang_alone_is_not_operator() {
        assert_eq!(scan_op("!"), None);
    }

    #[test]
    fn test_no_match_leaves_cursor() {
        let mut scanner = Scanner::new("(");
        assert!(scanner.scan_operator().is_none());
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_no_compound_assignment() {
        assert_eq!(scan_op("+=").as_deref(), Some("+"));
        assert_eq!(scan_op("--").as_deref(), Some("-"));
    }
}
