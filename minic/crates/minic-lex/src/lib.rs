//! minic-lex - Lexical Scanner for the MiniC Language
//!
//! This crate turns MiniC source text into a flat, ordered list of
//! classified lexemes. Whitespace is discarded; comments are kept.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::{Category, Scanner};
//!
//! let mut scanner = Scanner::new("int main() { return 1; }");
//! let tokens = scanner.tokenize();
//!
//! assert_eq!(tokens[0].kind(), Category::Keyword);
//! assert_eq!(tokens[0].lexeme(), "int");
//! assert_eq!(tokens.len(), 9);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, category and span definitions
//! - [`scanner`] - Scanner and its sub-scanners
//! - [`cursor`] - Forward-only cursor over the source
//! - [`chars`] - Character classes used for dispatch
//! - [`vocabulary`] - Keyword, operator and special-character sets
//!
//! # Token Categories
//!
//! - **Keywords**: `int`, `float`, `char`, `if`, `else`, `for`, `while`,
//!   `return`, `break`, `continue`, `void`, `main`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*` that are not keywords
//! - **Numeric constants**: digits with at most one `.`, e.g. `42`, `3.14`
//! - **Character constants**: `'a'`, `'\n'`
//! - **Operators**: `+ - * / = == < > <= >= !=`
//! - **Special characters**: `( ) { } [ ] , ;`
//! - **Comments**: `// ...` and `/* ... */`
//!
//! Scanning never fails. Characters that fit no category are skipped, and
//! truncated character constants or block comments become best-effort
//! tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod scanner;
pub mod token;
pub mod vocabulary;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{Category, Span, Token};
pub use vocabulary::Vocabulary;

/// Scans `source` with the MiniC vocabulary.
///
/// # Example
///
/// ```
/// let tokens = minic_lex::scan("x = 'a';");
/// let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme()).collect();
/// assert_eq!(lexemes, ["x", "=", "'a'", ";"]);
/// ```
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(source: &str) -> Vec<(Category, &str)> {
        // Lexemes borrowed from the source via spans.
        scan(source)
            .iter()
            .map(|t| (t.kind(), &source[t.span().start..t.span().end]))
            .collect()
    }

    #[test]
    fn test_main_program() {
        use Category::*;
        assert_eq!(
            pairs("int main() { return 1; }"),
            vec![
                (Keyword, "int"),
                (Keyword, "main"),
                (SpecialCharacter, "("),
                (SpecialCharacter, ")"),
                (SpecialCharacter, "{"),
                (Keyword, "return"),
                (NumericConstant, "1"),
                (SpecialCharacter, ";"),
                (SpecialCharacter, "}"),
            ]
        );
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(pairs("=="), vec![(Category::Operator, "==")]);
        assert_eq!(
            pairs("a<=b"),
            vec![
                (Category::Identifier, "a"),
                (Category::Operator, "<="),
                (Category::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_keyword_boundary() {
        assert_eq!(pairs("intx"), vec![(Category::Identifier, "intx")]);
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(pairs("3.14"), vec![(Category::NumericConstant, "3.14")]);
        assert_eq!(
            pairs("3.14.5"),
            vec![
                (Category::NumericConstant, "3.14"),
                (Category::NumericConstant, "5"),
            ]
        );
    }

    #[test]
    fn test_char_constants() {
        let escaped = pairs("'\\n'");
        assert_eq!(escaped, vec![(Category::CharacterConstant, "'\\n'")]);
        assert_eq!(escaped[0].1.len(), 4);
        assert_eq!(pairs("'a'"), vec![(Category::CharacterConstant, "'a'")]);
    }

    #[test]
    fn test_comments_are_tokens() {
        assert_eq!(
            pairs("// hi\nx"),
            vec![(Category::Comment, "// hi"), (Category::Identifier, "x")]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(pairs("/* abc"), vec![(Category::Comment, "/* abc")]);
    }

    #[test]
    fn test_negative_number_is_operator_then_constant() {
        assert_eq!(
            pairs("-5"),
            vec![(Category::Operator, "-"), (Category::NumericConstant, "5")]
        );
    }

    #[test]
    fn test_factorial_program() {
        let source = r#"
            /* factorial */
            int fact(int n) {
                if (n <= 1) return 1; // base case
                return n * fact(n - 1);
            }
        "#;
        let tokens = scan(source);

        assert_eq!(tokens[0].kind(), Category::Comment);
        assert_eq!(tokens[0].lexeme(), "/* factorial */");
        assert!(tokens
            .iter()
            .any(|t| t.kind() == Category::Comment && t.lexeme() == "// base case"));
        assert_eq!(
            tokens
                .iter()
                .filter(|t| t.kind() == Category::Keyword && t.lexeme() == "return")
                .count(),
            2
        );
        assert!(tokens
            .iter()
            .any(|t| t.kind() == Category::Operator && t.lexeme() == "<="));
        assert_eq!(tokens.last().map(Token::lexeme), Some("}"));
    }

    #[test]
    fn test_empty_source() {
        assert!(scan("").is_empty());
    }
}
