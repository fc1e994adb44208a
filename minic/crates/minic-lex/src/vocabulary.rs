//! The fixed word and symbol sets the scanner classifies against.

use rustc_hash::FxHashSet;

/// Reserved words of MiniC.
///
/// `main` is reserved: it always scans as a keyword.
pub const KEYWORDS: [&str; 12] = [
    "int", "float", "char", "if", "else", "for", "while", "return", "break", "continue", "void",
    "main",
];

/// Operators of MiniC.
pub const OPERATORS: [&str; 11] = ["+", "-", "*", "/", "=", "==", "<", ">", "<=", ">=", "!="];

/// Single-character punctuation of MiniC.
pub const SPECIAL_CHARACTERS: [char; 8] = ['(', ')', '{', '}', '[', ']', ',', ';'];

/// Keyword, operator and special-character sets.
///
/// Built once and handed to a [`Scanner`](crate::Scanner) by value. The
/// operator list is kept sorted by descending length so that a linear
/// scan yields the longest match first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: FxHashSet<String>,
    operators: Vec<String>,
    special_characters: FxHashSet<char>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary sets.
    ///
    /// Empty operator strings are discarded and duplicates collapse.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["let"], ["=", "=>"], [';']);
    /// assert!(vocab.is_keyword("let"));
    /// assert_eq!(vocab.match_operator("=> x"), Some("=>"));
    /// ```
    pub fn new<K, O, S>(keywords: K, operators: O, special_characters: S) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        S: IntoIterator<Item = char>,
    {
        let mut operators: Vec<String> = operators
            .into_iter()
            .map(Into::into)
            .filter(|op: &String| !op.is_empty())
            .collect();
        operators.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        operators.dedup();

        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            operators,
            special_characters: special_characters.into_iter().collect(),
        }
    }

    /// Returns true if `word` is a reserved word.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `c` is a single-character punctuation token.
    pub fn is_special_character(&self, c: char) -> bool {
        self.special_characters.contains(&c)
    }

    /// Operators, longest first.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Returns the longest operator that `text` starts with.
    pub fn match_operator(&self, text: &str) -> Option<&str> {
        self.operators
            .iter()
            .find(|op| text.starts_with(op.as_str()))
            .map(String::as_str)
    }
}

impl Default for Vocabulary {
    /// The MiniC vocabulary.
    fn default() -> Self {
        Self::new(KEYWORDS, OPERATORS, SPECIAL_CHARACTERS)
    }
}
