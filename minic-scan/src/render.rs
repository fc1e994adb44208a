//! Token output rendering.
//!
//! Two formats are supported: a fixed-width text table (the default) and a
//! JSON array for tooling.

use std::io::Write;

use clap::ValueEnum;
use minic_lex::{Category, Token};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Width of the rule printed under the table header.
const RULE_WIDTH: usize = 40;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width token table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Options for table rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Width of the category column.
    pub type_width: usize,
    /// Prefix each row with `line:column`.
    pub show_spans: bool,
}

/// One token as written to JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: kind_tag(token.kind()),
            lexeme: token.lexeme(),
            line: span.line,
            column: span.column,
        }
    }
}

/// Machine-friendly name of a category.
fn kind_tag(kind: Category) -> &'static str {
    match kind {
        Category::Keyword => "keyword",
        Category::Identifier => "identifier",
        Category::NumericConstant => "numeric_constant",
        Category::CharacterConstant => "character_constant",
        Category::Operator => "operator",
        Category::SpecialCharacter => "special_character",
        Category::Comment => "comment",
    }
}

/// Writes the token table: header, rule, then one row per token.
pub fn write_table<W: Write>(out: &mut W, tokens: &[Token], options: TableOptions) -> Result<()> {
    let width = options.type_width;

    if options.show_spans {
        write!(out, "{:<10} ", "Location")?;
    }
    writeln!(out, "{:<width$} {}", "Token Type", "Lexeme")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for token in tokens {
        if options.show_spans {
            let span = token.span();
            write!(out, "{:<10} ", format!("{}:{}", span.line, span.column))?;
        }
        writeln!(out, "{:<width$} {}", token.kind(), token.lexeme())?;
    }

    Ok(())
}

/// Writes the tokens as a pretty JSON array.
pub fn write_json<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
