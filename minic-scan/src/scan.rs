//! The scan command: read a source file, tokenize it, print the tokens.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use minic_lex::{Category, Token};
use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::render::{self, OutputFormat, TableOptions};

/// Arguments for the scan command, after merging flags and config.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Source file to scan.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Print `line:column` for every token.
    pub show_spans: bool,
    /// Width of the category column in table output.
    pub type_width: usize,
}

/// Scans `args.input` and writes the rendered tokens to `out`.
pub fn run_scan<W: Write>(args: &ScanArgs, out: &mut W) -> Result<()> {
    let start_time = Instant::now();
    let source = read_source(&args.input)?;
    debug!(path = %args.input.display(), bytes = source.len(), "loaded source");

    let tokens = minic_lex::scan(&source);

    match args.format {
        OutputFormat::Table => {
            let options = TableOptions {
                type_width: args.type_width,
                show_spans: args.show_spans,
            };
            render::write_table(out, &tokens, options)?;
        },
        OutputFormat::Json => render::write_json(out, &tokens)?,
    }
    out.flush()?;

    info!(
        path = %args.input.display(),
        tokens = tokens.len(),
        counts = %category_summary(&tokens),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "scanned"
    );
    Ok(())
}

/// Reads the whole source file.
fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ScanError::FileOperation(format!("cannot open '{}': {}", path.display(), e))
    })
}

/// Formats the number of tokens per category, skipping empty categories.
fn category_summary(tokens: &[Token]) -> String {
    Category::ALL
        .into_iter()
        .filter_map(|kind| {
            let count = tokens.iter().filter(|t| t.kind() == kind).count();
            (count > 0).then(|| format!("{}={}", kind, count))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
