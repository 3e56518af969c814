//! Token report rendering.
//!
//! Reports are written to any `io::Write` so the same code serves stdout
//! and the tests.

use std::io::Write;

use clap::ValueEnum;
use clex_lex::{Token, TokenCategory};
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::Result;

/// Supported report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width table
    #[default]
    Table,
    /// JSON array of token records
    Json,
}

/// One row of the JSON report.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    index: usize,
    category: TokenCategory,
    label: &'static str,
    lexeme: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            index: token.index(),
            category: token.category(),
            label: token.label(),
            lexeme: token.lexeme(),
        }
    }
}

/// Writes the report in `format`.
pub fn write_report<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: ReportFormat,
    display: &DisplayConfig,
    summary: bool,
) -> Result<()> {
    match format {
        ReportFormat::Table => write_table(out, tokens, display, summary),
        ReportFormat::Json => write_json(out, tokens),
    }
}

/// Writes the fixed-width lexeme/category/descriptor table.
pub fn write_table<W: Write>(
    out: &mut W,
    tokens: &[Token],
    display: &DisplayConfig,
    summary: bool,
) -> Result<()> {
    let rule = "-".repeat(display.rule_width);
    let lexeme_width = display.max_lexeme_len + 1;
    let category_width = display.category_width;

    writeln!(out)?;
    writeln!(out, "LEXICAL ANALYSIS RESULTS")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<lexeme_width$}{:<category_width$}TOKEN",
        "LEXEME", "CATEGORY"
    )?;
    writeln!(out, "{rule}")?;

    for token in tokens {
        writeln!(
            out,
            "{:<lexeme_width$}{:<category_width$}{}",
            token.display_lexeme(display.max_lexeme_len),
            token.label(),
            token.descriptor()
        )?;
    }

    if summary {
        writeln!(out)?;
        writeln!(out, "Total tokens found: {}", tokens.len())?;
    }
    Ok(())
}

/// Writes the tokens as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clex_lex::tokenize_c;

    fn render_table(source: &str, summary: bool) -> String {
        let mut out = Vec::new();
        write_table(&mut out, &tokenize_c(source), &DisplayConfig::default(), summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let text = render_table("int x;", true);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "LEXICAL ANALYSIS RESULTS");
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(lines[3], format!("{:<25}{:<15}TOKEN", "LEXEME", "CATEGORY"));
        assert_eq!(lines[4], "-".repeat(60));
        assert_eq!(lines[5], format!("{:<25}{:<15}<KW, 0>", "int", "KW"));
        assert_eq!(lines[6], format!("{:<25}{:<15}<ID, 1>", "x", "ID"));
        assert_eq!(lines[7], format!("{:<25}{:<15}<DELIM, 2>", ";", "DELIM"));
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Total tokens found: 3");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_table_without_summary() {
        let text = render_table("a", false);
        assert!(!text.contains("Total tokens found"));
        assert!(text.trim_end().ends_with("<ID, 0>"));
    }

    #[test]
    fn test_table_truncates_long_lexemes() {
        let text = render_table("\"a string literal that is long\"", true);
        assert!(text.contains("\"a string literal tha..."));
        assert!(!text.contains("is long"));
    }

    #[test]
    fn test_empty_table() {
        let text = render_table("  \n ", true);
        assert!(text.ends_with("Total tokens found: 0\n"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(
            &mut out,
            &tokenize_c("x <= 1.5e3"),
            ReportFormat::Json,
            &DisplayConfig::default(),
            true,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1]["label"], "COMP");
        assert_eq!(rows[1]["lexeme"], "<=");
        assert_eq!(rows[1]["category"], "comparator");
        assert_eq!(rows[4]["index"], 4);
    }
}
