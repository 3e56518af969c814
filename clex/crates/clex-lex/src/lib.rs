//! clex-lex - Lexical scanner for C-family source text
//!
//! This crate turns raw C/C++ source text into an ordered sequence of
//! classified tokens. It is a teaching and inspection tool: there is no
//! parser behind it, and tokens carry no line or column information.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{tokenize_c, TokenCategory};
//!
//! let tokens = tokenize_c("int x = 5;");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].category(), TokenCategory::Keyword);
//! assert_eq!(tokens[4].descriptor(), "<DELIM, 4>");
//! ```
//!
//! # Module Structure
//!
//! - [`tables`] - Reserved words, operators and delimiters
//! - [`token`] - Token and category definitions
//! - [`classify`] - Category assignment for completed lexemes
//! - [`cursor`] - Character cursor for source traversal
//! - [`scanner`] - The single-pass scanning state machine
//!
//! # Token Categories
//!
//! | Category        | Label   | Example          |
//! |-----------------|---------|------------------|
//! | Keyword         | `KW`    | `while`          |
//! | Identifier      | `ID`    | `count_2`        |
//! | Integer         | `INT`   | `42`             |
//! | Real            | `REAL`  | `1e5`            |
//! | Arithmetic      | `ARITH` | `+=`, `<<=`      |
//! | Delimiter       | `DELIM` | `;`              |
//! | Comparator      | `COMP`  | `!=`             |
//! | StringLiteral   | `STR`   | `"text"`         |
//! | CharLiteral     | `CHAR`  | `'c'`            |
//! | Miscellaneous   | `MISC`  | `3.14.5`, `@`    |
//! | Unknown         | `UNK`   | (empty lexeme)   |
//!
//! `.` is a delimiter, so `3.14` in source scans as `3`, `.`, `14`. The
//! classifier on its own still recognizes `3.14` as a real literal.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::{is_real_literal, Classifier};
pub use cursor::Cursor;
pub use scanner::{tokenize, tokenize_c, ScanMode, Scanner};
pub use tables::LanguageTables;
pub use token::{Token, TokenCategory, DISPLAY_LEXEME_MAX};
