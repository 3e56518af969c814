//! Lexeme classification.
//!
//! The scanner hands every buffered lexeme to a [`Classifier`], which picks
//! a category by trying a fixed list of predicates in order. The first
//! predicate that holds wins.

use crate::tables::LanguageTables;
use crate::token::TokenCategory;

/// Assigns categories to completed lexemes.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    tables: &'t LanguageTables,
}

impl<'t> Classifier<'t> {
    /// Creates a classifier over the given tables.
    pub fn new(tables: &'t LanguageTables) -> Self {
        Self { tables }
    }

    /// Returns the category of `lexeme`.
    ///
    /// Predicates, first match wins: reserved word, all digits, real
    /// literal, arithmetic operator, comparison operator, identifier start,
    /// double-quoted, single-quoted. Everything else is miscellaneous.
    ///
    /// ```
    /// use clex_lex::{Classifier, LanguageTables, TokenCategory};
    ///
    /// let classifier = Classifier::new(LanguageTables::shared());
    /// assert_eq!(classifier.classify("while"), TokenCategory::Keyword);
    /// assert_eq!(classifier.classify("42."), TokenCategory::Real);
    /// assert_eq!(classifier.classify("3.14.5"), TokenCategory::Miscellaneous);
    /// ```
    pub fn classify(&self, lexeme: &str) -> TokenCategory {
        let Some(first) = lexeme.chars().next() else {
            return TokenCategory::Unknown;
        };

        if self.tables.is_reserved(lexeme) {
            TokenCategory::Keyword
        } else if lexeme.bytes().all(|b| b.is_ascii_digit()) {
            TokenCategory::Integer
        } else if is_real_literal(lexeme) {
            TokenCategory::Real
        } else if self.tables.is_arithmetic(lexeme) {
            TokenCategory::Arithmetic
        } else if self.tables.is_comparison(lexeme) {
            TokenCategory::Comparator
        } else if first.is_ascii_alphabetic() || first == '_' {
            TokenCategory::Identifier
        } else if is_quoted(lexeme, '"') {
            TokenCategory::StringLiteral
        } else if is_quoted(lexeme, '\'') {
            TokenCategory::CharLiteral
        } else {
            TokenCategory::Miscellaneous
        }
    }
}

fn is_quoted(lexeme: &str, quote: char) -> bool {
    lexeme.len() >= 2 && lexeme.starts_with(quote) && lexeme.ends_with(quote)
}

/// Returns true if `text` is a real-number literal.
///
/// Accepted shape: optional sign, then either `digits* . digits+`,
/// `digits+ .` or plain `digits+`, then an optional exponent
/// `e|E [sign] digits+`. A bare digit run also matches, but the classifier
/// checks for integers first.
///
/// ```
/// use clex_lex::is_real_literal;
///
/// assert!(is_real_literal("3.14e-2"));
/// assert!(is_real_literal(".5"));
/// assert!(is_real_literal("42."));
/// assert!(!is_real_literal("1e"));
/// assert!(!is_real_literal("."));
/// ```
pub fn is_real_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = digit_run(&bytes[pos..]);
    pos += int_digits;

    let mantissa_ok = if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let frac_digits = digit_run(&bytes[pos..]);
        pos += frac_digits;
        int_digits > 0 || frac_digits > 0
    } else {
        int_digits > 0
    };
    if !mantissa_ok {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = digit_run(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
