//! Token model.
//!
//! A [`Token`] is a classified lexeme tagged with its position in the
//! emitted sequence. Tokens are immutable once the scanner builds them.

use std::fmt;

use serde::Serialize;

/// Lexemes longer than this are shortened for display.
pub const DISPLAY_LEXEME_MAX: usize = 24;

/// Marker appended to a shortened lexeme.
const ELLIPSIS: &str = "...";

/// Lexical category assigned to every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Reserved word.
    Keyword,
    /// User-defined name.
    Identifier,
    /// Run of decimal digits.
    Integer,
    /// Floating point literal.
    Real,
    /// Arithmetic, logical, bitwise or assignment operator.
    Arithmetic,
    /// Structural punctuation character.
    Delimiter,
    /// Relational or equality operator.
    Comparator,
    /// Double-quoted literal, quotes included.
    StringLiteral,
    /// Single-quoted literal, quotes included.
    CharLiteral,
    /// Anything that fits no other category.
    Miscellaneous,
    /// Empty lexeme; never produced by the scanner.
    Unknown,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 11] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::Integer,
        TokenCategory::Real,
        TokenCategory::Arithmetic,
        TokenCategory::Delimiter,
        TokenCategory::Comparator,
        TokenCategory::StringLiteral,
        TokenCategory::CharLiteral,
        TokenCategory::Miscellaneous,
        TokenCategory::Unknown,
    ];

    /// Short label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KW",
            TokenCategory::Identifier => "ID",
            TokenCategory::Integer => "INT",
            TokenCategory::Real => "REAL",
            TokenCategory::Arithmetic => "ARITH",
            TokenCategory::Delimiter => "DELIM",
            TokenCategory::Comparator => "COMP",
            TokenCategory::StringLiteral => "STR",
            TokenCategory::CharLiteral => "CHAR",
            TokenCategory::Miscellaneous => "MISC",
            TokenCategory::Unknown => "UNK",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexeme and its emission index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    category: TokenCategory,
    lexeme: String,
    index: usize,
}

impl Token {
    /// Creates a token.
    ///
    /// Only the scanner assigns indices; this is public so that callers can
    /// build expected sequences in tests.
    pub fn new(category: TokenCategory, lexeme: impl Into<String>, index: usize) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            index,
        }
    }

    /// The token's category.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// The source text of the token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Zero-based position in the token sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Short category label, e.g. `KW`.
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Pairs the label with the index, e.g. `<KW, 0>`.
    pub fn descriptor(&self) -> String {
        format!("<{}, {}>", self.label(), self.index)
    }

    /// Returns the lexeme shortened for display.
    ///
    /// Lexemes of more than `max_len` characters keep their first
    /// `max_len - 3` characters followed by `...`.
    ///
    /// ```
    /// use clex_lex::{Token, TokenCategory};
    ///
    /// let token = Token::new(TokenCategory::Identifier, "a".repeat(30), 0);
    /// assert_eq!(token.display_lexeme(24), format!("{}...", "a".repeat(21)));
    /// ```
    pub fn display_lexeme(&self, max_len: usize) -> String {
        if self.lexeme.chars().count() <= max_len {
            return self.lexeme.clone();
        }
        let keep = max_len.saturating_sub(ELLIPSIS.len());
        let mut shortened: String = self.lexeme.chars().take(keep).collect();
        shortened.push_str(ELLIPSIS);
        shortened
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lexeme, self.descriptor())
    }
}
