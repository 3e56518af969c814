//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its mode machine and the
//! buffer discipline shared by the other scanner modules.

use std::collections::VecDeque;
use std::mem;

use tracing::{debug, trace};

use crate::classify::Classifier;
use crate::cursor::Cursor;
use crate::tables::LanguageTables;
use crate::token::{Token, TokenCategory};

/// Region of the source the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Ordinary code: lexemes are segmented and classified.
    #[default]
    Normal,
    /// After `//`, until the next newline.
    LineComment,
    /// After `/*`, until the next `*/`.
    BlockComment,
    /// Both comments are open: `*/` falls back to `LineComment` and
    /// newlines are ignored.
    BlockAndLineComment,
    /// After an opening `"`; characters are collected verbatim.
    StringLiteral,
    /// After an opening `'`; characters are collected verbatim.
    CharLiteral,
}

/// Single-pass scanner for C-family source text.
///
/// The scanner walks the source once, accumulating ordinary characters in
/// a buffer and flushing it whenever whitespace, a delimiter, an operator,
/// a comment or a literal ends the current lexeme. Tokens come out through
/// the [`Iterator`] implementation in emission order.
///
/// ```
/// use clex_lex::{LanguageTables, Scanner, TokenCategory};
///
/// let categories: Vec<_> = Scanner::new("int x = 5;", LanguageTables::shared())
///     .map(|token| token.category())
///     .collect();
/// assert_eq!(
///     categories,
///     [
///         TokenCategory::Keyword,
///         TokenCategory::Identifier,
///         TokenCategory::Arithmetic,
///         TokenCategory::Integer,
///         TokenCategory::Delimiter,
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Vocabulary used for delimiters and operators.
    pub(super) tables: &'a LanguageTables,

    classifier: Classifier<'a>,

    /// Current region.
    pub(super) mode: ScanMode,

    /// Characters of the lexeme being built.
    pub(super) buffer: String,

    /// Tokens emitted but not yet handed out by `next`.
    pending: VecDeque<Token>,

    /// Index given to the next emitted token.
    next_index: usize,

    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` using `tables`.
    pub fn new(source: &'a str, tables: &'a LanguageTables) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables,
            classifier: Classifier::new(tables),
            mode: ScanMode::Normal,
            buffer: String::new(),
            pending: VecDeque::new(),
            next_index: 0,
            finished: false,
        }
    }

    /// The region the scanner is currently inside.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Number of tokens emitted so far.
    pub fn emitted(&self) -> usize {
        self.next_index
    }

    /// Processes the character under the cursor.
    fn step(&mut self) {
        let c = self.cursor.current_char();
        match self.mode {
            ScanMode::LineComment | ScanMode::BlockComment | ScanMode::BlockAndLineComment => {
                self.scan_comment_char(c)
            }
            ScanMode::StringLiteral | ScanMode::CharLiteral => self.scan_literal_char(c),
            ScanMode::Normal => self.scan_normal_char(c),
        }
    }

    fn scan_normal_char(&mut self, c: char) {
        if self.try_open_comment() || self.try_open_literal(c) {
            return;
        }

        if is_space(c) {
            self.flush();
            self.cursor.advance();
        } else if self.tables.is_delimiter(c) {
            self.flush();
            self.emit(TokenCategory::Delimiter, c.to_string());
            self.cursor.advance();
        } else if !self.try_scan_operator(c) {
            self.buffer.push(c);
            self.cursor.advance();
        }
    }

    /// Switches to `mode`.
    pub(super) fn enter(&mut self, mode: ScanMode) {
        trace!(from = ?self.mode, to = ?mode, position = self.cursor.position(), "scan mode");
        self.mode = mode;
    }

    /// Classifies and emits the buffer, if it holds anything.
    pub(super) fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let lexeme = mem::take(&mut self.buffer);
        let category = self.classifier.classify(&lexeme);
        self.emit(category, lexeme);
    }

    /// Appends a token with the next sequence index.
    pub(super) fn emit(&mut self, category: TokenCategory, lexeme: String) {
        debug_assert!(!lexeme.is_empty());
        self.pending
            .push_back(Token::new(category, lexeme, self.next_index));
        self.next_index += 1;
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            if self.cursor.is_at_end() {
                // Unterminated literals fall back to ordinary classification.
                self.flush();
                self.finished = true;
            } else {
                self.step();
            }
        }
    }
}

/// Whitespace as the C locale defines it.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Scans `source` to completion.
pub fn tokenize(source: &str, tables: &LanguageTables) -> Vec<Token> {
    let tokens: Vec<Token> = Scanner::new(source, tables).collect();
    debug!(bytes = source.len(), tokens = tokens.len(), "scan complete");
    tokens
}

/// Scans `source` with the shared C-family tables.
///
/// ```
/// let tokens = clex_lex::tokenize_c("a<<=b");
/// assert_eq!(tokens[1].lexeme(), "<<=");
/// ```
pub fn tokenize_c(source: &str) -> Vec<Token> {
    tokenize(source, LanguageTables::shared())
}
