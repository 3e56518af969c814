//! Language definition tables.
//!
//! The scanner and classifier never hard-code vocabulary; every decision
//! about reserved words, operators and delimiters goes through a
//! [`LanguageTables`] value. The C-family tables are built once per process
//! and shared by reference afterwards.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Reserved words of the C/C++ family recognized as keywords.
pub const RESERVED_WORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while", "namespace", "class", "template", "public",
    "private", "protected", "virtual", "friend", "new", "delete", "this", "using", "try",
    "catch", "throw", "operator", "explicit", "true", "false", "constexpr", "alignas",
    "alignof", "nullptr", "decltype", "noexcept", "static_assert", "thread_local", "is",
];

/// Arithmetic, logical, bitwise and assignment operators.
pub const ARITHMETIC_OPS: &[&str] = &[
    "+", "-", "*", "/", "=", "&&", "||", "!", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=",
    "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", "++", "--", "%",
];

/// Relational and equality operators.
pub const COMPARISON_OPS: &[&str] = &["<", ">", "<=", ">=", "==", "!="];

/// Single-character structural punctuation.
pub const DELIMITERS: &[char] = &[';', '(', ')', '{', '}', ',', '.', '[', ']', ':', '#'];

/// Immutable lookup tables describing one language's lexical vocabulary.
#[derive(Debug, Clone)]
pub struct LanguageTables {
    reserved_words: FxHashSet<&'static str>,
    arithmetic_ops: FxHashSet<&'static str>,
    comparison_ops: FxHashSet<&'static str>,
    delimiters: FxHashSet<char>,
    max_operator_len: usize,
}

impl LanguageTables {
    /// Builds tables from explicit word, operator and delimiter lists.
    pub fn new(
        reserved_words: &[&'static str],
        arithmetic_ops: &[&'static str],
        comparison_ops: &[&'static str],
        delimiters: &[char],
    ) -> Self {
        let max_operator_len = arithmetic_ops
            .iter()
            .chain(comparison_ops)
            .map(|op| op.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            reserved_words: reserved_words.iter().copied().collect(),
            arithmetic_ops: arithmetic_ops.iter().copied().collect(),
            comparison_ops: comparison_ops.iter().copied().collect(),
            delimiters: delimiters.iter().copied().collect(),
            max_operator_len,
        }
    }

    /// Builds the C/C++ tables.
    pub fn c_family() -> Self {
        Self::new(RESERVED_WORDS, ARITHMETIC_OPS, COMPARISON_OPS, DELIMITERS)
    }

    /// Returns the process-wide C/C++ tables, building them on first use.
    pub fn shared() -> &'static LanguageTables {
        static TABLES: OnceLock<LanguageTables> = OnceLock::new();
        TABLES.get_or_init(Self::c_family)
    }

    /// Returns true if `word` is a reserved word.
    #[inline]
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.contains(word)
    }

    /// Returns true if `op` is an arithmetic operator.
    #[inline]
    pub fn is_arithmetic(&self, op: &str) -> bool {
        self.arithmetic_ops.contains(op)
    }

    /// Returns true if `op` is a comparison operator.
    #[inline]
    pub fn is_comparison(&self, op: &str) -> bool {
        self.comparison_ops.contains(op)
    }

    /// Returns true if `op` is in either operator set.
    #[inline]
    pub fn is_operator(&self, op: &str) -> bool {
        self.is_arithmetic(op) || self.is_comparison(op)
    }

    /// Returns true if `c` is a delimiter.
    #[inline]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Length in characters of the longest operator in either set.
    pub fn max_operator_len(&self) -> usize {
        self.max_operator_len
    }
}

impl Default for LanguageTables {
    fn default() -> Self {
        Self::c_family()
    }
}
