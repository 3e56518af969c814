//! Edge case and property tests for clex-lex

use proptest::prelude::*;

use crate::{tokenize_c, LanguageTables, Token, TokenCategory};

fn scan(source: &str) -> Vec<(TokenCategory, String)> {
    tokenize_c(source)
        .into_iter()
        .map(|t| (t.category(), t.lexeme().to_string()))
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_delimiter() {
    assert_eq!(scan(";"), vec![(TokenCategory::Delimiter, ";".into())]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = tokenize_c(&format!("int {name};"));
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].lexeme(), name);
}

#[test]
fn test_edge_digits_glued_to_letters() {
    assert_eq!(scan("9lives"), vec![(TokenCategory::Miscellaneous, "9lives".into())]);
}

#[test]
fn test_edge_trailing_dot_real_needs_no_delimiter() {
    // The dot is a delimiter, so "42." never reaches the classifier whole.
    assert_eq!(
        scan("42."),
        vec![
            (TokenCategory::Integer, "42".into()),
            (TokenCategory::Delimiter, ".".into()),
        ]
    );
}

#[test]
fn test_edge_unknown_characters() {
    assert_eq!(
        scan("@ $ ?"),
        vec![
            (TokenCategory::Miscellaneous, "@".into()),
            (TokenCategory::Miscellaneous, "$".into()),
            (TokenCategory::Miscellaneous, "?".into()),
        ]
    );
}

#[test]
fn test_edge_non_ascii_identifier() {
    assert_eq!(scan("naïve"), vec![(TokenCategory::Identifier, "naïve".into())]);
    assert_eq!(scan("π"), vec![(TokenCategory::Miscellaneous, "π".into())]);
}

#[test]
fn test_edge_lone_quote_at_end() {
    assert_eq!(
        scan("x '"),
        vec![
            (TokenCategory::Identifier, "x".into()),
            (TokenCategory::Miscellaneous, "'".into()),
        ]
    );
}

#[test]
fn test_edge_crlf_line_endings() {
    assert_eq!(
        scan("a // c\r\nb\r\n"),
        vec![
            (TokenCategory::Identifier, "a".into()),
            (TokenCategory::Identifier, "b".into()),
        ]
    );
}

#[test]
fn test_edge_slash_at_end() {
    assert_eq!(scan("/"), vec![(TokenCategory::Arithmetic, "/".into())]);
}

#[test]
fn test_edge_all_operators() {
    let tables = LanguageTables::shared();
    let source = "+ - * / = && || ! & | ^ ~ << >> += -= *= /= %= &= |= ^= <<= >>= ++ -- % < > <= >= == !=";
    let tokens = tokenize_c(source);
    assert_eq!(tokens.len(), source.split(' ').count());
    for token in &tokens {
        assert!(tables.is_operator(token.lexeme()), "{}", token.lexeme());
        let expected = if tables.is_arithmetic(token.lexeme()) {
            TokenCategory::Arithmetic
        } else {
            TokenCategory::Comparator
        };
        assert_eq!(token.category(), expected);
    }
}

// ==================== PROPERTIES ====================

/// Mostly C-looking text with quotes, comment markers and odd bytes mixed in.
fn source_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::sample::select(vec!["int", "/*", "*/", "//", "\n", "\"", "'", "\\", "<<="])
                .prop_map(String::from),
            "[a-z_][a-z0-9_]{0,6}",
            "[0-9]{1,4}(\\.[0-9]{1,3})?",
            "[ \t;(){},.:#+\\-*/%=<>!&|^~]",
            any::<char>().prop_map(|c| c.to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_indices_are_contiguous(source in source_strategy()) {
        let tokens = tokenize_c(&source);
        for (expected, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.index(), expected);
        }
    }

    #[test]
    fn prop_lexemes_are_non_empty(source in source_strategy()) {
        for token in tokenize_c(&source) {
            prop_assert!(!token.lexeme().is_empty());
            prop_assert_ne!(token.category(), TokenCategory::Unknown);
        }
    }

    #[test]
    fn prop_delimiters_are_single_chars(source in source_strategy()) {
        let tables = LanguageTables::shared();
        for token in tokenize_c(&source) {
            if token.category() == TokenCategory::Delimiter {
                let mut chars = token.lexeme().chars();
                let c = chars.next().unwrap();
                prop_assert!(chars.next().is_none());
                prop_assert!(tables.is_delimiter(c));
            }
        }
    }

    #[test]
    fn prop_rescan_is_identical(source in source_strategy()) {
        prop_assert_eq!(tokenize_c(&source), tokenize_c(&source));
    }

    #[test]
    fn prop_whitespace_only_is_empty(source in "[ \t\r\n]{0,64}") {
        prop_assert!(tokenize_c(&source).is_empty());
    }

    #[test]
    fn prop_digit_runs_are_integers(digits in "[0-9]{1,30}") {
        let tokens: Vec<Token> = tokenize_c(&digits);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category(), TokenCategory::Integer);
    }

    #[test]
    fn prop_plain_strings_are_one_token(body in "[^\"\\\\]{0,40}") {
        let source = format!("\"{body}\"");
        let tokens = tokenize_c(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category(), TokenCategory::StringLiteral);
        prop_assert_eq!(tokens[0].lexeme(), source.as_str());
    }

    #[test]
    fn prop_comment_text_never_appears(body in "[a-z ;]{0,20}") {
        let source = format!("/*{body}*/ x // {body}\n");
        let tokens = tokenize_c(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].lexeme(), "x");
    }
}
