use proptest::prelude::*;

use jail::classifier::{classify, Category};
use jail::lexer::{scan, Span, Token, TokenKind};

fn categories(source: &str) -> Vec<Category> {
    classify(scan(source))
        .into_iter()
        .map(|classified| classified.category)
        .collect()
}

#[test]
fn test_categories() {
    assert_eq!(
        categories(r#"var x = "s""#),
        vec![
            Category::Keyword,
            Category::Identifier,
            Category::Symbol,
            Category::StringLiteral,
            Category::Eof,
        ]
    );
}

#[test]
fn test_unrecognized_becomes_identifier() {
    let classified = classify(scan("#"));
    assert_eq!(classified[0].category, Category::Identifier);
    assert_eq!(classified[0].token.kind, TokenKind::Unrecognized);
    assert_eq!(classified[0].token.lexeme(), "#");
}

#[test]
fn test_stops_after_eof() {
    let ident = |text: &str| Token {
        kind: TokenKind::Ident,
        text: Some(text.into()),
        span: Span::default(),
        line: 1,
    };
    let eof = Token {
        kind: TokenKind::Eof,
        text: None,
        span: Span::default(),
        line: 1,
    };

    let classified = classify(vec![ident("a"), eof.clone(), ident("b"), eof]);
    assert_eq!(classified.len(), 2);
    assert_eq!(classified[1].category, Category::Eof);
}

#[test]
fn test_empty_input() {
    assert!(classify(Vec::new()).is_empty());
}

proptest! {
    #[test]
    fn classify_preserves_length(source in "\\PC*") {
        let tokens = scan(&source);
        let classified = classify(tokens.clone());
        prop_assert_eq!(classified.len(), tokens.len());
        for (classified, token) in classified.iter().zip(tokens.iter()) {
            prop_assert_eq!(&classified.token, token);
        }
    }
}
