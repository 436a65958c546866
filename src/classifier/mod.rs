use crate::lexer::{Token, TokenKind};
use std::fmt::Display;

/// Parser-facing category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Identifier,
    StringLiteral,
    Keyword,
    Symbol,
    Eof,
}

impl From<TokenKind> for Category {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Ident => Category::Identifier,
            TokenKind::StringLiteral => Category::StringLiteral,
            TokenKind::Keyword(_) => Category::Keyword,
            TokenKind::Symbol(_) => Category::Symbol,
            TokenKind::Eof => Category::Eof,
            // Stray characters take identifier slots in the grammar.
            TokenKind::Unrecognized => Category::Identifier,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Identifier => write!(f, "identifier"),
            Category::StringLiteral => write!(f, "string"),
            Category::Keyword => write!(f, "keyword"),
            Category::Symbol => write!(f, "symbol"),
            Category::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedToken {
    pub category: Category,
    pub token: Token,
}

impl From<Token> for ClassifiedToken {
    fn from(token: Token) -> Self {
        Self {
            category: token.kind.into(),
            token,
        }
    }
}

/// Classifies tokens one to one, stopping right after the first `Eof`.
pub fn classify<I>(tokens: I) -> Vec<ClassifiedToken>
where
    I: IntoIterator<Item = Token>,
{
    let mut classified = Vec::new();
    for token in tokens {
        let is_eof = matches!(token.kind, TokenKind::Eof);
        classified.push(ClassifiedToken::from(token));
        if is_eof {
            break;
        }
    }
    classified
}
