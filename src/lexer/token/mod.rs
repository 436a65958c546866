mod span;

use compact_str::CompactString;
pub use span::Span;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

/// The hashmap for keywords
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("var", Keyword::Var);
    map.insert("func", Keyword::Func);
    map.insert("print", Keyword::Print);
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Var,
    Func,
    Print,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Func => "func",
            Keyword::Print => "print",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Equal,
    Plus,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Comma,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Symbol::Equal),
            '+' => Some(Symbol::Plus),
            '(' => Some(Symbol::LeftParenthesis),
            ')' => Some(Symbol::RightParenthesis),
            '{' => Some(Symbol::LeftBrace),
            '}' => Some(Symbol::RightBrace),
            ',' => Some(Symbol::Comma),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    StringLiteral,
    Keyword(Keyword),
    Symbol(Symbol),
    /// A single character that no other rule accepts.
    Unrecognized,
    // End of file.
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Ident => write!(f, "IDENTIFIER"),
            TokenKind::StringLiteral => write!(f, "STRING"),
            TokenKind::Keyword(Keyword::Var) => write!(f, "VAR"),
            TokenKind::Keyword(Keyword::Func) => write!(f, "FUNC"),
            TokenKind::Keyword(Keyword::Print) => write!(f, "PRINT"),
            TokenKind::Symbol(Symbol::Equal) => write!(f, "EQUAL"),
            TokenKind::Symbol(Symbol::Plus) => write!(f, "PLUS"),
            TokenKind::Symbol(Symbol::LeftParenthesis) => write!(f, "LEFT_PAREN"),
            TokenKind::Symbol(Symbol::RightParenthesis) => write!(f, "RIGHT_PAREN"),
            TokenKind::Symbol(Symbol::LeftBrace) => write!(f, "LEFT_BRACE"),
            TokenKind::Symbol(Symbol::RightBrace) => write!(f, "RIGHT_BRACE"),
            TokenKind::Symbol(Symbol::Comma) => write!(f, "COMMA"),
            TokenKind::Unrecognized => write!(f, "UNRECOGNIZED"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Owned lexeme. String literals hold their raw contents without quotes.
    /// Only `Eof` has no text.
    pub text: Option<CompactString>,
    pub span: Span,
    pub line: u32,
}

impl Token {
    pub fn lexeme(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }
}
