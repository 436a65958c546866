use crate::classifier::Category;
use crate::lexer::{Keyword, Span};
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserErrorKind {
    #[error("Expected a statement but got {0}.")]
    InvalidStatement(Category),
    #[error("Expected a name after `{keyword}` but got {found}.")]
    ExpectedName { keyword: Keyword, found: Category },
    #[error("Expected `(` after `{0}`.")]
    BareIdentifier(CompactString),
}

/// Where parsing gave up. The rest of the enclosing block or program is ignored.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct ParserError {
    #[source]
    pub kind: ParserErrorKind,
    pub span: Span,
    pub line: u32,
}

impl ParserError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParserErrorKind::InvalidStatement(_) => "P001",
            ParserErrorKind::ExpectedName { .. } => "P002",
            ParserErrorKind::BareIdentifier(_) => "P003",
        }
    }
}
