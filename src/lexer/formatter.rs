use super::token::{Token, TokenKind};

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
}

pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        let line = token.line;
        match token.kind {
            TokenKind::Eof => format!("{} {line}", token.kind),
            TokenKind::StringLiteral => {
                format!("{} \"{}\" {line}", token.kind, token.lexeme())
            }
            kind => format!("{kind} {} {line}", token.lexeme()),
        }
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }
}
