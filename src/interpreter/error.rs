use crate::lexer::Span;
use compact_str::CompactString;
use thiserror::Error;

/// Anomalies the interpreter silently recovers from. They never change the
/// program's output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeWarningKind {
    #[error("Call to undefined function `{0}` does nothing.")]
    UndefinedFunction(CompactString),
    #[error("`{name}` takes {expected} argument(s) but was given {actual}.")]
    ArgumentCount {
        name: CompactString,
        expected: usize,
        actual: usize,
    },
    #[error("`{0}` is unbound and reads as an empty string.")]
    UnboundVariable(CompactString),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct RuntimeWarning {
    #[source]
    pub kind: RuntimeWarningKind,
    pub span: Span,
    pub line: u32,
}

impl RuntimeWarning {
    pub fn code(&self) -> &'static str {
        match self.kind {
            RuntimeWarningKind::UndefinedFunction(_) => "R001",
            RuntimeWarningKind::ArgumentCount { .. } => "R002",
            RuntimeWarningKind::UnboundVariable(_) => "R003",
        }
    }
}
