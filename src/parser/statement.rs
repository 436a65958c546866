use super::expression::Expression;
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDecl(VariableDecl),
    FunctionDecl(FunctionDecl),
    Call(CallStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: CompactString,
    pub initial: Option<Expression>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: CompactString,
    pub parameters: Vec<CompactString>,
    /// Only variable declarations and calls do anything when the function runs.
    pub body: Vec<Statement>,
    pub line: u32,
}

/// A call in statement position. The root of `expr` is always a call node.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStatement {
    pub expr: Expression,
}
