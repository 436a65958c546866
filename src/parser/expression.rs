use crate::lexer::Span;
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionAtomKind {
    Identifier(CompactString),
    StringLiteral(CompactString),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionAtom {
    pub kind: ExpressionAtomKind,
    pub span: Span,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionNodeRef(u32);

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Atom(ExpressionAtom),
    Concat {
        lhs: ExpressionNodeRef,
        rhs: ExpressionNodeRef,
    },
    Call {
        callee: CompactString,
        arguments: Vec<ExpressionNodeRef>,
        span: Span,
        line: u32,
    },
}

/// Expression nodes under construction. Children are always pushed before
/// their parents.
#[derive(Debug, Clone, Default)]
pub struct IncompleteExpression {
    nodes: Vec<ExpressionNode>,
}

impl IncompleteExpression {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: ExpressionNode) -> ExpressionNodeRef {
        self.nodes.push(node);
        ExpressionNodeRef(self.nodes.len() as u32 - 1)
    }

    pub fn finish(self, root: ExpressionNodeRef) -> Expression {
        Expression {
            nodes: self.nodes,
            root,
        }
    }
}

/// An expression tree stored as an arena of nodes with a root handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    nodes: Vec<ExpressionNode>,
    root: ExpressionNodeRef,
}

impl Expression {
    pub fn get_root_ref(&self) -> ExpressionNodeRef {
        self.root
    }

    pub fn get_node(&self, node: ExpressionNodeRef) -> Option<&ExpressionNode> {
        self.nodes.get(node.0 as usize)
    }
}
