mod error;
pub mod expression;
pub mod formatter;
pub mod statement;

use crate::classifier::{Category, ClassifiedToken};
use crate::lexer::{Keyword, Span, Symbol, Token, TokenKind};
use compact_str::CompactString;
pub use error::{ParserError, ParserErrorKind};
use expression::{
    Expression, ExpressionAtom, ExpressionAtomKind, ExpressionNode, ExpressionNodeRef,
    IncompleteExpression,
};
use statement::{CallStatement, FunctionDecl, Statement, VariableDecl};

/// Parses classified tokens into a program. Never fails: parsing stops at the
/// first statement that can't be recognised.
pub fn parse(tokens: Vec<ClassifiedToken>) -> Program {
    Parser::new(tokens).parse()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    statements: Vec<Statement>,
    diagnostics: Vec<ParserError>,
}

impl Program {
    pub fn get_statement(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Places where the parser gave up, in source order. The last one ends
    /// the program if parsing stopped early.
    pub fn diagnostics(&self) -> &[ParserError] {
        &self.diagnostics
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }
}

pub struct Parser {
    tokens: Vec<ClassifiedToken>,
    position: usize,
    diagnostics: Vec<ParserError>,
}

impl Parser {
    pub fn new(mut tokens: Vec<ClassifiedToken>) -> Self {
        // The cursor never moves past `Eof`, so make sure there is one.
        if !matches!(tokens.last(), Some(last) if last.category == Category::Eof) {
            let (span, line) = tokens
                .last()
                .map(|last| (Span::new(last.token.span.end(), 0), last.token.line))
                .unwrap_or((Span::default(), 1));
            tokens.push(ClassifiedToken::from(Token {
                kind: TokenKind::Eof,
                text: None,
                span,
                line,
            }));
        }
        Self {
            tokens,
            position: 0,
            diagnostics: Vec::new(),
        }
    }

    fn peek(&self) -> &ClassifiedToken {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &ClassifiedToken {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + n).min(last)]
    }

    fn next_token(&mut self) -> ClassifiedToken {
        let token = self.peek().clone();
        if token.category != Category::Eof {
            self.position += 1;
        }
        token
    }

    fn check_symbol(&self, symbol: Symbol) -> bool {
        let next = self.peek();
        next.category == Category::Symbol && next.token.is_symbol(symbol)
    }

    fn eat_if(&mut self, symbol: Symbol) -> bool {
        if self.check_symbol(symbol) {
            let _ = self.next_token();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().category == Category::Eof
    }
}

// Parse program/statements
impl Parser {
    pub fn parse(mut self) -> Program {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.diagnostics.push(error);
                    break;
                }
            }
        }

        Program {
            statements,
            diagnostics: self.diagnostics,
        }
    }

    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let first = self.peek().clone();
        let invalid = || ParserError {
            kind: ParserErrorKind::InvalidStatement(first.category),
            span: first.token.span,
            line: first.token.line,
        };

        match first.category {
            Category::Keyword => match first.token.kind {
                TokenKind::Keyword(Keyword::Var) => {
                    let _ = self.next_token();
                    self.parse_variable_declaration(&first)
                }
                TokenKind::Keyword(Keyword::Func) => {
                    let _ = self.next_token();
                    self.parse_function_declaration(&first)
                }
                TokenKind::Keyword(Keyword::Print) => {
                    let _ = self.next_token();
                    let mut tree = IncompleteExpression::new();
                    let root = self.parse_call(&mut tree, &first);
                    Ok(Statement::Call(CallStatement {
                        expr: tree.finish(root),
                    }))
                }
                _ => Err(invalid()),
            },
            Category::Identifier => {
                let _ = self.next_token();
                if !self.check_symbol(Symbol::LeftParenthesis) {
                    return Err(ParserError {
                        kind: ParserErrorKind::BareIdentifier(first.token.lexeme().into()),
                        span: first.token.span,
                        line: first.token.line,
                    });
                }
                let mut tree = IncompleteExpression::new();
                let root = self.parse_call(&mut tree, &first);
                Ok(Statement::Call(CallStatement {
                    expr: tree.finish(root),
                }))
            }
            _ => Err(invalid()),
        }
    }

    fn expect_name(&mut self, keyword: Keyword) -> Result<ClassifiedToken, ParserError> {
        let name = self.next_token();
        if name.category != Category::Identifier {
            return Err(ParserError {
                kind: ParserErrorKind::ExpectedName {
                    keyword,
                    found: name.category,
                },
                span: name.token.span,
                line: name.token.line,
            });
        }
        Ok(name)
    }

    fn parse_variable_declaration(
        &mut self,
        keyword: &ClassifiedToken,
    ) -> Result<Statement, ParserError> {
        let name = self.expect_name(Keyword::Var)?;

        let mut initial = None;
        // Assignment
        if self.eat_if(Symbol::Equal) {
            initial = self.parse_expression();
        }

        Ok(Statement::VariableDecl(VariableDecl {
            name: name.token.lexeme().into(),
            initial,
            line: keyword.token.line,
        }))
    }

    fn parse_function_declaration(
        &mut self,
        keyword: &ClassifiedToken,
    ) -> Result<Statement, ParserError> {
        let name = self.expect_name(Keyword::Func)?;
        let mut decl = FunctionDecl {
            name: name.token.lexeme().into(),
            parameters: Vec::new(),
            body: Vec::new(),
            line: keyword.token.line,
        };

        if !self.eat_if(Symbol::LeftParenthesis) {
            return Ok(Statement::FunctionDecl(decl));
        }

        while self.peek().category == Category::Identifier {
            let parameter = self.next_token();
            decl.parameters.push(parameter.token.lexeme().into());
            if !self.eat_if(Symbol::Comma) {
                break;
            }
        }

        // Missing delimiters are tolerated.
        let _ = self.eat_if(Symbol::RightParenthesis);
        let _ = self.eat_if(Symbol::LeftBrace);

        while !self.check_symbol(Symbol::RightBrace) {
            match self.parse_statement() {
                Ok(statement) => decl.body.push(statement),
                Err(error) => {
                    // Only the body ends here; the enclosing program carries on.
                    self.diagnostics.push(error);
                    break;
                }
            }
        }
        let _ = self.eat_if(Symbol::RightBrace);

        Ok(Statement::FunctionDecl(decl))
    }
}

// Recursive descent for expressions
impl Parser {
    pub fn parse_expression(&mut self) -> Option<Expression> {
        let mut tree = IncompleteExpression::new();
        let root = self.parse_expression_node(&mut tree)?;
        Some(tree.finish(root))
    }

    fn parse_expression_node(
        &mut self,
        tree: &mut IncompleteExpression,
    ) -> Option<ExpressionNodeRef> {
        let token = self.peek().clone();
        let atom = |kind: ExpressionAtomKind| {
            ExpressionNode::Atom(ExpressionAtom {
                kind,
                span: token.token.span,
                line: token.token.line,
            })
        };

        let mut lhs = match token.category {
            Category::StringLiteral => {
                let _ = self.next_token();
                tree.push(atom(ExpressionAtomKind::StringLiteral(
                    token.token.lexeme().into(),
                )))
            }
            Category::Identifier => {
                let _ = self.next_token();
                if self.check_symbol(Symbol::LeftParenthesis) {
                    self.parse_call(tree, &token)
                } else {
                    tree.push(atom(ExpressionAtomKind::Identifier(
                        token.token.lexeme().into(),
                    )))
                }
            }
            Category::Keyword
                if token.token.kind == TokenKind::Keyword(Keyword::Print)
                    && self.peek_nth(1).token.is_symbol(Symbol::LeftParenthesis) =>
            {
                let _ = self.next_token();
                self.parse_call(tree, &token)
            }
            _ => return None,
        };

        // Right recursive, so `a + b + c` groups as `a + (b + c)`.
        while self.eat_if(Symbol::Plus) {
            let rhs = match self.parse_expression_node(tree) {
                Some(rhs) => rhs,
                None => {
                    let next = self.peek();
                    let empty = ExpressionNode::Atom(ExpressionAtom {
                        kind: ExpressionAtomKind::StringLiteral(CompactString::default()),
                        span: Span::new(next.token.span.start, 0),
                        line: next.token.line,
                    });
                    tree.push(empty)
                }
            };
            lhs = tree.push(ExpressionNode::Concat { lhs, rhs });
        }

        Some(lhs)
    }

    /// Parses the argument list following an already consumed callee.
    fn parse_call(
        &mut self,
        tree: &mut IncompleteExpression,
        callee: &ClassifiedToken,
    ) -> ExpressionNodeRef {
        let _ = self.eat_if(Symbol::LeftParenthesis);

        let mut arguments = Vec::new();
        while !self.check_symbol(Symbol::RightParenthesis) {
            if let Some(argument) = self.parse_expression_node(tree) {
                arguments.push(argument);
            }
            if !self.eat_if(Symbol::Comma) {
                break;
            }
        }
        let _ = self.eat_if(Symbol::RightParenthesis);

        tree.push(ExpressionNode::Call {
            callee: callee.token.lexeme().into(),
            arguments,
            span: callee.token.span,
            line: callee.token.line,
        })
    }
}
