use super::{
    environment::{Environment, FunctionTable, SavedBinding},
    error::{RuntimeWarning, RuntimeWarningKind},
    SystemContext,
};
use crate::lexer::Span;
use crate::parser::{
    expression::{
        Expression, ExpressionAtom, ExpressionAtomKind, ExpressionNode, ExpressionNodeRef,
    },
    statement::{FunctionDecl, Statement, VariableDecl},
    Program,
};
use compact_str::CompactString;
use std::ops::{Deref, DerefMut};

const PRINT: &str = "print";

pub struct TreeWalkInterpreter<'prog, C: SystemContext> {
    environment: Environment,
    functions: FunctionTable<'prog>,
    context: C,
}

impl<'prog, C> TreeWalkInterpreter<'prog, C>
where
    C: SystemContext,
{
    pub fn new(context: C) -> Self {
        Self {
            environment: Environment::new(),
            functions: FunctionTable::new(),
            context,
        }
    }

    /// Registers every top level function, then runs the top level statements
    /// in order. Hands the context back once the program is done.
    pub fn run(mut self, program: &'prog Program) -> C {
        for statement in program.iter() {
            if let Statement::FunctionDecl(decl) = statement {
                self.functions.register(decl);
            }
        }

        for statement in program.iter() {
            self.interpret_statement(statement);
        }
        self.context
    }

    pub fn get_environment(&self) -> &Environment {
        &self.environment
    }

    pub fn evaluate(&mut self, expr: &Expression) -> CompactString {
        self.evaluate_expression_node(expr, expr.get_root_ref())
    }
}

// Statement interpreter
impl<'prog, C> TreeWalkInterpreter<'prog, C>
where
    C: SystemContext,
{
    fn interpret_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::VariableDecl(decl) => self.interpret_variable_declaration(decl),
            Statement::Call(stmt) => {
                let _ = self.evaluate(&stmt.expr);
            }
            // Registration only happens for top level declarations, before execution.
            Statement::FunctionDecl(_) => {}
        }
    }

    fn interpret_variable_declaration(&mut self, decl: &VariableDecl) {
        let initial = match decl.initial {
            Some(ref expr) => self.evaluate(expr),
            None => CompactString::default(),
        };
        self.environment.declare(&decl.name, initial);
    }
}

// Expression evaluator
impl<'prog, C> TreeWalkInterpreter<'prog, C>
where
    C: SystemContext,
{
    fn evaluate_expression_node(
        &mut self,
        expr: &Expression,
        node: ExpressionNodeRef,
    ) -> CompactString {
        let current_node = expr
            .get_node(node)
            .expect("Node ref came from the tree so it must exist.");

        match current_node {
            ExpressionNode::Atom(atom) => self.evaluate_atom(atom),
            ExpressionNode::Concat { lhs, rhs } => {
                let mut lhs = self.evaluate_expression_node(expr, *lhs);
                let rhs = self.evaluate_expression_node(expr, *rhs);
                lhs.push_str(&rhs);
                lhs
            }
            ExpressionNode::Call {
                callee,
                arguments,
                span,
                line,
            } => {
                if callee.as_str() == PRINT {
                    self.evaluate_print(expr, arguments)
                } else {
                    self.evaluate_call(expr, callee, arguments, *span, *line)
                }
            }
        }
    }

    fn evaluate_atom(&mut self, atom: &ExpressionAtom) -> CompactString {
        match atom.kind {
            ExpressionAtomKind::StringLiteral(ref value) => value.clone(),
            ExpressionAtomKind::Identifier(ref name) => match self.environment.access(name) {
                Some(value) => value.clone(),
                None => {
                    self.context.warn(RuntimeWarning {
                        kind: RuntimeWarningKind::UnboundVariable(name.clone()),
                        span: atom.span,
                        line: atom.line,
                    });
                    CompactString::default()
                }
            },
        }
    }

    /// Only the first argument is evaluated; the rest are never touched.
    fn evaluate_print(
        &mut self,
        expr: &Expression,
        arguments: &[ExpressionNodeRef],
    ) -> CompactString {
        let text = match arguments.first() {
            Some(argument) => self.evaluate_expression_node(expr, *argument),
            None => CompactString::default(),
        };
        self.context.writeln(&text);
        CompactString::default()
    }

    fn evaluate_call(
        &mut self,
        expr: &Expression,
        callee: &str,
        arguments: &[ExpressionNodeRef],
        span: Span,
        line: u32,
    ) -> CompactString {
        let Some(function) = self.functions.lookup(callee) else {
            self.context.warn(RuntimeWarning {
                kind: RuntimeWarningKind::UndefinedFunction(callee.into()),
                span,
                line,
            });
            return CompactString::default();
        };

        if arguments.len() != function.parameters.len() {
            self.context.warn(RuntimeWarning {
                kind: RuntimeWarningKind::ArgumentCount {
                    name: callee.into(),
                    expected: function.parameters.len(),
                    actual: arguments.len(),
                },
                span,
                line,
            });
        }

        let mut frame = CallFrame::new(self);
        frame.bind_parameters(expr, function, arguments);
        for statement in function.body.iter() {
            frame.interpret_statement(statement);
        }
        // Parameters are restored when the frame drops.
        CompactString::default()
    }
}

/// Parameter bindings of one call. Dropping the frame restores every
/// parameter, in declaration order, to the value it had before the call.
struct CallFrame<'frame, 'prog, C: SystemContext> {
    interpreter: &'frame mut TreeWalkInterpreter<'prog, C>,
    saved: Vec<SavedBinding>,
}

impl<'frame, 'prog, C: SystemContext> CallFrame<'frame, 'prog, C> {
    fn new(interpreter: &'frame mut TreeWalkInterpreter<'prog, C>) -> Self {
        Self {
            interpreter,
            saved: Vec::new(),
        }
    }

    /// Each argument is evaluated after the parameters before it are bound.
    /// Arguments without a parameter are never evaluated.
    fn bind_parameters(
        &mut self,
        expr: &Expression,
        function: &FunctionDecl,
        arguments: &[ExpressionNodeRef],
    ) {
        for (index, parameter) in function.parameters.iter().enumerate() {
            self.saved.push(self.interpreter.environment.save(parameter));
            let value = match arguments.get(index) {
                Some(argument) => self.interpreter.evaluate_expression_node(expr, *argument),
                None => CompactString::default(),
            };
            self.interpreter.environment.declare(parameter, value);
        }
    }
}

impl<'frame, 'prog, C: SystemContext> Deref for CallFrame<'frame, 'prog, C> {
    type Target = TreeWalkInterpreter<'prog, C>;

    fn deref(&self) -> &Self::Target {
        &*self.interpreter
    }
}

impl<'frame, 'prog, C: SystemContext> DerefMut for CallFrame<'frame, 'prog, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.interpreter
    }
}

impl<'frame, 'prog, C: SystemContext> Drop for CallFrame<'frame, 'prog, C> {
    fn drop(&mut self) {
        for saved in self.saved.drain(..) {
            self.interpreter.environment.restore(saved);
        }
    }
}
