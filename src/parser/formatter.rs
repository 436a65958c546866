use super::{
    expression::{Expression, ExpressionAtomKind, ExpressionNode, ExpressionNodeRef},
    statement::Statement,
    ParserError, Program,
};
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

pub trait ParserFormatter {
    fn format(&self, program: &Program) -> String;
    fn format_error(&self, error: &ParserError) -> String;
}

pub struct DebugParserFormatter;

impl ParserFormatter for DebugParserFormatter {
    fn format(&self, program: &Program) -> String {
        format!("{program:#?}")
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error:?}")
    }
}

/// One S-expression per top level statement.
pub struct SExpressionFormatter;

impl SExpressionFormatter {
    pub fn format_statement(statement: &Statement) -> String {
        match statement {
            Statement::VariableDecl(decl) => match decl.initial {
                Some(ref initial) => {
                    format!("(var {} {})", decl.name, Self::format_expression(initial))
                }
                None => format!("(var {})", decl.name),
            },
            Statement::FunctionDecl(decl) => {
                let mut buffer = format!("(func {} ({})", decl.name, decl.parameters.join(" "));
                for statement in decl.body.iter() {
                    buffer.push(' ');
                    buffer.push_str(&Self::format_statement(statement));
                }
                buffer.push(')');
                buffer
            }
            Statement::Call(call) => Self::format_expression(&call.expr),
        }
    }

    pub fn format_expression(tree: &Expression) -> String {
        Self::format_node(tree, tree.get_root_ref())
    }

    fn format_node(tree: &Expression, node: ExpressionNodeRef) -> String {
        let current_node = tree
            .get_node(node)
            .expect("Caller should make sure the ref is valid.");

        match current_node {
            ExpressionNode::Atom(atom) => match atom.kind {
                ExpressionAtomKind::Identifier(ref name) => format!("{name}"),
                ExpressionAtomKind::StringLiteral(ref value) => format!("\"{value}\""),
            },
            ExpressionNode::Concat { lhs, rhs } => format!(
                "(+ {} {})",
                Self::format_node(tree, *lhs),
                Self::format_node(tree, *rhs)
            ),
            ExpressionNode::Call {
                callee, arguments, ..
            } => {
                let mut buffer = format!("(call {callee}");
                for argument in arguments.iter() {
                    buffer.push(' ');
                    buffer.push_str(&Self::format_node(tree, *argument));
                }
                buffer.push(')');
                buffer
            }
        }
    }
}

impl ParserFormatter for SExpressionFormatter {
    fn format(&self, program: &Program) -> String {
        program
            .iter()
            .map(Self::format_statement)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error}")
    }
}

/// Renders diagnostics as annotated source snippets.
pub struct PrettyParserFormatter<'src> {
    text: &'src str,
    path: &'src str,
    color: bool,
}

impl<'src> PrettyParserFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self {
            text,
            path,
            color: true,
        }
    }

    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}

impl<'src> ParserFormatter for PrettyParserFormatter<'src> {
    fn format(&self, program: &Program) -> String {
        SExpressionFormatter.format(program)
    }

    fn format_error(&self, error: &ParserError) -> String {
        let path = self.path;
        let span = error.span.range();
        let mut output = std::io::Cursor::new(Vec::new());
        Report::build(ReportKind::Warning, (path, span.clone()))
            .with_config(
                Config::default()
                    .with_color(self.color)
                    .with_index_type(IndexType::Byte),
            )
            .with_code(error.code())
            .with_message(format!("{}", error.kind))
            .with_label(
                Label::new((path, span))
                    .with_message("Parsing stopped here; the rest of the block is ignored")
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((path, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}
