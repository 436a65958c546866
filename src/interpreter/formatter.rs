use super::error::RuntimeWarning;
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

pub trait WarningFormatter {
    fn format_warning(&self, warning: &RuntimeWarning) -> String;
}

pub struct DebugFormatter;

impl WarningFormatter for DebugFormatter {
    fn format_warning(&self, warning: &RuntimeWarning) -> String {
        format!("{warning:?}")
    }
}

pub struct BasicFormatter;

impl WarningFormatter for BasicFormatter {
    fn format_warning(&self, warning: &RuntimeWarning) -> String {
        format!("{warning}")
    }
}

/// Renders warnings as annotated source snippets. Spans are byte offsets.
pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src str,
    color: bool,
}

impl<'src> PrettyFormatter<'src> {
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

impl<'src> WarningFormatter for PrettyFormatter<'src> {
    fn format_warning(&self, warning: &RuntimeWarning) -> String {
        let path = self.path;
        let span = warning.span.range();
        let mut output = std::io::Cursor::new(Vec::new());
        Report::build(ReportKind::Advice, (path, span.clone()))
            .with_config(
                Config::default()
                    .with_color(self.color)
                    .with_index_type(IndexType::Byte),
            )
            .with_code(warning.code())
            .with_message(format!("{}", warning.kind))
            .with_label(
                Label::new((path, span))
                    .with_message("Evaluated here")
                    .with_color(Color::Cyan),
            )
            .finish()
            .write((path, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}
