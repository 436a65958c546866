use super::{error::RuntimeWarning, formatter::WarningFormatter, SystemContext};
use std::io::Write;

/// Prints to stdout. Warnings go to stderr when a formatter is attached.
pub struct StdioContext<'fmt> {
    formatter: Option<Box<dyn WarningFormatter + 'fmt>>,
}

impl<'fmt> StdioContext<'fmt> {
    pub fn new() -> Self {
        Self { formatter: None }
    }

    pub fn with_warnings(formatter: Box<dyn WarningFormatter + 'fmt>) -> Self {
        Self {
            formatter: Some(formatter),
        }
    }
}

impl<'fmt> Default for StdioContext<'fmt> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'fmt> SystemContext for StdioContext<'fmt> {
    fn writeln(&mut self, text: &str) {
        // Write failures are ignored.
        let _ = writeln!(std::io::stdout().lock(), "{text}");
    }

    fn warn(&mut self, warning: RuntimeWarning) {
        if let Some(ref formatter) = self.formatter {
            eprintln!("{}", formatter.format_warning(&warning));
        }
    }
}

#[derive(Debug, Default)]
pub struct BufferedContext {
    buffer: String,
    warnings: Vec<RuntimeWarning>,
}

impl BufferedContext {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            warnings: Vec::new(),
        }
    }

    pub fn get_warnings(&self) -> &[RuntimeWarning] {
        &self.warnings
    }

    pub fn into_data(self) -> String {
        self.buffer
    }
}

impl SystemContext for BufferedContext {
    fn writeln(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn warn(&mut self, warning: RuntimeWarning) {
        self.warnings.push(warning);
    }
}
