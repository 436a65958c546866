pub mod context;
pub mod environment;
pub mod error;
pub mod formatter;
mod tree;

use error::RuntimeWarning;
pub use tree::TreeWalkInterpreter;

/// Where a running program sends its output.
pub trait SystemContext {
    fn writeln(&mut self, text: &str);

    /// Called for anomalies the interpreter recovers from. Ignored by default.
    fn warn(&mut self, warning: RuntimeWarning) {
        let _ = warning;
    }
}
