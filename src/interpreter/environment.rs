use crate::parser::statement::FunctionDecl;
use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;

/// The single flat table of string variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<CompactString, CompactString>,
}

/// The value a name had before a parameter took it over.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedBinding {
    name: CompactString,
    previous: Option<CompactString>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn access(&self, name: &str) -> Option<&CompactString> {
        self.values.get(name)
    }

    /// Binds `name`, replacing any previous value.
    pub fn declare(&mut self, name: &str, value: CompactString) {
        self.values.insert(name.to_compact_string(), value);
    }

    pub fn save(&self, name: &str) -> SavedBinding {
        SavedBinding {
            name: name.to_compact_string(),
            previous: self.values.get(name).cloned(),
        }
    }

    /// Puts a saved value back. A name that was unbound comes back as the
    /// empty string rather than being removed.
    pub fn restore(&mut self, saved: SavedBinding) {
        self.values
            .insert(saved.name, saved.previous.unwrap_or_default());
    }
}

/// Registered functions. Later registrations shadow earlier ones of the same name.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable<'prog> {
    functions: Vec<&'prog FunctionDecl>,
}

impl<'prog> FunctionTable<'prog> {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
        }
    }

    pub fn register(&mut self, decl: &'prog FunctionDecl) {
        self.functions.push(decl);
    }

    pub fn lookup(&self, name: &str) -> Option<&'prog FunctionDecl> {
        self.functions
            .iter()
            .rev()
            .find(|decl| decl.name.as_str() == name)
            .copied()
    }
}
