//! Associative PHP array literals.

use super::{PhpValue, quote};
use crate::builder::CodeBuilder;

/// An associative array with string keys, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhpArray {
    entries: Vec<(String, PhpValue)>,
}

impl PhpArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<PhpValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&PhpValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render in `var_export` layout: `array (`, one `'key' => value,` line
    /// per entry at two spaces, and a closing `)` without trailing newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::var_export();
        builder.push_line("array (").push_indent();
        for (key, value) in &self.entries {
            builder.push_line(&format!("{} => {},", quote(key), value.render()));
        }
        builder.push_dedent().push_raw(")");
        builder.build()
    }
}
