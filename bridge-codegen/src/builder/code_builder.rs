//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use propel_bridge_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::var_export();
/// builder
///     .push_line("array (")
///     .push_indent()
///     .push_line("'name' => 'main',")
///     .push_dedent()
///     .push_raw(")");
///
/// assert_eq!(builder.build(), "array (\n  'name' => 'main',\n)");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with `var_export` style 2-space indentation.
    pub fn var_export() -> Self {
        Self::new(Indent::VAR_EXPORT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a `//` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let spaces = self.indent_level * self.indent.width();
        self.buffer.extend(std::iter::repeat_n(' ', spaces));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::var_export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_line_with_indent() {
        let mut builder = CodeBuilder::var_export();
        builder
            .push_line("a")
            .push_indent()
            .push_line("b")
            .push_indent()
            .push_line("c");
        assert_eq!(builder.build(), "a\n  b\n    c\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new(Indent::VAR_EXPORT);
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_and_raw() {
        let mut builder = CodeBuilder::default();
        builder
            .push_indent()
            .push_raw("raw")
            .push_blank()
            .push_blank()
            .push_line("line");
        assert_eq!(builder.build(), "raw\n\n  line\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::var_export();
        builder.push_indent().push_comment("generated");
        assert_eq!(builder.build(), "  // generated\n");
    }
}
