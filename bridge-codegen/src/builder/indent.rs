//! Indentation configuration for code generation.

/// Space indentation of one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 2-space indentation, as emitted by PHP's `var_export`.
    pub const VAR_EXPORT: Self = Self { width: 2 };

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::VAR_EXPORT
    }
}
