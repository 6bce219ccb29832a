//! Scalar PHP values.

/// A scalar PHP value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhpValue {
    /// A string (single-quoted on output).
    String(String),
    /// An integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// `NULL`
    Null,
}

impl PhpValue {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Render the value as a PHP literal.
    pub fn render(&self) -> String {
        match self {
            PhpValue::String(s) => quote(s),
            PhpValue::Int(i) => i.to_string(),
            PhpValue::Bool(true) => "true".to_string(),
            PhpValue::Bool(false) => "false".to_string(),
            PhpValue::Null => "NULL".to_string(),
        }
    }
}

impl From<&str> for PhpValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PhpValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for PhpValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PhpValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl<T: Into<PhpValue>> From<Option<T>> for PhpValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PhpValue::Null, Into::into)
    }
}

/// Quote a string as a single-quoted PHP literal.
///
/// Backslashes and single quotes are escaped. NUL bytes cannot appear in a
/// single-quoted literal and are spliced in as `' . "\0" . '`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\0' => out.push_str("' . \"\\0\" . '"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
