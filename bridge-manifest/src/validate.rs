//! Validation helpers for registry parsing.

use miette::SourceSpan;

/// Find the span of a connection name in the TOML source.
///
/// Looks for `[connections.name]`, `[connections.name.x]` and the inline
/// `name = { ... }` form under `[connections]`.
pub(crate) fn find_connection_span(src: &str, name: &str) -> Option<SourceSpan> {
    let headers = [
        format!("[connections.{}]", name),
        format!("[connections.{}.", name),
        format!("[connections.\"{}\"]", name),
    ];

    for header in &headers {
        if let Some(pos) = src.find(header.as_str()) {
            // skip "[connections."
            let mut start = pos + "[connections.".len();
            if header.contains('"') {
                start += 1;
            }
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    find_key_span(src, name)
}

/// Find the span of a `key =` assignment at the start of a line.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let unquoted = trimmed.strip_prefix(key);
        let quoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_prefix(key))
            .and_then(|rest| rest.strip_prefix('"'));

        let (rest, start) = match (unquoted, quoted) {
            (Some(rest), _) => (rest, offset + indent),
            (None, Some(rest)) => (rest, offset + indent + 1),
            (None, None) => {
                offset += line.len();
                continue;
            }
        };
        if rest.trim_start().starts_with('=') {
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

/// Validate a connection name.
///
/// Names end up as PHP array keys and as the prefix of
/// `<name>_database_classname` parameters, so they are restricted to ASCII
/// letters, digits and underscores. Returns `Some(reason)` when invalid.
pub(crate) fn validate_connection_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
