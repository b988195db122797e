//! Parsing of declarative hook signatures.
//!
//! Catalog documents spell hooks as `Name(Type name, ...)`; parameter
//! names are optional and generic arguments may or may not carry spaces.
//! Parsing normalizes every parameter to the canonical descriptor form so
//! records compare equal to extracted signatures regardless of the
//! document's spelling. A malformed entry yields `None`; the loader skips
//! it and keeps the rest of the catalog.

use crate::records::SignatureRecord;

/// Parses one `Name(Type name, ...)` signature string.
pub fn parse_signature(input: &str) -> Option<SignatureRecord> {
    let input = input.trim();
    let open = input.find('(')?;
    let close = input.rfind(')')?;
    if close <= open {
        return None;
    }
    let name = input[..open].trim();
    if name.is_empty() || !is_identifier(name) {
        return None;
    }
    let mut params = Vec::new();
    for part in split_top_level(&input[open + 1..close]) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        params.push(canonical_descriptor(&strip_param_name(part)));
    }
    Some(SignatureRecord::new(name, params))
}

/// Splits on commas outside any `<...>` nesting, so
/// `Dictionary<string, int> data, bool flag` yields two parts.
fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Drops a trailing parameter name, keeping the type. `IPlayer player`
/// becomes `IPlayer`; a type-only entry passes through unchanged.
fn strip_param_name(part: &str) -> String {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    if tokens.len() >= 2 && is_identifier(tokens[tokens.len() - 1]) {
        tokens[..tokens.len() - 1].join(" ")
    } else {
        tokens.join(" ")
    }
}

/// Canonical descriptor spelling: no stray whitespace, generic arguments
/// separated by `", "`.
fn canonical_descriptor(ty: &str) -> String {
    let compact: String = ty.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace(',', ", ")
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
