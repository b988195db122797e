//! String normalization helpers.
//!
//! Asset paths arrive from source text in whatever casing and separator
//! style the plugin author typed; the catalogs only store one canonical
//! form. Both sides of every membership test must go through
//! [`normalize_asset_path`] so the comparison is well-defined.

/// Canonical form of an asset path: trimmed, lowercased, forward slashes.
pub fn normalize_asset_path(path: &str) -> String {
    path.trim().to_lowercase().replace('\\', "/")
}

/// The stem of an asset path: the file name with its final extension
/// removed. `assets/prefabs/door.hinged.prefab` yields `door.hinged`.
pub fn asset_stem(path: &str) -> &str {
    let file = match path.rsplit_once('/') {
        Some((_, file)) => file,
        None => path,
    };
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Splits an identifier into lowercase words on case transitions and
/// underscores. `OnPlayerConnected` yields `["on", "player", "connected"]`.
pub fn split_identifier_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == '_' || !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(ch.to_lowercase());
        prev_lower = ch.is_lowercase() || ch.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
