//! Asset name→id catalog.
//!
//! Paths are stored normalized (lowercase, forward slashes, trimmed);
//! every query normalizes its input the same way. The stem projection and
//! the prefix buckets depend only on the catalog, so both are computed
//! once here rather than per check.

use hooklint_common::limits::PATH_PREFIX_LEN;
use hooklint_common::text::{asset_stem, normalize_asset_path};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    ids: FxHashMap<String, u64>,
    /// Insertion-ordered normalized paths, the suggestion fallback pool.
    paths: Vec<String>,
    stems: FxHashSet<String>,
    buckets: FxHashMap<String, Vec<String>>,
}

impl AssetCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(entries: impl IntoIterator<Item = (String, u64)>) -> Self {
        let mut catalog = Self::default();
        for (path, id) in entries {
            let normalized = normalize_asset_path(&path);
            if normalized.is_empty() || catalog.ids.contains_key(&normalized) {
                continue;
            }
            catalog.stems.insert(asset_stem(&normalized).to_string());
            catalog
                .buckets
                .entry(prefix_of(&normalized).to_string())
                .or_default()
                .push(normalized.clone());
            catalog.paths.push(normalized.clone());
            catalog.ids.insert(normalized, id);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Membership test over an already-normalized full path.
    pub fn contains_path(&self, normalized: &str) -> bool {
        self.ids.contains_key(normalized)
    }

    /// Membership test over an already-normalized stem.
    pub fn contains_stem(&self, normalized: &str) -> bool {
        self.stems.contains(normalized)
    }

    /// The numeric id of a path, normalizing the input first.
    pub fn id_of(&self, path: &str) -> Option<u64> {
        self.ids.get(&normalize_asset_path(path)).copied()
    }

    /// The prefix bucket for a normalized query, if non-empty.
    pub fn bucket(&self, normalized: &str) -> Option<&[String]> {
        self.buckets
            .get(prefix_of(normalized))
            .map(|v| v.as_slice())
    }

    /// All normalized paths, in catalog order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|s| s.as_str())
    }

    /// The stem projection, unordered.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(|s| s.as_str())
    }
}

fn prefix_of(normalized: &str) -> &str {
    match normalized.char_indices().nth(PATH_PREFIX_LEN) {
        Some((i, _)) => &normalized[..i],
        None => normalized,
    }
}

#[cfg(test)]
#[path = "tests/assets_tests.rs"]
mod tests;
