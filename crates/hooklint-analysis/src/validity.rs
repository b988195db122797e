//! Candidate-value validity against the asset catalog.
//!
//! Both modes normalize first so source spelling never affects the
//! verdict: `Assets\Prefabs\Foo.PREFAB` and `assets/prefabs/foo.prefab`
//! are the same candidate. Blank values are invalid without consulting
//! the catalog.

use hooklint_catalog::AssetCatalog;
use hooklint_common::text::normalize_asset_path;

use crate::sinks::CheckKind;

/// Tests one candidate value. `FullPath` requires catalog membership of
/// the normalized path; `ShortName` requires membership in the stem
/// projection.
pub fn is_valid(assets: &AssetCatalog, value: &str, kind: CheckKind) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let normalized = normalize_asset_path(value);
    match kind {
        CheckKind::FullPath => assets.contains_path(&normalized),
        CheckKind::ShortName => assets.contains_stem(&normalized),
    }
}

#[cfg(test)]
#[path = "tests/validity_tests.rs"]
mod tests;
