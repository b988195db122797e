//! Catalog document loading.
//!
//! Two JSON document shapes:
//!
//! ```json
//! { "version": "2.x", "hooks": ["OnUserConnected(IPlayer player)"],
//!   "deprecated": [{ "hook": "OnPlayerInit(BasePlayer)",
//!                    "replacement": "OnPlayerConnected(BasePlayer)" }] }
//! ```
//!
//! ```json
//! { "paths": { "assets/prefabs/house.prefab": 1203487 } }
//! ```
//!
//! Loading is tolerant by contract: an unreadable or unparsable document
//! degrades to an empty catalog with a warning, and a malformed entry is
//! skipped without touching its neighbors. A missed finding is cheaper
//! than a failed session.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::warn;

use crate::assets::AssetCatalog;
use crate::hooks::{DeprecatedHooks, HookCatalog};
use crate::parse::parse_signature;
use crate::records::DeprecatedRecord;

#[derive(Deserialize)]
struct HooksDoc {
    #[serde(default)]
    version: String,
    #[serde(default)]
    hooks: Vec<String>,
    #[serde(default)]
    deprecated: Vec<DeprecatedDoc>,
    /// Hooks exposed by other plugins rather than the host itself.
    #[serde(default)]
    plugins: Vec<PluginHooksDoc>,
}

#[derive(Deserialize)]
struct PluginHooksDoc {
    name: String,
    #[serde(default)]
    hooks: Vec<String>,
}

#[derive(Deserialize)]
struct DeprecatedDoc {
    hook: String,
    #[serde(default)]
    replacement: Option<String>,
}

#[derive(Deserialize)]
struct AssetsDoc {
    #[serde(default)]
    paths: FxHashMap<String, u64>,
}

/// Loads a hook catalog and its deprecation table from a JSON document.
pub fn load_hooks_str(json: &str) -> (HookCatalog, DeprecatedHooks) {
    let doc: HooksDoc = match serde_json::from_str(json) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(%err, "failed to parse hook catalog document, degrading to empty");
            return (HookCatalog::empty(), DeprecatedHooks::empty());
        }
    };

    let mut records = Vec::with_capacity(doc.hooks.len());
    for raw in &doc.hooks {
        match parse_signature(raw) {
            Some(record) => records.push(record),
            None => warn!(%raw, "skipping malformed hook signature"),
        }
    }
    for plugin in &doc.plugins {
        for raw in &plugin.hooks {
            match parse_signature(raw) {
                Some(mut record) => {
                    record.source = Some(plugin.name.clone());
                    records.push(record);
                }
                None => warn!(%raw, plugin = %plugin.name, "skipping malformed plugin hook"),
            }
        }
    }

    let mut deprecated = Vec::with_capacity(doc.deprecated.len());
    for entry in &doc.deprecated {
        match parse_signature(&entry.hook) {
            Some(hook) => deprecated.push(DeprecatedRecord {
                hook,
                replacement: entry.replacement.as_deref().and_then(parse_signature),
            }),
            None => warn!(raw = %entry.hook, "skipping malformed deprecated hook"),
        }
    }

    (
        HookCatalog::new(doc.version, records),
        DeprecatedHooks::new(deprecated),
    )
}

/// Loads a hook catalog from disk; unreadable files degrade to empty.
pub fn load_hooks_file(path: &Path) -> (HookCatalog, DeprecatedHooks) {
    match std::fs::read_to_string(path) {
        Ok(json) => load_hooks_str(&json),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read hook catalog file");
            (HookCatalog::empty(), DeprecatedHooks::empty())
        }
    }
}

/// Loads an asset catalog from a JSON document.
pub fn load_assets_str(json: &str) -> AssetCatalog {
    let doc: AssetsDoc = match serde_json::from_str(json) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(%err, "failed to parse asset catalog document, degrading to empty");
            return AssetCatalog::empty();
        }
    };
    AssetCatalog::new(doc.paths)
}

/// Loads an asset catalog from disk; unreadable files degrade to empty.
pub fn load_assets_file(path: &Path) -> AssetCatalog {
    match std::fs::read_to_string(path) {
        Ok(json) => load_assets_str(&json),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read asset catalog file");
            AssetCatalog::empty()
        }
    }
}
