//! Hook signature catalogs.
//!
//! A [`HookCatalog`] is an immutable ordered list of [`SignatureRecord`]s
//! for one host version. Names may repeat: overloads are alternative
//! acceptable shapes for one hook. The `(name, param count)` first-pass
//! filter runs against a name index built once at construction.

use rustc_hash::FxHashMap;

use crate::records::{DeprecatedRecord, SignatureRecord};

#[derive(Clone, Debug, Default)]
pub struct HookCatalog {
    version: String,
    records: Vec<SignatureRecord>,
    by_name: FxHashMap<String, Vec<u32>>,
}

impl HookCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(version: impl Into<String>, records: Vec<SignatureRecord>) -> Self {
        let mut by_name: FxHashMap<String, Vec<u32>> = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            by_name
                .entry(record.name.clone())
                .or_default()
                .push(i as u32);
        }
        Self {
            version: version.into(),
            records,
            by_name,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn records(&self) -> &[SignatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when any catalog entry carries this name, regardless of shape.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All entries for one name, in catalog order.
    pub fn records_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a SignatureRecord> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i as usize])
    }

    /// Distinct hook names, in first-appearance order.
    pub fn names(&self) -> Vec<&str> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.records
            .iter()
            .filter(|r| seen.insert(r.name.as_str()))
            .map(|r| r.name.as_str())
            .collect()
    }
}

/// Deprecated hook names and their replacements, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct DeprecatedHooks {
    by_name: FxHashMap<String, DeprecatedRecord>,
}

impl DeprecatedHooks {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(records: Vec<DeprecatedRecord>) -> Self {
        let mut by_name = FxHashMap::default();
        for record in records {
            by_name.insert(record.hook.name.clone(), record);
        }
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<&DeprecatedRecord> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
