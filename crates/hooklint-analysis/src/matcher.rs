//! Catalog signature matching and hook classification.
//!
//! A catalog may carry several entries under one name; they are
//! alternative acceptable shapes, and the first entry that fully matches
//! wins. The exact variant requires descriptor string equality and
//! distinguishes "this name is reserved but the shape is wrong" from
//! "this name is unknown".

use hooklint_catalog::{DeprecatedRecord, HookCatalog, SignatureRecord};
use hooklint_model::{MethodId, ProgramModel};

use crate::compat::is_compatible;
use crate::signature::extract_signature;

/// What the diagnostic layer needs to know about a method's relationship
/// to the hook catalog.
#[derive(Clone, Debug, Default)]
pub struct HookClassification {
    /// The method's name and shape are accepted by some catalog entry,
    /// up to type compatibility.
    pub is_hook: bool,
    /// The method's descriptors equal some catalog entry verbatim.
    pub is_exact_hook: bool,
    /// Set when the method's name is a deprecated hook.
    pub deprecation: Option<DeprecatedRecord>,
}

/// True when some catalog entry with this method's name accepts its
/// parameter shape: equal count, pairwise compatible in declaration
/// order, no reordering. First full match wins.
pub fn matches(model: &ProgramModel, method: MethodId, catalog: &HookCatalog) -> bool {
    let m = model.method(method);
    for record in catalog.records_named(&m.name) {
        if record.params.len() != m.params.len() {
            continue;
        }
        let all_compatible = model
            .params_of(method)
            .zip(record.params.iter())
            .all(|(param, expected)| is_compatible(model, param.ty, expected));
        if all_compatible {
            return true;
        }
    }
    false
}

/// True when some catalog entry equals the method's extracted descriptors
/// verbatim.
pub fn matches_exact(model: &ProgramModel, method: MethodId, catalog: &HookCatalog) -> bool {
    matches_exact_signature(&extract_signature(model, method), catalog)
}

/// Exact-match test over an already-extracted signature, for callers that
/// memoize extraction.
pub fn matches_exact_signature(signature: &SignatureRecord, catalog: &HookCatalog) -> bool {
    catalog
        .records_named(&signature.name)
        .any(|record| record.params == signature.params)
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
