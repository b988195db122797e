//! Type compatibility against catalog type names.
//!
//! Catalog entries name the base or interface type actually used at the
//! host's dispatch site; plugin methods routinely declare a more derived
//! type. Identity-only matching would reject those legitimate
//! polymorphic shapes, so compatibility is tested in three short-circuit
//! tiers: name identity, base-type chain, transitive interface set.

use hooklint_common::limits::MAX_BASE_CHAIN;
use hooklint_model::{ProgramModel, TypeId};

use crate::signature::canonical_type_name;

/// True when `actual` satisfies the catalog type name `expected`.
pub fn is_compatible(model: &ProgramModel, actual: TypeId, expected: &str) -> bool {
    if names_match(model, actual, expected) || canonical_type_name(model, actual) == expected {
        return true;
    }

    let mut current = actual;
    for _ in 0..MAX_BASE_CHAIN {
        match model.base_type(current) {
            Some(base) => {
                if names_match(model, base, expected) {
                    return true;
                }
                current = base;
            }
            None => break,
        }
    }

    model
        .interfaces(actual)
        .into_iter()
        .any(|iface| names_match(model, iface, expected))
}

/// True when the type's base chain reaches any of `roots`, by short or
/// display name. Used to decide whether a containing type participates in
/// the host's plugin contract at all.
pub fn extends_any(model: &ProgramModel, ty: TypeId, roots: &[&str]) -> bool {
    let mut current = Some(ty);
    for _ in 0..MAX_BASE_CHAIN {
        let Some(id) = current else { break };
        if roots.iter().any(|root| names_match(model, id, root)) {
            return true;
        }
        current = model.base_type(id);
    }
    false
}

fn names_match(model: &ProgramModel, ty: TypeId, expected: &str) -> bool {
    let def = model.type_def(ty);
    def.name == expected || def.display_name == expected
}

#[cfg(test)]
#[path = "tests/compat_tests.rs"]
mod tests;
