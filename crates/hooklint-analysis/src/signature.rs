//! Signature extraction and canonical type naming.
//!
//! The canonical name of a type is the catalog join key: built-in value
//! types map through their fixed alias, instantiated generics render as
//! `Base<Arg1, Arg2>` with recursively canonicalized arguments, arrays as
//! `Elem[]`, and everything else uses the fully-qualified display name.
//! The rendering is pure and deterministic — the same `TypeId` always
//! yields the same string within a snapshot, which is what makes string
//! equality a sound exact-match test.

use hooklint_catalog::SignatureRecord;
use hooklint_model::{MethodId, ProgramModel, TypeId};

/// Renders the canonical descriptor of a type. Total: every well-formed
/// type definition has a rendering.
pub fn canonical_type_name(model: &ProgramModel, ty: TypeId) -> String {
    let def = model.type_def(ty);
    if let Some(builtin) = def.builtin {
        return builtin.alias().to_string();
    }
    if !def.generic_args.is_empty() {
        // Arity markers were stripped when the model was built; strip
        // again so a hand-built definition cannot leak one into the key.
        let base = def.name.split('`').next().unwrap_or(&def.name);
        let args: Vec<String> = def
            .generic_args
            .iter()
            .map(|&arg| canonical_type_name(model, arg))
            .collect();
        return format!("{}<{}>", base, args.join(", "));
    }
    if let Some(elem) = def.array_elem {
        return format!("{}[]", canonical_type_name(model, elem));
    }
    def.display_name.clone()
}

/// Extracts the `(name, parameter descriptors)` record of a method.
pub fn extract_signature(model: &ProgramModel, method: MethodId) -> SignatureRecord {
    let params = model
        .params_of(method)
        .map(|p| canonical_type_name(model, p.ty))
        .collect();
    SignatureRecord::new(model.method(method).name.clone(), params)
}

#[cfg(test)]
#[path = "tests/signature_tests.rs"]
mod tests;
