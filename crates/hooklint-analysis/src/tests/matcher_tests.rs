use super::*;
use hooklint_catalog::HookCatalog;
use hooklint_model::{Builtin, ProgramModelBuilder};

fn catalog(entries: &[(&str, &[&str])]) -> HookCatalog {
    let records = entries
        .iter()
        .map(|(name, params)| {
            SignatureRecord::new(*name, params.iter().map(|p| p.to_string()).collect())
        })
        .collect();
    HookCatalog::new("test", records)
}

#[test]
fn base_typed_entry_accepts_derived_parameter() {
    let mut b = ProgramModelBuilder::new();
    let base = b.ty("BaseEntity");
    let derived = b.ty("BasePlayer");
    b.set_base(derived, base);
    let unrelated = b.ty("StorageContainer");
    let plugin = b.ty("P");
    let with_derived = b.method(plugin, "OnEntityKill", &[("entity", derived)]);
    let with_unrelated = b.method(plugin, "OnEntityKill", &[("entity", unrelated)]);
    let model = b.build();

    let catalog = catalog(&[("OnEntityKill", &["BaseEntity"])]);
    assert!(matches(&model, with_derived, &catalog));
    assert!(!matches(&model, with_unrelated, &catalog));
}

#[test]
fn parameter_count_must_agree() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let plugin = b.ty("P");
    let m = b.method(plugin, "OnUserChat", &[("message", string)]);
    let model = b.build();

    let catalog = catalog(&[("OnUserChat", &["IPlayer", "string"])]);
    assert!(!matches(&model, m, &catalog));
}

#[test]
fn order_is_not_permuted() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let bool_ty = b.builtin(Builtin::Bool);
    let plugin = b.ty("P");
    let m = b.method(plugin, "OnThing", &[("a", bool_ty), ("b", string)]);
    let model = b.build();

    let catalog = catalog(&[("OnThing", &["string", "bool"])]);
    assert!(!matches(&model, m, &catalog));
}

#[test]
fn overlapping_entries_are_alternative_shapes() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let bool_ty = b.builtin(Builtin::Bool);
    let plugin = b.ty("P");
    let m = b.method(plugin, "OnThing", &[("flag", bool_ty)]);
    let model = b.build();

    // The first entry for the name does not fit; the second does.
    let catalog = catalog(&[("OnThing", &["string"]), ("OnThing", &["bool"])]);
    assert!(matches(&model, m, &catalog));
}

#[test]
fn exact_requires_descriptor_equality() {
    let mut b = ProgramModelBuilder::new();
    let base = b.ty("BaseEntity");
    let derived = b.ty("BasePlayer");
    b.set_base(derived, base);
    let plugin = b.ty("P");
    let m = b.method(plugin, "OnEntityKill", &[("entity", derived)]);
    let model = b.build();

    let catalog = catalog(&[("OnEntityKill", &["BaseEntity"])]);
    // Compatible through the base chain, but not an exact shape.
    assert!(matches(&model, m, &catalog));
    assert!(!matches_exact(&model, m, &catalog));

    let exact = self::catalog(&[("OnEntityKill", &["BasePlayer"])]);
    assert!(matches_exact(&model, m, &exact));
}
