use super::*;
use hooklint_model::{Builtin, ProgramModelBuilder};

#[test]
fn builtins_render_through_the_alias_table() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let ulong = b.builtin(Builtin::ULong);
    let model = b.build();

    assert_eq!(canonical_type_name(&model, string), "string");
    assert_eq!(canonical_type_name(&model, ulong), "ulong");
}

#[test]
fn generics_render_with_recursive_arguments() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let int = b.builtin(Builtin::Int);
    let dict = b.generic("Dictionary`2", &[string, int]);
    let list = b.generic("List", &[dict]);
    let model = b.build();

    assert_eq!(
        canonical_type_name(&model, list),
        "List<Dictionary<string, int>>"
    );
}

#[test]
fn arrays_render_with_element_suffix() {
    let mut b = ProgramModelBuilder::new();
    let float = b.builtin(Builtin::Float);
    let floats = b.array(float);
    let model = b.build();

    assert_eq!(canonical_type_name(&model, floats), "float[]");
}

#[test]
fn other_types_use_the_display_name() {
    let mut b = ProgramModelBuilder::new();
    let player = b.ty_full("BasePlayer", "Game.Entities.BasePlayer");
    let model = b.build();

    assert_eq!(canonical_type_name(&model, player), "Game.Entities.BasePlayer");
}

#[test]
fn naming_is_deterministic() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let list = b.generic("List", &[string]);
    let model = b.build();

    assert_eq!(
        canonical_type_name(&model, list),
        canonical_type_name(&model, list)
    );
}

#[test]
fn extraction_collects_ordered_descriptors() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let bool_ty = b.builtin(Builtin::Bool);
    let plugin = b.ty("MyPlugin");
    let m = b.method(plugin, "CanUserLogin", &[("name", string), ("approved", bool_ty)]);
    let model = b.build();

    let sig = extract_signature(&model, m);
    assert_eq!(sig.name, "CanUserLogin");
    assert_eq!(sig.params, vec!["string", "bool"]);
}
