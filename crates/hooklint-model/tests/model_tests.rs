use hooklint_common::SourceLocation;
use hooklint_model::{Builtin, Expr, ProgramModelBuilder, SymbolRef};

#[test]
fn builder_wires_params_to_methods() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let owner = b.ty("GameManager");
    let m = b.method(owner, "CreateEntity", &[("path", string), ("pos", string)]);
    let model = b.build();

    let method = model.method(m);
    assert_eq!(method.name, "CreateEntity");
    assert_eq!(method.params.len(), 2);
    let ordinals: Vec<usize> = model.params_of(m).map(|p| p.ordinal).collect();
    assert_eq!(ordinals, vec![0, 1]);
    assert_eq!(model.param(method.params[1]).owner, m);
    assert_eq!(model.display_name(owner), "GameManager");
}

#[test]
fn invocation_and_assignment_enumeration_is_insertion_ordered() {
    let mut b = ProgramModelBuilder::new();
    let owner = b.ty("Plugin");
    let m = b.method(owner, "Run", &[]);
    let local = b.local(m, "path");
    let loc = SourceLocation::new("plugin.cs", 0, 3);

    let lit = b.lit("x", loc.clone());
    let a1 = b.assign(SymbolRef::Local(local), lit);
    let i1 = b.invoke(Some(m), vec![lit], loc.clone());
    let i2 = b.invoke(None, vec![], loc);
    let model = b.build();

    let invocations: Vec<_> = model.invocations().map(|(id, _)| id).collect();
    assert_eq!(invocations, vec![i1, i2]);
    let assignments: Vec<_> = model.assignments().map(|(id, _)| id).collect();
    assert_eq!(assignments, vec![a1]);
    assert!(matches!(model.expr(i2), Expr::Invocation { target: None, .. }));
}

#[test]
fn symbol_resolution_only_covers_symbol_exprs() {
    let mut b = ProgramModelBuilder::new();
    let owner = b.ty("Plugin");
    let m = b.method(owner, "Run", &[("p", owner)]);
    let p = b.param_id(m, 0);
    let sym = b.symbol(SymbolRef::Param(p));
    let op = b.opaque();
    let model = b.build();

    assert_eq!(model.resolve_symbol(sym), Some(SymbolRef::Param(p)));
    assert_eq!(model.resolve_symbol(op), None);
}

#[test]
fn locals_and_fields_keep_their_declarations() {
    let mut b = ProgramModelBuilder::new();
    let owner = b.ty("Plugin");
    let m = b.method(owner, "Run", &[]);
    let local = b.local(m, "path");
    let field = b.field(owner, "prefab");
    let model = b.build();

    assert_eq!(model.local(local).name, "path");
    assert_eq!(model.local(local).owner, m);
    assert_eq!(model.field(field).name, "prefab");
    assert_eq!(model.field(field).owner, owner);
}

#[test]
fn interfaces_are_transitive_over_bases_and_superinterfaces() {
    let mut b = ProgramModelBuilder::new();
    let i_entity = b.ty("IEntity");
    let i_player = b.ty("IPlayer");
    b.add_interface(i_player, i_entity);
    let base = b.ty("BasePlayer");
    b.add_interface(base, i_player);
    let derived = b.ty("ScientistNpc");
    b.set_base(derived, base);
    let model = b.build();

    let ifaces = model.interfaces(derived);
    assert!(ifaces.contains(&i_player));
    assert!(ifaces.contains(&i_entity));
}

#[test]
fn interface_cycles_terminate() {
    let mut b = ProgramModelBuilder::new();
    let a = b.ty("A");
    let c = b.ty("C");
    b.set_base(a, c);
    b.set_base(c, a);
    let model = b.build();

    // Malformed inheritance must not hang.
    assert!(model.interfaces(a).is_empty());
}
