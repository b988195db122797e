use std::sync::Arc;

use hooklint_analysis::{AnalysisSession, CheckOutcome, resolve_literals};
use hooklint_catalog::{AssetCatalog, ProviderRegistry, UNIVERSAL_VERSION};
use hooklint_common::SourceLocation;
use hooklint_model::{Builtin, ExprId, MethodId, ProgramModelBuilder, SymbolRef};

struct Fixture {
    session: AnalysisSession,
    /// `CreateEntity("assets/prefabs/bogus.prefab")`
    bogus_call: ExprId,
    /// `LoadThing("x")` where `LoadThing(p)` forwards to `FindPrefab(p)`
    wrapper_call: ExprId,
    /// The `"x"` literal argument of `wrapper_call`
    wrapper_arg: ExprId,
    /// `CreateByName(<opaque>)`
    opaque_call: ExprId,
    /// `CreateByName("rifle.akk")` / `CreateByName("rifle.ak")`
    bad_item_call: ExprId,
    good_item_call: ExprId,
    /// `"scientis" == npc.ShortPrefabName` / reversed valid variant
    bad_comparison: ExprId,
    good_comparison: ExprId,
    load_thing: MethodId,
    on_user_connected: MethodId,
    on_player_init: MethodId,
    not_a_hook: MethodId,
    outside_plugin: MethodId,
    ping: MethodId,
    pong: MethodId,
}

fn loc(start: u32) -> SourceLocation {
    SourceLocation::new("plugin.cs", start, 8)
}

fn fixture() -> Fixture {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);

    // Host surface.
    let game_manager = b.ty("GameManager");
    let item_manager = b.ty("ItemManager");
    let networkable = b.ty("BaseNetworkable");
    let entity = b.ty("BaseEntity");
    b.set_base(entity, networkable);
    let scientist = b.ty("ScientistNPC");
    b.set_base(scientist, entity);
    let iplayer = b.ty("IPlayer");
    let base_player = b.ty("BasePlayer");
    b.set_base(base_player, entity);

    let create_entity = b.method(game_manager, "CreateEntity", &[("path", string)]);
    let find_prefab = b.method(game_manager, "FindPrefab", &[("path", string)]);
    let create_by_name = b.method(item_manager, "CreateByName", &[("name", string)]);

    // Plugin under analysis.
    let rust_plugin = b.ty_full("RustPlugin", "Oxide.Plugins.RustPlugin");
    let plugin = b.ty("TestPlugin");
    b.set_base(plugin, rust_plugin);

    let spawn_bogus = b.method(plugin, "SpawnBogus", &[]);
    let bogus_lit = b.lit("assets/prefabs/bogus.prefab", loc(10));
    let bogus_call = b.invoke(Some(create_entity), vec![bogus_lit], loc(10));
    b.stmt(spawn_bogus, bogus_call);

    // Wrapper: LoadThing(p) { return FindPrefab(p); }
    let load_thing = b.method(plugin, "LoadThing", &[("p", string)]);
    let p_ref = b.symbol(SymbolRef::Param(b.param_id(load_thing, 0)));
    let forward = b.invoke(Some(find_prefab), vec![p_ref], loc(20));
    b.stmt(load_thing, forward);

    let run = b.method(plugin, "Run", &[]);
    let x_lit = b.lit("x", loc(30));
    let wrapper_call = b.invoke(Some(load_thing), vec![x_lit], loc(30));
    b.stmt(run, wrapper_call);

    // Item checks exercise the short-name kind.
    let give = b.method(plugin, "GiveItem", &[]);
    let bad_item = b.lit("rifle.akk", loc(40));
    let bad_item_call = b.invoke(Some(create_by_name), vec![bad_item], loc(40));
    b.stmt(give, bad_item_call);
    let good_item = b.lit("rifle.ak", loc(41));
    let good_item_call = b.invoke(Some(create_by_name), vec![good_item], loc(41));
    b.stmt(give, good_item_call);
    let opaque = b.opaque();
    let opaque_call = b.invoke(Some(create_by_name), vec![opaque], loc(42));
    b.stmt(give, opaque_call);

    // Hook candidates.
    let on_user_connected = b.method(plugin, "OnUserConnected", &[("player", iplayer)]);
    let on_player_init = b.method(plugin, "OnPlayerInit", &[("player", base_player)]);
    let not_a_hook = b.method(plugin, "OnUserTeleported", &[("player", iplayer)]);
    let outside_plugin = b.method(scientist, "OnUserConnected", &[("player", iplayer)]);

    // Mutual recursion with no direct sink.
    let ping = b.method(plugin, "Ping", &[("n", string)]);
    let pong = b.method(plugin, "Pong", &[("n", string)]);
    let ping_arg = b.symbol(SymbolRef::Param(b.param_id(ping, 0)));
    let to_pong = b.invoke(Some(pong), vec![ping_arg], loc(50));
    b.stmt(ping, to_pong);
    let pong_arg = b.symbol(SymbolRef::Param(b.param_id(pong, 0)));
    let to_ping = b.invoke(Some(ping), vec![pong_arg], loc(51));
    b.stmt(pong, to_ping);

    // Comparisons against guarded properties.
    let member = b.member_access(Some(scientist), "ShortPrefabName", loc(60));
    let bad_lit = b.lit("scientis", loc(60));
    let bad_comparison = b.compare(bad_lit, member);
    let member2 = b.member_access(Some(scientist), "ShortPrefabName", loc(61));
    let good_lit = b.lit("scientist", loc(61));
    let good_comparison = b.compare(member2, good_lit);

    let model = Arc::new(b.build());
    let (hooks, deprecated) = ProviderRegistry::with_builtin().load(UNIVERSAL_VERSION);
    let assets = AssetCatalog::new([
        ("assets/prefabs/house.prefab".to_string(), 1),
        ("assets/prefabs/horse.prefab".to_string(), 2),
        ("assets/npc/scientist.prefab".to_string(), 3),
        ("assets/prefabs/weapons/rifle.ak.prefab".to_string(), 4),
    ]);

    Fixture {
        session: AnalysisSession::new(model, hooks, deprecated, assets),
        bogus_call,
        wrapper_call,
        wrapper_arg: x_lit,
        opaque_call,
        bad_item_call,
        good_item_call,
        bad_comparison,
        good_comparison,
        load_thing,
        on_user_connected,
        on_player_init,
        not_a_hook,
        outside_plugin,
        ping,
        pong,
    }
}

// =============================================================================
// Scenario A: direct sink with an invalid literal
// =============================================================================

#[test]
fn direct_sink_reports_invalid_literal_with_suggestions() {
    let f = fixture();
    match f.session.check_literal_argument(f.bogus_call, 0) {
        CheckOutcome::Invalid(findings) => {
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].value, "assets/prefabs/bogus.prefab");
            assert_eq!(findings[0].location, loc(10));
            assert!(!findings[0].suggestions.is_empty());
        }
        CheckOutcome::Ok => panic!("expected invalid outcome"),
    }
}

#[test]
fn unchecked_positions_and_non_sinks_stay_quiet() {
    let f = fixture();
    // Index 1 does not exist on CreateEntity's record.
    assert_eq!(f.session.check_literal_argument(f.bogus_call, 1), CheckOutcome::Ok);
    // A comparison expression is not an invocation.
    assert_eq!(f.session.check_literal_argument(f.bad_comparison, 0), CheckOutcome::Ok);
}

// =============================================================================
// Scenario B: transitive wrapper sink
// =============================================================================

#[test]
fn wrapper_is_classified_as_transitive_sink() {
    let f = fixture();
    let record = f.session.sinks().lookup(f.load_thing).expect("wrapper must be a sink");
    assert_eq!(record.method_name, "LoadThing");
    assert_eq!(record.parameter_indices.as_slice(), &[0]);
}

#[test]
fn call_through_wrapper_validates_the_literal() {
    let f = fixture();
    match f.session.check_literal_argument(f.wrapper_call, 0) {
        CheckOutcome::Invalid(findings) => {
            assert_eq!(findings[0].value, "x");
            assert_eq!(findings[0].location, loc(30));
            // Nothing in the catalog is within edit distance 5 of "x".
            assert!(findings[0].suggestions.is_empty());
        }
        CheckOutcome::Ok => panic!("wrapper call must be validated"),
    }
}

// =============================================================================
// Scenario C and hook classification
// =============================================================================

#[test]
fn compatible_hook_is_classified() {
    let f = fixture();
    let classification = f.session.classify(f.on_user_connected);
    assert!(classification.is_hook);
    assert!(classification.is_exact_hook);
    assert!(classification.deprecation.is_none());
}

#[test]
fn unknown_name_is_not_a_hook_but_gets_suggestions() {
    let f = fixture();
    let classification = f.session.classify(f.not_a_hook);
    assert!(!classification.is_hook);
    assert!(!classification.is_exact_hook);

    let similar = f.session.suggest_hook_names("OnUserTeleported", 3);
    assert!(!similar.is_empty());
}

#[test]
fn deprecated_hook_reports_its_replacement() {
    let f = fixture();
    let classification = f.session.classify(f.on_player_init);
    let deprecation = classification.deprecation.expect("OnPlayerInit is deprecated");
    assert_eq!(
        deprecation.replacement.as_ref().map(|r| r.name.as_str()),
        Some("OnPlayerConnected")
    );
}

#[test]
fn methods_outside_the_plugin_contract_are_ignored() {
    let f = fixture();
    let classification = f.session.classify(f.outside_plugin);
    assert!(!classification.is_hook);
    assert!(!classification.is_exact_hook);
    assert!(classification.deprecation.is_none());
}

#[test]
fn overrides_implement_their_base_contract_not_a_hook() {
    let mut b = ProgramModelBuilder::new();
    let iplayer = b.ty("IPlayer");
    let rust_plugin = b.ty_full("RustPlugin", "Oxide.Plugins.RustPlugin");
    let plugin = b.ty("TestPlugin");
    b.set_base(plugin, rust_plugin);
    let m = b.method(plugin, "OnUserConnected", &[("player", iplayer)]);
    b.set_override(m);
    let model = Arc::new(b.build());

    let (hooks, deprecated) = ProviderRegistry::with_builtin().load(UNIVERSAL_VERSION);
    let session = AnalysisSession::new(model, hooks, deprecated, AssetCatalog::empty());
    assert!(!session.classify(m).is_hook);
}

#[test]
fn session_exposes_its_catalogs() {
    let f = fixture();
    assert!(f.session.hooks().contains_name("OnUserConnected"));
    assert_eq!(f.session.assets().len(), 4);
}

// =============================================================================
// Short-name sinks and comparisons
// =============================================================================

#[test]
fn short_name_sink_uses_the_stem_projection() {
    let f = fixture();
    assert_eq!(f.session.check_literal_argument(f.good_item_call, 0), CheckOutcome::Ok);
    match f.session.check_literal_argument(f.bad_item_call, 0) {
        CheckOutcome::Invalid(findings) => {
            assert!(findings[0].suggestions.contains(&"rifle.ak".to_string()));
        }
        CheckOutcome::Ok => panic!("expected invalid outcome"),
    }
}

#[test]
fn unproven_arguments_are_never_reported() {
    let f = fixture();
    assert_eq!(f.session.check_literal_argument(f.opaque_call, 0), CheckOutcome::Ok);
}

#[test]
fn comparison_against_guarded_property_is_checked_both_ways() {
    let f = fixture();
    assert_eq!(f.session.check_comparison_literal(f.good_comparison), CheckOutcome::Ok);
    match f.session.check_comparison_literal(f.bad_comparison) {
        CheckOutcome::Invalid(findings) => {
            assert_eq!(findings[0].value, "scientis");
            assert!(findings[0].suggestions.contains(&"scientist".to_string()));
        }
        CheckOutcome::Ok => panic!("expected invalid outcome"),
    }
}

// =============================================================================
// Sweep properties
// =============================================================================

#[test]
fn call_cycles_terminate_as_not_sink() {
    let f = fixture();
    assert!(!f.session.sinks().is_sink(f.ping));
    assert!(!f.session.sinks().is_sink(f.pong));
}

// =============================================================================
// Provenance properties
// =============================================================================

#[test]
fn provenance_is_idempotent() {
    let f = fixture();
    let model = f.session.model();
    let first = resolve_literals(model, f.wrapper_arg);
    let second = resolve_literals(model, f.wrapper_arg);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn provenance_unions_assignments_and_call_sites() {
    let mut b = ProgramModelBuilder::new();
    let string = b.builtin(Builtin::String);
    let plugin = b.ty("P");
    let user = b.method(plugin, "Use", &[("path", string)]);
    let caller = b.method(plugin, "Caller", &[]);

    // Two call sites feed the parameter; one forwards a local with two
    // assignments.
    let lit_a = b.lit("a", loc(1));
    let call_one = b.invoke(Some(user), vec![lit_a], loc(1));
    b.stmt(caller, call_one);

    let local = b.local(caller, "path");
    let lit_b = b.lit("b", loc(2));
    b.assign(SymbolRef::Local(local), lit_b);
    let lit_c = b.lit("c", loc(3));
    b.assign(SymbolRef::Local(local), lit_c);
    let local_ref = b.symbol(SymbolRef::Local(local));
    let call_two = b.invoke(Some(user), vec![local_ref], loc(4));
    b.stmt(caller, call_two);

    let param_ref = b.symbol(SymbolRef::Param(b.param_id(user, 0)));
    let model = b.build();

    let facts = resolve_literals(&model, param_ref);
    let values: Vec<&str> = facts.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn provenance_cycles_yield_partial_but_sound_sets() {
    let mut b = ProgramModelBuilder::new();
    let plugin = b.ty("P");
    let m = b.method(plugin, "M", &[]);
    let x = b.local(m, "x");
    let y = b.local(m, "y");

    // x = y; y = x; x = "seed";
    let y_ref = b.symbol(SymbolRef::Local(y));
    b.assign(SymbolRef::Local(x), y_ref);
    let x_ref = b.symbol(SymbolRef::Local(x));
    b.assign(SymbolRef::Local(y), x_ref);
    let seed = b.lit("seed", loc(5));
    b.assign(SymbolRef::Local(x), seed);

    let probe = b.symbol(SymbolRef::Local(x));
    let model = b.build();

    let facts = resolve_literals(&model, probe);
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].value, "seed");
}

#[test]
fn provenance_never_fabricates_values() {
    let mut b = ProgramModelBuilder::new();
    let plugin = b.ty("P");
    let m = b.method(plugin, "M", &[]);
    let unassigned = b.local(m, "never_set");
    let probe = b.symbol(SymbolRef::Local(unassigned));
    let op = b.opaque();
    let model = b.build();

    assert!(resolve_literals(&model, probe).is_empty());
    assert!(resolve_literals(&model, op).is_empty());
}

// =============================================================================
// Memoized derivations
// =============================================================================

#[test]
fn session_signatures_are_stable_and_shared() {
    let f = fixture();
    let first = f.session.signature_of(f.on_user_connected);
    let second = f.session.signature_of(f.on_user_connected);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.params, vec!["IPlayer"]);
}

#[test]
fn suggest_similar_names_ranks_an_arbitrary_pool() {
    let f = fixture();
    let pool = vec!["OnUserConnected".to_string(), "Loaded".to_string()];
    let ranked = f.session.suggest_similar_names("OnUserConected", &pool, 1);
    assert_eq!(ranked, vec!["OnUserConnected".to_string()]);
}
