//! Sink classification.
//!
//! A sink is a method whose arguments at specific positions must name a
//! catalog entry. The fixed seed table lists the host API's own guarded
//! methods; the one-time sweep then marks every method that transitively
//! calls a sink as a sink itself, so a thin wrapper around a guarded call
//! is checked at its own call sites too.
//!
//! The sweep is a three-state memoized walk per method: `Sink`,
//! `NotSink`, and `InProgress` as the cycle guard. Mutual recursion with
//! no independent direct sink resolves to `NotSink` for every cycle
//! participant — no safe parameter mapping can be proven across a cycle.
//! Transitively discovered sinks conservatively mark all declared
//! parameters as relevant.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use hooklint_model::{Expr, MethodId, ProgramModel, TypeId};

use crate::compat::extends_any;

/// How a validated argument is tested against the asset catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Normalize and test full-path membership.
    FullPath,
    /// Normalize and test membership in the stem projection.
    ShortName,
}

/// One guarded method: which parameter positions must hold valid catalog
/// names, and how they are tested.
#[derive(Clone, Debug)]
pub struct SinkRecord {
    pub type_name: String,
    pub method_name: String,
    pub parameter_indices: SmallVec<[usize; 2]>,
    pub check_kind: CheckKind,
}

/// A guarded property: comparing it against a literal subjects the
/// literal to a catalog check.
#[derive(Clone, Debug)]
pub struct PropertySink {
    pub type_name: &'static str,
    pub member_name: &'static str,
    pub check_kind: CheckKind,
}

/// Base types whose descendants participate in the host's plugin
/// contract. Methods on unrelated types are never hooks.
pub static PLUGIN_BASE_TYPES: &[&str] = &[
    "Plugin",
    "Oxide.Core.Plugins.Plugin",
    "Oxide.Plugins.RustPlugin",
    "Oxide.Plugins.CovalencePlugin",
];

/// The host API's guarded methods, keyed by `(type, method)` short name.
static KNOWN_SINKS: Lazy<Vec<SinkRecord>> = Lazy::new(|| {
    fn sink(ty: &str, method: &str, indices: &[usize], kind: CheckKind) -> SinkRecord {
        SinkRecord {
            type_name: ty.to_string(),
            method_name: method.to_string(),
            parameter_indices: indices.iter().copied().collect(),
            check_kind: kind,
        }
    }
    vec![
        sink("GameManager", "CreateEntity", &[0], CheckKind::FullPath),
        sink("GameManager", "FindPrefab", &[0], CheckKind::FullPath),
        sink("GameManager", "LoadPrefab", &[0], CheckKind::FullPath),
        sink("GameManifest", "PathToStringID", &[0], CheckKind::FullPath),
        sink("StringPool", "Get", &[0], CheckKind::FullPath),
        sink("StringPool", "Add", &[0], CheckKind::FullPath),
        sink("PrefabAttribute", "Find", &[0], CheckKind::FullPath),
        sink("PrefabAttribute", "server", &[], CheckKind::FullPath),
        sink("PrefabAttribute", "client", &[], CheckKind::FullPath),
        sink("BaseEntity", "Spawn", &[], CheckKind::FullPath),
        sink("ItemManager", "CreateByName", &[0], CheckKind::ShortName),
        sink("ItemManager", "FindItemDefinition", &[0], CheckKind::ShortName),
    ]
});

/// Guarded properties for comparison checks.
static PROPERTY_SINKS: &[PropertySink] = &[
    PropertySink {
        type_name: "BaseNetworkable",
        member_name: "PrefabName",
        check_kind: CheckKind::FullPath,
    },
    PropertySink {
        type_name: "BaseNetworkable",
        member_name: "ShortPrefabName",
        check_kind: CheckKind::ShortName,
    },
];

/// Looks up the guarded property a `receiver.Member` access refers to,
/// walking the receiver's base chain.
pub fn property_sink(
    model: &ProgramModel,
    receiver: TypeId,
    member: &str,
) -> Option<&'static PropertySink> {
    PROPERTY_SINKS
        .iter()
        .find(|p| p.member_name == member && extends_any(model, receiver, &[p.type_name]))
}

enum SinkState {
    InProgress,
    NotSink,
    Sink(Arc<SinkRecord>),
}

/// The frozen result of the whole-program sink sweep.
pub struct SinkSet {
    by_method: FxHashMap<MethodId, Arc<SinkRecord>>,
}

impl SinkSet {
    /// Runs the one-time whole-program sweep. Must finish before any
    /// per-call-site check consults the set.
    pub fn sweep(model: &ProgramModel) -> Self {
        let mut states: FxHashMap<MethodId, SinkState> = FxHashMap::default();
        for (id, _) in model.methods() {
            classify_method(model, id, &mut states);
        }
        let by_method: FxHashMap<MethodId, Arc<SinkRecord>> = states
            .into_iter()
            .filter_map(|(id, state)| match state {
                SinkState::Sink(record) => Some((id, record)),
                _ => None,
            })
            .collect();
        debug!(sinks = by_method.len(), "sink sweep complete");
        Self { by_method }
    }

    pub fn lookup(&self, method: MethodId) -> Option<&Arc<SinkRecord>> {
        self.by_method.get(&method)
    }

    pub fn is_sink(&self, method: MethodId) -> bool {
        self.by_method.contains_key(&method)
    }

    pub fn len(&self) -> usize {
        self.by_method.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_method.is_empty()
    }
}

fn classify_method(
    model: &ProgramModel,
    id: MethodId,
    states: &mut FxHashMap<MethodId, SinkState>,
) -> Option<Arc<SinkRecord>> {
    match states.get(&id) {
        Some(SinkState::Sink(record)) => return Some(record.clone()),
        // `InProgress` means we re-entered through a call cycle; the
        // participant resolves as not-a-sink.
        Some(SinkState::NotSink) | Some(SinkState::InProgress) => return None,
        None => {}
    }

    let method = model.method(id);
    let owner = model.type_def(method.containing_type);
    if let Some(seed) = KNOWN_SINKS
        .iter()
        .find(|s| s.type_name == owner.name && s.method_name == method.name)
    {
        let record = Arc::new(seed.clone());
        states.insert(id, SinkState::Sink(record.clone()));
        return Some(record);
    }

    states.insert(id, SinkState::InProgress);
    let mut reached: Option<Arc<SinkRecord>> = None;
    for &expr_id in &method.body {
        if let Expr::Invocation {
            target: Some(callee),
            ..
        } = model.expr(expr_id)
        {
            if let Some(record) = classify_method(model, *callee, states) {
                reached = Some(record);
                break;
            }
        }
    }

    let state = match reached {
        Some(inner) => {
            trace!(
                method = %method.name,
                via = %inner.method_name,
                "marking transitive sink"
            );
            // Conservative default: every declared parameter is relevant.
            let indices: SmallVec<[usize; 2]> = (0..method.params.len()).collect();
            SinkState::Sink(Arc::new(SinkRecord {
                type_name: owner.name.clone(),
                method_name: method.name.clone(),
                parameter_indices: indices,
                check_kind: inner.check_kind,
            }))
        }
        None => SinkState::NotSink,
    };
    let result = match &state {
        SinkState::Sink(record) => Some(record.clone()),
        _ => None,
    };
    states.insert(id, state);
    result
}
