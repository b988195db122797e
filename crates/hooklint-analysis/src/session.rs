//! The analysis session.
//!
//! One [`AnalysisSession`] is built per analysis run and passed explicitly
//! to every consumer — there is no ambient global state. Construction
//! runs the whole-program sink sweep to completion; everything after that
//! is read-only and safe to drive from many threads at once. The
//! session's memo caches are compute-once, read-many: concurrent requests
//! for one key converge on one value, and a completed entry is never
//! replaced with a different one.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use hooklint_catalog::{AssetCatalog, DeprecatedHooks, HookCatalog, SignatureRecord};
use hooklint_common::SourceLocation;
use hooklint_common::limits::DEFAULT_MAX_SUGGESTIONS;
use hooklint_common::text::normalize_asset_path;
use hooklint_model::{Expr, ExprId, MethodId, ProgramModel, TypeId};

use crate::matcher::{self, HookClassification};
use crate::provenance::resolve_literals;
use crate::sinks::{self, CheckKind, SinkSet};
use crate::{compat, suggest, validity};

/// Result of a literal check at one validation point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every resolved value is valid, or nothing could be proven.
    Ok,
    /// At least one resolved value is missing from the catalog.
    Invalid(Vec<InvalidLiteral>),
}

/// One invalid resolved value, with ranked alternatives when any catalog
/// entry is close enough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidLiteral {
    pub value: String,
    pub location: SourceLocation,
    pub suggestions: Vec<String>,
}

pub struct AnalysisSession {
    model: Arc<ProgramModel>,
    hooks: HookCatalog,
    deprecated: DeprecatedHooks,
    assets: AssetCatalog,
    sinks: SinkSet,
    // Compute-once memo caches, valid for this session only.
    type_names: DashMap<TypeId, Arc<str>>,
    signatures: DashMap<MethodId, Arc<SignatureRecord>>,
    validity: DashMap<(CheckKind, String), bool>,
}

impl AnalysisSession {
    /// Builds a session over one frozen model snapshot. Runs the sink
    /// sweep; per-call-site checks may start as soon as this returns.
    pub fn new(
        model: Arc<ProgramModel>,
        hooks: HookCatalog,
        deprecated: DeprecatedHooks,
        assets: AssetCatalog,
    ) -> Self {
        let sinks = SinkSet::sweep(&model);
        debug!(
            hooks = hooks.len(),
            assets = assets.len(),
            sinks = sinks.len(),
            "analysis session ready"
        );
        Self {
            model,
            hooks,
            deprecated,
            assets,
            sinks,
            type_names: DashMap::new(),
            signatures: DashMap::new(),
            validity: DashMap::new(),
        }
    }

    pub fn model(&self) -> &ProgramModel {
        &self.model
    }

    pub fn hooks(&self) -> &HookCatalog {
        &self.hooks
    }

    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    pub fn sinks(&self) -> &SinkSet {
        &self.sinks
    }

    // =========================================================================
    // Memoized derivations
    // =========================================================================

    /// Canonical descriptor of a type, computed once per session.
    pub fn type_name(&self, ty: TypeId) -> Arc<str> {
        if let Some(name) = self.type_names.get(&ty) {
            return name.clone();
        }
        let name: Arc<str> = crate::signature::canonical_type_name(&self.model, ty).into();
        self.type_names.entry(ty).or_insert(name).value().clone()
    }

    /// Extracted signature of a method, computed once per session.
    pub fn signature_of(&self, method: MethodId) -> Arc<SignatureRecord> {
        if let Some(signature) = self.signatures.get(&method) {
            return signature.clone();
        }
        let params = self
            .model
            .params_of(method)
            .map(|p| self.type_name(p.ty).to_string())
            .collect();
        let signature = Arc::new(SignatureRecord::new(
            self.model.method(method).name.clone(),
            params,
        ));
        self.signatures
            .entry(method)
            .or_insert(signature)
            .value()
            .clone()
    }

    /// Memoized validity verdict for one candidate value.
    pub fn is_valid(&self, value: &str, kind: CheckKind) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        let key = (kind, normalize_asset_path(value));
        if let Some(verdict) = self.validity.get(&key) {
            return *verdict;
        }
        let verdict = validity::is_valid(&self.assets, value, kind);
        *self.validity.entry(key).or_insert(verdict)
    }

    // =========================================================================
    // Diagnostic-facing entry points
    // =========================================================================

    /// Classifies a method against the hook catalog. Methods on types
    /// outside the plugin contract are never hooks, and neither are
    /// overrides — they implement their base type's contract.
    pub fn classify(&self, method: MethodId) -> HookClassification {
        let m = self.model.method(method);
        if m.is_override || !compat::extends_any(&self.model, m.containing_type, sinks::PLUGIN_BASE_TYPES)
        {
            return HookClassification::default();
        }
        let signature = self.signature_of(method);
        HookClassification {
            is_hook: matcher::matches(&self.model, method, &self.hooks),
            is_exact_hook: matcher::matches_exact_signature(&signature, &self.hooks),
            deprecation: self.deprecated.lookup(&signature.name).cloned(),
        }
    }

    /// Validates the literal values reaching one argument of a call.
    /// `Ok` for non-sinks, unchecked positions, and unproven arguments.
    pub fn check_literal_argument(&self, call: ExprId, param_index: usize) -> CheckOutcome {
        let Expr::Invocation { target, args, .. } = self.model.expr(call) else {
            return CheckOutcome::Ok;
        };
        let Some(target) = target else {
            return CheckOutcome::Ok;
        };
        let Some(record) = self.sinks.lookup(*target) else {
            return CheckOutcome::Ok;
        };
        if !record.parameter_indices.contains(&param_index) {
            return CheckOutcome::Ok;
        }
        let Some(&arg) = args.get(param_index) else {
            return CheckOutcome::Ok;
        };
        self.check_resolved(arg, record.check_kind)
    }

    /// Validates a literal compared against a guarded property, e.g.
    /// `entity.ShortPrefabName == "scientist"`.
    pub fn check_comparison_literal(&self, comparison: ExprId) -> CheckOutcome {
        let Expr::Comparison { left, right } = self.model.expr(comparison) else {
            return CheckOutcome::Ok;
        };
        let (literal, member) = match (self.model.expr(*left), self.model.expr(*right)) {
            (Expr::Literal { .. }, Expr::MemberAccess { .. }) => (*left, *right),
            (Expr::MemberAccess { .. }, Expr::Literal { .. }) => (*right, *left),
            _ => return CheckOutcome::Ok,
        };
        let Expr::MemberAccess {
            receiver_type: Some(receiver),
            member,
            ..
        } = self.model.expr(member)
        else {
            return CheckOutcome::Ok;
        };
        let Some(sink) = sinks::property_sink(&self.model, *receiver, member) else {
            return CheckOutcome::Ok;
        };
        let Expr::Literal { value, location } = self.model.expr(literal) else {
            return CheckOutcome::Ok;
        };
        if self.is_valid(value, sink.check_kind) {
            return CheckOutcome::Ok;
        }
        CheckOutcome::Invalid(vec![InvalidLiteral {
            value: value.clone(),
            location: location.clone(),
            suggestions: self.suggest_for(value, sink.check_kind),
        }])
    }

    /// Ranks a candidate pool against a query, identifier strategy.
    pub fn suggest_similar_names(&self, query: &str, pool: &[String], k: usize) -> Vec<String> {
        suggest::rank_identifiers(query, pool, k)
    }

    /// Hook names similar to a method name.
    pub fn suggest_hook_names(&self, name: &str, k: usize) -> Vec<String> {
        suggest::suggest_hook_names(&self.hooks, name, k)
    }

    fn check_resolved(&self, expr: ExprId, kind: CheckKind) -> CheckOutcome {
        let facts = resolve_literals(&self.model, expr);
        let mut invalid = Vec::new();
        for fact in facts {
            if !self.is_valid(&fact.value, kind) {
                invalid.push(InvalidLiteral {
                    suggestions: self.suggest_for(&fact.value, kind),
                    value: fact.value,
                    location: fact.location,
                });
            }
        }
        if invalid.is_empty() {
            CheckOutcome::Ok
        } else {
            CheckOutcome::Invalid(invalid)
        }
    }

    fn suggest_for(&self, value: &str, kind: CheckKind) -> Vec<String> {
        match kind {
            CheckKind::FullPath => suggest::rank_paths(&self.assets, value, DEFAULT_MAX_SUGGESTIONS),
            CheckKind::ShortName => suggest::rank_stems(&self.assets, value, DEFAULT_MAX_SUGGESTIONS),
        }
    }
}
