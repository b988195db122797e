//! Literal provenance resolution.
//!
//! `resolve_literals` computes the set of literal values that could flow
//! into an expression: literals contribute themselves, parameter
//! references pull in the matching argument of every call site of the
//! owning method, local and field references pull in the right side of
//! every assignment to the same symbol, and anything else contributes
//! nothing. An empty result means "unproven", never "invalid" — the
//! caller must not report on it.
//!
//! A visited set of symbol identities, scoped to one top-level call,
//! bounds the recursion: a symbol revisited within one resolution
//! contributes no further facts, so mutually referencing assignments and
//! call cycles terminate with a partial-but-sound set.

use hooklint_common::SourceLocation;
use rustc_hash::FxHashSet;
use tracing::trace;

use hooklint_model::{Expr, ExprId, ProgramModel, SymbolRef};

/// One literal value proven to reach the resolved expression, at the
/// location of the literal itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralFact {
    pub value: String,
    pub location: SourceLocation,
}

/// Resolves the literal values that could flow into `expr`.
///
/// Deterministic for a fixed model: facts come out in model enumeration
/// order, deduplicated by `(value, location)`.
pub fn resolve_literals(model: &ProgramModel, expr: ExprId) -> Vec<LiteralFact> {
    let mut resolver = Resolver {
        model,
        visited: FxHashSet::default(),
        seen: FxHashSet::default(),
        facts: Vec::new(),
    };
    resolver.walk(expr);
    resolver.facts
}

struct Resolver<'a> {
    model: &'a ProgramModel,
    /// Symbols already expanded in this resolution.
    visited: FxHashSet<SymbolRef>,
    /// Dedup key over collected facts.
    seen: FxHashSet<LiteralFact>,
    facts: Vec<LiteralFact>,
}

impl Resolver<'_> {
    fn walk(&mut self, expr: ExprId) {
        match self.model.expr(expr) {
            Expr::Literal { value, location } => {
                let fact = LiteralFact {
                    value: value.clone(),
                    location: location.clone(),
                };
                if self.seen.insert(fact.clone()) {
                    self.facts.push(fact);
                }
            }
            Expr::Symbol { symbol } => self.expand_symbol(*symbol),
            // Computed values, member accesses, nested calls: unproven.
            _ => {}
        }
    }

    fn expand_symbol(&mut self, symbol: SymbolRef) {
        if !self.visited.insert(symbol) {
            trace!(?symbol, "provenance cycle, stopping expansion");
            return;
        }
        match symbol {
            SymbolRef::Param(param) => {
                let param = self.model.param(param);
                let owner = param.owner;
                let ordinal = param.ordinal;
                let call_args: Vec<ExprId> = self
                    .model
                    .invocations()
                    .filter_map(|(_, expr)| match expr {
                        Expr::Invocation {
                            target: Some(callee),
                            args,
                            ..
                        } if *callee == owner => args.get(ordinal).copied(),
                        _ => None,
                    })
                    .collect();
                for arg in call_args {
                    self.walk(arg);
                }
            }
            SymbolRef::Local(_) | SymbolRef::Field(_) => {
                let values: Vec<ExprId> = self
                    .model
                    .assignments()
                    .filter_map(|(_, expr)| match expr {
                        Expr::Assignment { target, value } if *target == symbol => Some(*value),
                        _ => None,
                    })
                    .collect();
                for value in values {
                    self.walk(value);
                }
            }
        }
    }
}
