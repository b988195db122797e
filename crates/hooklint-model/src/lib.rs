//! Immutable program-model snapshot for the hooklint analyzer.
//!
//! The host front end materializes one [`ProgramModel`] per analysis
//! session: types, methods, parameters, and the expression shapes the
//! checks care about (literals, symbol references, assignments,
//! invocations, member accesses, comparisons). The analysis crates only
//! read from it through the query surface on [`ProgramModel`]; nothing in
//! this workspace mutates a model after [`ProgramModelBuilder::build`].

pub mod builder;
pub mod ids;
pub mod model;

pub use builder::ProgramModelBuilder;
pub use ids::{ExprId, FieldId, LocalId, MethodId, ParamId, SymbolRef, TypeId};
pub use model::{Builtin, Expr, Field, Local, Method, Param, ProgramModel, TypeDef};
