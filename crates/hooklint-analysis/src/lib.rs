//! Core analysis engine for the hooklint analyzer.
//!
//! Everything here derives facts from one immutable
//! [`hooklint_model::ProgramModel`] snapshot and the session's catalogs:
//!
//! - Signature extraction and canonical type naming
//! - Type compatibility (identity, base chain, interface set)
//! - Catalog signature matching and hook classification
//! - The sink classifier and its one-time transitive sweep
//! - Literal provenance resolution
//! - Validity checks against the asset catalog
//! - Fuzzy "did you mean" suggestion ranking
//!
//! The diagnostic front end owns descriptors, severities, and message
//! formatting; it talks to this crate exclusively through
//! [`AnalysisSession`].

pub mod compat;
pub mod matcher;
pub mod provenance;
pub mod session;
pub mod signature;
pub mod sinks;
pub mod suggest;
pub mod validity;

pub use matcher::HookClassification;
pub use provenance::{LiteralFact, resolve_literals};
pub use session::{AnalysisSession, CheckOutcome, InvalidLiteral};
pub use signature::{canonical_type_name, extract_signature};
pub use sinks::{CheckKind, SinkRecord, SinkSet};
