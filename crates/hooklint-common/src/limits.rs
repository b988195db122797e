//! Centralized analysis limits and thresholds.
//!
//! Every tunable constant the analysis depends on lives here, so the
//! provenance resolver, the suggestion ranker, and the catalogs agree on
//! one set of numbers.

/// Upper bound on base-type-chain walks. Well-formed models terminate long
/// before this; malformed inheritance must not hang the resolver.
pub const MAX_BASE_CHAIN: usize = 64;

/// Path suggestions beyond this edit distance are discarded.
pub const PATH_SUGGESTION_MAX_DISTANCE: usize = 5;

/// Length of the normalized-path prefix used to bucket catalog entries.
pub const PATH_PREFIX_LEN: usize = 3;

/// Default number of "did you mean" entries per finding.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Identifier candidates whose edit-distance similarity falls at or below
/// this floor contribute no similarity score.
pub const IDENT_SIMILARITY_FLOOR: f64 = 0.5;
