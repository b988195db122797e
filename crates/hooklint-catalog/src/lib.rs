//! Reference catalogs for the hooklint analyzer.
//!
//! Two catalog families, both immutable after load:
//!
//! - **Hook catalogs**: versioned lists of callback signatures the host
//!   dispatches to, plus deprecated-name replacements.
//! - **Asset catalogs**: the name→id mapping of valid asset paths, with
//!   the stem projection and prefix buckets the validity check and the
//!   suggestion ranker consume precomputed.
//!
//! Loading never fails: malformed documents degrade to empty catalogs and
//! malformed entries are skipped, so a broken catalog file costs findings,
//! not sessions.

pub mod assets;
pub mod hooks;
pub mod loader;
pub mod parse;
pub mod provider;
pub mod records;

pub use assets::AssetCatalog;
pub use hooks::{DeprecatedHooks, HookCatalog};
pub use loader::{load_assets_file, load_assets_str, load_hooks_file, load_hooks_str};
pub use parse::parse_signature;
pub use provider::{HookProvider, JsonHookProvider, ProviderRegistry, UNIVERSAL_VERSION};
pub use records::{DeprecatedRecord, SignatureRecord};
