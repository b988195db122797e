//! Versioned hook-catalog providers.
//!
//! Providers are registered explicitly under their version string; the
//! registry never scans for implementations at runtime. A provider parses
//! its document at most once and hands out clones of the finished
//! catalogs.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::hooks::{DeprecatedHooks, HookCatalog};
use crate::loader::load_hooks_str;

/// Version string of the built-in engine-agnostic hook set.
pub const UNIVERSAL_VERSION: &str = "universal";

pub trait HookProvider: Send + Sync {
    fn version(&self) -> &str;
    fn load(&self) -> (HookCatalog, DeprecatedHooks);
}

/// A provider backed by one JSON document, parsed on first use.
pub struct JsonHookProvider {
    version: String,
    json: String,
    parsed: OnceCell<(HookCatalog, DeprecatedHooks)>,
}

impl JsonHookProvider {
    pub fn new(version: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            json: json.into(),
            parsed: OnceCell::new(),
        }
    }
}

impl HookProvider for JsonHookProvider {
    fn version(&self) -> &str {
        &self.version
    }

    fn load(&self) -> (HookCatalog, DeprecatedHooks) {
        self.parsed.get_or_init(|| load_hooks_str(&self.json)).clone()
    }
}

/// Explicit version→provider registry.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: FxHashMap<String, Arc<dyn HookProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in universal hook set.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonHookProvider::new(
            UNIVERSAL_VERSION,
            UNIVERSAL_HOOKS_JSON,
        )));
        registry
    }

    /// Registers a provider under its version. Re-registering a version
    /// replaces the previous provider.
    pub fn register(&mut self, provider: Arc<dyn HookProvider>) {
        self.providers
            .insert(provider.version().to_string(), provider);
    }

    pub fn get(&self, version: &str) -> Option<&Arc<dyn HookProvider>> {
        self.providers.get(version)
    }

    /// Loads the catalogs for a version; unknown versions degrade to
    /// empty catalogs.
    pub fn load(&self, version: &str) -> (HookCatalog, DeprecatedHooks) {
        match self.providers.get(version) {
            Some(provider) => provider.load(),
            None => {
                warn!(version, "no hook provider registered for version");
                (HookCatalog::empty(), DeprecatedHooks::empty())
            }
        }
    }

    /// Registered versions, sorted.
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        versions.sort_unstable();
        versions
    }
}

/// The engine-agnostic lifecycle hooks every supported host dispatches.
const UNIVERSAL_HOOKS_JSON: &str = r#"{
  "version": "universal",
  "hooks": [
    "Init()",
    "Loaded()",
    "Unload()",
    "OnServerInitialized(bool first)",
    "OnServerSave()",
    "OnServerShutdown()",
    "OnUserConnected(IPlayer player)",
    "OnUserDisconnected(IPlayer player)",
    "OnUserChat(IPlayer player, string message)",
    "CanUserLogin(string name, string id, string ip)",
    "OnUserApproved(string name, string id, string ip)",
    "OnUserBanned(string name, string id, string ip, string reason)",
    "OnUserUnbanned(string name, string id, string ip)",
    "OnUserKicked(IPlayer player, string reason)",
    "OnUserRespawn(IPlayer player)",
    "OnUserRespawned(IPlayer player)",
    "OnUserSpawn(IPlayer player)",
    "OnUserSpawned(IPlayer player)",
    "OnPluginLoaded(Plugin plugin)",
    "OnPluginUnloaded(Plugin plugin)"
  ],
  "deprecated": [
    { "hook": "OnPlayerInit(BasePlayer player)",
      "replacement": "OnPlayerConnected(BasePlayer player)" },
    { "hook": "OnServerInitialized()",
      "replacement": "OnServerInitialized(bool first)" }
  ]
}"#;
