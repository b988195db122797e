//! Catalog record types.

use std::fmt;

/// One catalog signature: a callback name plus its ordered parameter type
/// descriptors. Descriptors are canonical strings (see
/// `hooklint-analysis::signature`); they are the catalog join key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    pub name: String,
    pub params: Vec<String>,
    /// Name of the plugin providing this hook, when the entry came from a
    /// plugin-provided hook set rather than the host itself.
    pub source: Option<String>,
}

impl SignatureRecord {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
            source: None,
        }
    }
}

impl fmt::Display for SignatureRecord {
    /// Renders `Name(T1,T2)` with all spaces stripped, the form catalog
    /// documents and diagnostics use.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        write!(f, "{}(", self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            for ch in p.chars().filter(|c| !c.is_whitespace()) {
                f.write_char(ch)?;
            }
        }
        f.write_str(")")
    }
}

/// A deprecated hook and, when the host still offers the capability, the
/// signature that replaced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeprecatedRecord {
    pub hook: SignatureRecord,
    pub replacement: Option<SignatureRecord>,
}
