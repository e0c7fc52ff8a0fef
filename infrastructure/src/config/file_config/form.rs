//! Form configuration from TOML (`[form]` section)
//!
//! ```toml
//! [form]
//! truthy = ["ja", "si"]
//! falsy = ["nein"]
//! strict_fields = false
//! ```

use inspector_application::UnknownFieldPolicy;
use inspector_domain::{BooleanVocabulary, SchemaResolver};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Extra spellings accepted as `true` for boolean parameters
    pub truthy: Vec<String>,
    /// Extra spellings accepted as `false` for boolean parameters
    pub falsy: Vec<String>,
    /// Reject writes to undeclared parameters instead of ignoring them.
    /// Unset means: strict in debug builds, lenient in release builds.
    pub strict_fields: Option<bool>,
}

impl FileFormConfig {
    pub fn to_resolver(&self) -> SchemaResolver {
        SchemaResolver::with_booleans(BooleanVocabulary::with_extra(&self.truthy, &self.falsy))
    }

    pub fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        match self.strict_fields {
            Some(true) => UnknownFieldPolicy::Reject,
            Some(false) => UnknownFieldPolicy::Ignore,
            None => UnknownFieldPolicy::default(),
        }
    }

    /// Words configured as both truthy and falsy (case-insensitive)
    pub fn conflicting_words(&self) -> Vec<String> {
        let falsy: Vec<String> = self.falsy.iter().map(|w| w.trim().to_lowercase()).collect();
        let mut conflicts: Vec<String> = self
            .truthy
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| falsy.contains(w))
            .collect();
        conflicts.sort();
        conflicts.dedup();
        conflicts
    }
}
