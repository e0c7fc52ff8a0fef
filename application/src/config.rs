//! Application-level configuration.
//!
//! This module provides configuration types that control how the tools
//! session behaves, such as how writes to undeclared parameters are treated.

/// What to do when a caller writes to a parameter the active tool does not
/// declare.
///
/// Such a write is an integration bug. Development builds surface it as an
/// error; release builds drop the write and log a warning. Either way the
/// drafts are not modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Return an error to the caller
    Reject,
    /// Drop the write and log a warning
    Ignore,
}

impl Default for UnknownFieldPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            UnknownFieldPolicy::Reject
        } else {
            UnknownFieldPolicy::Ignore
        }
    }
}

/// Default upper bound on catalog pages fetched by `list_all_tools`
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Session behavior configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub unknown_fields: UnknownFieldPolicy,
    /// Stop paging the catalog after this many pages, guarding against
    /// backends that hand out cursors forever.
    pub max_pages: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::default(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl SessionConfig {
    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            UnknownFieldPolicy::Reject
        } else {
            UnknownFieldPolicy::Ignore
        };
        assert_eq!(UnknownFieldPolicy::default(), expected);
    }

    #[test]
    fn test_max_pages_is_at_least_one() {
        let config = SessionConfig::default().with_max_pages(0);
        assert_eq!(config.max_pages, 1);
    }
}
