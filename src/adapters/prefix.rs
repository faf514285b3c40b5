// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prefix override lookup strategy.
//!
//! Looks up the override for field `F` as the host attribute `{PREFIX}_{F}`.

use crate::domain::{OverrideValue, SettingName};
use crate::ports::{OverrideLookup, SettingsHost};

/// Override lookup via `PREFIX_FIELDNAME`-named host attributes.
///
/// The separator underscore is always inserted by the lookup; a trailing
/// underscore on the configured prefix is trimmed so declaration stays
/// infallible.
///
/// # Examples
///
/// ```rust
/// use appcfg::adapters::PrefixLookup;
///
/// let lookup = PrefixLookup::new("MY_APP");
/// assert_eq!(lookup.prefix(), "MY_APP");
///
/// // Trailing separator is tolerated.
/// let lookup = PrefixLookup::new("MY_APP_");
/// assert_eq!(lookup.prefix(), "MY_APP");
/// ```
#[derive(Clone, Debug)]
pub struct PrefixLookup {
    prefix: String,
}

impl PrefixLookup {
    /// Creates a new prefix strategy.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('_') {
            prefix.pop();
        }
        Self { prefix }
    }

    /// Returns the configured prefix, without trailing separator.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Composes the host attribute name for a field.
    fn attr_name(&self, field: &SettingName) -> String {
        format!("{}_{}", self.prefix, field.as_str())
    }
}

impl OverrideLookup for PrefixLookup {
    fn name(&self) -> &str {
        "prefix"
    }

    fn find(&self, host: &dyn SettingsHost, field: &SettingName) -> Option<OverrideValue> {
        let attr = self.attr_name(field);
        let found = host.attr(&attr);
        tracing::debug!(
            "prefix lookup of '{}' on host '{}': {}",
            attr,
            host.name(),
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryHost;

    #[test]
    fn test_prefix_lookup_name() {
        assert_eq!(PrefixLookup::new("MY_APP").name(), "prefix");
    }

    #[test]
    fn test_prefix_trailing_underscore_trimmed() {
        assert_eq!(PrefixLookup::new("MY_APP_").prefix(), "MY_APP");
        assert_eq!(PrefixLookup::new("MY_APP__").prefix(), "MY_APP");
    }

    #[test]
    fn test_prefix_find_hit() {
        let host = MemoryHost::new().with_attr("MY_APP_SOME_NUMBER", "42");
        let lookup = PrefixLookup::new("MY_APP");

        let found = lookup.find(&host, &SettingName::from("SOME_NUMBER"));
        match found {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "42"),
            other => panic!("expected a value override, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_find_miss() {
        let host = MemoryHost::new().with_attr("OTHER_APP_SOME_NUMBER", "42");
        let lookup = PrefixLookup::new("MY_APP");

        assert!(lookup.find(&host, &SettingName::from("SOME_NUMBER")).is_none());
    }

    #[test]
    fn test_prefix_does_not_read_bare_field() {
        // Only the prefixed attribute counts, never the bare field name.
        let host = MemoryHost::new().with_attr("SOME_NUMBER", "42");
        let lookup = PrefixLookup::new("MY_APP");

        assert!(lookup.find(&host, &SettingName::from("SOME_NUMBER")).is_none());
    }
}
