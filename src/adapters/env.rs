// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-environment host implementation.
//!
//! This module provides `EnvHost`, a host whose attributes are environment
//! variables. It snapshots the environment lazily on first access so that a
//! single bound instance sees a consistent view.

use crate::domain::{OverrideValue, SettingValue};
use crate::ports::SettingsHost;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// A host configuration object backed by process environment variables.
///
/// Attribute access reads the snapshotted environment verbatim; a table entry
/// `(TABLE, KEY)` maps to the variable `TABLE_KEY`, the flat spelling an
/// environment forces onto the table form.
///
/// # Examples
///
/// ```rust
/// use appcfg::adapters::EnvHost;
/// use appcfg::ports::SettingsHost;
///
/// std::env::set_var("DOCTEST_ENVHOST_KEY", "42");
/// let host = EnvHost::new();
/// assert!(host.attr("DOCTEST_ENVHOST_KEY").is_some());
/// std::env::remove_var("DOCTEST_ENVHOST_KEY");
/// ```
#[derive(Debug, Default)]
pub struct EnvHost {
    /// Lazily loaded environment snapshot with interior mutability
    snapshot: RwLock<Option<HashMap<String, String>>>,
}

impl EnvHost {
    /// Creates a new environment host with an empty (not yet loaded) snapshot.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Drops the snapshot so the next access re-reads the environment.
    ///
    /// Bound settings instances keep their already-resolved values; only
    /// fields not yet accessed observe the refreshed environment.
    pub fn refresh(&self) {
        let mut guard = self.snapshot.write().unwrap();
        *guard = None;
    }

    /// Reads the process environment into a new map.
    fn load() -> HashMap<String, String> {
        let mut snapshot = HashMap::new();

        for (key, value) in env::vars() {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "skipping oversized environment variable: key_len={}, value_len={}",
                    key.len(),
                    value.len()
                );
                continue;
            }
            snapshot.insert(key, value);
        }

        tracing::debug!("loaded {} environment variables", snapshot.len());
        snapshot
    }

    /// Returns the snapshotted value of a variable, loading the snapshot on
    /// first use.
    fn lookup(&self, key: &str) -> Option<String> {
        {
            let guard = self.snapshot.read().unwrap();
            if let Some(snapshot) = guard.as_ref() {
                return snapshot.get(key).cloned();
            }
        }

        let snapshot = Self::load();
        let value = snapshot.get(key).cloned();

        let mut guard = self.snapshot.write().unwrap();
        *guard = Some(snapshot);

        value
    }
}

impl SettingsHost for EnvHost {
    fn name(&self) -> &str {
        "env"
    }

    fn attr(&self, name: &str) -> Option<OverrideValue> {
        self.lookup(name)
            .map(|v| OverrideValue::Value(SettingValue::from(v)))
    }

    fn table_entry(&self, table: &str, key: &str) -> Option<OverrideValue> {
        self.attr(&format!("{}_{}", table, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_host_name() {
        assert_eq!(EnvHost::new().name(), "env");
    }

    #[test]
    fn test_env_host_attr() {
        let mut guard = EnvGuard::new();
        guard.set("APPCFG_TEST_ATTR", "attr_value");

        let host = EnvHost::new();
        match host.attr("APPCFG_TEST_ATTR") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "attr_value"),
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_env_host_attr_missing() {
        let host = EnvHost::new();
        assert!(host.attr("APPCFG_TEST_DEFINITELY_UNSET_12345").is_none());
    }

    #[test]
    fn test_env_host_table_entry_flattens() {
        let mut guard = EnvGuard::new();
        guard.set("APPCFG_TEST_TBL_SOME_KEY", "table_value");

        let host = EnvHost::new();
        match host.table_entry("APPCFG_TEST_TBL", "SOME_KEY") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "table_value"),
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_env_host_snapshot_pins_values() {
        let mut guard = EnvGuard::new();
        guard.set("APPCFG_TEST_SNAPSHOT", "initial");

        let host = EnvHost::new();
        assert!(host.attr("APPCFG_TEST_SNAPSHOT").is_some());

        // The snapshot keeps serving the old value until refreshed.
        guard.set("APPCFG_TEST_SNAPSHOT", "updated");
        match host.attr("APPCFG_TEST_SNAPSHOT") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "initial"),
            other => panic!("expected a value, got {:?}", other),
        }

        host.refresh();
        match host.attr("APPCFG_TEST_SNAPSHOT") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "updated"),
            other => panic!("expected a value, got {:?}", other),
        }
    }
}
