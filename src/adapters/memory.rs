// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory host implementation.
//!
//! This module provides `MemoryHost`, a host backed by plain maps. It is the
//! natural way for an embedding application to hand its already-loaded
//! configuration to this crate, and the workhorse of the crate's own tests.

use crate::domain::OverrideValue;
use crate::ports::SettingsHost;
use std::collections::HashMap;
use std::sync::RwLock;

/// A host configuration object backed by in-memory maps.
///
/// Attributes and tables can be populated with the builder-style `with_*`
/// methods and mutated afterwards through shared references; bound settings
/// instances keep returning the value resolved at first access regardless of
/// later mutation.
///
/// # Examples
///
/// ```rust
/// use appcfg::adapters::MemoryHost;
/// use appcfg::ports::SettingsHost;
///
/// let host = MemoryHost::new()
///     .with_attr("MY_APP_SOME_NUMBER", "42")
///     .with_table_entry("MY_SECOND_APP", "SOME_NUMBER", "7");
///
/// assert!(host.attr("MY_APP_SOME_NUMBER").is_some());
/// assert!(host.table_entry("MY_SECOND_APP", "SOME_NUMBER").is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryHost {
    attrs: RwLock<HashMap<String, OverrideValue>>,
    tables: RwLock<HashMap<String, HashMap<String, OverrideValue>>>,
}

impl MemoryHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level attribute, builder style.
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<OverrideValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Adds a table entry, builder style.
    pub fn with_table_entry(
        self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<OverrideValue>,
    ) -> Self {
        self.set_table_entry(table, key, value);
        self
    }

    /// Sets a top-level attribute.
    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<OverrideValue>) {
        self.attrs
            .write()
            .unwrap()
            .insert(name.into(), value.into());
    }

    /// Removes a top-level attribute.
    pub fn remove_attr(&self, name: &str) {
        self.attrs.write().unwrap().remove(name);
    }

    /// Sets an entry of a named table, creating the table if needed.
    pub fn set_table_entry(
        &self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<OverrideValue>,
    ) {
        self.tables
            .write()
            .unwrap()
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Removes an entry of a named table, if present.
    pub fn remove_table_entry(&self, table: &str, key: &str) {
        if let Some(entries) = self.tables.write().unwrap().get_mut(table) {
            entries.remove(key);
        }
    }
}

impl SettingsHost for MemoryHost {
    fn name(&self) -> &str {
        "memory"
    }

    fn attr(&self, name: &str) -> Option<OverrideValue> {
        self.attrs.read().unwrap().get(name).cloned()
    }

    fn table_entry(&self, table: &str, key: &str) -> Option<OverrideValue> {
        self.tables
            .read()
            .unwrap()
            .get(table)
            .and_then(|entries| entries.get(key))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettingHandle;
    use std::sync::Arc;

    #[test]
    fn test_memory_host_name() {
        assert_eq!(MemoryHost::new().name(), "memory");
    }

    #[test]
    fn test_attr_roundtrip() {
        let host = MemoryHost::new().with_attr("KEY", "value");

        match host.attr("KEY") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "value"),
            other => panic!("expected a value, got {:?}", other),
        }
        assert!(host.attr("MISSING").is_none());
    }

    #[test]
    fn test_attr_mutation_through_shared_ref() {
        let host = MemoryHost::new();
        host.set_attr("KEY", "first");
        host.set_attr("KEY", "second");

        match host.attr("KEY") {
            Some(OverrideValue::Value(v)) => assert_eq!(v.as_str(), "second"),
            other => panic!("expected a value, got {:?}", other),
        }

        host.remove_attr("KEY");
        assert!(host.attr("KEY").is_none());
    }

    #[test]
    fn test_table_roundtrip() {
        let host = MemoryHost::new().with_table_entry("TABLE", "KEY", "value");

        assert!(host.table_entry("TABLE", "KEY").is_some());
        assert!(host.table_entry("TABLE", "MISSING").is_none());
        assert!(host.table_entry("MISSING", "KEY").is_none());

        host.remove_table_entry("TABLE", "KEY");
        assert!(host.table_entry("TABLE", "KEY").is_none());
    }

    #[test]
    fn test_handle_attr() {
        let handle: SettingHandle = Arc::new(7u32);
        let host = MemoryHost::new().with_attr("BACKEND", handle);

        assert!(matches!(
            host.attr("BACKEND"),
            Some(OverrideValue::Handle(_))
        ));
    }

    #[test]
    fn test_attrs_and_tables_are_separate() {
        let host = MemoryHost::new().with_attr("TABLE", "not a table");
        assert!(host.table_entry("TABLE", "KEY").is_none());
    }
}
