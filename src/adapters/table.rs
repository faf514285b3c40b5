// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table override lookup strategy.
//!
//! Looks up the override for field `F` as key `F` of a single named table
//! attribute on the host, keeping all of a module's overrides under one name.

use crate::domain::{OverrideValue, SettingName};
use crate::ports::{OverrideLookup, SettingsHost};

/// Override lookup via a named host table keyed by field name.
///
/// # Examples
///
/// ```rust
/// use appcfg::adapters::{MemoryHost, TableLookup};
/// use appcfg::ports::OverrideLookup;
/// use appcfg::domain::SettingName;
///
/// let host = MemoryHost::new().with_table_entry("MY_APP", "SOME_NUMBER", "42");
/// let lookup = TableLookup::new("MY_APP");
///
/// assert!(lookup.find(&host, &SettingName::from("SOME_NUMBER")).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct TableLookup {
    table: String,
}

impl TableLookup {
    /// Creates a new table strategy reading the named host table attribute.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Returns the name of the host table attribute this strategy reads.
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl OverrideLookup for TableLookup {
    fn name(&self) -> &str {
        "table"
    }

    fn find(&self, host: &dyn SettingsHost, field: &SettingName) -> Option<OverrideValue> {
        let found = host.table_entry(&self.table, field.as_str());
        tracing::debug!(
            "table lookup of '{}' in '{}' on host '{}': {}",
            field,
            self.table,
            host.name(),
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }
}
