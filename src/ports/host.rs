// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host configuration object trait definition.
//!
//! This module defines the `SettingsHost` trait, the port through which this
//! crate reads the embedding application's global configuration. The crate
//! never loads or parses configuration itself; the host owns all of that.

use crate::domain::OverrideValue;

/// The host application's configuration object.
///
/// A host exposes two access styles, mirroring the two override strategies:
/// top-level *attributes* (consulted by the prefix strategy) and named
/// *tables*, mappings whose keys are field names (consulted by the table
/// strategy). Both are read-only from this crate's perspective.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a host is typically shared behind
/// an `Arc` across every bound settings instance in the process.
///
/// # Examples
///
/// ```rust
/// use appcfg::ports::SettingsHost;
/// use appcfg::domain::OverrideValue;
///
/// struct FixedHost;
///
/// impl SettingsHost for FixedHost {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn attr(&self, name: &str) -> Option<OverrideValue> {
///         (name == "MY_APP_SOME_NUMBER").then(|| OverrideValue::from("42"))
///     }
///
///     fn table_entry(&self, _table: &str, _key: &str) -> Option<OverrideValue> {
///         None
///     }
/// }
///
/// let host = FixedHost;
/// assert!(host.attr("MY_APP_SOME_NUMBER").is_some());
/// ```
pub trait SettingsHost: Send + Sync {
    /// Returns the name of this host.
    ///
    /// Used for logging and debugging; a short identifier like "memory" or
    /// "env".
    fn name(&self) -> &str;

    /// Returns the value of a top-level attribute, if present.
    ///
    /// # Arguments
    ///
    /// * `name` - The fully composed attribute name (e.g. `MY_APP_SOME_NUMBER`)
    fn attr(&self, name: &str) -> Option<OverrideValue>;

    /// Returns an entry of a named table attribute, if both exist.
    ///
    /// # Arguments
    ///
    /// * `table` - The name of the table attribute (e.g. `MY_APP`)
    /// * `key` - The field name within that table (e.g. `SOME_NUMBER`)
    fn table_entry(&self, table: &str, key: &str) -> Option<OverrideValue>;
}
