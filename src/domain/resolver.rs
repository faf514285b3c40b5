// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings resolver trait definition.
//!
//! This module defines the `SettingsResolver` trait, the main interface for
//! reading resolved settings. The canonical implementation is
//! [`crate::service::AppSettings`]; the trait exists so embedding code can
//! depend on the resolution contract rather than a concrete type.

use crate::domain::{Result, SettingHandle, SettingName, SettingValue};

/// The read-side interface of a bound settings instance.
///
/// Every accessor resolves lazily on first use: the override lookup runs
/// against the host, falls back to the declared default, and the result is
/// cached for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use appcfg::prelude::*;
/// use std::sync::Arc;
///
/// let host = Arc::new(MemoryHost::new());
/// let schema = SettingsSchema::with_prefix("MY_APP")
///     .value("GREETING", "hello")
///     .build();
/// let settings = schema.bind(host);
///
/// fn greet(settings: &dyn SettingsResolver) -> String {
///     settings.value_or(&SettingName::from("GREETING"), "hi").as_string()
/// }
/// assert_eq!(greet(&settings), "hello");
/// ```
pub trait SettingsResolver {
    /// Resolves a field to a scalar value.
    ///
    /// # Returns
    ///
    /// * `Ok(SettingValue)` - The resolved value
    /// * `Err(SettingsError)` - The field is unknown, unconfigured and
    ///   required, or resolved to a handle
    fn value(&self, name: &SettingName) -> Result<SettingValue>;

    /// Resolves a field to a handle.
    ///
    /// For handle-kind fields with a string candidate, the string is treated
    /// as a registry path and resolved through [`crate::registry`]; a missing
    /// registration surfaces unchanged as
    /// [`crate::domain::SettingsError::HandleNotRegistered`].
    fn handle(&self, name: &SettingName) -> Result<SettingHandle>;

    /// Returns `true` when the field is declared and resolvable without error.
    fn has(&self, name: &SettingName) -> bool;

    /// Resolves a field to a scalar value, falling back to `default` on any
    /// error.
    fn value_or(&self, name: &SettingName, default: &str) -> SettingValue {
        self.value(name)
            .unwrap_or_else(|_| SettingValue::from(default))
    }

    /// Convenience form of [`SettingsResolver::value`] taking a string slice.
    fn value_str(&self, name: &str) -> Result<SettingValue> {
        self.value(&SettingName::from(name))
    }

    /// Convenience form of [`SettingsResolver::handle`] taking a string slice.
    fn handle_str(&self, name: &str) -> Result<SettingHandle> {
        self.handle(&SettingName::from(name))
    }
}
