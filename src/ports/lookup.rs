// SPDX-License-Identifier: MIT OR Apache-2.0

//! Override lookup strategy trait definition.
//!
//! This module defines the `OverrideLookup` trait, which maps a declared
//! field name onto a concrete host lookup. A schema carries exactly one
//! strategy, fixed at declaration time.

use crate::domain::{OverrideValue, SettingName};
use crate::ports::SettingsHost;

/// A strategy for finding a field's override on a host.
///
/// The two shipped strategies are [`crate::adapters::PrefixLookup`]
/// (attribute `PREFIX_FIELD`) and [`crate::adapters::TableLookup`] (key
/// `FIELD` of a named table attribute). Custom strategies can be supplied via
/// [`crate::service::SettingsSchema::with_lookup`].
///
/// # Examples
///
/// ```rust
/// use appcfg::ports::{OverrideLookup, SettingsHost};
/// use appcfg::domain::{OverrideValue, SettingName};
///
/// struct VerbatimLookup;
///
/// impl OverrideLookup for VerbatimLookup {
///     fn name(&self) -> &str {
///         "verbatim"
///     }
///
///     fn find(&self, host: &dyn SettingsHost, field: &SettingName) -> Option<OverrideValue> {
///         host.attr(field.as_str())
///     }
/// }
/// ```
pub trait OverrideLookup: Send + Sync {
    /// Returns the name of this strategy, for logging and debugging.
    fn name(&self) -> &str;

    /// Looks up the override for `field` on `host`.
    ///
    /// # Returns
    ///
    /// * `Some(OverrideValue)` - The host overrides this field
    /// * `None` - No override; the declared default applies
    fn find(&self, host: &dyn SettingsHost, field: &SettingName) -> Option<OverrideValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullLookup;

    impl OverrideLookup for NullLookup {
        fn name(&self) -> &str {
            "null"
        }

        fn find(&self, _host: &dyn SettingsHost, _field: &SettingName) -> Option<OverrideValue> {
            None
        }
    }

    struct EmptyHost;

    impl SettingsHost for EmptyHost {
        fn name(&self) -> &str {
            "empty"
        }

        fn attr(&self, _name: &str) -> Option<OverrideValue> {
            None
        }

        fn table_entry(&self, _table: &str, _key: &str) -> Option<OverrideValue> {
            None
        }
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(NullLookup.name(), "null");
    }

    #[test]
    fn test_lookup_find_none() {
        let found = NullLookup.find(&EmptyHost, &SettingName::from("ANY"));
        assert!(found.is_none());
    }

    #[test]
    fn test_lookup_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn OverrideLookup>>();
    }
}
