// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings schema declaration.
//!
//! This module provides `SettingsSchema` and its builder: a reusable module
//! declares its fields, defaults and override strategy once, then binds the
//! schema against any number of hosts. Declaration is infallible; every
//! misconfiguration surfaces at access time.

use crate::adapters::{PrefixLookup, TableLookup};
use crate::domain::{
    FieldDefault, FieldKind, FieldSpec, Result, SettingHandle, SettingName, SettingValue,
    SettingsError,
};
use crate::ports::{OverrideLookup, SettingsHost};
use crate::service::app_settings::AppSettings;
use crate::service::global::installed_host;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A declared settings schema: an ordered set of fields plus the override
/// lookup strategy.
///
/// A schema is cheap to clone and can be bound any number of times; every
/// [`SettingsSchema::bind`] produces a fresh instance with an empty
/// resolution cache.
///
/// # Examples
///
/// ```rust
/// use appcfg::prelude::*;
/// use std::sync::Arc;
///
/// let schema = SettingsSchema::with_prefix("MY_APP")
///     .value("SOME_NUMBER", "30")
///     .required("API_KEY")
///     .build();
///
/// let settings = schema.bind(Arc::new(MemoryHost::new()));
/// assert_eq!(settings.value_str("SOME_NUMBER").unwrap().as_str(), "30");
/// assert!(settings.value_str("API_KEY").is_err());
/// ```
#[derive(Clone)]
pub struct SettingsSchema {
    lookup: Arc<dyn OverrideLookup>,
    fields: Arc<BTreeMap<SettingName, FieldSpec>>,
}

impl SettingsSchema {
    /// Starts declaring a schema with the prefix strategy.
    ///
    /// Field `F` is overridden by the host attribute `{prefix}_{F}`. A
    /// trailing underscore on `prefix` is trimmed.
    pub fn with_prefix(prefix: impl Into<String>) -> SchemaBuilder {
        Self::with_lookup(Arc::new(PrefixLookup::new(prefix)))
    }

    /// Starts declaring a schema with the table strategy.
    ///
    /// Field `F` is overridden by key `F` of the host table attribute
    /// `table`.
    pub fn with_table(table: impl Into<String>) -> SchemaBuilder {
        Self::with_lookup(Arc::new(TableLookup::new(table)))
    }

    /// Starts declaring a schema with a custom lookup strategy.
    pub fn with_lookup(lookup: Arc<dyn OverrideLookup>) -> SchemaBuilder {
        SchemaBuilder {
            lookup,
            fields: BTreeMap::new(),
        }
    }

    /// Binds the schema against a host, producing a fresh settings instance
    /// with an empty resolution cache.
    pub fn bind(&self, host: Arc<dyn SettingsHost>) -> AppSettings {
        AppSettings::new(self.clone(), host)
    }

    /// Binds the schema against the installed process-global host.
    ///
    /// # Returns
    ///
    /// * `Ok(AppSettings)` - A fresh instance over the global host
    /// * `Err(SettingsError::HostNotInstalled)` - No global host was installed
    pub fn bind_global(&self) -> Result<AppSettings> {
        let host = installed_host().ok_or(SettingsError::HostNotInstalled)?;
        Ok(self.bind(host))
    }

    /// Returns `true` when `name` is a declared field.
    pub fn contains(&self, name: &SettingName) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the declared field names in order.
    pub fn names(&self) -> impl Iterator<Item = &SettingName> {
        self.fields.keys()
    }

    pub(crate) fn spec(&self, name: &SettingName) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub(crate) fn lookup(&self) -> &dyn OverrideLookup {
        self.lookup.as_ref()
    }
}

/// Builder for a [`SettingsSchema`].
///
/// Declaring the same field twice replaces the earlier declaration. All
/// methods are infallible; required fields only fail when first accessed on a
/// bound instance.
pub struct SchemaBuilder {
    lookup: Arc<dyn OverrideLookup>,
    fields: BTreeMap<SettingName, FieldSpec>,
}

impl SchemaBuilder {
    fn field(mut self, name: impl Into<SettingName>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Declares a scalar field with a compiled-in default.
    pub fn value(self, name: impl Into<SettingName>, default: impl Into<SettingValue>) -> Self {
        self.field(
            name,
            FieldSpec::new(FieldKind::Scalar, FieldDefault::Value(default.into())),
        )
    }

    /// Declares a handle field whose default is a registry path.
    ///
    /// The path is resolved lazily on first access, so registration may
    /// happen any time before then.
    pub fn handle_path(self, name: impl Into<SettingName>, path: impl Into<SettingValue>) -> Self {
        self.field(
            name,
            FieldSpec::new(FieldKind::Handle, FieldDefault::Value(path.into())),
        )
    }

    /// Declares a handle field with a pre-built default handle.
    pub fn handle(self, name: impl Into<SettingName>, default: SettingHandle) -> Self {
        self.field(
            name,
            FieldSpec::new(FieldKind::Handle, FieldDefault::Handle(default)),
        )
    }

    /// Declares a scalar field that the host must configure.
    pub fn required(self, name: impl Into<SettingName>) -> Self {
        self.field(name, FieldSpec::new(FieldKind::Scalar, FieldDefault::Required))
    }

    /// Declares a handle field that the host must configure.
    pub fn required_handle(self, name: impl Into<SettingName>) -> Self {
        self.field(name, FieldSpec::new(FieldKind::Handle, FieldDefault::Required))
    }

    /// Finishes the declaration.
    pub fn build(self) -> SettingsSchema {
        SettingsSchema {
            lookup: self.lookup,
            fields: Arc::new(self.fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryHost;
    use crate::domain::SettingsResolver;

    #[test]
    fn test_empty_schema() {
        let schema = SettingsSchema::with_prefix("MY_APP").build();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn test_declared_fields_in_order() {
        let schema = SettingsSchema::with_prefix("MY_APP")
            .value("B_FIELD", "b")
            .value("A_FIELD", "a")
            .build();

        let names: Vec<&str> = schema.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["A_FIELD", "B_FIELD"]);
        assert!(schema.contains(&SettingName::from("A_FIELD")));
        assert!(!schema.contains(&SettingName::from("C_FIELD")));
    }

    #[test]
    fn test_redeclaration_replaces() {
        let schema = SettingsSchema::with_prefix("MY_APP")
            .value("FIELD", "first")
            .value("FIELD", "second")
            .build();

        assert_eq!(schema.len(), 1);
        let settings = schema.bind(Arc::new(MemoryHost::new()));
        assert_eq!(settings.value_str("FIELD").unwrap().as_str(), "second");
    }

    #[test]
    fn test_required_declaration_does_not_fail() {
        // Declaration and binding stay infallible; the error is deferred to
        // first access.
        let schema = SettingsSchema::with_prefix("MY_APP").required("API_KEY").build();
        let settings = schema.bind(Arc::new(MemoryHost::new()));

        let err = settings.value_str("API_KEY").unwrap_err();
        assert!(matches!(err, SettingsError::RequiredSettingMissing { .. }));
    }

    #[test]
    fn test_bind_produces_independent_instances() {
        let host = Arc::new(MemoryHost::new());
        let schema = SettingsSchema::with_prefix("MY_APP")
            .value("FIELD", "default")
            .build();

        let first = schema.bind(host.clone());
        assert_eq!(first.value_str("FIELD").unwrap().as_str(), "default");

        // A fresh bind starts with an empty cache and sees the new override.
        host.set_attr("MY_APP_FIELD", "override");
        let second = schema.bind(host.clone());
        assert_eq!(second.value_str("FIELD").unwrap().as_str(), "override");

        // The first instance keeps its resolved value.
        assert_eq!(first.value_str("FIELD").unwrap().as_str(), "default");
    }

    #[test]
    fn test_schema_clone_shares_fields() {
        let schema = SettingsSchema::with_table("MY_APP").value("FIELD", "x").build();
        let clone = schema.clone();
        assert_eq!(clone.len(), schema.len());
    }
}
