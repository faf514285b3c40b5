// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lazily resolving settings instance.
//!
//! This module provides `AppSettings`, the facade produced by binding a
//! schema to a host. Each field is resolved on first access and the result is
//! cached for the lifetime of the instance.

use crate::domain::{
    FieldDefault, FieldKind, OverrideValue, Resolved, Result, SettingHandle, SettingName,
    SettingValue, SettingsError, SettingsResolver,
};
use crate::ports::SettingsHost;
use crate::registry;
use crate::service::schema::SettingsSchema;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A bound settings instance with lazy, resolve-once semantics.
///
/// Resolution order per field: host override first (via the schema's lookup
/// strategy), declared default second. Handle-kind fields resolve string
/// candidates through the process-wide [`registry`]. The first resolved value
/// wins for the lifetime of the instance; later host mutation is only visible
/// to instances bound afterwards.
///
/// # Concurrency
///
/// The cache is a `RwLock` map, not a critical section around the whole
/// resolution: two threads racing on the same uncached field may both run the
/// lookup and both store the result. Resolution is deterministic and
/// idempotent, so the duplicate work is wasted but never incorrect.
///
/// # Examples
///
/// ```rust
/// use appcfg::prelude::*;
/// use std::sync::Arc;
///
/// let host = Arc::new(MemoryHost::new().with_attr("MY_APP_SOME_NUMBER", "42"));
/// let settings = SettingsSchema::with_prefix("MY_APP")
///     .value("SOME_NUMBER", "30")
///     .build()
///     .bind(host);
///
/// assert_eq!(settings.value_str("SOME_NUMBER").unwrap().as_i32("SOME_NUMBER").unwrap(), 42);
/// ```
pub struct AppSettings {
    schema: SettingsSchema,
    host: Arc<dyn SettingsHost>,
    cache: RwLock<HashMap<SettingName, Resolved>>,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("host", &self.host.name())
            .finish_non_exhaustive()
    }
}

impl AppSettings {
    pub(crate) fn new(schema: SettingsSchema, host: Arc<dyn SettingsHost>) -> Self {
        Self {
            schema,
            host,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the schema this instance was bound from.
    pub fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    /// Returns `true` when the field has already been resolved and cached.
    ///
    /// Unlike [`SettingsResolver::has`], this never triggers resolution.
    pub fn is_resolved(&self, name: &SettingName) -> bool {
        self.cache.read().unwrap().contains_key(name)
    }

    /// Resolves a handle field and downcasts it to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appcfg::prelude::*;
    /// use std::sync::Arc;
    ///
    /// struct Backend(&'static str);
    /// registry::register("doctest.backends.memory", Backend("memory"));
    ///
    /// let settings = SettingsSchema::with_prefix("MY_APP")
    ///     .handle_path("BACKEND", "doctest.backends.memory")
    ///     .build()
    ///     .bind(Arc::new(MemoryHost::new()));
    ///
    /// let backend = settings.handle_as::<Backend>(&SettingName::from("BACKEND")).unwrap();
    /// assert_eq!(backend.0, "memory");
    /// ```
    pub fn handle_as<T: Send + Sync + 'static>(&self, name: &SettingName) -> Result<Arc<T>> {
        let handle = self.handle(name)?;
        handle
            .downcast::<T>()
            .map_err(|_| SettingsError::HandleTypeMismatch {
                field: name.as_str().to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Resolves a field, consulting the cache first.
    fn resolve(&self, name: &SettingName) -> Result<Resolved> {
        if let Some(resolved) = self.cache.read().unwrap().get(name) {
            return Ok(resolved.clone());
        }

        let spec = self
            .schema
            .spec(name)
            .ok_or_else(|| SettingsError::UnknownSetting {
                field: name.as_str().to_string(),
            })?;

        let candidate = match self.schema.lookup().find(self.host.as_ref(), name) {
            Some(overridden) => overridden,
            None => match spec.default.clone() {
                FieldDefault::Value(value) => OverrideValue::Value(value),
                FieldDefault::Handle(handle) => OverrideValue::Handle(handle),
                FieldDefault::Required => {
                    return Err(SettingsError::RequiredSettingMissing {
                        field: name.as_str().to_string(),
                    });
                }
            },
        };

        // String candidates of handle fields are registry paths, whether they
        // came from the override or from the declared default. A registry
        // miss propagates unchanged.
        let resolved = match (spec.kind, candidate) {
            (FieldKind::Handle, OverrideValue::Value(path)) => {
                Resolved::Handle(registry::resolve(path.as_str())?)
            }
            (_, OverrideValue::Value(value)) => Resolved::Value(value),
            (_, OverrideValue::Handle(handle)) => Resolved::Handle(handle),
        };

        tracing::debug!(
            "resolved setting '{}' via '{}' lookup on host '{}'",
            name,
            self.schema.lookup().name(),
            self.host.name()
        );

        // A concurrent first access may have resolved the field meanwhile;
        // both computed the same value, so last write wins harmlessly.
        self.cache
            .write()
            .unwrap()
            .insert(name.clone(), resolved.clone());

        Ok(resolved)
    }
}

impl SettingsResolver for AppSettings {
    fn value(&self, name: &SettingName) -> Result<SettingValue> {
        match self.resolve(name)? {
            Resolved::Value(value) => Ok(value),
            other => Err(SettingsError::KindMismatch {
                field: name.as_str().to_string(),
                expected: "value",
                found: other.kind_name(),
            }),
        }
    }

    fn handle(&self, name: &SettingName) -> Result<SettingHandle> {
        match self.resolve(name)? {
            Resolved::Handle(handle) => Ok(handle),
            other => Err(SettingsError::KindMismatch {
                field: name.as_str().to_string(),
                expected: "handle",
                found: other.kind_name(),
            }),
        }
    }

    fn has(&self, name: &SettingName) -> bool {
        self.resolve(name).is_ok()
    }
}
