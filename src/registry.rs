// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide handle registry.
//!
//! Instead of loading pluggable objects dynamically at runtime, the
//! application registers concrete objects under string paths at startup, and
//! handle-kind fields resolve those paths lazily on first access. The path
//! format is free-form; dotted paths like `myapp.backends.sql` keep
//! declarations readable.
//!
//! Registration replaces any previous entry for the same path. Resolution of
//! an unregistered path fails with
//! [`SettingsError::HandleNotRegistered`](crate::domain::SettingsError::HandleNotRegistered),
//! which is surfaced to the caller unchanged.
//!
//! # Examples
//!
//! ```rust
//! use appcfg::registry;
//!
//! #[derive(Debug, PartialEq)]
//! struct SqlBackend;
//!
//! registry::register("doctest.backends.sql", SqlBackend);
//!
//! let handle = registry::resolve("doctest.backends.sql").unwrap();
//! assert!(handle.downcast::<SqlBackend>().is_ok());
//! ```

use crate::domain::errors::{Result, SettingsError};
use crate::domain::SettingHandle;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

static HANDLES: Lazy<RwLock<HashMap<String, SettingHandle>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers `value` under `path`, replacing any previous entry.
pub fn register<T: Send + Sync + 'static>(path: impl Into<String>, value: T) {
    register_handle(path, Arc::new(value));
}

/// Registers an already-built handle under `path`, replacing any previous
/// entry.
pub fn register_handle(path: impl Into<String>, handle: SettingHandle) {
    let path = path.into();
    tracing::debug!("registering handle for path '{}'", path);
    HANDLES.write().unwrap().insert(path, handle);
}

/// Resolves `path` to its registered handle.
///
/// # Returns
///
/// * `Ok(SettingHandle)` - The registered handle
/// * `Err(SettingsError::HandleNotRegistered)` - Nothing is registered under
///   `path`
pub fn resolve(path: &str) -> Result<SettingHandle> {
    HANDLES
        .read()
        .unwrap()
        .get(path)
        .cloned()
        .ok_or_else(|| SettingsError::HandleNotRegistered {
            path: path.to_string(),
        })
}

/// Returns `true` when a handle is registered under `path`.
pub fn is_registered(path: &str) -> bool {
    HANDLES.read().unwrap().contains_key(path)
}

/// Removes the entry under `path`, returning `true` when one existed.
pub fn unregister(path: &str) -> bool {
    HANDLES.write().unwrap().remove(path).is_some()
}
