// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the settings crate.
//!
//! This module defines the error types that can occur when declaring, binding,
//! or resolving settings. All errors use `thiserror` for proper error handling
//! and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for settings operations.
///
/// Declaration never fails; every variant here surfaces at access time. The
/// enum is `#[non_exhaustive]` to allow future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use appcfg::domain::SettingsError;
///
/// fn resolve_field() -> Result<String, SettingsError> {
///     Err(SettingsError::RequiredSettingMissing {
///         field: "API_KEY".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A field declared without a default was neither overridden by the host.
    ///
    /// Raised on first access, never at declaration or bind time.
    #[error("setting '{field}' must be configured by the host application")]
    RequiredSettingMissing {
        /// The field that was left unconfigured
        field: String,
    },

    /// The accessed field was never declared in the schema.
    #[error("unknown setting: {field}")]
    UnknownSetting {
        /// The field that was accessed
        field: String,
    },

    /// A handle-kind field resolved to a path with no registry entry.
    ///
    /// This is the registry analog of a failed dynamic import and is
    /// surfaced as-is, never wrapped.
    #[error("no handle registered for path '{path}'")]
    HandleNotRegistered {
        /// The path that was looked up
        path: String,
    },

    /// A field resolved to the other kind than the accessor asked for.
    #[error("setting '{field}' resolved to a {found}, expected a {expected}")]
    KindMismatch {
        /// The field being accessed
        field: String,
        /// What the accessor asked for ("value" or "handle")
        expected: &'static str,
        /// What the field actually resolved to
        found: &'static str,
    },

    /// A resolved handle could not be downcast to the requested type.
    #[error("handle for setting '{field}' is not a {expected}")]
    HandleTypeMismatch {
        /// The field being accessed
        field: String,
        /// The requested concrete type name
        expected: &'static str,
    },

    /// Failed to convert a setting value to the requested type.
    #[error("failed to convert setting '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The field being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `bind_global` was called before a process-global host was installed.
    #[error("no process-global settings host has been installed")]
    HostNotInstalled,
}

impl SettingsError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        SettingsError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        SettingsError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        SettingsError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_setting_missing_names_field() {
        let error = SettingsError::RequiredSettingMissing {
            field: "API_KEY".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "setting 'API_KEY' must be configured by the host application"
        );
    }

    #[test]
    fn test_unknown_setting() {
        let error = SettingsError::UnknownSetting {
            field: "NOPE".to_string(),
        };
        assert_eq!(error.to_string(), "unknown setting: NOPE");
    }

    #[test]
    fn test_handle_not_registered() {
        let error = SettingsError::HandleNotRegistered {
            path: "myapp.backends.sql".to_string(),
        };
        assert!(error.to_string().contains("myapp.backends.sql"));
    }

    #[test]
    fn test_kind_mismatch() {
        let error = SettingsError::KindMismatch {
            field: "BACKEND".to_string(),
            expected: "value",
            found: "handle",
        };
        assert_eq!(
            error.to_string(),
            "setting 'BACKEND' resolved to a handle, expected a value"
        );
    }

    #[test]
    fn test_handle_type_mismatch() {
        let error = SettingsError::HandleTypeMismatch {
            field: "BACKEND".to_string(),
            expected: "alloc::string::String",
        };
        assert!(error.to_string().contains("BACKEND"));
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = SettingsError::from_parse_int_error("N".to_string(), parse_err);
        assert!(matches!(error, SettingsError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = SettingsError::from_parse_float_error("N".to_string(), parse_err);
        assert!(error.to_string().contains("float"));
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = SettingsError::from_parse_bool_error("N".to_string(), parse_err);
        assert!(error.to_string().contains("boolean"));
    }

    #[test]
    fn test_host_not_installed() {
        let error = SettingsError::HostNotInstalled;
        assert!(error.to_string().contains("host"));
    }
}
