// SPDX-License-Identifier: MIT OR Apache-2.0

//! Setting value type with type-safe conversions.
//!
//! This module provides the `SettingValue` type, which wraps scalar setting
//! values and provides type-safe conversion methods to common Rust types.

use crate::domain::errors::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for scalar setting values.
///
/// `SettingValue` stores values as strings internally, which lets defaults and
/// host overrides share a uniform representation while conversions stay
/// type-safe at the point of use. The conversion methods take the field name
/// so that errors carry useful context.
///
/// # Examples
///
/// ```
/// use appcfg::domain::SettingValue;
///
/// let value = SettingValue::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i32("SOME_NUMBER").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingValue(String);

impl SettingValue {
    /// Creates a new `SettingValue` from a `String`.
    pub fn new(value: String) -> Self {
        SettingValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into an owned `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use appcfg::domain::SettingValue;
    ///
    /// assert!(SettingValue::from("yes").as_bool("SOME_FLAG").unwrap());
    /// assert!(!SettingValue::from("off").as_bool("SOME_FLAG").unwrap());
    /// ```
    pub fn as_bool(&self, field: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| SettingsError::from_parse_bool_error(field.to_string(), e)),
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, field: &str) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| SettingsError::from_parse_int_error(field.to_string(), e))
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, field: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| SettingsError::from_parse_int_error(field.to_string(), e))
    }

    /// Converts the value to a `u32`.
    pub fn as_u32(&self, field: &str) -> Result<u32> {
        self.0
            .parse::<u32>()
            .map_err(|e| SettingsError::from_parse_int_error(field.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, field: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| SettingsError::from_parse_int_error(field.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, field: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| SettingsError::from_parse_float_error(field.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use appcfg::domain::SettingValue;
    /// use std::net::IpAddr;
    ///
    /// let value = SettingValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("BIND_ADDR").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| SettingsError::TypeConversionError {
                key: field.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue(s)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue(s.to_string())
    }
}

impl From<SettingValue> for String {
    fn from(value: SettingValue) -> Self {
        value.0
    }
}

impl AsRef<str> for SettingValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
