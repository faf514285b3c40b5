// SPDX-License-Identifier: MIT OR Apache-2.0

//! Setting name newtype for type-safe field handling.
//!
//! This module provides the `SettingName` type, a newtype wrapper around
//! `String` that identifies a declared settings field and prevents accidental
//! confusion with other string values.

use std::fmt;

/// A type-safe wrapper for settings field names.
///
/// By convention field names are `SCREAMING_SNAKE_CASE`, matching the way the
/// host application spells its configuration attributes, but the type accepts
/// any string.
///
/// # Examples
///
/// ```
/// use appcfg::domain::SettingName;
///
/// let name = SettingName::from("SOME_NUMBER");
/// assert_eq!(name.as_str(), "SOME_NUMBER");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SettingName(String);

impl SettingName {
    /// Creates a new `SettingName` from a `String`.
    pub fn new(name: String) -> Self {
        SettingName(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `SettingName` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SettingName {
    fn from(s: String) -> Self {
        SettingName(s)
    }
}

impl From<&str> for SettingName {
    fn from(s: &str) -> Self {
        SettingName(s.to_string())
    }
}

impl From<SettingName> for String {
    fn from(name: SettingName) -> Self {
        name.0
    }
}

impl AsRef<str> for SettingName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
