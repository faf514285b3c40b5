// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the settings crate: the
//! fundamental concepts (names, values, field declarations, handles, errors)
//! used throughout the library, independent of any particular host.

pub mod errors;
pub mod field;
pub mod resolver;
pub mod setting_name;
pub mod setting_value;

// Re-export commonly used types
pub use errors::{Result, SettingsError};
pub use field::{FieldDefault, FieldKind, FieldSpec, OverrideValue, Resolved, SettingHandle};
pub use resolver::SettingsResolver;
pub use setting_name::SettingName;
pub use setting_value::SettingValue;
