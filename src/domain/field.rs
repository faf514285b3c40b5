// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field declaration types.
//!
//! A settings schema maps field names to a `FieldSpec`: the field's kind
//! (plain scalar or registry handle) and its declared default. Hosts answer
//! lookups with an `OverrideValue`, and resolution produces a `Resolved`
//! value that is cached per instance.

use crate::domain::SettingValue;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque, shareable handle to a registered object.
///
/// Handles stand in for pluggable objects (backends, policies, factories)
/// that would otherwise be loaded dynamically: the host (or the module
/// itself) registers concrete objects under string paths at startup, and
/// handle-kind fields resolve those paths lazily on first access. Use [`crate::service::AppSettings::handle_as`] to recover
/// the concrete type.
pub type SettingHandle = Arc<dyn Any + Send + Sync>;

/// The kind of a declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain value field; overrides are used as-is.
    Scalar,
    /// A module/class-typed field; string candidates are resolved through the
    /// handle registry.
    Handle,
}

/// The declared default of a field.
#[derive(Clone)]
pub enum FieldDefault {
    /// A compiled-in scalar default (for handle fields, a registry path that
    /// is resolved lazily on first access).
    Value(SettingValue),
    /// A compiled-in, pre-built handle default.
    Handle(SettingHandle),
    /// The "undefined" sentinel: no compiled-in default exists and the host
    /// must supply an override, or first access fails.
    Required,
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDefault::Value(v) => f.debug_tuple("Value").field(v).finish(),
            FieldDefault::Handle(_) => f.write_str("Handle(..)"),
            FieldDefault::Required => f.write_str("Required"),
        }
    }
}

/// A single field declaration: kind plus default.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    /// The field's kind.
    pub kind: FieldKind,
    /// The field's declared default.
    pub default: FieldDefault,
}

impl FieldSpec {
    /// Creates a new field declaration.
    pub fn new(kind: FieldKind, default: FieldDefault) -> Self {
        FieldSpec { kind, default }
    }
}

/// A value supplied by the host as an override.
///
/// Hosts usually hold strings, but they may also hold pre-built handles
/// directly, skipping the registry for fields they construct themselves.
#[derive(Clone)]
pub enum OverrideValue {
    /// A scalar override.
    Value(SettingValue),
    /// A pre-built handle override, used as-is without registry lookup.
    Handle(SettingHandle),
}

impl fmt::Debug for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideValue::Value(v) => f.debug_tuple("Value").field(v).finish(),
            OverrideValue::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}

impl From<SettingValue> for OverrideValue {
    fn from(value: SettingValue) -> Self {
        OverrideValue::Value(value)
    }
}

impl From<&str> for OverrideValue {
    fn from(s: &str) -> Self {
        OverrideValue::Value(SettingValue::from(s))
    }
}

impl From<String> for OverrideValue {
    fn from(s: String) -> Self {
        OverrideValue::Value(SettingValue::from(s))
    }
}

impl From<SettingHandle> for OverrideValue {
    fn from(handle: SettingHandle) -> Self {
        OverrideValue::Handle(handle)
    }
}

/// A fully resolved field value, as stored in the per-instance cache.
#[derive(Clone)]
pub enum Resolved {
    /// The field resolved to a scalar value.
    Value(SettingValue),
    /// The field resolved to a handle.
    Handle(SettingHandle),
}

impl Resolved {
    /// Returns a short name for the resolved kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Resolved::Value(_) => "value",
            Resolved::Handle(_) => "handle",
        }
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Resolved::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}
