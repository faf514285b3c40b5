// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed per-application settings with lazy, host-overridable resolution.
//!
//! A reusable application module declares a settings schema: an ordered set of
//! named fields, each with a kind and a default. The host application supplies
//! a process-wide configuration object (the *host*), and every field access
//! first consults the host for an override, falling back to the declared
//! default. Resolution happens on first access and the result is cached for
//! the lifetime of the bound instance.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`SettingName`, `SettingValue`, field
//!   declarations, errors) and the `SettingsResolver` trait
//! - **Ports**: Trait definitions for the host configuration object
//!   (`SettingsHost`) and the override lookup strategy (`OverrideLookup`)
//! - **Adapters**: Lookup strategies (prefix and table) and host
//!   implementations (in-memory, process environment)
//! - **Registry**: Process-wide mapping from string paths to opaque handles,
//!   the startup-time replacement for dynamic module/class loading
//! - **Service**: Schema declaration, binding, and the lazy resolver facade
//!
//! # Override strategies
//!
//! Two strategies mirror the two ways a host can spell its overrides:
//!
//! - **Prefix**: field `SOME_NUMBER` under prefix `MY_APP` is overridden by
//!   the host attribute `MY_APP_SOME_NUMBER`
//! - **Table**: field `SOME_NUMBER` is overridden by key `SOME_NUMBER` of the
//!   host table attribute named at declaration time
//!
//! # Feature Flags
//!
//! - `env`: Enable the process-environment host (default)
//!
//! # Quick Start
//!
//! ```rust
//! use appcfg::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> appcfg::domain::Result<()> {
//! let host = Arc::new(MemoryHost::new().with_attr("MY_APP_SOME_NUMBER", "42"));
//!
//! let schema = SettingsSchema::with_prefix("MY_APP")
//!     .value("SOME_NUMBER", "30")
//!     .build();
//!
//! let settings = schema.bind(host);
//! assert_eq!(settings.value_str("SOME_NUMBER")?.as_i32("SOME_NUMBER")?, 42);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        FieldDefault, FieldKind, OverrideValue, Resolved, Result, SettingHandle, SettingName,
        SettingValue, SettingsError, SettingsResolver,
    };
    pub use crate::ports::{OverrideLookup, SettingsHost};

    pub use crate::adapters::{MemoryHost, PrefixLookup, TableLookup};
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvHost;

    pub use crate::registry;
    pub use crate::service::{AppSettings, SchemaBuilder, SettingsSchema};
}
