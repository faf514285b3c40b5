// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing schema declaration and the resolver facade.
//!
//! This module contains `SettingsSchema`/`SchemaBuilder` (the declaration
//! side), `AppSettings` (the lazily resolving, caching instance), and the
//! optional process-global host slot.

pub mod app_settings;
pub mod global;
pub mod schema;

// Re-export commonly used types
pub use app_settings::AppSettings;
pub use global::{install_host, installed_host};
pub use schema::{SchemaBuilder, SettingsSchema};
