// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the adapters layer
//! implements: the host configuration object supplied by the embedding
//! application, and the lookup strategy that maps field names onto it.

pub mod host;
pub mod lookup;

// Re-export commonly used types
pub use host::SettingsHost;
pub use lookup::OverrideLookup;
