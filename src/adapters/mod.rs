// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing lookup strategy and host implementations.
//!
//! This module contains concrete implementations of the ports: the two
//! shipped override lookup strategies, and hosts the embedding application
//! can use directly or as a template for wrapping its own configuration.

#[cfg(feature = "env")]
pub mod env;
pub mod memory;
pub mod prefix;
pub mod table;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env::EnvHost;
pub use memory::MemoryHost;
pub use prefix::PrefixLookup;
pub use table::TableLookup;
