// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use appcfg::adapters::MemoryHost;
use appcfg::service::{SchemaBuilder, SettingsSchema};

/// Builds a host shaped like a typical embedding application: the same
/// overrides spelled once as prefixed attributes (for `MY_APP`) and once as a
/// table (`MY_SECOND_APP`).
#[allow(dead_code)]
pub fn populated_host() -> MemoryHost {
    MemoryHost::new()
        .with_attr("MY_APP_STR_SETTING", "override")
        .with_attr("MY_APP_SOME_NUMBER", "42")
        .with_attr("MY_APP_UNCONFIGURED_OVERRIDE", "supplied by host")
        .with_table_entry("MY_SECOND_APP", "STR_SETTING", "override")
        .with_table_entry("MY_SECOND_APP", "SOME_NUMBER", "42")
        .with_table_entry("MY_SECOND_APP", "UNCONFIGURED_OVERRIDE", "supplied by host")
}

/// Declares the field set used across the strategy tests.
#[allow(dead_code)]
pub fn declare_fields(builder: SchemaBuilder) -> SettingsSchema {
    builder
        .value("STR_SETTING", "default")
        .value("STR_SETTING_UNTOUCHED", "untouched default")
        .value("SOME_NUMBER", "30")
        .required("UNCONFIGURED_OVERRIDE")
        .required("UNCONFIGURED_SETTING")
        .build()
}
