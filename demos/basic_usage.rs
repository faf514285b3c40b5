// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage of the appcfg crate.
//!
//! This demo shows how a reusable module declares its settings schema and how
//! the host application overrides individual fields:
//!
//! 1. Declaring fields with defaults and required fields
//! 2. Binding the schema to a host configuration object
//! 3. Reading values with typed conversion
//! 4. Registering and resolving an opaque handle
//!
//! Run with: cargo run --example basic_usage

use appcfg::prelude::*;
use std::sync::Arc;

/// A stand-in for a pluggable backend the host selects by path.
#[derive(Debug)]
struct SqlBackend {
    dsn: &'static str,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== appcfg: Basic Usage ===\n");

    // The host application registers its pluggable pieces at startup.
    registry::register("demo.backends.sql", SqlBackend { dsn: "postgres://localhost/demo" });

    // The host's configuration object. A real application would implement
    // SettingsHost over its own config structure instead.
    let host = Arc::new(
        MemoryHost::new()
            .with_attr("MY_APP_SOME_NUMBER", "42")
            .with_attr("MY_APP_BACKEND", "demo.backends.sql"),
    );

    // The reusable module declares its schema once.
    let schema = SettingsSchema::with_prefix("MY_APP")
        .value("STR_SETTING", "default")
        .value("SOME_NUMBER", "30")
        .handle_path("BACKEND", "demo.backends.null")
        .build();

    let settings = schema.bind(host);

    // Untouched fields keep their defaults.
    let s = settings.value_str("STR_SETTING")?;
    println!("STR_SETTING = {} (default)", s);

    // Overridden fields reflect the host, with typed conversion.
    let n = settings.value_str("SOME_NUMBER")?.as_i32("SOME_NUMBER")?;
    println!("SOME_NUMBER = {} (overridden by host)", n);

    // Handle fields resolve through the registry on first access.
    let backend = settings.handle_as::<SqlBackend>(&SettingName::from("BACKEND"))?;
    println!("BACKEND dsn = {}", backend.dsn);

    println!("\n=== Demo complete ===");
    Ok(())
}
