// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the process-global host slot.
//!
//! These live in their own test binary: the slot is process-wide, so the
//! empty-slot failure can only be observed in a process where nothing has
//! installed a host yet.

use appcfg::prelude::*;
use appcfg::service::install_host;
use std::sync::Arc;

// A single sequential test: asserting the empty slot, installing, and binding
// must happen in this order within one process.
#[test]
fn test_bind_global_requires_installed_host() {
    let schema = SettingsSchema::with_prefix("GLOBAL_APP")
        .value("FIELD", "default")
        .build();

    let err = schema.bind_global().unwrap_err();
    assert!(matches!(err, SettingsError::HostNotInstalled));

    install_host(Arc::new(
        MemoryHost::new().with_attr("GLOBAL_APP_FIELD", "from host"),
    ));

    let settings = schema.bind_global().unwrap();
    assert_eq!(settings.value_str("FIELD").unwrap().as_str(), "from host");
}
