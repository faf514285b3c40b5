// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-global host slot.
//!
//! Many applications keep a single process-wide configuration object rather
//! than threading one around. This module supports that shape: the embedding
//! application installs its host once at startup, and reusable modules bind
//! schemas with
//! [`crate::service::SettingsSchema::bind_global`] without threading the host
//! through their APIs.

use crate::ports::SettingsHost;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

static GLOBAL_HOST: Lazy<RwLock<Option<Arc<dyn SettingsHost>>>> =
    Lazy::new(|| RwLock::new(None));

/// Installs `host` as the process-global host, replacing any previous one.
///
/// Instances already bound keep the host they were bound with; installation
/// only affects later `bind_global` calls.
pub fn install_host(host: Arc<dyn SettingsHost>) {
    tracing::debug!("installing process-global settings host '{}'", host.name());
    let mut guard = GLOBAL_HOST.write().unwrap();
    *guard = Some(host);
}

/// Returns the installed process-global host, if any.
pub fn installed_host() -> Option<Arc<dyn SettingsHost>> {
    GLOBAL_HOST.read().unwrap().clone()
}
