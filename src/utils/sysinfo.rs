//! System information utilities.

use sysinfo::System;

use crate::config::FALLBACK_HOSTNAME;

/// Hostname for the prompt, or [`FALLBACK_HOSTNAME`] when unavailable.
pub fn hostname() -> String {
    System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string())
}
