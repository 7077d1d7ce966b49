//! Utility modules for display formatting and host information.

pub mod format;
pub mod sysinfo;
