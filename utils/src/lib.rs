//! Shared utilities for the UPI QR workspace.
//!
//! Currently this is only build-time version information, surfaced by the
//! UI so a screenshot of the app identifies the build it came from.

pub mod version_info;
