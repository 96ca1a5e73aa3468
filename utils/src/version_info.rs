//! Version information for the application, populated at build time.

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version and commit as a display string, e.g. `v0.1.0+ab12cd3`.
pub fn format_version() -> String {
    format!("v{}+{}", build_version(), build_commit())
}
