use serde::{Deserialize, Serialize};

/// Caller-owned configuration for pay-URI construction.
///
/// Deployed variants of this utility disagree on two points, so both are
/// explicit options here rather than hard-coded behavior:
///
/// - whether the URI carries the `&cu=INR` currency suffix (default: yes),
/// - whether amounts above some ceiling are rejected (default: no ceiling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOptions {
    /// Append `&cu=INR` to the generated URI.
    pub include_currency_code: bool,
    /// Reject amounts strictly greater than this value.
    pub amount_ceiling: Option<f64>,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        Self {
            include_currency_code: true,
            amount_ceiling: None,
        }
    }
}

impl PayloadOptions {
    /// Options matching the capped deployment variant (ceiling of 100000).
    pub fn with_default_ceiling() -> Self {
        Self {
            amount_ceiling: Some(100_000.0),
            ..Self::default()
        }
    }
}
