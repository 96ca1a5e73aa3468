use serde::{Deserialize, Serialize};

/// Why a payment request was rejected.
///
/// The variants are mutually exclusive and checked in declaration order;
/// the first failing check wins so the user always sees a deterministic
/// message. The `Display` strings are shown inline in the form as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PayloadError {
    /// One or both of the input fields were left empty.
    #[error("Please enter both UPI ID and amount.")]
    MissingFields,

    /// The handle does not look like a UPI virtual payment address.
    #[error("Invalid UPI ID format.")]
    BadHandleFormat,

    /// The amount is not a positive finite number, or exceeds the
    /// configured ceiling.
    #[error("Please enter a valid amount.")]
    BadAmount,
}
