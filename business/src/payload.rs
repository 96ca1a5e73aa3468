//! Payment request validation and pay-URI construction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{PayloadError, PayloadOptions};

/// A UPI virtual payment address: 2-256 characters drawn from letters,
/// digits, `.`, `-` and `_`, then `@`, then 2-64 letters.
static VPA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.\-_]{2,256}@[A-Za-z]{2,64}$").expect("VPA pattern compiles")
});

/// Raw form input, exactly as typed.
///
/// Both fields are untrusted text; the UI mutates them on every keystroke
/// and nothing is persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub upi_handle: String,
    pub amount: String,
}

/// A validated `upi://pay` deep link.
///
/// Only ever constructed by [`UpiPayloadBuilder::build`] from a request
/// that passed every check, so holders can hand it to a QR renderer or the
/// clipboard without re-validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayUri(String);

impl PayUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PayUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates payment requests and formats the pay URI.
///
/// Stateless apart from its [`PayloadOptions`]; every call to
/// [`build`](Self::build) runs the same checks on a fresh request.
#[derive(Debug, Clone, Default)]
pub struct UpiPayloadBuilder {
    options: PayloadOptions,
}

impl UpiPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PayloadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PayloadOptions {
        &self.options
    }

    /// Validate `request` and build its pay URI.
    ///
    /// Checks run in a fixed order and stop at the first failure, so the
    /// user-facing message is deterministic: presence of both fields, then
    /// the handle pattern, then the amount (positive, finite, within the
    /// configured ceiling if any).
    pub fn build(&self, request: &PaymentRequest) -> Result<PayUri, PayloadError> {
        let PaymentRequest { upi_handle, amount } = request;

        if upi_handle.is_empty() || amount.is_empty() {
            return Err(reject(PayloadError::MissingFields));
        }

        if !VPA_PATTERN.is_match(upi_handle) {
            return Err(reject(PayloadError::BadHandleFormat));
        }

        let value = match amount.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return Err(reject(PayloadError::BadAmount)),
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(reject(PayloadError::BadAmount));
        }
        if let Some(ceiling) = self.options.amount_ceiling {
            if value > ceiling {
                return Err(reject(PayloadError::BadAmount));
            }
        }

        // The accepted handle alphabet and a parsed decimal are URI-safe,
        // so plain formatting suffices; the amount is carried as typed.
        let uri = if self.options.include_currency_code {
            format!("upi://pay?pa={upi_handle}&am={amount}&cu=INR")
        } else {
            format!("upi://pay?pa={upi_handle}&am={amount}")
        };

        Ok(PayUri(uri))
    }
}

fn reject(error: PayloadError) -> PayloadError {
    log::debug!("payment request rejected: {error:?}");
    error
}
