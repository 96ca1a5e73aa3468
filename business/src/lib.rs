//! Core logic for turning a UPI handle and amount into a `upi://pay` link.
//!
//! This crate is the pure half of the app: it validates untrusted form
//! input and, when valid, formats the canonical pay URI that the UI renders
//! as a QR code. It has no UI dependency and no side effects beyond debug
//! logging, so it behaves identically on native and wasm targets.

mod error;
mod options;
mod payload;

pub use error::PayloadError;
pub use options::PayloadOptions;
pub use payload::{PayUri, PaymentRequest, UpiPayloadBuilder};
