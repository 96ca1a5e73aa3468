use upiqr_business::{PaymentRequest, UpiPayloadBuilder};

use crate::widgets::QrDisplay;

/// The main application state.
///
/// Owned by the eframe app and mutated synchronously inside the frame
/// callback; nothing here crosses a thread boundary or survives the
/// process.
pub struct State {
    /// Raw form input, edited in place by the form widget.
    pub request: PaymentRequest,
    /// Validates requests and formats pay URIs.
    pub builder: UpiPayloadBuilder,
    /// The most recently rendered QR code, if any.
    pub qr: Option<QrDisplay>,
    /// Inline message from the last failed submit.
    pub error: Option<String>,
    /// egui clock timestamp of the last successful copy, driving the
    /// transient "Copied!" label.
    pub copied_at: Option<f64>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(UpiPayloadBuilder::new())
    }
}

impl State {
    pub fn new(builder: UpiPayloadBuilder) -> Self {
        Self {
            request: PaymentRequest::default(),
            builder,
            qr: None,
            error: None,
            copied_at: None,
        }
    }
}
