mod payment_form;
mod qr_panel;
mod version_label;

pub use payment_form::payment_form;
pub use qr_panel::{QrDisplay, qr_panel};
pub use version_label::version_label;
