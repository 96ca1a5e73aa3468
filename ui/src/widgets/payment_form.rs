//! The payment form: UPI handle and amount fields plus the generate button.
//!
//! Validation happens on submit (button click or Enter in the amount
//! field); the outcome replaces whatever the previous submit produced.

use egui::{Response, TextureOptions, Ui};

use crate::state::State;
use crate::utils::{colors, qr};

use super::QrDisplay;

/// Pixel width the QR code is rasterized at.
const QR_TARGET_SIZE: usize = 380;

/// Renders the form and runs validation when the user submits it.
pub fn payment_form(state: &mut State, ui: &mut Ui) -> Response {
    let mut submitted = false;

    let response = ui
        .vertical(|ui| {
            ui.label("UPI ID");
            ui.add(
                egui::TextEdit::singleline(&mut state.request.upi_handle)
                    .hint_text("yourname@upi"),
            );
            ui.add_space(8.0);

            ui.label("Amount (INR)");
            let amount_response = ui.add(
                egui::TextEdit::singleline(&mut state.request.amount).hint_text("Enter amount"),
            );

            // Check for Enter key press
            if amount_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            ui.add_space(16.0);

            if ui.button("Generate QR Code").clicked() {
                submitted = true;
            }

            // Show inline error from the previous submit, if any
            if let Some(error) = &state.error {
                ui.add_space(8.0);
                ui.colored_label(colors::COLOR_RED, error);
            }
        })
        .response;

    if submitted {
        generate(state, ui.ctx());
    }

    response
}

/// Validate the current request and replace the rendered outcome.
pub(crate) fn generate(state: &mut State, ctx: &egui::Context) {
    state.copied_at = None;

    match state.builder.build(&state.request) {
        Ok(pay_uri) => match qr::generate_qr_image(pay_uri.as_str(), QR_TARGET_SIZE) {
            Some(image) => {
                let texture =
                    ctx.load_texture("upi_pay_qr", image.clone(), TextureOptions::NEAREST);
                state.error = None;
                state.qr = Some(QrDisplay {
                    pay_uri,
                    image,
                    texture,
                });
            }
            None => {
                log::error!("QR encoding failed for pay URI of {} bytes", pay_uri.as_str().len());
                state.error = Some("Failed to render the QR code.".to_owned());
                state.qr = None;
            }
        },
        Err(error) => {
            state.error = Some(error.to_string());
            state.qr = None;
        }
    }
}

#[cfg(test)]
mod payment_form_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;

    fn form_harness<'a>(state: State) -> Harness<'a, State> {
        Harness::new_ui_state(
            |ui, state: &mut State| {
                super::payment_form(state, ui);
            },
            state,
        )
    }

    #[test]
    fn renders_labeled_fields_and_button() {
        let harness = form_harness(State::default());

        assert!(harness.query_by_label("UPI ID").is_some());
        assert!(harness.query_by_label("Amount (INR)").is_some());
        assert!(harness.query_by_label("Generate QR Code").is_some());
    }

    #[test]
    fn empty_submit_shows_missing_fields_message() {
        let mut harness = form_harness(State::default());

        harness.get_by_label("Generate QR Code").click();
        harness.step();
        harness.step();

        assert!(
            harness
                .query_by_label("Please enter both UPI ID and amount.")
                .is_some(),
            "missing-fields message should be shown inline"
        );
    }

    #[test]
    fn bad_handle_submit_shows_format_message() {
        let mut state = State::default();
        state.request.upi_handle = "badhandle".to_owned();
        state.request.amount = "500".to_owned();
        let mut harness = form_harness(state);

        harness.get_by_label("Generate QR Code").click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label("Invalid UPI ID format.").is_some());
    }

    #[test]
    fn valid_submit_clears_previous_error() {
        let mut state = State::default();
        state.request.upi_handle = "john.doe@upi".to_owned();
        state.request.amount = "500".to_owned();
        state.error = Some("Please enter a valid amount.".to_owned());
        let mut harness = form_harness(state);

        harness.get_by_label("Generate QR Code").click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label("Please enter a valid amount.").is_none());
        let state = harness.state();
        assert!(state.error.is_none());
        assert!(state.qr.is_some(), "valid submit should render a QR code");
    }
}
