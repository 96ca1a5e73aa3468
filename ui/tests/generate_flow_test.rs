//! Integration tests for the generate flow: fill the form, submit, and
//! check what the app renders.
//!
//! Field contents are seeded through the app state (as the form widget
//! itself would after keystrokes) and the submit goes through a real
//! button click via egui_kittest.

use egui_kittest::Harness;
use kittest::Queryable;
use upiqr_ui::UpiQrApp;
use upiqr_ui::state::State;

fn app_harness<'a>(state: State) -> Harness<'a, UpiQrApp> {
    let app = UpiQrApp::new(state);
    Harness::new_eframe(|_| app)
}

fn filled_state(handle: &str, amount: &str) -> State {
    let mut state = State::default();
    state.request.upi_handle = handle.to_owned();
    state.request.amount = amount.to_owned();
    state
}

fn click_generate(harness: &mut Harness<'_, UpiQrApp>) {
    harness.get_by_label("Generate QR Code").click();
    for _ in 0..3 {
        harness.step();
    }
}

#[test]
fn initial_frame_shows_form_without_qr_panel() {
    let mut harness = app_harness(State::default());
    harness.step();

    assert!(harness.query_by_label("UPI QR Code Generator").is_some());
    assert!(harness.query_by_label("UPI ID").is_some());
    assert!(harness.query_by_label("Amount (INR)").is_some());
    assert!(
        harness
            .query_by_label("Scan this QR code with any UPI app to pay")
            .is_none(),
        "no QR panel before the first submit"
    );
}

#[test]
fn valid_submit_renders_qr_panel_with_actions() {
    let mut harness = app_harness(filled_state("john.doe@upi", "500"));

    click_generate(&mut harness);

    assert!(
        harness
            .query_by_label("Scan this QR code with any UPI app to pay")
            .is_some(),
        "QR panel should appear after a valid submit"
    );
    assert!(harness.query_by_label("Copy Link").is_some());

    let state = &harness.state().state;
    let qr = state.qr.as_ref().expect("QR display should be stored");
    assert_eq!(
        qr.pay_uri.as_str(),
        "upi://pay?pa=john.doe@upi&am=500&cu=INR"
    );
    assert!(state.error.is_none());
}

#[test]
fn failed_submit_after_success_clears_the_panel() {
    let mut harness = app_harness(filled_state("john.doe@upi", "500"));
    click_generate(&mut harness);
    assert!(harness.query_by_label("Copy Link").is_some());

    // The user edits the amount into something invalid and resubmits.
    harness.state_mut().state.request.amount = "0".to_owned();
    click_generate(&mut harness);

    assert!(harness.query_by_label("Please enter a valid amount.").is_some());
    assert!(
        harness
            .query_by_label("Scan this QR code with any UPI app to pay")
            .is_none(),
        "stale QR panel must not outlive a failed submit"
    );
    assert!(harness.state().state.qr.is_none());
}

#[test]
fn resubmit_replaces_the_previous_payload() {
    let mut harness = app_harness(filled_state("john.doe@upi", "500"));
    click_generate(&mut harness);

    harness.state_mut().state.request.amount = "750".to_owned();
    click_generate(&mut harness);

    let state = &harness.state().state;
    let qr = state.qr.as_ref().expect("QR display should be stored");
    assert_eq!(
        qr.pay_uri.as_str(),
        "upi://pay?pa=john.doe@upi&am=750&cu=INR"
    );
}

#[test]
fn copy_button_is_absent_until_a_code_is_rendered() {
    let mut harness = app_harness(filled_state("badhandle", "500"));

    assert!(harness.query_by_label("Copy Link").is_none());
    click_generate(&mut harness);
    assert!(
        harness.query_by_label("Copy Link").is_none(),
        "failed submit must not surface copy/save actions"
    );
}
