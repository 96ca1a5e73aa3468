use crate::{state::State, widgets};

/// The application: a single window with the payment form on top and the
/// rendered QR code below it.
pub struct UpiQrApp {
    pub state: State,
}

impl UpiQrApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for UpiQrApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::version_label(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("UPI QR Code Generator");
            ui.label("Generate a QR code for UPI payments");
            ui.add_space(12.0);

            widgets::payment_form(&mut self.state, ui);

            if self.state.qr.is_some() {
                ui.add_space(16.0);
                ui.separator();
                ui.add_space(16.0);
                widgets::qr_panel(&mut self.state, ui);
            }
        });
    }
}
