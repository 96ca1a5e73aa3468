//! Display panel for a rendered QR code, with copy and save actions.

use egui::{Response, TextureHandle, Ui, load::SizedTexture};
use upiqr_business::PayUri;

use crate::state::State;
use crate::utils::clipboard;

/// On-screen size of the QR code, in points.
const QR_DISPLAY_SIZE: f32 = 200.0;

/// How long the "Copied!" label stays up, in seconds.
const COPIED_FLASH_SECS: f64 = 2.0;

/// A successfully rendered QR code.
///
/// Keeps the pay URI for the clipboard, the pixel data for PNG export and
/// the uploaded texture for display. Replaced wholesale on the next
/// successful submit; dropping it frees the texture.
pub struct QrDisplay {
    pub pay_uri: PayUri,
    pub image: egui::ColorImage,
    pub texture: TextureHandle,
}

/// Renders the QR code with its scan hint and action buttons.
///
/// The caller only invokes this while `state.qr` is populated.
pub fn qr_panel(state: &mut State, ui: &mut Ui) -> Response {
    let now = ui.input(|i| i.time);
    let show_copied = state
        .copied_at
        .is_some_and(|at| now - at < COPIED_FLASH_SECS);
    if show_copied {
        // Wake up again so the label reverts without user input.
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(200));
    }

    let mut copy_clicked = false;
    #[cfg(not(target_arch = "wasm32"))]
    let mut save_clicked = false;

    let response = ui
        .vertical_centered(|ui| {
            let Some(qr) = &state.qr else {
                return;
            };

            let sized_texture =
                SizedTexture::new(qr.texture.id(), [QR_DISPLAY_SIZE, QR_DISPLAY_SIZE]);
            ui.add(egui::Image::from_texture(sized_texture));

            ui.add_space(8.0);
            ui.label("Scan this QR code with any UPI app to pay");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let copy_label = if show_copied { "Copied!" } else { "Copy Link" };
                if ui.button(copy_label).clicked() {
                    copy_clicked = true;
                }

                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("Save PNG").clicked() {
                    save_clicked = true;
                }
            });
        })
        .response;

    if copy_clicked {
        if let Some(qr) = &state.qr {
            if clipboard::copy_text(ui.ctx(), qr.pay_uri.as_str()) {
                state.copied_at = Some(now);
                ui.ctx()
                    .request_repaint_after(std::time::Duration::from_millis(200));
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    if save_clicked {
        if let Some(qr) = &state.qr {
            crate::utils::export::save_qr_png(&qr.image);
        }
    }

    response
}
