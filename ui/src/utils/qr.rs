//! QR code rasterization.

use egui::{Color32, ColorImage};

/// Quiet-zone border around the code, in modules. Scanners expect at
/// least four light modules on every side.
const QUIET_ZONE_MODULES: usize = 4;

/// Render `data` as a QR code image roughly `target_size` pixels wide.
///
/// The code is scaled by an integer factor (minimum 1) toward
/// `target_size` and wrapped in a white quiet-zone border, so the same
/// image both displays and exports cleanly. Returns `None` if the data is
/// too long to encode.
pub fn generate_qr_image(data: &str, target_size: usize) -> Option<ColorImage> {
    let code = qrcode::QrCode::new(data.as_bytes()).ok()?;
    let qr_width = code.width();
    let bordered_width = qr_width + 2 * QUIET_ZONE_MODULES;

    let scale = (target_size / bordered_width).max(1);
    let actual_size = bordered_width * scale;

    let mut pixels = vec![Color32::WHITE; actual_size * actual_size];

    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if matches!(color, qrcode::Color::Dark) {
                // Fill scaled pixels, offset past the quiet zone
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = (x + QUIET_ZONE_MODULES) * scale + dx;
                        let py = (y + QUIET_ZONE_MODULES) * scale + dy;
                        pixels[py * actual_size + px] = Color32::BLACK;
                    }
                }
            }
        }
    }

    Some(ColorImage::new([actual_size, actual_size], pixels))
}
