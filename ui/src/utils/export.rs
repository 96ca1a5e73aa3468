//! PNG export for the rendered QR code (native only).

use egui::ColorImage;
use image::ImageEncoder as _;
use std::path::Path;

/// Default file name offered in the save dialog.
const DEFAULT_FILE_NAME: &str = "upi-qr-code.png";

/// Ask the user where to save the QR code and write it as a PNG.
///
/// Dismissing the dialog is not an error; encode and write failures are
/// logged and the app keeps running.
pub fn save_qr_png(image: &ColorImage) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name(DEFAULT_FILE_NAME)
        .set_title("Save QR code")
        .save_file()
    else {
        log::debug!("save dialog dismissed");
        return;
    };

    match encode_png(image) {
        Ok(data) => write_png(&path, &data),
        Err(e) => log::error!("Failed to encode QR code as PNG: {e}"),
    }
}

fn write_png(path: &Path, data: &[u8]) {
    match std::fs::write(path, data) {
        Ok(()) => log::info!("QR code saved to {}", path.display()),
        Err(e) => log::error!("Failed to write {}: {e}", path.display()),
    }
}

/// Encode an egui color image as PNG bytes.
fn encode_png(image: &ColorImage) -> Result<Vec<u8>, image::ImageError> {
    let width = image.width() as u32;
    let height = image.height() as u32;

    let mut rgba = Vec::with_capacity(image.pixels.len() * 4);
    for pixel in &image.pixels {
        rgba.extend_from_slice(&pixel.to_array());
    }

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
    encoder.write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)?;

    Ok(png_data)
}
