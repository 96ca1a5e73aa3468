use egui::{Response, RichText, Ui};
use upiqr_utils::version_info;

/// Shows the build version in the menu bar.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.label(RichText::new(version_info::format_version()).weak())
}
