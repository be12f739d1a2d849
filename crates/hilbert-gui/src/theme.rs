//! Centralized theme constants for the Hilbert window.
//!
//! Window chrome uses egui's light visuals; the canvas itself is painted in
//! the colours chosen in the parameter dialog.

use egui::Color32;
use image::Rgba;

/// Base window title; the recursion depth is appended after each run.
pub const WINDOW_TITLE: &str = "Hilbert curve";

/// Line colour preselected in the parameter dialog.
pub const DEFAULT_LINE_COLOR: &str = "black";

/// Background colour preselected in the parameter dialog.
pub const DEFAULT_BACK_COLOR: &str = "wheat";

/// Stroke width of the drawn curve, in pixels.
pub const LINE_WIDTH: u32 = 1;

/// Window background before any curve is drawn.
pub const EMPTY_BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);

/// Spacing values used throughout the UI.
pub mod spacing {
    /// Gap between dialog rows.
    pub const ROW: [f32; 2] = [12.0, 8.0];

    /// Space above dialog buttons.
    pub const BUTTONS: f32 = 8.0;
}

/// Window and dialog dimensions.
pub mod window {
    /// Default window size.
    pub const DEFAULT_SIZE: [f32; 2] = [1024.0, 768.0];

    /// Minimum width of the parameter dialog and message boxes.
    pub const DIALOG_MIN_WIDTH: f32 = 260.0;
}

/// Convert an image colour to an egui colour.
pub fn to_color32(color: Rgba<u8>) -> Color32 {
    let [r, g, b, a] = color.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Apply the application's visuals.
pub fn configure_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_convert_directly() {
        assert_eq!(
            to_color32(Rgba([0xf5, 0xde, 0xb3, 0xff])),
            Color32::from_rgb(0xf5, 0xde, 0xb3)
        );
    }
}
