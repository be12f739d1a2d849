//! Parameter dialog shown by `Hilbert > Run...`.

use anyhow::{Result, anyhow};
use hilbert::{
    CurveParams, MAX_DEPTH,
    params::{DEFAULT_DEPTH, DEFAULT_LENGTH},
};
use hilbert_img::{NAMED_COLORS, Palette, parse_color};

use crate::theme;

/// Largest canvas side the dialog accepts, in pixels.
pub const MAX_LENGTH: u32 = 10_000;

/// How the user closed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Draw with the entered parameters.
    Ok,
    /// Discard the dialog.
    Cancel,
}

/// Values edited in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsDialog {
    /// Recursion depth.
    pub depth: u32,
    /// Canvas side in pixels, used for both axes.
    pub max_length: u32,
    /// Name of the line colour.
    pub line_color: &'static str,
    /// Name of the background colour.
    pub back_color: &'static str,
}

impl Default for ParamsDialog {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_length: DEFAULT_LENGTH,
            line_color: theme::DEFAULT_LINE_COLOR,
            back_color: theme::DEFAULT_BACK_COLOR,
        }
    }
}

impl ParamsDialog {
    /// Curve parameters for the entered depth and length.
    pub fn params(&self) -> CurveParams {
        CurveParams::square(self.depth, self.max_length)
    }

    /// Resolve the chosen colour names.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            foreground: parse_color(self.line_color).map_err(|e| anyhow!(e))?,
            background: parse_color(self.back_color).map_err(|e| anyhow!(e))?,
        })
    }

    /// Draw the dialog; returns `Some` on the frame a button is pressed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogResult> {
        let mut result = None;
        egui::Window::new("Hilbert parameters")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(theme::window::DIALOG_MIN_WIDTH);
                egui::Grid::new("params_grid")
                    .num_columns(2)
                    .spacing(theme::spacing::ROW)
                    .show(ui, |ui| {
                        ui.label("Recursion depth:");
                        ui.add(egui::DragValue::new(&mut self.depth).range(0..=MAX_DEPTH));
                        ui.end_row();

                        ui.label("Max length:");
                        ui.add(
                            egui::DragValue::new(&mut self.max_length)
                                .range(0..=MAX_LENGTH)
                                .suffix(" px"),
                        );
                        ui.end_row();

                        ui.label("Line color:");
                        color_combo(ui, "line_color", &mut self.line_color);
                        ui.end_row();

                        ui.label("Background:");
                        color_combo(ui, "back_color", &mut self.back_color);
                        ui.end_row();
                    });

                ui.add_space(theme::spacing::BUTTONS);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        result = Some(DialogResult::Ok);
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancel);
                    }
                });
            });
        result
    }
}

/// Combo box listing every named colour, each with a swatch.
fn color_combo(ui: &mut egui::Ui, id_salt: &str, selected: &mut &'static str) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(*selected)
        .show_ui(ui, |ui| {
            for &(name, [r, g, b]) in NAMED_COLORS {
                let label = egui::RichText::new(format!("■ {name}"))
                    .color(egui::Color32::from_rgb(r, g, b));
                ui.selectable_value(selected, name, label);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let dialog = ParamsDialog::default();
        assert_eq!(dialog.params(), CurveParams::square(4, 1000));
        let palette = dialog.palette().unwrap();
        assert_eq!(palette.foreground.0, [0, 0, 0, 0xff]);
        assert_eq!(palette.background.0, [0xf5, 0xde, 0xb3, 0xff]);
    }

    #[test]
    fn every_offered_color_parses() {
        for (name, _) in NAMED_COLORS {
            assert!(parse_color(name).is_ok(), "{name} does not parse");
        }
    }
}
