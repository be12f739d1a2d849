//! Desktop window for drawing Hilbert curves using egui/eframe.
//!
//! `Hilbert > Run...` opens the parameter dialog and draws the curve;
//! `File` offers saving the generated points as text or the canvas as PNG.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::Result;
use hilbert::{CurveParams, Extent, Point, error::Error, export};
use hilbert_img::{Palette, StrokeOptions, render_path, save_png};
use image::RgbaImage;
use log::{debug, warn};

/// Curve canvas texture.
mod canvas;
/// Parameter dialog.
pub mod dialog;
/// Centralized theme constants.
pub mod theme;

use canvas::Canvas;
use dialog::{DialogResult, ParamsDialog};

/// Source of [`Drawing`] serials.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Window title reflecting the depth of the last run.
pub fn window_title(depth: u32) -> String {
    format!("{} - recursion depth = {depth}", theme::WINDOW_TITLE)
}

/// One generated curve together with everything needed to draw or export it.
#[derive(Debug, Clone)]
pub struct Drawing {
    /// Recursion depth used.
    pub depth: u32,
    /// Canvas size.
    pub extent: Extent,
    /// Point the path moves to before its first segment.
    pub start: Point,
    /// Generated points, in traversal order.
    pub points: Vec<Point>,
    /// Line and background colours.
    pub palette: Palette,
    /// Identifies this run; clones share it.
    serial: u64,
}

impl Drawing {
    /// Generate the curve described by `params`.
    pub fn run(params: CurveParams, palette: Palette) -> hilbert::error::Result<Self> {
        let curve = params.curve()?;
        Ok(Self {
            depth: curve.depth(),
            extent: curve.canvas_extent(),
            start: curve.starting_point(),
            points: curve.generate(),
            palette,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// Run identifier, distinct for every call to [`Drawing::run`].
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Rasterise the canvas as it appears on screen.
    pub fn render(&self) -> RgbaImage {
        render_path(
            self.extent,
            self.start,
            &self.points,
            StrokeOptions {
                line_width: theme::LINE_WIDTH,
                palette: self.palette,
            },
        )
    }
}

/// Save the drawing's points, or fail with "no data to save".
pub fn save_drawing_points(drawing: Option<&Drawing>, path: &Path) -> Result<PathBuf> {
    let points = drawing.map_or(&[][..], |d| d.points.as_slice());
    Ok(export::save_points(path, points)?)
}

/// Save the drawing's canvas as PNG, or fail with "no image to save".
pub fn save_drawing_image(drawing: Option<&Drawing>, path: &Path) -> Result<PathBuf> {
    match drawing {
        Some(d) if !d.points.is_empty() => save_png(path, &d.render()),
        _ => Err(Error::NoData("image").into()),
    }
}

/// Menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    /// `File > New`: clear the canvas.
    New,
    /// `File > Save Points...`.
    SavePoints,
    /// `File > Save Image...`.
    SaveImage,
    /// `File > Exit`.
    Exit,
    /// `Hilbert > Run...`.
    Run,
}

/// Root eframe application.
#[derive(Default)]
pub struct HilbertApp {
    /// Current drawing, if a run has completed since the last reset.
    drawing: Option<Drawing>,
    /// Open parameter dialog.
    dialog: Option<ParamsDialog>,
    /// Informational message awaiting acknowledgement.
    message: Option<String>,
    /// Rasterised drawing.
    canvas: Canvas,
}

impl HilbertApp {
    /// Construct a new app instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::configure_visuals(&cc.egui_ctx);
        Self::default()
    }

    /// Render the top menu bar, returning the command picked this frame.
    fn show_menu_bar(ctx: &egui::Context) -> Option<MenuAction> {
        let mut action = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for (label, item) in [
                        ("New", MenuAction::New),
                        ("Save Points...", MenuAction::SavePoints),
                        ("Save Image...", MenuAction::SaveImage),
                    ] {
                        if ui.button(label).clicked() {
                            action = Some(item);
                            ui.close();
                        }
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        action = Some(MenuAction::Exit);
                        ui.close();
                    }
                });
                ui.menu_button("Hilbert", |ui| {
                    if ui.button("Run...").clicked() {
                        action = Some(MenuAction::Run);
                        ui.close();
                    }
                });
            });
        });
        action
    }

    /// Carry out a menu command.
    fn apply(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::New => self.drawing = None,
            MenuAction::Run => {
                self.drawing = None;
                self.dialog = Some(ParamsDialog::default());
            }
            MenuAction::SavePoints => {
                let picked = self.pick_path("data", "Text files", export::POINTS_EXTENSION);
                self.report_save(picked, save_drawing_points);
            }
            MenuAction::SaveImage => {
                let picked = self.pick_path("image", "PNG images", hilbert_img::PNG_EXTENSION);
                self.report_save(picked, save_drawing_image);
            }
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    /// Ask for a destination, unless there is nothing to save.
    ///
    /// Returns `Ok(None)` when the user cancels the file dialog.
    fn pick_path(
        &self,
        kind: &'static str,
        filter: &str,
        extension: &str,
    ) -> Result<Option<PathBuf>> {
        if self.drawing.as_ref().is_none_or(|d| d.points.is_empty()) {
            return Err(Error::NoData(kind).into());
        }
        Ok(rfd::FileDialog::new()
            .add_filter(filter, &[extension])
            .set_file_name(format!("hilbert.{extension}"))
            .save_file())
    }

    /// Run `save` on the picked path and surface any failure as a message.
    fn report_save(
        &mut self,
        picked: Result<Option<PathBuf>>,
        save: fn(Option<&Drawing>, &Path) -> Result<PathBuf>,
    ) {
        let outcome = picked.and_then(|path| match path {
            Some(path) => save(self.drawing.as_ref(), &path).map(Some),
            None => Ok(None),
        });
        match outcome {
            Ok(Some(path)) => debug!("saved {}", path.display()),
            Ok(None) => {}
            Err(e) => {
                warn!("save failed: {e:#}");
                self.message = Some(capitalize(&format!("{e:#}")));
            }
        }
    }

    /// Handle the parameter dialog, generating a drawing when confirmed.
    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match dialog.show(ctx) {
            Some(DialogResult::Ok) => {
                let dialog = dialog.clone();
                self.dialog = None;
                let drawn = dialog
                    .palette()
                    .and_then(|palette| Ok(Drawing::run(dialog.params(), palette)?));
                match drawn {
                    Ok(drawing) => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(
                            drawing.depth,
                        )));
                        self.drawing = Some(drawing);
                    }
                    Err(e) => self.message = Some(format!("{e:#}")),
                }
            }
            Some(DialogResult::Cancel) => self.dialog = None,
            None => {}
        }
    }

    /// Show the pending informational message, if any.
    fn show_message(&mut self, ctx: &egui::Context) {
        let Some(text) = self.message.as_deref() else {
            return;
        };
        let mut acknowledged = false;
        egui::Window::new(theme::WINDOW_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(theme::window::DIALOG_MIN_WIDTH);
                ui.label(text);
                ui.add_space(theme::spacing::BUTTONS);
                acknowledged = ui.button("OK").clicked();
            });
        if acknowledged {
            self.message = None;
        }
    }
}

/// Upper-case the first letter of a message.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl eframe::App for HilbertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = Self::show_menu_bar(ctx) {
            self.apply(ctx, action);
        }

        self.canvas.sync(ctx, self.drawing.as_ref());

        let fill = self
            .drawing
            .as_ref()
            .map_or(theme::EMPTY_BACKGROUND, |d| {
                theme::to_color32(d.palette.background)
            });
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(fill))
            .show(ctx, |ui| self.canvas.show(ui));

        self.show_dialog(ctx);
        self.show_message(ctx);
    }
}

/// Launch the native window.
pub fn gui() -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::window::DEFAULT_SIZE)
            .with_title(theme::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        theme::WINDOW_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(HilbertApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
