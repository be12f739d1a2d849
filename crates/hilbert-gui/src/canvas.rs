//! Curve canvas, rasterised once per run and shown as a texture.

use egui::{ColorImage, TextureHandle, TextureOptions};
use log::{debug, warn};

use crate::Drawing;

/// Texture state for one drawing.
struct Uploaded {
    /// Serial of the drawing the texture shows.
    serial: u64,
    /// Canvas size in pixels.
    size: [usize; 2],
    /// `None` when the canvas is empty or larger than the GPU allows.
    texture: Option<TextureHandle>,
}

/// The window's drawing surface.
#[derive(Default)]
pub struct Canvas {
    /// Texture for the drawing last passed to [`Canvas::sync`].
    uploaded: Option<Uploaded>,
}

impl Canvas {
    /// Follow `drawing`, rasterising and uploading only when it differs from
    /// the one already shown. Returns `true` when a new drawing was taken.
    pub fn sync(&mut self, ctx: &egui::Context, drawing: Option<&Drawing>) -> bool {
        let Some(drawing) = drawing else {
            self.uploaded = None;
            return false;
        };
        if self
            .uploaded
            .as_ref()
            .is_some_and(|up| up.serial == drawing.serial())
        {
            return false;
        }

        let (width, height) = drawing.extent.pixel_size();
        let size = [width as usize, height as usize];
        let max_side = ctx.input(|i| i.max_texture_side);
        let texture = if size.contains(&0) {
            None
        } else if size.iter().any(|&side| side > max_side) {
            warn!("canvas {width}x{height} exceeds the {max_side} px texture limit");
            None
        } else {
            let image = drawing.render();
            let pixels = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            debug!("uploading {width}x{height} canvas texture");
            Some(ctx.load_texture("hilbert-canvas", pixels, TextureOptions::NEAREST))
        };

        self.uploaded = Some(Uploaded {
            serial: drawing.serial(),
            size,
            texture,
        });
        true
    }

    /// Texture of the current drawing, if one could be uploaded.
    pub fn texture(&self) -> Option<&TextureHandle> {
        self.uploaded.as_ref().and_then(|up| up.texture.as_ref())
    }

    /// Show the canvas inside scroll bars.
    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(uploaded) = &self.uploaded else {
            return;
        };
        match &uploaded.texture {
            Some(texture) => {
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.image((texture.id(), texture.size_vec2()));
                    });
            }
            None if !uploaded.size.contains(&0) => {
                let [width, height] = uploaded.size;
                ui.label(format!(
                    "The {width}x{height} canvas is too large to display; use File > Save Image..."
                ));
            }
            None => {}
        }
    }
}
