use anyhow::{Result, anyhow};
use image::RgbaImage;

/// Largest initial window side, so huge canvases still open on screen.
const MAX_WINDOW_SIDE: f32 = 1000.0;

/// eframe app showing a single image inside scroll bars.
struct ImageViewer {
    /// Pixels waiting to be uploaded on the first frame.
    pending: Option<egui::ColorImage>,
    /// Uploaded texture.
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for ImageViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture("image", image, egui::TextureOptions::NEAREST));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.image((texture.id(), texture.size_vec2()));
                });
            }
        });
    }
}

/// Open a window showing `image`; returns when the window is closed.
pub fn view_image(title: &str, image: RgbaImage) -> Result<()> {
    let size = [image.width() as usize, image.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    let inner = [
        (size[0] as f32).clamp(200.0, MAX_WINDOW_SIDE),
        (size[1] as f32).clamp(200.0, MAX_WINDOW_SIDE),
    ];

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner)
            .with_title(title),
        ..Default::default()
    };

    let viewer = ImageViewer {
        pending: Some(pixels),
        texture: None,
    };
    eframe::run_native(title, native_options, Box::new(move |_cc| Ok(Box::new(viewer))))
        .map_err(|e| anyhow!(e.to_string()))
}
