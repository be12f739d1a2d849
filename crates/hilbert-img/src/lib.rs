//! Raster output for Hilbert curves: colour parsing, line rasterisation,
//! PNG export and a minimal image viewer window.

/// Named and hex colour parsing.
pub mod color;
/// PNG export.
pub mod export;
/// Path rasterisation into RGBA images.
pub mod render;
/// Standalone image viewer window.
mod view;

pub use color::{NAMED_COLORS, parse_color};
pub use export::{PNG_EXTENSION, save_png};
pub use render::{Palette, StrokeOptions, render_path};
pub use view::view_image;
