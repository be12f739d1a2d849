//! PNG export of rendered canvases.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use hilbert::export::with_default_extension;
use image::RgbaImage;
use log::info;
use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

/// Extension appended to image files saved without one.
pub const PNG_EXTENSION: &str = "png";

/// Screen resolution recorded in exported images.
pub const DPI: f64 = 96.0;

/// Pixels per metre for [`DPI`], as stored in the PNG `pHYs` chunk.
fn pixels_per_metre() -> u32 {
    (DPI / 0.0254).round() as u32
}

/// Write `image` as an 8-bit RGBA PNG tagged with 96 DPI.
///
/// `.png` is appended when `path` has no extension; the path actually written
/// is returned. Canvases are painted over their background, so the stored
/// straight alpha equals the premultiplied alpha of the on-screen surface.
pub fn save_png(path: &Path, image: &RgbaImage) -> Result<PathBuf> {
    if image.width() == 0 || image.height() == 0 {
        bail!(
            "cannot save an empty {}x{} image",
            image.width(),
            image.height()
        );
    }

    let path = with_default_extension(path, PNG_EXTENSION);
    let file = File::create(&path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let ppm = pixels_per_metre();
    encoder.set_pixel_dims(Some(PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;

    info!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::Rgba;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn writes_dpi_and_pixels() -> Result<()> {
        let td = tempdir()?;
        let mut image = RgbaImage::from_pixel(5, 3, Rgba([10, 20, 30, 255]));
        image.put_pixel(4, 2, Rgba([200, 100, 50, 255]));

        let path = save_png(&td.path().join("canvas"), &image)?;
        assert_eq!(path, td.path().join("canvas.png"));

        let decoder = png::Decoder::new(fs::File::open(&path)?);
        let mut reader = decoder.read_info()?;
        let dims = reader.info().pixel_dims.expect("pHYs chunk present");
        assert_eq!(dims.xppu, 3780);
        assert_eq!(dims.yppu, 3780);
        assert_eq!(dims.unit, Unit::Meter);

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        assert_eq!((frame.width, frame.height), (5, 3));
        assert_eq!(&buf[..frame.buffer_size()], image.as_raw().as_slice());
        Ok(())
    }

    #[test]
    fn rejects_empty_images() {
        let td = tempdir().unwrap();
        let path = td.path().join("empty.png");
        assert!(save_png(&path, &RgbaImage::new(0, 0)).is_err());
        assert!(!path.exists());
    }
}
