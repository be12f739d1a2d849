//! Command handlers for the `hilbert` CLI.
//!
//! These functions generate the requested curve, then stream its point list
//! or rasterise it onto a canvas.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use hilbert::{CurveParams, export};
use hilbert_img::{StrokeOptions, render_path};
use image::RgbaImage;
use log::{debug, info};

/// Write the curve's points to `output`, or to stdout when `None`.
///
/// Points are streamed from the lazy walk, so nothing beyond the output buffer
/// is held in memory. Returns the file written, if any.
pub fn points(params: CurveParams, output: Option<&Path>) -> Result<Option<PathBuf>> {
    let curve = params.curve()?;
    debug!("writing {} points at depth {}", curve.point_count(), curve.depth());

    match output {
        Some(path) => {
            let path = export::with_default_extension(path, export::POINTS_EXTENSION);
            let file = File::create(&path)?;
            let count = export::write_points(BufWriter::new(file), curve.points())?;
            info!("wrote {count} points to {}", path.display());
            Ok(Some(path))
        }
        None => {
            let stdout = io::stdout().lock();
            export::write_points(BufWriter::new(stdout), curve.points())?;
            Ok(None)
        }
    }
}

/// Render the curve onto a canvas sized to its extent.
pub fn render(params: CurveParams, stroke: StrokeOptions) -> Result<RgbaImage> {
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    let curve = params.curve()?;
    let (width, height) = curve.canvas_extent().pixel_size();
    if width == 0 || height == 0 {
        bail!("canvas size must be at least 1x1 pixels, got {width}x{height}");
    }
    let points = curve.generate();
    Ok(render_path(
        curve.canvas_extent(),
        curve.starting_point(),
        &points,
        stroke,
    ))
}
