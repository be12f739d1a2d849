//! Rasterise a curve path into an RGBA image.
//!
//! The path is drawn exactly as the window draws it: a move to the starting
//! point followed by one straight segment to every generated point, in order.

use std::iter;

use hilbert::{Extent, Point};
use image::{Rgba, RgbaImage};

/// Colors used when rendering a curve image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color for the curve strokes.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

/// Stroke styling for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for foreground/background.
    pub palette: Palette,
}

/// Pixel containing a canvas coordinate.
fn pixel_of(p: Point) -> (i64, i64) {
    (p.x.floor() as i64, p.y.floor() as i64)
}

/// Square brush moved along each segment of the path.
#[derive(Clone, Copy, Debug)]
struct Pen {
    /// Side of the square, at least one pixel.
    size: u32,
    /// Ink colour.
    color: Rgba<u8>,
}

impl Pen {
    /// Pen for `stroke`, widening zero widths to one pixel.
    fn new(stroke: StrokeOptions) -> Self {
        Self {
            size: stroke.line_width.max(1),
            color: stroke.palette.foreground,
        }
    }

    /// Ink the square over pixel `(x, y)`; even sizes grow right and down.
    /// Pixels outside the canvas are skipped.
    fn stamp(self, img: &mut RgbaImage, (x, y): (i64, i64)) {
        let before = (i64::from(self.size) - 1) / 2;
        let after = i64::from(self.size) / 2;
        for py in y - before..=y + after {
            for px in x - before..=x + after {
                let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                    continue;
                };
                if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                    *pixel = self.color;
                }
            }
        }
    }

    /// Trace `from -> to` with Bresenham's algorithm, stamping every pixel
    /// on the way including both ends.
    fn segment(self, img: &mut RgbaImage, from: Point, to: Point) {
        let (mut x, mut y) = pixel_of(from);
        let end = pixel_of(to);
        let dx = (end.0 - x).abs();
        let dy = -(end.1 - y).abs();
        let (step_x, step_y) = ((end.0 - x).signum(), (end.1 - y).signum());
        let mut err = dx + dy;

        self.stamp(img, (x, y));
        while (x, y) != end {
            let twice = 2 * err;
            if twice >= dy {
                err += dy;
                x += step_x;
            }
            if twice <= dx {
                err += dx;
                y += step_y;
            }
            self.stamp(img, (x, y));
        }
    }
}

/// Draw the path `start -> points[0] -> points[1] -> ...` onto `img`.
pub fn draw_path(img: &mut RgbaImage, start: Point, points: &[Point], stroke: StrokeOptions) {
    let pen = Pen::new(stroke);
    for (&from, &to) in iter::once(&start).chain(points).zip(points) {
        pen.segment(img, from, to);
    }
}

/// Render a canvas of `extent` pixels showing the path through `points`.
pub fn render_path(
    extent: Extent,
    start: Point,
    points: &[Point],
    stroke: StrokeOptions,
) -> RgbaImage {
    let (width, height) = extent.pixel_size();
    let mut canvas = RgbaImage::from_pixel(width, height, stroke.palette.background);
    draw_path(&mut canvas, start, points, stroke);
    canvas
}
