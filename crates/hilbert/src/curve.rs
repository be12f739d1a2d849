//! Hilbert curve construction by recursive quadrant subdivision.
//!
//! At every level the bounding parallelogram spanned by the step vectors `x`
//! and `y` is split into four quadrants. The first quadrant swaps the roles of
//! the two vectors, the middle two keep them, and the last one swaps and
//! negates them. That sign and swap pattern is what keeps consecutive leaves
//! adjacent, so the emitted midpoints form a connected, non-self-intersecting
//! path.

use std::iter::FusedIterator;

use log::debug;

use crate::{
    error::{self, Error},
    frame::{self, Extent},
    geometry::{Point, Vector},
};

/// Largest recursion depth accepted from users: `4^12` = 16,777,216 points.
pub const MAX_DEPTH: u32 = 12;

/// One cell of the subdivision: an origin plus the two local step vectors.
#[derive(Clone, Copy, Debug)]
struct Cell {
    /// Corner the cell's vectors start from.
    origin: Point,
    /// First step vector.
    x: Vector,
    /// Second step vector.
    y: Vector,
    /// Remaining subdivision levels.
    depth: u32,
}

impl Cell {
    /// Centre of the cell, the only point a leaf contributes.
    fn midpoint(&self) -> Point {
        self.origin + (self.x + self.y).half()
    }

    /// The four sub-cells, in traversal order.
    fn quadrants(&self) -> [Self; 4] {
        let hx = self.x.half();
        let hy = self.y.half();
        let depth = self.depth - 1;
        let o = self.origin;
        [
            Self { origin: o, x: hy, y: hx, depth },
            Self { origin: o + hx, x: hx, y: hy, depth },
            Self { origin: o + hx + hy, x: hx, y: hy, depth },
            Self { origin: o + hx + self.y, x: -hy, y: -hx, depth },
        ]
    }
}

/// Append the `4^depth` points of a Hilbert curve to `out`.
///
/// `origin` is the corner the curve starts from; `x_step` and `y_step` span its
/// bounding rectangle. Zero-length vectors are accepted and yield coincident
/// points. The depth is trusted: callers taking depth from users should go
/// through [`Curve::new`], which enforces [`MAX_DEPTH`].
pub fn generate(origin: Point, x_step: Vector, y_step: Vector, depth: u32, out: &mut Vec<Point>) {
    emit(
        Cell {
            origin,
            x: x_step,
            y: y_step,
            depth,
        },
        out,
    );
}

/// Depth-first recursion behind [`generate`].
fn emit(cell: Cell, out: &mut Vec<Point>) {
    if cell.depth == 0 {
        out.push(cell.midpoint());
        return;
    }
    for quadrant in cell.quadrants() {
        emit(quadrant, out);
    }
}

/// A validated curve description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    /// Corner the curve starts from.
    origin: Point,
    /// First step vector.
    x_step: Vector,
    /// Second step vector.
    y_step: Vector,
    /// Recursion depth, at most [`MAX_DEPTH`].
    depth: u32,
}

impl Curve {
    /// Describe a curve, rejecting depths above [`MAX_DEPTH`].
    pub fn new(origin: Point, x_step: Vector, y_step: Vector, depth: u32) -> error::Result<Self> {
        if depth > MAX_DEPTH {
            return Err(Error::DepthTooLarge(depth));
        }
        Ok(Self {
            origin,
            x_step,
            y_step,
            depth,
        })
    }

    /// Recursion depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Corner the curve starts from.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The two step vectors spanning the curve.
    pub fn steps(&self) -> (Vector, Vector) {
        (self.x_step, self.y_step)
    }

    /// Number of points the curve produces (`4^depth`).
    pub fn point_count(&self) -> usize {
        1usize << (2 * self.depth)
    }

    /// Append every point of the curve to `out`.
    pub fn generate_into(&self, out: &mut Vec<Point>) {
        out.reserve(self.point_count());
        generate(self.origin, self.x_step, self.y_step, self.depth, out);
        debug!(
            "generated {} points at depth {}",
            self.point_count(),
            self.depth
        );
    }

    /// Generate the curve into a fresh vector.
    pub fn generate(&self) -> Vec<Point> {
        let mut points = Vec::new();
        self.generate_into(&mut points);
        points
    }

    /// Lazily walk the curve without materialising it.
    pub fn points(&self) -> Points {
        Points {
            stack: vec![Cell {
                origin: self.origin,
                x: self.x_step,
                y: self.y_step,
                depth: self.depth,
            }],
            remaining: self.point_count(),
        }
    }

    /// Point the rendered path moves to before its first segment.
    pub fn starting_point(&self) -> Point {
        let start = frame::starting_point(self.x_step, self.y_step, self.depth);
        self.origin + Vector::new(start.x, start.y)
    }

    /// Size of the surface needed to draw the curve.
    pub fn canvas_extent(&self) -> Extent {
        frame::canvas_extent(self.x_step, self.y_step)
    }
}

/// Iterator over a curve's points, in the same order as [`generate`].
///
/// Uses an explicit stack instead of recursion; the stack never holds more than
/// `3 * depth + 1` cells. Cloning forks the walk at its current position; call
/// [`Curve::points`] again to restart from the beginning.
#[derive(Clone, Debug)]
pub struct Points {
    /// Cells still to visit, next one on top.
    stack: Vec<Cell>,
    /// Points not yet yielded.
    remaining: usize,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(cell) = self.stack.pop() {
            if cell.depth == 0 {
                self.remaining -= 1;
                return Some(cell.midpoint());
            }
            self.stack.extend(cell.quadrants().into_iter().rev());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points {}

impl FusedIterator for Points {}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64, depth: u32) -> Curve {
        Curve::new(
            Point::default(),
            Vector::new(side, 0.0),
            Vector::new(0.0, side),
            depth,
        )
        .unwrap()
    }

    fn coords(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn depth_zero_is_centre() {
        let points = square(100.0, 0).generate();
        assert_eq!(coords(&points), vec![(50.0, 50.0)]);
    }

    #[test]
    fn first_order_curve() {
        let points = square(4.0, 1).generate();
        assert_eq!(
            coords(&points),
            vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]
        );
    }

    #[test]
    fn second_order_curve() {
        let points = square(8.0, 2).generate();
        assert_eq!(points.len(), 16);
        assert_eq!(
            coords(&points[..5]),
            vec![(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0), (5.0, 1.0)]
        );
        assert_eq!(points[15], Point::new(1.0, 7.0));
        for pair in points.windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 2.0);
        }
    }

    #[test]
    fn generate_appends() {
        let mut out = vec![Point::new(-1.0, -1.0)];
        generate(
            Point::default(),
            Vector::new(2.0, 0.0),
            Vector::new(0.0, 2.0),
            0,
            &mut out,
        );
        assert_eq!(coords(&out), vec![(-1.0, -1.0), (1.0, 1.0)]);
    }

    #[test]
    fn origin_offsets_every_point() {
        let base = square(16.0, 2).generate();
        let shifted = Curve::new(
            Point::new(10.0, 20.0),
            Vector::new(16.0, 0.0),
            Vector::new(0.0, 16.0),
            2,
        )
        .unwrap();
        for (a, b) in base.iter().zip(shifted.generate()) {
            assert_eq!(Point::new(a.x + 10.0, a.y + 20.0), b);
        }
        assert_eq!(shifted.starting_point(), Point::new(12.0, 22.0));
    }

    #[test]
    fn zero_vectors_collapse() {
        let curve = Curve::new(Point::new(3.0, 4.0), Vector::default(), Vector::default(), 2)
            .unwrap();
        let points = curve.generate();
        assert_eq!(points.len(), 16);
        assert!(points.iter().all(|p| *p == Point::new(3.0, 4.0)));
    }

    #[test]
    fn depth_limit() {
        let x = Vector::new(1.0, 0.0);
        let y = Vector::new(0.0, 1.0);
        assert!(Curve::new(Point::default(), x, y, MAX_DEPTH).is_ok());
        assert!(matches!(
            Curve::new(Point::default(), x, y, MAX_DEPTH + 1),
            Err(Error::DepthTooLarge(13))
        ));
    }

    #[test]
    fn lazy_walk_matches_recursion() {
        for depth in 0..=6 {
            let curve = square(64.0, depth);
            let walk = curve.points();
            assert_eq!(walk.len(), curve.point_count());
            assert_eq!(walk.collect::<Vec<_>>(), curve.generate());
        }
    }

    #[test]
    fn lazy_walk_is_fused_and_counts_down() {
        let mut walk = square(4.0, 1).points();
        assert_eq!(walk.size_hint(), (4, Some(4)));
        walk.next();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk.by_ref().count(), 3);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn starting_point_is_first_point() {
        for depth in 0..=5 {
            let curve = square(1000.0, depth);
            assert_eq!(curve.starting_point(), curve.generate()[0]);
        }
    }
}
