//! Core library for generating Hilbert curves.
//!
//! A curve is described by an origin, two step vectors spanning its bounding
//! rectangle, and a recursion depth. Generation produces `4^depth` points in
//! traversal order; the CLI and GUI crates in this workspace turn those points
//! into line segments, raster images and text exports.
//!
//! ```
//! use hilbert::{CurveParams, error};
//!
//! # fn main() -> error::Result<()> {
//! let curve = CurveParams::square(1, 4).curve()?;
//! let points = curve.generate();
//! assert_eq!(points.len(), 4);
//! assert_eq!((points[0].x, points[0].y), (1.0, 1.0));
//! # Ok(())
//! # }
//! ```

/// Recursive and lazy Hilbert point generation.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Plain-text point export and import.
pub mod export;
/// Starting point and canvas sizing helpers.
pub mod frame;
/// Points and step vectors.
pub mod geometry;
/// User-facing curve parameters.
pub mod params;

pub use crate::{
    curve::{Curve, MAX_DEPTH, Points, generate},
    frame::{Extent, canvas_extent, starting_point},
    geometry::{Point, Vector},
    params::CurveParams,
};
