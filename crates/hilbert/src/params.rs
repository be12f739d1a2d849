use crate::{
    curve::{Curve, MAX_DEPTH},
    error::{self, Error},
    geometry::{Point, Vector},
};

/// Default recursion depth offered to users.
pub const DEFAULT_DEPTH: u32 = 4;

/// Default canvas length in pixels, for both axes.
pub const DEFAULT_LENGTH: u32 = 1000;

/// Parameters for one curve run, as entered in the dialog or on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Recursion depth.
    pub depth: u32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::square(DEFAULT_DEPTH, DEFAULT_LENGTH)
    }
}

impl CurveParams {
    /// Parameters for a square canvas of side `length`.
    pub fn square(depth: u32, length: u32) -> Self {
        Self {
            depth,
            width: length,
            height: length,
        }
    }

    /// Check the parameters describe a curve we are willing to generate.
    pub fn validate(&self) -> error::Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(Error::DepthTooLarge(self.depth));
        }
        Ok(())
    }

    /// The X-step and Y-step vectors spanning the canvas.
    pub fn vectors(&self) -> (Vector, Vector) {
        (
            Vector::new(f64::from(self.width), 0.0),
            Vector::new(0.0, f64::from(self.height)),
        )
    }

    /// Build the curve anchored at the canvas origin.
    pub fn curve(&self) -> error::Result<Curve> {
        self.validate()?;
        let (x, y) = self.vectors();
        Curve::new(Point::default(), x, y, self.depth)
    }
}
