//! Integration tests checking count, bounds and continuity properties.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hilbert::{Curve, CurveParams, Point, Vector, canvas_extent, error, generate, starting_point};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn square_curve(side: f64, depth: u32) -> error::Result<Curve> {
        Curve::new(
            Point::default(),
            Vector::new(side, 0.0),
            Vector::new(0.0, side),
            depth,
        )
    }

    fn curve_has_count(curve: &Curve) {
        let points = curve.generate();
        assert_eq!(
            points.len(),
            4usize.pow(curve.depth()),
            "depth {} produced {} points",
            curve.depth(),
            points.len()
        );
    }

    fn curve_is_continuous(curve: &Curve) {
        let points = curve.generate();
        let extent = curve.canvas_extent();
        let step = extent.width / f64::from(1u32 << curve.depth());
        for (idx, pair) in points.windows(2).enumerate() {
            let distance = pair[0].distance(&pair[1]);
            assert!(
                (distance - step).abs() < EPSILON,
                "curve of depth {} is discontinuous at offset {}: distance between {:?} and {:?} is {}",
                curve.depth(),
                idx,
                pair[0],
                pair[1],
                distance
            );
        }
    }

    fn curve_is_simple(curve: &Curve) {
        let points = curve.generate();
        let distinct: HashSet<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        assert_eq!(
            distinct.len(),
            points.len(),
            "curve of depth {} revisits a point",
            curve.depth()
        );
    }

    macro_rules! curve_tests {
        ($(($side:expr, $depth:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<count_ $side _depth_ $depth>]() -> error::Result<()> {
                        curve_has_count(&square_curve($side as f64, $depth)?);
                        Ok(())
                    }

                    #[test]
                    fn [<continuous_ $side _depth_ $depth>]() -> error::Result<()> {
                        curve_is_continuous(&square_curve($side as f64, $depth)?);
                        Ok(())
                    }

                    #[test]
                    fn [<simple_ $side _depth_ $depth>]() -> error::Result<()> {
                        curve_is_simple(&square_curve($side as f64, $depth)?);
                        Ok(())
                    }
                }
            )*
        };
    }

    curve_tests! {
        (100, 0),
        (4, 1),
        (8, 2),
        (1000, 3),
        (1000, 4),
        (300, 5),
    }

    #[test]
    fn depth_zero_centre() {
        let mut points = Vec::new();
        generate(
            Point::new(0.0, 0.0),
            Vector::new(100.0, 0.0),
            Vector::new(0.0, 100.0),
            0,
            &mut points,
        );
        assert_eq!(points, vec![Point::new(50.0, 50.0)]);
    }

    #[test]
    fn depth_one_visits_corner_cells() -> error::Result<()> {
        let points = square_curve(4.0, 1)?.generate();
        assert_eq!(
            points,
            vec![
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(3.0, 3.0),
                Point::new(1.0, 3.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn depth_two_in_bounds_with_unit_steps() -> error::Result<()> {
        let points = square_curve(8.0, 2)?.generate();
        assert_eq!(points.len(), 16);
        for p in &points {
            assert!((0.0..=8.0).contains(&p.x) && (0.0..=8.0).contains(&p.y));
        }
        for pair in points.windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 2.0);
        }
        Ok(())
    }

    #[test]
    fn path_starts_at_starting_point() -> error::Result<()> {
        for depth in 0..=6 {
            let params = CurveParams::square(depth, 1000);
            let (x, y) = params.vectors();
            let points = params.curve()?.generate();
            assert_eq!(starting_point(x, y, depth), points[0]);
        }
        Ok(())
    }

    #[test]
    fn non_square_canvas_keeps_axis_steps() -> error::Result<()> {
        let params = CurveParams {
            depth: 3,
            width: 800,
            height: 200,
        };
        let points = params.curve()?.generate();
        for pair in points.windows(2) {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            assert!(
                (dx == 100.0 && dy == 0.0) || (dx == 0.0 && dy == 25.0),
                "unexpected step {dx}x{dy}"
            );
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn points_stay_inside_canvas(depth in 0u32..=6, width in 0u32..4000, height in 0u32..4000) {
            let params = CurveParams { depth, width, height };
            let curve = params.curve().unwrap();
            let (x, y) = params.vectors();
            let extent = canvas_extent(x, y);
            let points = curve.generate();
            prop_assert_eq!(points.len(), curve.point_count());
            for p in points {
                prop_assert!(p.x >= 0.0 && p.x <= extent.width);
                prop_assert!(p.y >= 0.0 && p.y <= extent.height);
            }
        }

        #[test]
        fn lazy_walk_agrees(depth in 0u32..=5, side in 1.0f64..5000.0) {
            let curve = square_curve(side, depth).unwrap();
            prop_assert_eq!(curve.points().collect::<Vec<_>>(), curve.generate());
        }

        #[test]
        fn square_steps_are_uniform(depth in 1u32..=6, side in 1.0f64..5000.0) {
            let curve = square_curve(side, depth).unwrap();
            let step = side / f64::from(1u32 << depth);
            let points = curve.generate();
            for pair in points.windows(2) {
                prop_assert!((pair[0].distance(&pair[1]) - step).abs() < 1e-6 * side.max(1.0));
            }
        }
    }
}
