//! Integration tests for point-file export.
#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use hilbert::{
        CurveParams, error,
        export::{load_points, read_points, save_points, write_points},
    };
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn saved_file_round_trips() -> error::Result<()> {
        let td = tempdir()?;
        let dir = td.path();

        let points = CurveParams::square(3, 333).curve()?.generate();
        let written = save_points(&dir.join("curve"), &points)?;
        assert_eq!(written, dir.join("curve.txt"));

        let text = fs::read_to_string(&written)?;
        assert_eq!(text.lines().count(), 64);
        assert_eq!(text.lines().next(), Some(points[0].to_string().as_str()));

        assert_eq!(load_points(&written)?, points);
        Ok(())
    }

    #[test]
    fn lazy_walk_writes_same_text() -> error::Result<()> {
        let curve = CurveParams::square(4, 1000).curve()?;
        let mut eager = Vec::new();
        let mut lazy = Vec::new();
        write_points(&mut eager, curve.generate())?;
        write_points(&mut lazy, curve.points())?;
        assert_eq!(eager, lazy);
        Ok(())
    }

    proptest! {
        #[test]
        fn text_round_trip(depth in 0u32..=4, width in 0u32..10_000, height in 0u32..10_000) {
            let params = CurveParams { depth, width, height };
            let points = params.curve().unwrap().generate();
            let mut buf = Vec::new();
            write_points(&mut buf, points.iter().copied()).unwrap();
            let back = read_points(Cursor::new(buf)).unwrap();
            prop_assert_eq!(back, points);
        }
    }
}
