//! Plain-text point files: one `X, Y` record per line, no header.
//!
//! Coordinates are written with Rust's shortest round-tripping float
//! formatting, so reading a file back yields exactly the points written.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{self, Error},
    geometry::Point,
};

/// Extension appended to point files saved without one.
pub const POINTS_EXTENSION: &str = "txt";

/// Write `points` to `writer`, one per line. Returns the number of records.
pub fn write_points<W, I>(mut writer: W, points: I) -> error::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Point>,
{
    let mut count = 0;
    for point in points {
        writeln!(writer, "{point}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Parse one `X, Y` record.
pub fn parse_point(record: &str) -> Option<Point> {
    let (x, y) = record.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Read every point from `reader`. Blank lines are skipped.
pub fn read_points<R: BufRead>(reader: R) -> error::Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let point = parse_point(record).ok_or_else(|| Error::Parse {
            line: idx + 1,
            content: record.to_string(),
        })?;
        points.push(point);
    }
    Ok(points)
}

/// Return `path`, adding `extension` when it has none.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => path.with_extension(extension),
    }
}

/// Save a generated point sequence, returning the path actually written.
///
/// Fails with [`Error::NoData`] and writes nothing when `points` is empty.
pub fn save_points(path: &Path, points: &[Point]) -> error::Result<PathBuf> {
    if points.is_empty() {
        return Err(Error::NoData("data"));
    }
    let path = with_default_extension(path, POINTS_EXTENSION);
    let file = File::create(&path)?;
    let count = write_points(BufWriter::new(file), points.iter().copied())?;
    info!("wrote {count} points to {}", path.display());
    Ok(path)
}

/// Load a point file written by [`save_points`].
pub fn load_points(path: &Path) -> error::Result<Vec<Point>> {
    read_points(BufReader::new(File::open(path)?))
}
