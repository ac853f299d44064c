//! JSON point and segment files.
//!
//! Points: `{"points": [{"x": 1, "y": 2}, null, ...]}`. A `null` entry is a
//! missing point and is reported by the detector, not here.
//! Segments: `{"count": 1, "segments": [{"start": {..}, "end": {..}}]}`.

use anyhow::{Context, Result};
use collinear::{CollinearPoints, LineSegment, Point};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for PointRow {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point::new(r.x, r.y)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsFile {
    pub points: Vec<Option<PointRow>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRow {
    pub start: PointRow,
    pub end: PointRow,
}

impl From<&LineSegment> for SegmentRow {
    fn from(s: &LineSegment) -> Self {
        Self {
            start: s.start.into(),
            end: s.end.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentsFile {
    pub count: usize,
    pub segments: Vec<SegmentRow>,
}

pub fn read_points(path: &Path) -> Result<Vec<Option<Point>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PointsFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points JSON {}", path.display()))?;
    Ok(file
        .points
        .into_iter()
        .map(|row| row.map(Point::from))
        .collect())
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let file = PointsFile {
        points: points.iter().map(|&p| Some(p.into())).collect(),
    };
    write_json(path, &file)
}

pub fn write_segments(path: &Path, found: &CollinearPoints) -> Result<()> {
    let file = SegmentsFile {
        count: found.number_of_segments(),
        segments: found.iter().map(SegmentRow::from).collect(),
    };
    write_json(path, &file)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use collinear::{DetectCfg, InvalidInput};
    use tempfile::tempdir;

    #[test]
    fn points_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.json");
        let pts = vec![Point::new(0, 0), Point::new(-5, 7)];
        write_points(&path, &pts).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back, vec![Some(pts[0]), Some(pts[1])]);
    }

    #[test]
    fn null_entry_surfaces_as_missing_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.json");
        fs::write(&path, r#"{"points": [{"x": 0, "y": 0}, null]}"#).unwrap();
        let entries = read_points(&path).unwrap();
        assert_eq!(entries, vec![Some(Point::new(0, 0)), None]);
        assert_eq!(
            CollinearPoints::from_optional(&entries, DetectCfg::default()),
            Err(InvalidInput::MissingPoint { index: 1 })
        );
    }

    #[test]
    fn missing_points_array_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"pts": []}"#).unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `points`"));
    }

    #[test]
    fn segments_file_lists_endpoints() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("segments.json");
        let pts: Vec<Point> = (0..4).map(|i| Point::new(i, 2 * i)).collect();
        let found = CollinearPoints::new(&pts).unwrap();
        write_segments(&path, &found).unwrap();
        let parsed: SegmentsFile = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed.count, 1);
        assert_eq!(
            parsed.segments[0],
            SegmentRow {
                start: PointRow { x: 0, y: 0 },
                end: PointRow { x: 3, y: 6 },
            }
        );
    }
}
