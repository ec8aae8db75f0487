//! Point and hull files: CSV (polars) or JSON (serde) in, JSON out.

use anyhow::{bail, Context, Result};
use planar_hull::{Hull, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One point on disk. `z` is optional on input and defaults to 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl From<PointRecord> for Point {
    fn from(r: PointRecord) -> Self {
        Point::new(r.x, r.y, r.z)
    }
}

impl From<&Point> for PointRecord {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Hull file layout: CCW `vertices` starting at the anchor, without the
/// repeated closing point; `closed` marks the implicit closing edge.
#[derive(Debug, Serialize)]
pub struct HullRecord {
    pub vertices: Vec<PointRecord>,
    pub closed: bool,
    pub area: f64,
    pub perimeter: f64,
}

impl From<&Hull> for HullRecord {
    fn from(h: &Hull) -> Self {
        Self {
            vertices: h.vertices().iter().map(PointRecord::from).collect(),
            closed: true,
            area: h.signed_area(),
            perimeter: h.perimeter(),
        }
    }
}

/// Read points from `.csv` (columns `x`, `y`, optional `z`) or `.json` (array of records).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!(
            "unsupported input {} (expected .csv or .json)",
            path.display()
        ),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    let zs = match df.column("z") {
        Ok(_) => float_column(&df, "z")?,
        Err(_) => vec![0.0; xs.len()],
    };
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| Point::new(x, y, z))
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("empty `{name}` in row {row}")))
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    Ok(records.into_iter().map(Point::from).collect())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let records: Vec<PointRecord> = points.iter().map(PointRecord::from).collect();
    fs::write(path, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn write_hull(path: &Path, hull: &Hull) -> Result<()> {
    ensure_parent(path)?;
    let record = HullRecord::from(hull);
    fs::write(path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))
}
