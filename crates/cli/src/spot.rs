//! Coordinate labels ("spot coordinates") with persisted formatting settings.
//!
//! Model coordinates are in millimetres. `Unit::M` scales by 0.001, `Unit::Mm` by 1.
//! Static labels print the scaled point; dynamic labels also add the scaled
//! model base point, matching what a live field in the host document shows.

use anyhow::{Context, Result};
use clap::ValueEnum;
use planar_hull::prelude::Point2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MAX_DECIMALS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    M,
    Mm,
}

impl Unit {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Unit::M => 0.001,
            Unit::Mm => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Static,
    Dynamic,
}

/// Last-used label settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotSettings {
    pub decimals: u8,
    pub unit: Unit,
    pub mode: Mode,
}

impl Default for SpotSettings {
    fn default() -> Self {
        Self {
            decimals: 3,
            unit: Unit::M,
            mode: Mode::Dynamic,
        }
    }
}

impl SpotSettings {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let mut s: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing settings {}", path.display()))?;
        s.decimals = s.decimals.min(MAX_DECIMALS);
        Ok(s)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating settings dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Command-line values win over stored ones.
    pub fn overridden(self, decimals: Option<u8>, unit: Option<Unit>, mode: Option<Mode>) -> Self {
        Self {
            decimals: decimals.unwrap_or(self.decimals).min(MAX_DECIMALS),
            unit: unit.unwrap_or(self.unit),
            mode: mode.unwrap_or(self.mode),
        }
    }
}

/// Two-line label `X = …` / `Y = …` for `p` (model units) under `s`.
pub fn spot_label(p: Point2<f64>, base: Point2<f64>, s: &SpotSettings) -> String {
    let f = s.unit.factor();
    let (x, y) = match s.mode {
        Mode::Static => (p.x * f, p.y * f),
        Mode::Dynamic => (p.x * f + base.x * f, p.y * f + base.y * f),
    };
    let d = usize::from(s.decimals.min(MAX_DECIMALS));
    format!("X = {x:.d$}\nY = {y:.d$}")
}
