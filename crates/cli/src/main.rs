use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar_hull::hull::rand::{draw_points_disk, DiskCfg, ReplayToken};
use planar_hull::hull::find_duplicates;
use planar_hull::prelude::Point2;
use planar_hull::{convex_hull_with, HullCfg};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod points;
mod provenance;
mod spot;

use provenance::Payload;
use spot::{Mode, SpotSettings, Unit};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar convex hulls and coordinate labels")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file and write it as JSON
    Hull {
        /// Points as .csv (columns x, y, optional z) or .json
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = HullCfg::default().eps_orient)]
        eps_orient: f64,
        #[arg(long, default_value_t = HullCfg::default().eps_angle)]
        eps_angle: f64,
        #[arg(long, default_value_t = HullCfg::default().eps_dup)]
        eps_dup: f64,
    },
    /// Write a reproducible random point cloud (uniform disk)
    Sample {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print an `X = … / Y = …` label for a point; remembers the formatting settings
    Spot {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
        decimals: Option<u8>,
        #[arg(long, value_enum)]
        unit: Option<Unit>,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        base_x: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        base_y: f64,
        #[arg(long, default_value = ".planar-hull/spot.json")]
        settings: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            eps_orient,
            eps_angle,
            eps_dup,
        } => hull(
            input,
            out,
            HullCfg {
                eps_orient,
                eps_angle,
                eps_dup,
            },
        ),
        Action::Sample {
            count,
            seed,
            index,
            radius,
            out,
        } => sample(count, ReplayToken { seed, index }, radius, out),
        Action::Spot {
            x,
            y,
            decimals,
            unit,
            mode,
            base_x,
            base_y,
            settings,
        } => {
            let stored = SpotSettings::load(&settings)?;
            let effective = stored.overridden(decimals, unit, mode);
            spot_cmd(
                Point2::new(x, y),
                Point2::new(base_x, base_y),
                effective,
                settings,
            )
        }
        Action::Report => report(),
    }
}

fn hull(input: PathBuf, out: PathBuf, cfg: HullCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?cfg, "hull");
    let pts = points::read_points(&input)?;
    let dups = find_duplicates(&pts, cfg.eps_dup);
    if let Some(first) = dups.first() {
        tracing::warn!(
            pairs = dups.len(),
            first = ?first,
            "near-duplicate points; only exact repeats are merged"
        );
    }
    let hull = convex_hull_with(&pts, &cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(
        points = pts.len(),
        vertices = hull.vertex_count(),
        area = hull.signed_area(),
        "hull_done"
    );
    points::write_hull(&out, &hull)?;

    let payload = Payload::new(
        "hull",
        json!({
            "input": input.to_string_lossy(),
            "points": pts.len(),
            "duplicate_pairs": dups.len()
        }),
    )
    .with_tolerances(cfg);
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %sidecar.display(), "provenance_written");
    Ok(())
}

fn sample(count: usize, tok: ReplayToken, radius: f64, out: PathBuf) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, radius, "sample");
    let cfg = DiskCfg {
        count,
        radius,
        ..DiskCfg::default()
    };
    let pts = draw_points_disk(cfg, tok);
    points::write_points(&out, &pts)?;
    let payload = Payload::new(
        "sample",
        json!({
            "count": count,
            "seed": tok.seed,
            "index": tok.index,
            "radius": radius
        }),
    );
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn spot_cmd(
    p: Point2<f64>,
    base: Point2<f64>,
    settings: SpotSettings,
    settings_path: PathBuf,
) -> Result<()> {
    tracing::info!(x = p.x, y = p.y, ?settings, "spot");
    println!("{}", spot::spot_label(p, base, &settings));
    settings.save(&settings_path)?;
    Ok(())
}

fn report() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::report_block())?
    );
    Ok(())
}
