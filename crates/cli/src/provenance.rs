use anyhow::{Context, Result};
use planar_hull::HullCfg;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand, its parameters, and the hull tolerances in effect.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tolerances: Option<HullCfg>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            tolerances: None,
        }
    }

    pub fn with_tolerances(mut self, cfg: HullCfg) -> Self {
        self.tolerances = Some(cfg);
        self
    }

    fn to_json(&self, artifact: &Path, callsite: &Location<'_>) -> Value {
        let tolerances = self.tolerances.map(|c| {
            json!({
                "eps_orient": c.eps_orient,
                "eps_angle": c.eps_angle,
                "eps_dup": c.eps_dup
            })
        });
        json!({
            "code_rev": current_git_rev(),
            "crate_version": planar_hull::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "command": self.command,
            "params": self.params,
            "tolerances": tolerances,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = payload.to_json(artifact, Location::caller());
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Provenance block printed by `report` (no artifact, no call site).
pub fn report_block() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "crate_version": planar_hull::VERSION,
        "tolerances_default": {
            "eps_orient": HullCfg::default().eps_orient,
            "eps_angle": HullCfg::default().eps_angle,
            "eps_dup": HullCfg::default().eps_dup
        }
    })
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(runtime) = std::env::var("GIT_COMMIT") {
        if !runtime.is_empty() {
            return runtime;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
