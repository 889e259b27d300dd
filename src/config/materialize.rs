use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::confirm::Confirm;
use crate::config::settings::RunConfig;
use crate::error::{Error, Result};

/// What happened when a run configuration was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialized {
    Written(PathBuf),
    /// The file already existed and the operator chose not to overwrite it
    Skipped,
}

/// Where a run's config file goes: the override if there is one, else `config_<prefix>.json`
pub fn config_path(over: Option<&Path>, prefix: &str) -> PathBuf {
    match over {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("config_{prefix}.json")),
    }
}

/// Write a run configuration to `target`
///
/// An existing file is only replaced with `force` or after `confirm` agrees. Keys keep their
/// declaration order, they are not sorted.
pub fn materialize(config: &RunConfig, target: &Path, force: bool, confirm: &mut dyn Confirm) -> Result<Materialized> {
    if target.exists() && !force {
        warn!("Config file {} already exists. Use --force to overwrite.", target.display());
        if !confirm.confirm("Continue anyway?") {
            info!("Not overwriting {}", target.display());
            return Ok(Materialized::Skipped);
        }
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');

    info!("Writing config to {}", target.display());
    fs::write(target, content).map_err(|source| Error::Materialize { path: target.to_path_buf(), source })?;

    Ok(Materialized::Written(target.to_path_buf()))
}
