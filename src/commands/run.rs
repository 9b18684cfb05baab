//! Run one demo, or all of them in order.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::{debug, info};

use super::Demo;
use crate::config::Config;

/// Pause between demos in `run all`. Fork demos leave orphans that may still
/// be printing after their parent has been reaped.
const ORPHAN_SETTLE: Duration = Duration::from_millis(300);

/// Run the demo named `name` (or every demo for `all`) and return the exit
/// code of the last one run.
pub fn run_demos(name: &str, bin_dir: Option<&Path>, config: &Config) -> Result<i32> {
    let demos: Vec<Demo> = if name == "all" {
        Demo::ALL.to_vec()
    } else {
        match Demo::from_name(name) {
            Some(demo) => vec![demo],
            None => bail!(
                "Unknown demo '{}'; run 'primer list' to see what is available",
                name
            ),
        }
    };

    let bin_dir = resolve_bin_dir(bin_dir, config)?;
    debug!("demo binaries in {}", bin_dir.display());

    let many = demos.len() > 1;
    for (i, demo) in demos.iter().copied().enumerate() {
        if many {
            if i > 0 {
                thread::sleep(ORPHAN_SETTLE);
            }
            println!("{} {}", "==>".cyan().bold(), demo.name().green());
        }
        let code = run_one(demo, &bin_dir, config)?;
        if code != 0 {
            return Ok(code);
        }
    }

    Ok(0)
}

fn run_one(demo: Demo, bin_dir: &Path, config: &Config) -> Result<i32> {
    let binary = locate(demo, bin_dir)?;
    let args = demo.args(config);
    info!("running {} {:?}", binary.display(), args);

    let status = Command::new(&binary)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to start {}", binary.display()))?;

    match status.code() {
        Some(code) => Ok(code),
        None => bail!("{} was terminated by a signal", demo.binary()),
    }
}

/// `--bin-dir` wins over the config file, which wins over the launcher's own directory.
pub fn resolve_bin_dir(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = flag.or(config.bin_dir.as_deref()) {
        return Ok(dir.to_path_buf());
    }
    let exe = std::env::current_exe().context("Failed to locate the launcher executable")?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => bail!("Launcher path {} has no parent directory", exe.display()),
    }
}

pub fn locate(demo: Demo, bin_dir: &Path) -> Result<PathBuf> {
    let path = bin_dir.join(demo.binary());
    if !path.is_file() {
        bail!(
            "Demo binary not found: {} (build the workspace first)",
            path.display()
        );
    }
    Ok(path)
}
