//! Launcher configuration.
//!
//! Every key is optional; anything left out falls back to the literals the
//! demos were written with.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "PRIMER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the demo binaries.
    pub bin_dir: Option<PathBuf>,
    pub dup: DupConfig,
    pub exec: ExecConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DupConfig {
    pub path: PathBuf,
    pub target_fd: i32,
}

impl Default for DupConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dup"),
            target_fd: 7,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExecConfig {
    pub program: Option<String>,
    pub argv: Vec<String>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Explicit path first, then `$PRIMER_CONFIG`, then `./primer.toml` if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(
            explicit,
            std::env::var_os(CONFIG_ENV).as_deref(),
            Path::new("."),
        )
    }

    fn load_from(explicit: Option<&Path>, from_env: Option<&OsStr>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = from_env {
            return Self::from_file(Path::new(path));
        }
        let local = cwd.join(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_keeps_builtin_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.bin_dir, None);
        assert_eq!(config.dup, DupConfig::default());
        assert_eq!(config.dup.path, PathBuf::from("dup"));
        assert_eq!(config.dup.target_fd, 7);
        assert_eq!(config.exec, ExecConfig::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::parse(
            r#"
            bin_dir = "/opt/primer/bin"

            [dup]
            target_fd = 11

            [exec]
            program = "/bin/echo"
            argv = ["echo", "hi"]
            "#,
        )
        .unwrap();

        assert_eq!(config.bin_dir, Some(PathBuf::from("/opt/primer/bin")));
        assert_eq!(config.dup.path, PathBuf::from("dup"));
        assert_eq!(config.dup.target_fd, 11);
        assert_eq!(config.exec.program.as_deref(), Some("/bin/echo"));
        assert_eq!(config.exec.argv, ["echo", "hi"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[dup]\ntarget = 3\n").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dup]\npath = \"/etc/hostname\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.dup.path, PathBuf::from("/etc/hostname"));
    }

    #[test]
    fn env_path_beats_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[dup]\ntarget_fd = 8\n").unwrap();
        let env_file = dir.path().join("env.toml");
        fs::write(&env_file, "[dup]\ntarget_fd = 9\n").unwrap();

        let config = Config::load_from(None, Some(env_file.as_os_str()), dir.path()).unwrap();
        assert_eq!(config.dup.target_fd, 9);
    }

    #[test]
    fn explicit_path_beats_env() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[dup]\ntarget_fd = 10\n").unwrap();

        let config = Config::load_from(
            Some(&explicit),
            Some(OsStr::new("/nonexistent/env.toml")),
            dir.path(),
        )
        .unwrap();
        assert_eq!(config.dup.target_fd, 10);
    }

    #[test]
    fn local_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[dup]\ntarget_fd = 8\n").unwrap();

        let config = Config::load_from(None, None, dir.path()).unwrap();
        assert_eq!(config.dup.target_fd, 8);
    }

    #[test]
    fn nothing_found_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(None, None, dir.path()).unwrap();
        assert_eq!(config.dup, DupConfig::default());
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.toml");
        let err = Config::load_from(None, Some(missing.as_os_str()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("gone.toml"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
