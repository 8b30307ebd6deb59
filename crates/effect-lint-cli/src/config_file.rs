//! Finding and loading the configuration file.
//!
//! Lookup order: a `--config` path wins outright, then a file sitting
//! next to the linted sources (`effect-lint.toml`, or the dotfile
//! spelling `.effect-lint.toml`), and last a per-user file at
//! `~/.effect-lint/config.toml`. `EFFECT_LINT_CONFIG_DIR` relocates the
//! per-user directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use effect_lint_core::Config;

/// Where a configuration file was picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Passed via `--config`.
    Flag,
    /// Found next to the linted project.
    Project,
    /// The per-user fallback directory.
    User,
}

/// A located configuration file, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Path to the TOML file.
    pub path: PathBuf,
    /// How the file was found.
    pub origin: Origin,
}

impl ConfigFile {
    /// Parses the located file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is invalid TOML.
    pub fn load(&self) -> Result<Config> {
        if self.origin == Origin::User {
            tracing::info!("using per-user config at {}", self.path.display());
        }
        Config::from_file(&self.path)
            .with_context(|| format!("failed to load {}", self.path.display()))
    }
}

/// Finds the configuration file for a lint run, if there is one.
///
/// A `--config` path is returned without an existence check, so loading
/// it can fail loudly instead of silently falling back to defaults.
#[must_use]
pub fn find_config(project_dir: &Path, flag: Option<&Path>) -> Option<ConfigFile> {
    if let Some(path) = flag {
        return Some(ConfigFile {
            path: path.to_path_buf(),
            origin: Origin::Flag,
        });
    }
    locate(project_dir, user_config_dir().as_deref())
}

// The per-user directory is a parameter so tests stay off the real home
// directory.
fn locate(project_dir: &Path, user_dir: Option<&Path>) -> Option<ConfigFile> {
    let mut candidates = vec![
        (project_dir.join("effect-lint.toml"), Origin::Project),
        (project_dir.join(".effect-lint.toml"), Origin::Project),
    ];
    if let Some(dir) = user_dir {
        candidates.push((dir.join("config.toml"), Origin::User));
    }

    candidates
        .into_iter()
        .find(|(path, _)| path.is_file())
        .map(|(path, origin)| ConfigFile { path, origin })
}

fn user_config_dir() -> Option<PathBuf> {
    match std::env::var_os("EFFECT_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".effect-lint")),
    }
}
