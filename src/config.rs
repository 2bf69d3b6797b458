//! Animation configuration.
//!
//! Handles defaults, the optional `frameloop.toml` config file, and CLI
//! overrides. Resolution order, lowest to highest precedence:
//!
//! ```text
//! built-in defaults  →  <input_dir>/frameloop.toml  →  CLI flags
//! ```
//!
//! ## Config File
//!
//! Place `frameloop.toml` in the input directory. All keys are optional —
//! override just the values you want:
//!
//! ```toml
//! duration_ms = 100   # Per-frame delay in milliseconds
//! loop_count = 0      # 0 = loop forever, N = play N times
//! sort = "name"       # "name" or "mtime" ("date" also accepted)
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! The program only ever reads configuration; nothing is written back.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid sort mode '{0}' (expected 'name' or 'mtime')")]
    InvalidSortMode(String),
}

/// Frame ordering for the assembled animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Lexicographic filename order, ascending.
    #[default]
    ByName,
    /// Last-modified timestamp, oldest first. Ties keep filename order.
    ByModifiedTime,
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "name" => Ok(SortMode::ByName),
            // "date" is the historical spelling, still accepted
            "mtime" | "date" => Ok(SortMode::ByModifiedTime),
            other => Err(ConfigError::InvalidSortMode(other.to_string())),
        }
    }
}

/// Per-frame delay applied when neither the CLI nor the config file sets one.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 200;

/// Name of the optional config file looked up inside the input directory.
pub const CONFIG_FILE_NAME: &str = "frameloop.toml";

/// Fully resolved configuration for one assembly run.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Directory holding the source frames (scanned non-recursively).
    pub input_dir: PathBuf,
    /// Destination GIF path.
    pub output_path: PathBuf,
    /// Uniform per-frame delay in milliseconds.
    pub frame_duration_ms: u32,
    /// Times the animation replays; 0 loops forever. Passed through to the
    /// container's loop field, which is why it is 16-bit.
    pub loop_count: u16,
    pub sort_mode: SortMode,
}

/// Sparse values from `frameloop.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub duration_ms: Option<u32>,
    pub loop_count: Option<u16>,
    pub sort: Option<String>,
}

/// Settings supplied on the command line. `None` means "not given" so file
/// values and defaults can fill in underneath.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub frame_duration_ms: Option<u32>,
    pub loop_count: Option<u16>,
    pub sort: Option<String>,
}

/// Load `frameloop.toml` from the input directory, if present.
pub fn load_file_config(input_dir: &Path) -> Result<FileConfig, ConfigError> {
    let path = input_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Toml { path, source })
}

/// Resolve the effective [`AnimationConfig`] for a run.
///
/// A sort mode given on the command line is validated before the config file
/// is touched, so a bad `--sort` token fails without any I/O.
pub fn resolve(
    input_dir: PathBuf,
    output_path: PathBuf,
    overrides: Overrides,
) -> Result<AnimationConfig, ConfigError> {
    let cli_sort = overrides.sort.as_deref().map(SortMode::from_str).transpose()?;

    let file = load_file_config(&input_dir)?;

    let sort_mode = match cli_sort {
        Some(mode) => mode,
        None => match file.sort.as_deref() {
            Some(token) => token.parse()?,
            None => SortMode::default(),
        },
    };

    Ok(AnimationConfig {
        input_dir,
        output_path,
        frame_duration_ms: overrides
            .frame_duration_ms
            .or(file.duration_ms)
            .unwrap_or(DEFAULT_FRAME_DURATION_MS),
        loop_count: overrides.loop_count.or(file.loop_count).unwrap_or(0),
        sort_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolve_in(dir: &Path, overrides: Overrides) -> Result<AnimationConfig, ConfigError> {
        resolve(dir.to_path_buf(), PathBuf::from("out.gif"), overrides)
    }

    // =========================================================================
    // Sort mode parsing
    // =========================================================================

    #[test]
    fn sort_mode_parses_name() {
        assert_eq!("name".parse::<SortMode>().unwrap(), SortMode::ByName);
    }

    #[test]
    fn sort_mode_parses_mtime_and_date_alias() {
        assert_eq!("mtime".parse::<SortMode>().unwrap(), SortMode::ByModifiedTime);
        assert_eq!("date".parse::<SortMode>().unwrap(), SortMode::ByModifiedTime);
    }

    #[test]
    fn sort_mode_rejects_unknown_token() {
        let err = "size".parse::<SortMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSortMode(t) if t == "size"));
    }

    // =========================================================================
    // Resolution precedence
    // =========================================================================

    #[test]
    fn defaults_without_file_or_overrides() {
        let tmp = TempDir::new().unwrap();
        let config = resolve_in(tmp.path(), Overrides::default()).unwrap();

        assert_eq!(config.frame_duration_ms, DEFAULT_FRAME_DURATION_MS);
        assert_eq!(config.loop_count, 0);
        assert_eq!(config.sort_mode, SortMode::ByName);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "duration_ms = 50\nloop_count = 3\nsort = \"mtime\"\n",
        )
        .unwrap();

        let config = resolve_in(tmp.path(), Overrides::default()).unwrap();
        assert_eq!(config.frame_duration_ms, 50);
        assert_eq!(config.loop_count, 3);
        assert_eq!(config.sort_mode, SortMode::ByModifiedTime);
    }

    #[test]
    fn cli_overrides_beat_file_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "duration_ms = 50\nsort = \"mtime\"\n",
        )
        .unwrap();

        let config = resolve_in(
            tmp.path(),
            Overrides {
                frame_duration_ms: Some(80),
                loop_count: None,
                sort: Some("name".to_string()),
            },
        )
        .unwrap();

        assert_eq!(config.frame_duration_ms, 80);
        assert_eq!(config.sort_mode, SortMode::ByName);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "loop_count = 1\n").unwrap();

        let config = resolve_in(tmp.path(), Overrides::default()).unwrap();
        assert_eq!(config.loop_count, 1);
        assert_eq!(config.frame_duration_ms, DEFAULT_FRAME_DURATION_MS);
    }

    #[test]
    fn unknown_file_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "durationms = 50\n").unwrap();

        let err = resolve_in(tmp.path(), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn invalid_sort_in_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "sort = \"backwards\"\n").unwrap();

        let err = resolve_in(tmp.path(), Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSortMode(t) if t == "backwards"));
    }

    #[test]
    fn invalid_cli_sort_fails_before_reading_file() {
        // The config file is also broken; the CLI token must be the error
        // that surfaces.
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "not valid toml [[[").unwrap();

        let err = resolve_in(
            tmp.path(),
            Overrides {
                sort: Some("sideways".to_string()),
                ..Overrides::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSortMode(_)));
    }
}
