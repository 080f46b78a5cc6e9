//! `lectern.toml` configuration.
//!
//! Discovered next to the input file. Configuration only affects what
//! the CLI does with the two output streams; the directive lexicon
//! itself is fixed and takes no parameters.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
}

/// Lectern configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub slides: SlidesConfig,
}

/// Where the generated files go.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct OutputConfig {
    /// Output directory; defaults to the input file's directory.
    pub dir: Option<PathBuf>,
}

/// Front-matter knobs for the slides output.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SlidesConfig {
    /// Deck theme name passed through to the renderer.
    pub theme: Option<String>,
    /// Whether slides are numbered.
    #[serde(default = "default_paginate")]
    pub paginate: bool,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            theme: None,
            paginate: default_paginate(),
        }
    }
}

fn default_paginate() -> bool {
    true
}

impl Config {
    /// File name looked up next to the input file.
    pub const FILE_NAME: &'static str = "lectern.toml";

    /// Load configuration for an input file.
    ///
    /// An explicit `path` must exist; otherwise `lectern.toml` next to
    /// the input is used when present, and defaults apply when it is
    /// not.
    pub fn load(explicit: Option<&Path>, input: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let discovered = input
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(Self::FILE_NAME);
                if !discovered.is_file() {
                    return Ok(Self::default());
                }
                discovered
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path,
            source: Box::new(source),
        })
    }
}
