//! Dialect configuration and loader.
//!
//! Flavors of this dialect differ on which leading marker opens an unordered
//! item and on whether span rewrites apply inside headings, so both choices
//! live in an explicit configuration instead of being hard-coded per call
//! site. Settings resolve from `.markdown-render.toml` in the working
//! directory when present, falling back to built-in defaults.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = ".markdown-render.toml";

/// Rendering dialect resolved from defaults and on-disk overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    /// Leading marker that opens an unordered list item.
    pub unordered_marker: UnorderedMarker,
    /// Whether bold/emphasis rewriting applies inside heading text.
    pub heading_spans: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            unordered_marker: UnorderedMarker::Dash,
            heading_spans: true,
        }
    }
}

/// The single leading marker mapped to unordered items for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnorderedMarker {
    Dash,
    Asterisk,
}

impl UnorderedMarker {
    /// Anchored item pattern for this marker.
    pub fn item_pattern(self) -> &'static str {
        match self {
            Self::Dash => r"^- (.+)$",
            Self::Asterisk => r"^\* (.+)$",
        }
    }
}

/// Controls where the loader looks for a configuration file.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unable to resolve working directory: {0}")]
    WorkingDir(#[from] io::Error),
}

impl Dialect {
    /// Resolve the dialect for one run. An absent config file yields the
    /// defaults; a present but malformed file is an error.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = match options.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let path = working_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let raw: RawConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();
        let dialect = raw.dialect.unwrap_or_default();

        Self {
            unordered_marker: dialect.unordered_marker.unwrap_or(defaults.unordered_marker),
            heading_spans: dialect.heading_spans.unwrap_or(defaults.heading_spans),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    dialect: Option<RawDialect>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawDialect {
    unordered_marker: Option<UnorderedMarker>,
    heading_spans: Option<bool>,
}
