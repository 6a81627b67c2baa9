// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Configuration file and environment utilities.
//!
//! Settings are read from a TOML file (`config.toml` by default). The Reddit
//! credentials can also be given in the environment, which takes precedence
//! over the file:
//!
//! | Setting         | Environment variable       |
//! |-----------------|----------------------------|
//! | `client_id`     | `TRENDWATCH_CLIENT_ID`     |
//! | `client_secret` | `TRENDWATCH_CLIENT_SECRET` |
//! | `user_agent`    | `TRENDWATCH_USER_AGENT`    |
//!
//! See `config.example.toml` for a template.

use crate::reddit::auth::Credentials;
use crate::storage::DEFAULT_STORAGE_PATH;
use log::{LevelFilter, warn};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Configuration file used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Template users copy to create their configuration file.
pub const CONFIG_TEMPLATE: &str = "config.example.toml";

const CLIENT_ID_VAR: &str = "TRENDWATCH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "TRENDWATCH_CLIENT_SECRET";
const USER_AGENT_VAR: &str = "TRENDWATCH_USER_AGENT";

// <platform>:<app ID>:<version string> (by u/<reddit username>)
static USER_AGENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+:[\w.-]+:v?[\w.-]+ \(by /?u/[\w-]+\)$")
        .expect("user agent pattern should be valid")
});

/// An error reading the configuration.
///
/// Only an unreadable or malformed file, or missing credentials in live
/// mode, stop the program. Problems with optional settings are reported by
/// [`Settings::ignored()`] instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file, and no credentials in the environment.
    #[error(
        "configuration file {} not found; copy {} to {} and fill in your Reddit API credentials, or run with --demo",
        .0.display(),
        CONFIG_TEMPLATE,
        .0.display()
    )]
    NotFound(PathBuf),

    /// A required setting is absent from both the file and the environment.
    #[error("missing '{key}' in configuration file {}; see {}", .path.display(), CONFIG_TEMPLATE)]
    MissingSetting { path: PathBuf, key: &'static str },

    /// The configuration file could not be read.
    #[error("could not read configuration file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The configuration file is not valid TOML.
    #[error("could not parse configuration file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Program settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    storage_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    log_level: Option<String>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,

    #[serde(skip)]
    path: PathBuf,

    #[serde(skip)]
    found: bool,
}

impl Settings {
    /// Loads settings from the file at `path`, then applies environment
    /// overrides.
    ///
    /// A missing file is not an error here: defaults are used, and
    /// [`Settings::credentials()`] reports the missing file if live access
    /// is actually needed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        settings.path = path.to_path_buf();
        settings.apply_env();
        Ok(settings)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut settings: Settings = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        settings.found = true;
        Ok(settings)
    }

    fn apply_env(&mut self) {
        let overrides = [
            (CLIENT_ID_VAR, &mut self.client_id),
            (CLIENT_SECRET_VAR, &mut self.client_secret),
            (USER_AGENT_VAR, &mut self.user_agent),
        ];
        for (var, setting) in overrides {
            if let Some(value) = env::var(var).ok().filter(|value| !value.trim().is_empty()) {
                *setting = Some(value);
            }
        }
    }

    /// Path the settings were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the configuration file exists.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Credentials for the live Reddit API.
    ///
    /// Fails if any of the client ID, client secret, or user agent is
    /// missing or blank. A user agent that does not follow Reddit's
    /// recommended format only produces a warning.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let client_id = self.required("client_id", &self.client_id)?;
        let client_secret = self.required("client_secret", &self.client_secret)?;
        let user_agent = self.required("user_agent", &self.user_agent)?;

        if !USER_AGENT_RE.is_match(user_agent) {
            warn!(
                "User agent '{user_agent}' does not follow Reddit's \
                 '<platform>:<app ID>:<version> (by u/<username>)' format; \
                 requests may be throttled"
            );
        }

        Ok(Credentials::new(client_id, client_secret, user_agent))
    }

    fn required<'a>(
        &self,
        key: &'static str,
        value: &'a Option<String>,
    ) -> Result<&'a str, ConfigError> {
        match value.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value),
            _ if !self.found => Err(ConfigError::NotFound(self.path.clone())),
            _ => Err(ConfigError::MissingSetting {
                path: self.path.clone(),
                key,
            }),
        }
    }

    /// Path of the record log.
    pub fn storage_path(&self) -> &Path {
        self.storage_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_STORAGE_PATH))
    }

    /// Directory the trend summary is written to, if any.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Configured log level, if any.
    ///
    /// An unrecognized level is ignored.
    pub fn log_level(&self) -> Option<LevelFilter> {
        self.log_level.as_deref()?.trim().parse().ok()
    }

    /// Settings that were given but have no effect, with the reason each
    /// one is ignored.
    pub fn ignored(&self) -> Vec<String> {
        let mut ignored = self
            .unknown
            .keys()
            .map(|key| format!("unknown setting '{key}'"))
            .collect::<Vec<_>>();
        if let Some(level) = self.log_level.as_ref().filter(|_| self.log_level().is_none()) {
            ignored.push(format!("invalid log_level '{level}', using 'info'"));
        }
        ignored
    }

    /// Logs a warning for every [ignored](Settings::ignored()) setting.
    pub fn warn_ignored(&self) {
        for problem in self.ignored() {
            warn!("Ignoring {problem} in {}", self.path.display());
        }
    }
}
