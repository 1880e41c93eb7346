//! Configuration of the command line tool.
//!
//! The configuration is read from an optional YAML file, then overridden by
//! environment variables prefixed with `STRAVA_`.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # OAuth access token of the athlete
//! access_token: "your-access-token"
//!
//! # Base URL of the Strava API, optional
//! base_url: "https://www.strava.com/api/v3"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export STRAVA_ACCESS_TOKEN="your-access-token"
//! export STRAVA_BASE_URL="http://localhost:8080/api/v3"
//! ```

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::strava::STRAVA_API_URL;

/// Root configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// OAuth access token sent as bearer token on every request.
    ///
    /// Obtaining or refreshing it is out of scope: it must already be valid.
    pub access_token: String,

    /// Base URL of the Strava API.
    ///
    /// Defaults to [`STRAVA_API_URL`]. A trailing slash is removed on load.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    STRAVA_API_URL.to_owned()
}

impl Config {
    /// Load the configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a YAML configuration file. The file must exist when given.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or malformed, or when no access token
    /// is provided by either source.
    pub fn load(path: Option<&str>) -> Result<Config, figment::Error> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !Path::new(path).is_file() {
                return Err(format!("config file {} not found", path).into());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let mut config: Config = figment.merge(Env::prefixed("STRAVA_")).extract()?;

        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }

        Ok(config)
    }
}
