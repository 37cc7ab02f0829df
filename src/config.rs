// Handles configuration loading and defaults.
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILENAME: &str = "lightcal.toml";

pub const CITY_HALL_URL: &str = "https://www.sf.gov/location--san-francisco-city-hall";

fn default_url() -> String {
    CITY_HALL_URL.to_string()
}
fn default_csv_path() -> PathBuf {
    PathBuf::from("lighting_schedule.csv")
}
fn default_feed_path() -> PathBuf {
    PathBuf::from("calendar.ics")
}
fn default_calendar_name() -> String {
    "SF City Hall Lighting".to_string()
}
fn default_calendar_description() -> String {
    "San Francisco City Hall nightly lighting schedule".to_string()
}
fn default_calendar_timezone() -> String {
    "America/Los_Angeles".to_string()
}
fn default_location() -> String {
    "San Francisco City Hall, 1 Dr. Carlton B. Goodlett Place, San Francisco, CA 94102".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    60
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    #[serde(default = "default_feed_path")]
    pub feed_path: PathBuf,
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
    #[serde(default = "default_calendar_description")]
    pub calendar_description: String,
    #[serde(default = "default_calendar_timezone")]
    pub calendar_timezone: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            csv_path: default_csv_path(),
            feed_path: default_feed_path(),
            calendar_name: default_calendar_name(),
            calendar_description: default_calendar_description(),
            calendar_timezone: default_calendar_timezone(),
            location: default_location(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the configuration from an explicit path.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Resolve the effective configuration: an explicit `--config` path
    /// (which must exist), else `lightcal.toml` in the working
    /// directory, else the OS config dir, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILENAME);
        if local.exists() {
            return Self::load(local);
        }

        if let Some(proj) = ProjectDirs::from("com", "lightcal", "lightcal") {
            let path = proj.config_dir().join("config.toml");
            if path.exists() {
                return Self::load(&path);
            }
        }

        log::debug!("No config file found; using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.url, CITY_HALL_URL);
        assert_eq!(config.csv_path, PathBuf::from("lighting_schedule.csv"));
        assert_eq!(config.fetch_timeout_secs, 60);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: Config =
            toml::from_str("url = \"http://localhost:8080/page\"\nfetch_timeout_secs = 5\n")
                .unwrap();
        assert_eq!(config.url, "http://localhost:8080/page");
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.feed_path, PathBuf::from("calendar.ics"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/lightcal.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
