//! Application configuration structures.

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feed endpoint and HTTP behavior
    #[serde(default)]
    pub feed: FeedConfig,

    /// Row rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load and validate configuration, or return default if either fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path)
            .and_then(|config| config.validate().map(|()| config))
            .unwrap_or_else(|e| {
                log::warn!(
                    "Config load failed from {:?}: {}. Using defaults.",
                    path.as_ref(),
                    e
                );
                Self::default()
            })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.feed.url)
            .map_err(|e| AppError::validation(format!("feed.url is invalid: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation("feed.url must be http or https"));
        }
        if self.feed.user_agent.trim().is_empty() {
            return Err(AppError::validation("feed.user_agent is empty"));
        }
        if self.feed.connect_timeout_secs == 0 {
            return Err(AppError::validation("feed.connect_timeout_secs must be > 0"));
        }
        if self.feed.read_timeout_secs == 0 {
            return Err(AppError::validation("feed.read_timeout_secs must be > 0"));
        }
        check_time_format("display.date_format", &self.display.date_format)?;
        check_time_format("display.time_format", &self.display.time_format)?;
        self.display.palette.validate()
    }
}

/// Feed endpoint and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed query URL
    #[serde(default = "defaults::feed_url")]
    pub url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Connect timeout in seconds
    #[serde(default = "defaults::connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds
    #[serde(default = "defaults::read_timeout")]
    pub read_timeout_secs: u64,

    /// Artificial delay before each fetch, for exercising slow-network paths
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: defaults::feed_url(),
            user_agent: defaults::user_agent(),
            connect_timeout_secs: defaults::connect_timeout(),
            read_timeout_secs: defaults::read_timeout(),
            simulated_delay_ms: 0,
        }
    }
}

/// Row rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Offset label used when a place has no " of " part
    #[serde(default = "defaults::near_label")]
    pub near_label: String,

    /// Shown when the list is empty or the load failed
    #[serde(default = "defaults::empty_message")]
    pub empty_message: String,

    /// chrono format string for the date column
    #[serde(default = "defaults::date_format")]
    pub date_format: String,

    /// chrono format string for the time column
    #[serde(default = "defaults::time_format")]
    pub time_format: String,

    /// Magnitude bucket colors
    #[serde(default)]
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            near_label: defaults::near_label(),
            empty_message: defaults::empty_message(),
            date_format: defaults::date_format(),
            time_format: defaults::time_format(),
            palette: Palette::default(),
        }
    }
}

/// Hex colors for each magnitude bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Palette {
    /// Colors for buckets 1 through 9, in order
    #[serde(default = "defaults::bucket_colors")]
    pub buckets: Vec<String>,

    /// Color for magnitude 10 and above (and negative magnitudes)
    #[serde(default = "defaults::ten_plus_color")]
    pub ten_plus: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            buckets: defaults::bucket_colors(),
            ten_plus: defaults::ten_plus_color(),
        }
    }
}

impl Palette {
    /// Check that there are nine bucket colors and every color is `#RRGGBB`.
    pub fn validate(&self) -> Result<()> {
        if self.buckets.len() != 9 {
            return Err(AppError::validation(format!(
                "display.palette.buckets needs 9 colors, got {}",
                self.buckets.len()
            )));
        }
        for color in self.buckets.iter().chain(std::iter::once(&self.ten_plus)) {
            if !is_hex_color(color) {
                return Err(AppError::validation(format!(
                    "invalid palette color '{color}'"
                )));
            }
        }
        Ok(())
    }
}

/// Reject empty formats and ones chrono cannot render.
fn check_time_format(field: &str, format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::validation(format!(
            "{field} '{format}' is not a valid strftime format"
        )));
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

mod defaults {
    // Feed defaults
    pub fn feed_url() -> String {
        "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&eventtype=earthquake&orderby=time&minmag=6&limit=10".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; quake-report/0.1)".into()
    }
    pub fn connect_timeout() -> u64 {
        15
    }
    pub fn read_timeout() -> u64 {
        10
    }

    // Display defaults
    pub fn near_label() -> String {
        "Near the".into()
    }
    pub fn empty_message() -> String {
        "No earthquakes found.".into()
    }
    pub fn date_format() -> String {
        "%b %d, %Y".into()
    }
    pub fn time_format() -> String {
        "%-I:%M %p".into()
    }

    // Palette defaults
    pub fn bucket_colors() -> Vec<String> {
        [
            "#4A7BA7", "#04B4B3", "#10CAC9", "#F5A623", "#FF7D50", "#FC6644", "#E75F40",
            "#E13A20", "#D93218",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }
    pub fn ten_plus_color() -> String {
        "#C03823".into()
    }
}
