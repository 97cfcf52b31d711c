// src/services/row.rs

//! Display rows built from earthquakes.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::models::{DisplayConfig, Earthquake};
use crate::services::location::split_location;
use crate::services::magnitude::MagnitudeBucket;

/// Everything a list row shows for one earthquake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarthquakeRow {
    /// Magnitude with one decimal, e.g. "6.1"
    pub magnitude: String,
    pub bucket: MagnitudeBucket,
    /// Hex color of the magnitude circle
    pub color: String,
    pub offset_location: String,
    pub primary_location: String,
    pub date: String,
    pub time: String,
    /// Detail page opened when the row is selected
    pub url: String,
}

impl EarthquakeRow {
    /// Build a row, rendering the event time in `tz`.
    pub fn new<Tz>(quake: &Earthquake, display: &DisplayConfig, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let bucket = MagnitudeBucket::from_magnitude(quake.magnitude());
        let location = split_location(quake.place(), &display.near_label);
        let when = quake.occurred_at().with_timezone(tz);

        Self {
            magnitude: format!("{:.1}", quake.magnitude()),
            bucket,
            color: display.palette.color(bucket).to_string(),
            offset_location: location.offset,
            primary_location: location.primary,
            date: format_when(&when, &display.date_format),
            time: format_when(&when, &display.time_format),
            url: quake.url().to_string(),
        }
    }

    /// Single-line text form used by the CLI.
    pub fn to_line(&self) -> String {
        format!(
            "[{:>4}] {} {}  {} {}  {}",
            self.magnitude,
            self.offset_location.trim_end(),
            self.primary_location,
            self.date,
            self.time,
            self.url
        )
    }
}

/// Render `when` with a strftime format, falling back to RFC 3339.
fn format_when<Tz>(when: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", when.format(format)).is_err() {
        log::warn!("Invalid time format '{format}', using RFC 3339");
        return when.to_rfc3339();
    }
    out
}

/// Build rows for a whole list, keeping feed order.
pub fn build_rows<Tz>(quakes: &[Earthquake], display: &DisplayConfig, tz: &Tz) -> Vec<EarthquakeRow>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    quakes
        .iter()
        .map(|quake| EarthquakeRow::new(quake, display, tz))
        .collect()
}
