//! Earthquake record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One earthquake event parsed from the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Earthquake {
    /// Magnitude, may be zero or negative
    magnitude: f64,

    /// Place description (e.g. "5km SW of Visalia, CA"), may be empty
    place: String,

    /// Time of the event in milliseconds since the Unix epoch
    time_ms: i64,

    /// Detail page for the event
    url: String,
}

impl Earthquake {
    pub fn new(
        magnitude: f64,
        place: impl Into<String>,
        time_ms: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            place: place.into(),
            time_ms,
            url: url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Event time as a UTC timestamp.
    ///
    /// Values outside chrono's range fall back to the Unix epoch.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.time_ms).unwrap_or(DateTime::UNIX_EPOCH)
    }
}
