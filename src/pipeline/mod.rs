//! Pipeline entry points for feed loading.
//!
//! - `fetch_earthquakes`: one fetch followed by one parse
//! - `EarthquakeLoader`: cached, single-flight loading for one URL

pub mod load;

pub use load::{EarthquakeLoader, fetch_earthquakes};
