//! Service layer for the quake feed client.
//!
//! This module contains the business logic for:
//! - Feed fetching (`FeedFetcher`, behind `FeedSource`)
//! - Feed parsing (`parse_feed`)
//! - Place splitting (`split_location`)
//! - Magnitude coloring (`MagnitudeBucket`)
//! - Row building (`EarthquakeRow`)

mod fetcher;
pub mod location;
pub mod magnitude;
pub mod parser;
pub mod row;

pub use fetcher::{FeedFetcher, FeedSource};
pub use location::{LocationParts, split_location};
pub use magnitude::MagnitudeBucket;
pub use parser::parse_feed;
pub use row::{EarthquakeRow, build_rows};
