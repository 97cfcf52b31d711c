// src/lib.rs

//! Quake Report Library
//!
//! Fetches the USGS earthquake feed, parses it into [`models::Earthquake`]
//! records and turns them into display rows.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
