// src/services/magnitude.rs

//! Magnitude color buckets.

use std::fmt;

use serde::Serialize;

use crate::models::Palette;

/// Color class picked from the floored magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MagnitudeBucket {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    TenPlus,
}

impl MagnitudeBucket {
    /// Bucket for a magnitude. Total over all `f64`, NaN included.
    pub fn from_magnitude(magnitude: f64) -> Self {
        // `as` saturates and maps NaN to 0.
        match magnitude.floor() as i64 {
            0 | 1 => MagnitudeBucket::One,
            2 => MagnitudeBucket::Two,
            3 => MagnitudeBucket::Three,
            4 => MagnitudeBucket::Four,
            5 => MagnitudeBucket::Five,
            6 => MagnitudeBucket::Six,
            7 => MagnitudeBucket::Seven,
            8 => MagnitudeBucket::Eight,
            9 => MagnitudeBucket::Nine,
            _ => MagnitudeBucket::TenPlus,
        }
    }

    /// Position in the palette's bucket list, `None` for `TenPlus`.
    fn palette_index(self) -> Option<usize> {
        match self {
            MagnitudeBucket::One => Some(0),
            MagnitudeBucket::Two => Some(1),
            MagnitudeBucket::Three => Some(2),
            MagnitudeBucket::Four => Some(3),
            MagnitudeBucket::Five => Some(4),
            MagnitudeBucket::Six => Some(5),
            MagnitudeBucket::Seven => Some(6),
            MagnitudeBucket::Eight => Some(7),
            MagnitudeBucket::Nine => Some(8),
            MagnitudeBucket::TenPlus => None,
        }
    }

    /// Resource-style name, e.g. `magnitude3` or `magnitude10plus`.
    pub fn name(self) -> &'static str {
        match self {
            MagnitudeBucket::One => "magnitude1",
            MagnitudeBucket::Two => "magnitude2",
            MagnitudeBucket::Three => "magnitude3",
            MagnitudeBucket::Four => "magnitude4",
            MagnitudeBucket::Five => "magnitude5",
            MagnitudeBucket::Six => "magnitude6",
            MagnitudeBucket::Seven => "magnitude7",
            MagnitudeBucket::Eight => "magnitude8",
            MagnitudeBucket::Nine => "magnitude9",
            MagnitudeBucket::TenPlus => "magnitude10plus",
        }
    }
}

impl fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Palette {
    /// Hex color for a bucket.
    ///
    /// A short bucket list falls back to the 10+ color.
    pub fn color(&self, bucket: MagnitudeBucket) -> &str {
        bucket
            .palette_index()
            .and_then(|i| self.buckets.get(i))
            .unwrap_or(&self.ten_plus)
    }
}
