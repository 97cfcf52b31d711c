// src/services/location.rs

//! Splits a feed place string into an offset and a primary location.

/// Separator between the offset and the primary location.
pub const LOCATION_SEPARATOR: &str = " of ";

/// Offset label used when a place carries no offset.
pub const DEFAULT_NEAR_LABEL: &str = "Near the";

/// The two display parts of a place string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    /// e.g. "5km SW of "
    pub offset: String,
    /// e.g. "Visalia, CA"
    pub primary: String,
}

impl LocationParts {
    /// Split with the default "Near the" label.
    pub fn from_place(place: &str) -> Self {
        split_location(place, DEFAULT_NEAR_LABEL)
    }
}

/// Split `place` on the first `" of "`.
///
/// Without a separator the offset is `near_label` and the place is kept whole.
pub fn split_location(place: &str, near_label: &str) -> LocationParts {
    match place.split_once(LOCATION_SEPARATOR) {
        Some((offset, primary)) => LocationParts {
            offset: format!("{offset}{LOCATION_SEPARATOR}"),
            primary: primary.to_string(),
        },
        None => LocationParts {
            offset: near_label.to_string(),
            primary: place.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_offset() {
        let parts = LocationParts::from_place("5km SW of Visalia, CA");
        assert_eq!(parts.offset, "5km SW of ");
        assert_eq!(parts.primary, "Visalia, CA");
    }

    #[test]
    fn test_split_without_offset() {
        let parts = LocationParts::from_place("Visalia, CA");
        assert_eq!(parts.offset, "Near the");
        assert_eq!(parts.primary, "Visalia, CA");
    }

    #[test]
    fn test_split_uses_first_separator() {
        let parts = LocationParts::from_place("12km N of Isle of Man");
        assert_eq!(parts.offset, "12km N of ");
        assert_eq!(parts.primary, "Isle of Man");
    }

    #[test]
    fn test_split_is_case_sensitive() {
        let parts = LocationParts::from_place("South OF Fiji Islands");
        assert_eq!(parts.offset, "Near the");
        assert_eq!(parts.primary, "South OF Fiji Islands");
    }

    #[test]
    fn test_custom_label_and_empty_place() {
        let parts = split_location("", "Close to");
        assert_eq!(parts.offset, "Close to");
        assert_eq!(parts.primary, "");
    }
}
