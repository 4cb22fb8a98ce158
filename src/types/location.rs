//! Location types
//!
//! The closed set of campus locations a user can pick from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A campus location. The absent state is modelled as `Option::<Location>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Rajampeta,
    Bengaluru,
}

impl Location {
    /// Every location, in declaration order
    pub const ALL: [Location; 2] = [Location::Rajampeta, Location::Bengaluru];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Rajampeta => "Rajampeta",
            Location::Bengaluru => "Bengaluru",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = LocationError;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| LocationError::UnknownLocation(s.to_string()))
    }
}

/// Errors raised by the location store and its provider scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Unknown location: {0:?}")]
    UnknownLocation(String),
    #[error("Location accessed outside its provider; call use_location_provider in an ancestor component")]
    OutsideProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allow_list() {
        assert_eq!("Rajampeta".parse::<Location>(), Ok(Location::Rajampeta));
        assert_eq!("Bengaluru".parse::<Location>(), Ok(Location::Bengaluru));
    }

    #[test]
    fn test_parse_rejects_other_values() {
        assert_eq!(
            "Mumbai".parse::<Location>(),
            Err(LocationError::UnknownLocation("Mumbai".to_string()))
        );
        assert!("bengaluru".parse::<Location>().is_err());
        assert!(" Rajampeta".parse::<Location>().is_err());
        assert!("".parse::<Location>().is_err());
    }

    #[test]
    fn test_display_matches_storage_string() {
        for location in Location::ALL {
            assert_eq!(location.to_string(), location.as_str());
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Location::Bengaluru).unwrap();
        assert_eq!(json, "\"Bengaluru\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Location::Bengaluru);
    }
}
