//! Location Value Objects
//!
//! Comma-delimited physical address and `Region/City` time zone.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{is_blank, ValidationError};

/// Physical address split into its comma-delimited parts.
///
/// Parts are trimmed and blank parts dropped; the canonical value is the
/// parts joined with `", "`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationAddress {
    value: String,
    parts: Vec<String>,
}

impl LocationAddress {
    /// Separator used to build the canonical value
    pub const SEPARATOR: &'static str = ", ";

    /// Create an address from a comma-delimited string
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if is_blank(value) {
            return Err(ValidationError::new("address", "cannot be blank"));
        }

        let parts: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        if parts.is_empty() {
            return Err(ValidationError::new(
                "address",
                "must contain at least one meaningful part",
            ));
        }

        Ok(Self {
            value: parts.join(Self::SEPARATOR),
            parts,
        })
    }

    /// Canonical, comma-joined address
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Ordered address components (city, street, ...)
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for LocationAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for LocationAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationAddress> for String {
    fn from(address: LocationAddress) -> Self {
        address.value
    }
}

/// Time zone in `Region/City` form.
///
/// Structural check only; the value is not looked up in the IANA database.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IanaTimeZone(String);

impl IanaTimeZone {
    /// Create a validated time zone
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if is_blank(&value) {
            return Err(ValidationError::new("timezone", "cannot be blank"));
        }
        if !value.contains('/') {
            return Err(ValidationError::new(
                "timezone",
                "expected 'Region/City' format",
            ));
        }

        let segments: Vec<&str> = value.split('/').collect();
        if segments.len() != 2 {
            return Err(ValidationError::new(
                "timezone",
                format!("must have exactly two segments, got {}", segments.len()),
            ));
        }
        if segments.iter().any(|segment| is_blank(segment)) {
            return Err(ValidationError::new(
                "timezone",
                "segments cannot be blank",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Both segments, `[region, city]`
    pub fn segments(&self) -> [&str; 2] {
        match self.0.split_once('/') {
            Some((region, city)) => [region, city],
            None => [self.0.as_str(), ""],
        }
    }

    pub fn region(&self) -> &str {
        self.segments()[0]
    }

    pub fn city(&self) -> &str {
        self.segments()[1]
    }
}

impl fmt::Display for IanaTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IanaTimeZone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IanaTimeZone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IanaTimeZone> for String {
    fn from(timezone: IanaTimeZone) -> Self {
        timezone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_trims_and_drops_blank_parts() {
        let address = LocationAddress::new(" Moscow , Tverskaya 1 , ").unwrap();
        assert_eq!(address.parts(), &["Moscow".to_string(), "Tverskaya 1".to_string()]);
        assert_eq!(address.as_str(), "Moscow, Tverskaya 1");
    }

    #[test]
    fn test_address_blank_fails() {
        let err = LocationAddress::new("   ").unwrap_err();
        assert_eq!(err.field(), "address");
    }

    #[test]
    fn test_address_without_parts_fails() {
        assert!(LocationAddress::new(",,").is_err());
        assert!(LocationAddress::new(" , ,  ").is_err());
    }

    #[test]
    fn test_address_serde_uses_canonical_value() {
        let address = LocationAddress::new("Berlin,Unter den Linden 5").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"Berlin, Unter den Linden 5\"");

        let back: LocationAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_timezone_valid() {
        let tz = IanaTimeZone::new("Europe/Moscow").unwrap();
        assert_eq!(tz.segments(), ["Europe", "Moscow"]);
        assert_eq!(tz.region(), "Europe");
        assert_eq!(tz.city(), "Moscow");
    }

    #[test]
    fn test_timezone_invalid() {
        assert!(IanaTimeZone::new("").is_err());
        assert!(IanaTimeZone::new("Europe").is_err());
        assert!(IanaTimeZone::new("Europe/Mos/cow").is_err());
        assert!(IanaTimeZone::new("/Moscow").is_err());
        assert!(IanaTimeZone::new("Europe/ ").is_err());
    }

    #[test]
    fn test_timezone_preserves_case() {
        assert_eq!(IanaTimeZone::new("america/new_york").unwrap().as_str(), "america/new_york");
    }
}
