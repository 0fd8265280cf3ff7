//! Globe coordinates.

use crate::value::ValueError;
use std::fmt;

/// Globe used when none is given (Earth)
pub const EARTH_GLOBE_IRI: &str = "http://www.wikidata.org/entity/Q2";

/// Default precision, in degrees (ten micro-degrees)
pub const DEFAULT_PRECISION: f64 = 0.000_01;

/// A position on a globe
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeCoordinatesValue {
    pub latitude: f64,
    pub longitude: f64,
    pub precision: f64,
    pub globe: String,
}

impl GlobeCoordinatesValue {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            precision: DEFAULT_PRECISION,
            globe: EARTH_GLOBE_IRI.to_string(),
        }
    }

    /// Parse a `"lat,lng"` (or `"lat/lng"`) pair.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-360, 360].
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        let invalid = |reason: &str| ValueError::InvalidCoordinates {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = input.split([',', '/']).collect();
        if parts.len() != 2 {
            return Err(invalid("expected two components"));
        }

        let latitude: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude out of range"));
        }
        if !(-360.0..=360.0).contains(&longitude) {
            return Err(invalid("longitude out of range"));
        }

        Ok(Self::new(latitude, longitude))
    }
}

impl fmt::Display for GlobeCoordinatesValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
