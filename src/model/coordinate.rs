use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A point on the earth's surface in decimal degrees.
///
/// Construction through the struct literal is unchecked, so distances can still be
/// computed for out-of-range values. Use [`Coordinate::checked`] for anything that
/// comes from a client.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::OutOfRange {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::OutOfRange {
                field: "longitude",
                value: longitude,
            });
        }

        Ok(Self::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_bounds_and_zero() {
        assert!(Coordinate::checked(90.0, 180.0).is_ok());
        assert!(Coordinate::checked(-90.0, -180.0).is_ok());
        assert!(Coordinate::checked(0.0, 0.0).is_ok());
    }

    #[test]
    fn checked_rejects_out_of_range() {
        let err = Coordinate::checked(91.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "latitude",
                ..
            }
        ));

        let err = Coordinate::checked(0.0, -180.5).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "longitude",
                ..
            }
        ));

        assert!(Coordinate::checked(f64::NAN, 0.0).is_err());
    }
}
