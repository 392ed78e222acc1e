//! Common validation utilities.
//!
//! Coordinates are deliberately not checked against real-world bounds; the
//! dashboard only requires values that survive a JSON round trip.

use validator::ValidationError;

/// Lower bound of the impact radius slider, in meters.
pub const MIN_RADIUS_METERS: u32 = 100;

/// Upper bound of the impact radius slider, in meters.
pub const MAX_RADIUS_METERS: u32 = 2000;

/// Validates that a latitude value is a finite number.
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if lat.is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_finite");
        err.message = Some("Latitude must be a finite number".into());
        Err(err)
    }
}

/// Validates that a longitude value is a finite number.
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if lon.is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_finite");
        err.message = Some("Longitude must be a finite number".into());
        Err(err)
    }
}

/// Validates that a radius lies within the slider bounds (100 to 2000 meters).
pub fn validate_radius(radius: u32) -> Result<(), ValidationError> {
    if (MIN_RADIUS_METERS..=MAX_RADIUS_METERS).contains(&radius) {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 100 and 2000 meters".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(41.8006).is_ok());
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_latitude_out_of_world_bounds_is_accepted() {
        assert!(validate_latitude(123.0).is_ok());
        assert!(validate_latitude(-500.25).is_ok());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(-73.1212).is_ok());
        assert!(validate_longitude(720.0).is_ok());
        assert!(validate_longitude(f64::NEG_INFINITY).is_err());
        assert!(validate_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_longitude_error_message() {
        let err = validate_longitude(f64::NAN).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Longitude must be a finite number"
        );
    }

    #[test]
    fn test_validate_radius_bounds() {
        assert!(validate_radius(100).is_ok());
        assert!(validate_radius(500).is_ok());
        assert!(validate_radius(2000).is_ok());
        assert!(validate_radius(99).is_err());
        assert!(validate_radius(2001).is_err());
        assert!(validate_radius(0).is_err());
    }

    #[test]
    fn test_validate_radius_error_message() {
        let err = validate_radius(5000).unwrap_err();
        assert_eq!(err.code, "radius_range");
        assert_eq!(
            err.message.unwrap().to_string(),
            "Radius must be between 100 and 2000 meters"
        );
    }
}
