//! Geolocation providers.
//!
//! The headless default has no position capability and answers with the
//! typed unsupported error; the fixed provider stands in for a real platform
//! capability in tests and demos.

use pelada_core::error::{PeladaError, Result};
use pelada_core::location::{Coordinates, LocationProvider};

/// Provider for hosts without a geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocationProvider;

impl LocationProvider for UnsupportedLocationProvider {
    fn current_position(&self) -> Result<Coordinates> {
        Err(PeladaError::GeolocationUnsupported)
    }
}

/// Provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    coordinates: Coordinates,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(&self) -> Result<Coordinates> {
        Ok(self.coordinates)
    }
}

/// Provider whose single-shot query fails, like a denied permission prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationProvider;

impl LocationProvider for UnavailableLocationProvider {
    fn current_position(&self) -> Result<Coordinates> {
        Err(PeladaError::GeolocationUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_provider() {
        let err = UnsupportedLocationProvider.current_position().unwrap_err();
        assert!(matches!(err, PeladaError::GeolocationUnsupported));
    }

    #[test]
    fn test_fixed_provider_formats() {
        let provider = FixedLocationProvider::new(-23.55052, -46.633308);
        let coords = provider.current_position().unwrap();
        assert_eq!(coords.formatted(), "Lat -23.5505, Lng -46.6333");
    }

    #[test]
    fn test_unavailable_provider() {
        let err = UnavailableLocationProvider.current_position().unwrap_err();
        assert!(matches!(err, PeladaError::GeolocationUnavailable));
    }
}
