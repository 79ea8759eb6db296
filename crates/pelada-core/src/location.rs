//! Geolocation capability seam.
//!
//! The original read the browser's position API once and wrote a formatted
//! coordinate string into a text field. Here the platform capability is a
//! trait, so the headless core stays testable and hosts without the
//! capability answer with a typed error instead of an alert.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// The display format the location field expects.
    pub fn formatted(&self) -> String {
        format!("Lat {:.4}, Lng {:.4}", self.latitude, self.longitude)
    }
}

/// Single-shot position query.
///
/// No retry, no timeout handling; the provider either resolves once or fails
/// with [`PeladaError::GeolocationUnsupported`] /
/// [`PeladaError::GeolocationUnavailable`].
///
/// [`PeladaError::GeolocationUnsupported`]: crate::error::PeladaError::GeolocationUnsupported
/// [`PeladaError::GeolocationUnavailable`]: crate::error::PeladaError::GeolocationUnavailable
pub trait LocationProvider: Send + Sync {
    /// Returns the current position.
    fn current_position(&self) -> Result<Coordinates>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_rounds_to_four_places() {
        let coords = Coordinates {
            latitude: -23.55052,
            longitude: -46.633308,
        };
        assert_eq!(coords.formatted(), "Lat -23.5505, Lng -46.6333");
    }
}
