//! Geographic coordinates and the fixed points of interest.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named location shown as a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfInterest {
    pub name: &'static str,
    pub coordinates: LatLng,
}

/// The static points of interest, in marker order.
pub const POINTS_OF_INTEREST: [PointOfInterest; 4] = [
    PointOfInterest { name: "Tower of London", coordinates: LatLng::new(51.5081, -0.0759) },
    PointOfInterest { name: "St Paul's Cathedral", coordinates: LatLng::new(51.5138, -0.0984) },
    PointOfInterest { name: "Borough Market", coordinates: LatLng::new(51.5055, -0.0910) },
    PointOfInterest { name: "London Eye", coordinates: LatLng::new(51.5033, -0.1196) },
];
