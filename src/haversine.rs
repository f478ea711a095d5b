//! Great-circle distance on a spherical Earth.
//!
//! Straight-line distance only (ignores roads), which is what the
//! dispatch cost model is defined on.

use crate::model::GeoPoint;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers used for dispatch costs.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }
}

impl DistanceMetric for Haversine {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        haversine_km(from, to, self.radius_km)
    }
}

/// Distance between two points in kilometers on the default Earth sphere.
pub fn distance(from: GeoPoint, to: GeoPoint) -> f64 {
    haversine_km(from, to, EARTH_RADIUS_KM)
}

fn haversine_km(from: GeoPoint, to: GeoPoint, radius_km: f64) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lng = to.lng.to_radians() - from.lng.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius_km * c
}
