//! Core domain traits for fleet matching.
//!
//! These are intentionally minimal. The bundled [`crate::model`] types
//! implement them, but applications can plug in their own fleet records.

use std::hash::Hash;

use crate::model::GeoPoint;

/// Unique identifier for matched entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Something that travels to a pickup (a truck, a courier, a van).
pub trait Carrier {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Current position of the carrier.
    fn position(&self) -> GeoPoint;
}

/// A load waiting to be picked up.
pub trait Shipment {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Pickup location. Costs are measured to this point.
    fn origin(&self) -> GeoPoint;

    /// Drop-off location.
    fn destination(&self) -> GeoPoint;
}

/// Distance between two points, in kilometers.
///
/// Implementations must be pure and return a non-negative, finite value for
/// valid coordinates.
pub trait DistanceMetric {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}
