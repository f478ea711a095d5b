//! Value types for vehicles, cargo, and coordinates.

use serde::{Deserialize, Serialize};

use crate::traits::{Carrier, Shipment};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// A vehicle available for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub position: GeoPoint,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, position: impl Into<GeoPoint>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            city: None,
            state: None,
        }
    }

    pub fn located_in(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.state = Some(state.into());
        self
    }
}

impl Carrier for Vehicle {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn position(&self) -> GeoPoint {
        self.position
    }
}

/// A cargo item to be picked up at `origin` and delivered to `destination`.
///
/// City labels are for display only and never affect costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub id: String,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
}

impl CargoItem {
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<GeoPoint>,
        destination: impl Into<GeoPoint>,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            origin_city: None,
            destination_city: None,
        }
    }

    pub fn between(mut self, origin_city: impl Into<String>, destination_city: impl Into<String>) -> Self {
        self.origin_city = Some(origin_city.into());
        self.destination_city = Some(destination_city.into());
        self
    }
}

impl Shipment for CargoItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn origin(&self) -> GeoPoint {
        self.origin
    }

    fn destination(&self) -> GeoPoint {
        self.destination
    }
}
