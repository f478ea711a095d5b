//! CSV input for trucks and cargo.
//!
//! Trucks: `truck,city,state,lat,lng`.
//! Cargo: `product,origin_city,origin_state,origin_lat,origin_lng,
//! destination_city,destination_state,destination_lat,destination_lng`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::model::{CargoItem, GeoPoint, Vehicle};

#[derive(Debug, Deserialize)]
struct TruckRecord {
    truck: String,
    city: String,
    state: String,
    lat: f64,
    lng: f64,
}

impl From<TruckRecord> for Vehicle {
    fn from(record: TruckRecord) -> Self {
        Vehicle::new(record.truck, GeoPoint::new(record.lat, record.lng)).located_in(record.city, record.state)
    }
}

/// State columns are present in the file but unused.
#[derive(Debug, Deserialize)]
struct CargoRecord {
    product: String,
    origin_city: String,
    origin_lat: f64,
    origin_lng: f64,
    destination_city: String,
    destination_lat: f64,
    destination_lng: f64,
}

impl From<CargoRecord> for CargoItem {
    fn from(record: CargoRecord) -> Self {
        CargoItem::new(
            record.product,
            GeoPoint::new(record.origin_lat, record.origin_lng),
            GeoPoint::new(record.destination_lat, record.destination_lng),
        )
        .between(record.origin_city, record.destination_city)
    }
}

pub fn read_vehicles(path: impl AsRef<Path>) -> Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let vehicles = read_vehicles_from(File::open(path)?)?;
    debug!(path = %path.display(), count = vehicles.len(), "loaded vehicles");
    Ok(vehicles)
}

pub fn read_cargo(path: impl AsRef<Path>) -> Result<Vec<CargoItem>> {
    let path = path.as_ref();
    let cargo = read_cargo_from(File::open(path)?)?;
    debug!(path = %path.display(), count = cargo.len(), "loaded cargo");
    Ok(cargo)
}

pub fn read_vehicles_from<R: Read>(reader: R) -> Result<Vec<Vehicle>> {
    read_records::<TruckRecord, Vehicle, R>(reader)
}

pub fn read_cargo_from<R: Read>(reader: R) -> Result<Vec<CargoItem>> {
    read_records::<CargoRecord, CargoItem, R>(reader)
}

fn read_records<Rec, T, R>(reader: R) -> Result<Vec<T>>
where
    Rec: DeserializeOwned + Into<T>,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for record in reader.deserialize::<Rec>() {
        out.push(record?.into());
    }
    Ok(out)
}
