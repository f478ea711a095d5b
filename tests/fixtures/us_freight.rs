//! Real US trucks and cargo pickups.
//!
//! Three carriers and two loads; the Alabama truck is 288 km from the
//! Sikeston pickup.

use freight_match::model::{CargoItem, GeoPoint, Vehicle};

pub const NEW_YORK: GeoPoint = GeoPoint::new(40.71278, -74.00594);
pub const LOS_ANGELES: GeoPoint = GeoPoint::new(34.05223, -118.24368);

pub fn trucks() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Hartford Plastics Incartford", (34.79981, -87.677251)).located_in("Florence", "AL"),
        Vehicle::new("Beyond Landscape & Design Llcilsonville", (37.5482697, -121.9885719))
            .located_in("Fremont", "CA"),
        Vehicle::new("Ibrahim Chimandalpharetta", (41.6639383, -83.55521200000001)).located_in("Toledo", "OH"),
    ]
}

pub fn cargo() -> Vec<CargoItem> {
    vec![
        CargoItem::new("Light bulbs", (36.876719, -89.5878579), (32.9342919, -97.0780654))
            .between("Sikeston", "Grapevine"),
        CargoItem::new("Recyclables", (37.1298517, -80.4089389), (28.6934076, -81.5322149))
            .between("Christiansburg", "Apopka"),
    ]
}

pub const TRUCKS_CSV: &str = "\
truck,city,state,lat,lng
Hartford Plastics Incartford,Florence,AL,34.79981,-87.677251
Beyond Landscape & Design Llcilsonville,Fremont,CA,37.5482697,-121.9885719
Ibrahim Chimandalpharetta,Toledo,OH,41.6639383,-83.55521200000001
";

pub const CARGO_CSV: &str = "\
product,origin_city,origin_state,origin_lat,origin_lng,destination_city,destination_state,destination_lat,destination_lng
Light bulbs,Sikeston,MO,36.876719,-89.5878579,Grapevine,TX,32.9342919,-97.0780654
Recyclables,Christiansburg,VA,37.1298517,-80.4089389,Apopka,FL,28.6934076,-81.5322149
";
