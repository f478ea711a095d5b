//! Translates solver output back into vehicle/cargo identities.
//!
//! Slack matches are recognised by column index, never by a zero distance:
//! a truck already parked at a pickup is a real dispatch with cost 0.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::cost_matrix::CostMatrix;
use crate::model::{CargoItem, Vehicle};
use crate::solver::Assignment;

const HEADERS: [&str; 5] = ["Truck", "Cargo", "Origin", "Destination", "Distance from origin (km)"];
const BANNER: &str = "Optimal mapping of trucks to cargos table";

/// One vehicle sent to one pickup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    pub vehicle_index: usize,
    pub cargo_index: usize,
    pub vehicle_id: String,
    pub cargo_id: String,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
    pub distance_km: f64,
}

/// Human-facing view of an optimal assignment.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchPlan {
    dispatches: Vec<Dispatch>,
    idle_vehicles: Vec<String>,
    total_distance_km: f64,
    #[serde(skip)]
    by_vehicle: HashMap<String, usize>,
    #[serde(skip)]
    by_cargo: HashMap<String, usize>,
}

impl DispatchPlan {
    /// `vehicles`, `cargo`, `matrix` and `assignment` must come from the
    /// same request: matrix rows follow `vehicles`, real columns follow `cargo`.
    pub fn from_assignment(
        vehicles: &[Vehicle],
        cargo: &[CargoItem],
        matrix: &CostMatrix,
        assignment: &Assignment,
    ) -> Self {
        let mut dispatches = Vec::with_capacity(matrix.real_columns());
        let mut idle_vehicles = Vec::new();

        for (row, col) in assignment.pairs() {
            let vehicle = &vehicles[row];
            if matrix.is_slack(col) {
                idle_vehicles.push(vehicle.id.clone());
                continue;
            }
            let item = &cargo[col];
            dispatches.push(Dispatch {
                vehicle_index: row,
                cargo_index: col,
                vehicle_id: vehicle.id.clone(),
                cargo_id: item.id.clone(),
                origin_city: item.origin_city.clone(),
                destination_city: item.destination_city.clone(),
                distance_km: matrix.get(row, col),
            });
        }

        let total_distance_km: f64 = dispatches.iter().map(|d| d.distance_km).sum();
        let by_vehicle = dispatches
            .iter()
            .enumerate()
            .map(|(i, d)| (d.vehicle_id.clone(), i))
            .collect();
        let by_cargo = dispatches
            .iter()
            .enumerate()
            .map(|(i, d)| (d.cargo_id.clone(), i))
            .collect();

        Self {
            dispatches,
            idle_vehicles,
            total_distance_km,
            by_vehicle,
            by_cargo,
        }
    }

    /// Real dispatches, in vehicle order.
    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    /// Vehicles matched to slack columns.
    pub fn idle_vehicles(&self) -> &[String] {
        &self.idle_vehicles
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn dispatch_for_vehicle(&self, vehicle_id: &str) -> Option<&Dispatch> {
        self.by_vehicle.get(vehicle_id).map(|&i| &self.dispatches[i])
    }

    pub fn dispatch_for_cargo(&self, cargo_id: &str) -> Option<&Dispatch> {
        self.by_cargo.get(cargo_id).map(|&i| &self.dispatches[i])
    }

    fn table_rows(&self) -> Vec<[String; 5]> {
        self.dispatches
            .iter()
            .map(|d| {
                [
                    d.vehicle_id.clone(),
                    d.cargo_id.clone(),
                    d.origin_city.clone().unwrap_or_default(),
                    d.destination_city.clone().unwrap_or_default(),
                    format!("{:.2}", d.distance_km),
                ]
            })
            .collect()
    }
}

impl fmt::Display for DispatchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.table_rows();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let rule = "-".repeat(BANNER.len());

        writeln!(f, "{}", BANNER)?;
        writeln!(f, "{}", rule)?;
        write_row(f, &HEADERS, &widths)?;
        let dashes = widths.map(|w| "-".repeat(w));
        write_row(f, &dashes, &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "{}", rule)?;
        write!(f, "Total distance is {:.2} km", self.total_distance_km)
    }
}

/// Text columns left-aligned, the distance column right-aligned.
fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S; 5], widths: &[usize; 5]) -> fmt::Result {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            write!(f, "  ")?;
        }
        if i == cells.len() - 1 {
            write!(f, "{:>width$}", cell.as_ref(), width = width)?;
        } else {
            write!(f, "{:<width$}", cell.as_ref(), width = width)?;
        }
    }
    writeln!(f)
}
