//! End-to-end dispatch: load, validate, build costs, solve, map back.

use std::path::Path;

use tracing::{info, warn};

use crate::cost_matrix::{BuildOptions, CostMatrix, CostMatrixBuilder};
use crate::error::{MatchError, Result};
use crate::loader;
use crate::model::{CargoItem, Vehicle};
use crate::report::DispatchPlan;
use crate::solver::{Assignment, solve_assignment};

/// Everything produced by one optimization request.
#[derive(Debug, Clone)]
pub struct Optimization {
    pub matrix: CostMatrix,
    pub assignment: Assignment,
    pub plan: DispatchPlan,
}

/// Holds one request's fleet and cargo and finds the optimal dispatch.
#[derive(Debug, Clone, Default)]
pub struct FleetOptimizer {
    vehicles: Option<Vec<Vehicle>>,
    cargo: Option<Vec<CargoItem>>,
    options: BuildOptions,
}

impl FleetOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Read trucks and cargo from CSV files.
    pub fn load(&mut self, trucks_path: impl AsRef<Path>, cargo_path: impl AsRef<Path>) -> Result<()> {
        let vehicles = loader::read_vehicles(trucks_path)?;
        let cargo = loader::read_cargo(cargo_path)?;
        self.set_fleet(vehicles, cargo);
        Ok(())
    }

    pub fn set_fleet(&mut self, vehicles: Vec<Vehicle>, cargo: Vec<CargoItem>) {
        self.vehicles = Some(vehicles);
        self.cargo = Some(cargo);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_deref().unwrap_or_default()
    }

    pub fn cargo(&self) -> &[CargoItem] {
        self.cargo.as_deref().unwrap_or_default()
    }

    /// Both lists are present and non-empty.
    pub fn is_loaded(&self) -> bool {
        matches!((&self.vehicles, &self.cargo), (Some(v), Some(c)) if !v.is_empty() && !c.is_empty())
    }

    /// There is no more cargo than there are vehicles.
    pub fn has_valid_size(&self) -> bool {
        self.cargo().len() <= self.vehicles().len()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_loaded() {
            warn!("optimize called before fleet data was loaded");
            return Err(MatchError::DataNotLoaded);
        }
        if !self.has_valid_size() {
            warn!(vehicles = self.vehicles().len(), cargo = self.cargo().len(), "cargo list larger than fleet");
            return Err(MatchError::InvalidDataSize {
                cargo: self.cargo().len(),
                vehicles: self.vehicles().len(),
            });
        }
        Ok(())
    }

    pub fn optimize(&self) -> Result<Optimization> {
        self.validate()?;

        let vehicles = self.vehicles();
        let cargo = self.cargo();
        let matrix = CostMatrixBuilder::from_options(&self.options).build(vehicles, cargo)?;
        let assignment = solve_assignment(matrix.rows())?;
        let plan = DispatchPlan::from_assignment(vehicles, cargo, &matrix, &assignment);

        info!(
            vehicles = vehicles.len(),
            cargo = cargo.len(),
            dispatched = plan.dispatches().len(),
            idle = plan.idle_vehicles().len(),
            total_distance_km = plan.total_distance_km(),
            "optimized fleet dispatch"
        );

        Ok(Optimization {
            matrix,
            assignment,
            plan,
        })
    }
}
