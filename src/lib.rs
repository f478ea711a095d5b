//! freight-match core
//!
//! Optimal one-to-one dispatch of vehicles to cargo pickups: haversine cost
//! matrix plus a Kuhn-Munkres assignment solver.

pub mod traits;
pub mod model;
pub mod error;
pub mod haversine;
pub mod cost_matrix;
pub mod solver;
pub mod report;
pub mod loader;
pub mod optimizer;

pub use cost_matrix::{build_cost_matrix, BuildOptions, CostMatrix, CostMatrixBuilder};
pub use error::{MatchError, Result};
pub use model::{CargoItem, GeoPoint, Vehicle};
pub use solver::{solve_assignment, Assignment};
