//! Vehicle-to-pickup cost matrix construction.
//!
//! Rows follow vehicle order, columns follow cargo order. When the fleet is
//! larger than the cargo list, zero-cost slack columns are appended so the
//! matrix is square; a vehicle matched to a slack column stays idle.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MatchError, Result};
use crate::haversine::{EARTH_RADIUS_KM, Haversine};
use crate::model::{CargoItem, Vehicle};
use crate::traits::{Carrier, DistanceMetric, Shipment};

/// Fleet size from which rows are computed on the rayon pool.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Sphere radius for haversine costs, in kilometers.
    pub earth_radius_km: f64,
    /// Vehicle count at or above which rows are built in parallel.
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Square matrix of pickup distances, padded with slack columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: Vec<Vec<f64>>,
    real_columns: usize,
}

impl CostMatrix {
    /// Side length of the matrix (the vehicle count).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns backed by real cargo.
    pub fn real_columns(&self) -> usize {
        self.real_columns
    }

    /// Number of zero-cost padding columns.
    pub fn slack_columns(&self) -> usize {
        self.size() - self.real_columns
    }

    pub fn is_slack(&self, col: usize) -> bool {
        col >= self.real_columns
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

/// Builds [`CostMatrix`] values with a pluggable distance metric.
#[derive(Debug, Clone)]
pub struct CostMatrixBuilder<M = Haversine> {
    metric: M,
    parallel_threshold: usize,
}

impl CostMatrixBuilder<Haversine> {
    /// Haversine costs on the default Earth radius.
    pub fn haversine() -> Self {
        Self::from_options(&BuildOptions::default())
    }

    pub fn from_options(options: &BuildOptions) -> Self {
        Self {
            metric: Haversine::new(options.earth_radius_km),
            parallel_threshold: options.parallel_threshold,
        }
    }
}

impl<M: DistanceMetric + Sync> CostMatrixBuilder<M> {
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Distance from every vehicle to every cargo origin, padded to square.
    ///
    /// Fails with [`MatchError::DataNotLoaded`] if either list is empty and
    /// with [`MatchError::InvalidDataSize`] if there is more cargo than
    /// vehicles.
    pub fn build<C, S>(&self, vehicles: &[C], cargo: &[S]) -> Result<CostMatrix>
    where
        C: Carrier + Sync,
        S: Shipment + Sync,
    {
        if vehicles.is_empty() || cargo.is_empty() {
            warn!(vehicles = vehicles.len(), cargo = cargo.len(), "fleet data not loaded");
            return Err(MatchError::DataNotLoaded);
        }
        if cargo.len() > vehicles.len() {
            warn!(vehicles = vehicles.len(), cargo = cargo.len(), "more cargo than vehicles");
            return Err(MatchError::InvalidDataSize {
                cargo: cargo.len(),
                vehicles: vehicles.len(),
            });
        }

        let size = vehicles.len();
        let row_for = |vehicle: &C| -> Vec<f64> {
            let from = vehicle.position();
            let mut row = Vec::with_capacity(size);
            row.extend(cargo.iter().map(|item| self.metric.distance_km(from, item.origin())));
            row.resize(size, 0.0);
            row
        };

        let parallel = size >= self.parallel_threshold;
        let rows: Vec<Vec<f64>> = if parallel {
            vehicles.par_iter().map(&row_for).collect()
        } else {
            vehicles.iter().map(&row_for).collect()
        };

        debug!(
            size,
            real_columns = cargo.len(),
            slack_columns = size - cargo.len(),
            parallel,
            "built cost matrix"
        );

        Ok(CostMatrix {
            rows,
            real_columns: cargo.len(),
        })
    }
}

/// Haversine cost matrix with default options.
pub fn build_cost_matrix(vehicles: &[Vehicle], cargo: &[CargoItem]) -> Result<CostMatrix> {
    CostMatrixBuilder::haversine().build(vehicles, cargo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoPoint;

    fn vehicles(points: &[(f64, f64)]) -> Vec<Vehicle> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| Vehicle::new(format!("v{}", i), *p))
            .collect()
    }

    fn cargo(points: &[(f64, f64)]) -> Vec<CargoItem> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| CargoItem::new(format!("c{}", i), *p, (10.0, 10.0)))
            .collect()
    }

    /// Counts degrees of longitude, handy for exact expectations.
    struct LngDelta;

    impl DistanceMetric for LngDelta {
        fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
            (from.lng - to.lng).abs()
        }
    }

    #[test]
    fn test_square_with_slack_columns() {
        let matrix = build_cost_matrix(
            &vehicles(&[(0.0, 0.0), (0.0, 1.0), (0.0, 5.0)]),
            &cargo(&[(0.0, 0.0), (0.0, 1.0)]),
        )
        .unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.real_columns(), 2);
        assert_eq!(matrix.slack_columns(), 1);
        assert!(matrix.rows().iter().all(|row| row.len() == 3));
        assert!(matrix.rows().iter().all(|row| row[2] == 0.0));
        assert!(!matrix.is_slack(1));
        assert!(matrix.is_slack(2));
    }

    #[test]
    fn test_costs_measured_to_origin() {
        let matrix = CostMatrixBuilder::new(LngDelta)
            .build(&vehicles(&[(0.0, 0.0), (0.0, 3.0)]), &cargo(&[(0.0, 1.0), (0.0, 7.0)]))
            .unwrap();

        assert_eq!(matrix.rows(), &[vec![1.0, 7.0], vec![2.0, 4.0]]);
        assert_eq!(matrix.slack_columns(), 0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let fleet: Vec<Vehicle> = (0..20)
            .map(|i| Vehicle::new(format!("v{}", i), (i as f64 * 0.7, -(i as f64) * 1.3)))
            .collect();
        let loads = cargo(&[(1.0, 1.0), (-4.0, 2.5), (30.0, -60.0)]);

        let sequential = CostMatrixBuilder::haversine().parallel_threshold(usize::MAX).build(&fleet, &loads).unwrap();
        let parallel = CostMatrixBuilder::haversine().parallel_threshold(1).build(&fleet, &loads).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_rejects_more_cargo_than_vehicles() {
        let err = build_cost_matrix(&vehicles(&[(0.0, 0.0)]), &cargo(&[(0.0, 0.0), (1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, MatchError::InvalidDataSize { cargo: 2, vehicles: 1 }));
    }

    #[test]
    fn test_rejects_empty_lists() {
        let err = build_cost_matrix(&[], &cargo(&[(0.0, 0.0)])).unwrap_err();
        assert!(matches!(err, MatchError::DataNotLoaded));

        let err = build_cost_matrix(&vehicles(&[(0.0, 0.0)]), &[]).unwrap_err();
        assert!(matches!(err, MatchError::DataNotLoaded));
    }

    #[test]
    fn test_options_radius_is_used() {
        let options = BuildOptions {
            earth_radius_km: 1.0,
            ..BuildOptions::default()
        };
        let matrix = CostMatrixBuilder::from_options(&options)
            .build(&vehicles(&[(0.0, 0.0)]), &cargo(&[(0.0, 180.0)]))
            .unwrap();

        assert!((matrix.get(0, 0) - std::f64::consts::PI).abs() < 1e-9);
    }
}
