/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_array_types::M33;

use crate::FailResult;
use crate::Lattice;

/// Periodic boundary flags, one per cell vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pbc(pub [bool; 3]);

/// Fully periodic.
impl Default for Pbc {
    fn default() -> Self
    { Pbc([true; 3]) }
}

impl Pbc {
    /// Number of periodic directions.
    pub fn dimension(&self) -> usize
    { self.0.iter().filter(|&&b| b).count() }

    /// Indices of the periodic axes, in increasing order.
    pub fn periodic_axes(&self) -> Vec<usize>
    { (0..3).filter(|&k| self.0[k]).collect() }

    /// Indices of the non-periodic axes, in increasing order.
    pub fn nonperiodic_axes(&self) -> Vec<usize>
    { (0..3).filter(|&k| !self.0[k]).collect() }
}

impl From<[bool; 3]> for Pbc {
    fn from(flags: [bool; 3]) -> Self
    { Pbc(flags) }
}

/// Everything the classifier needs to know about a cell.
#[derive(Debug, Clone)]
pub struct CellGeometry {
    pub dimension: usize,
    /// `None` exactly when `dimension == 0`.
    pub metrics: Option<CellMetrics>,
}

#[derive(Debug, Clone)]
pub struct CellMetrics {
    pub lattice: Lattice,
    /// `2π` times the inverse transpose of the cell.
    pub reciprocal: Lattice,
    /// `[a, b, c]`
    pub lengths: [f64; 3],
    /// `[cos α, cos β, cos γ]`, with angle `i` between the vectors other than `i`.
    pub cosines: [f64; 3],
    pub reciprocal_lengths: [f64; 3],
    /// Same convention as `cosines`, for the reciprocal vectors.
    pub reciprocal_cosines: [f64; 3],
}

/// Derive lengths, angles and the reciprocal cell.
///
/// A cell without periodic directions is never inspected, and may be
/// anything (including all zeros).  Otherwise, a cell whose vectors do
/// not span three dimensions produces a `DegenerateCellError`.
pub fn analyze(cell: &M33, pbc: Pbc) -> FailResult<CellGeometry>
{Ok({
    let dimension = pbc.dimension();
    let metrics = match dimension {
        0 => None,
        _ => Some(CellMetrics::new(Lattice::new(cell)?)),
    };
    trace!("analyzed cell: dimension {}, metrics {:?}", dimension, metrics);
    CellGeometry { dimension, metrics }
})}

impl CellMetrics {
    pub fn new(lattice: Lattice) -> Self {
        let reciprocal = lattice.reciprocal();
        CellMetrics {
            lengths: lattice.norms(),
            cosines: lattice.cosines(),
            reciprocal_lengths: reciprocal.norms(),
            reciprocal_cosines: reciprocal.cosines(),
            lattice,
            reciprocal,
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use kpath_array_types::mat;
    use crate::DegenerateCellError;

    #[test]
    fn dimension_counts_flags() {
        assert_eq!(Pbc::default().dimension(), 3);
        assert_eq!(Pbc([true, false, true]).dimension(), 2);
        assert_eq!(Pbc([true, false, true]).nonperiodic_axes(), vec![1]);
        assert_eq!(Pbc([false, false, true]).periodic_axes(), vec![2]);
        assert_eq!(Pbc([false; 3]).dimension(), 0);
    }

    #[test]
    fn zero_dimensional_ignores_cell() {
        let geom = analyze(&mat::zero(), Pbc([false; 3])).unwrap();
        assert_eq!(geom.dimension, 0);
        assert!(geom.metrics.is_none());
    }

    #[test]
    fn degenerate_cell_is_an_error() {
        let cell = mat::from_array([
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let err = analyze(&cell, Pbc::default()).unwrap_err();
        assert!(err.downcast_ref::<DegenerateCellError>().is_some());

        // even a single periodic direction needs an invertible cell
        assert!(analyze(&cell, Pbc([true, false, false])).is_err());
    }

    #[test]
    fn hexagonal_metrics() {
        let cell = mat::from_array([
            [2.0, 0.0, 0.0],
            [-1.0, 3f64.sqrt(), 0.0],
            [0.0, 0.0, 5.0],
        ]);
        let geom = analyze(&cell, Pbc::default()).unwrap();
        let metrics = geom.metrics.unwrap();
        assert_close!(abs=1e-12, metrics.lengths, [2.0, 2.0, 5.0]);
        assert_close!(abs=1e-12, metrics.cosines, [0.0, 0.0, -0.5]);

        // reciprocal vectors of a 120 degree lattice are 60 degrees apart
        assert_close!(abs=1e-12, metrics.reciprocal_cosines, [0.0, 0.0, 0.5]);
        let b = 2.0 * PI / 3f64.sqrt();
        assert_close!(abs=1e-12, metrics.reciprocal_lengths, [b, b, 2.0 * PI / 5.0]);
    }
}
