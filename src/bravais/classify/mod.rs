/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_array_types::M33;
use kpath_structure::{analyze, AxisPerm, CellGeometry, Pbc};

use crate::FailResult;
use crate::fuzz::{Fuzz, Tolerances};
use crate::info::{BravaisInfo, BravaisLattice};

mod three;
mod two;

// reference cosines
pub(crate) const COS_90: f64 = 0.0;
pub(crate) const COS_60: f64 = 0.5;
pub(crate) const COS_120: f64 = -0.5;
pub(crate) const COS_BCC: f64 = -1.0 / 3.0;

/// Determine the Bravais lattice of a cell.
///
/// Only the periodic directions (`pbc`) participate.  When there are none,
/// the cell is not inspected at all.
pub fn classify(cell: &M33, pbc: Pbc, tol: &Tolerances) -> FailResult<BravaisInfo>
{ classify_geometry(&analyze(cell, pbc)?, pbc, tol) }

/// `classify`, for a cell that has already been analyzed.
pub fn classify_geometry(geom: &CellGeometry, pbc: Pbc, tol: &Tolerances) -> FailResult<BravaisInfo>
{Ok({
    let fuzz = Fuzz(*tol);
    let info = match (geom.dimension, &geom.metrics) {
        (0, _) => point_info(),
        (1, Some(_)) => line_info(pbc),
        (2, Some(metrics)) => two::classify(metrics, pbc, fuzz)?,
        (3, Some(metrics)) => three::classify(metrics, fuzz)?,
        (dim, None) => panic!("(BUG) missing metrics in {}d geometry", dim),
        (dim, _) => panic!("(BUG) impossible dimension {}", dim),
    };
    debug!(
        "classified {}d cell as {} (variation {:?}, permutation {:?}, negated {:?})",
        geom.dimension, info.short_name(), info.variation(), info.permutation, info.negated,
    );
    info
})}

fn point_info() -> BravaisInfo {
    BravaisInfo::new(BravaisLattice::Point, AxisPerm::eye())
}

/// The periodic axis becomes canonical axis 0.
fn line_info(pbc: Pbc) -> BravaisInfo {
    let periodic = pbc.periodic_axes();
    let others = pbc.nonperiodic_axes();
    let order = [periodic[0], others[0], others[1]];
    let permutation = AxisPerm::from_canonical_order(order).expect("(BUG) bad axis order");
    BravaisInfo::new(BravaisLattice::Line, permutation)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::mat;

    #[test]
    fn zero_dimensional_ignores_cell() {
        let tol = Tolerances::default();
        for cell in vec![mat::zero(), M33::eye(), mat::from_fn(|r, c| (r * c) as f64)] {
            let info = classify(&cell, Pbc([false; 3]), &tol).unwrap();
            assert_eq!(info.lattice, BravaisLattice::Point);
            assert_eq!(info.permutation, AxisPerm::eye());
        }
    }

    #[test]
    fn one_dimensional() {
        let tol = Tolerances::default();
        let cell = mat::from_array([
            [3.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let info = classify(&cell, Pbc([false, false, true]), &tol).unwrap();
        assert_eq!(info.lattice, BravaisLattice::Line);
        assert_eq!(info.short_name(), "1D");
        assert_eq!(info.permutation.canonical_order()[0], 2);

        let info = classify(&cell, Pbc([true, false, false]), &tol).unwrap();
        assert_eq!(info.permutation, AxisPerm::eye());
    }

    #[test]
    fn deterministic() {
        let tol = Tolerances::default();
        let cell = mat::from_array([
            [1.0, 0.1, 0.0],
            [0.3, 1.7, 0.2],
            [-0.2, 0.4, 2.9],
        ]);
        let first = classify(&cell, Pbc::default(), &tol);
        let second = classify(&cell, Pbc::default(), &tol);
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("nondeterministic classification"),
        }
    }
}
