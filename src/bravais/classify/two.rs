/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_structure::{AxisPerm, CellMetrics, Pbc};

use crate::FailResult;
use crate::fuzz::Fuzz;
use crate::info::{BravaisInfo, BravaisLattice};
use super::{COS_90, COS_120};

/// Classify a cell with exactly two periodic axes.
///
/// The in-plane axes become canonical axes 0 and 1, and the
/// non-periodic axis becomes canonical axis 2.
pub(super) fn classify(metrics: &CellMetrics, pbc: Pbc, fuzz: Fuzz) -> FailResult<BravaisInfo>
{Ok({
    let periodic = pbc.periodic_axes();
    let (p, q) = (periodic[0], periodic[1]);
    let z = pbc.nonperiodic_axes()[0];

    let (len_p, len_q) = (metrics.lengths[p], metrics.lengths[q]);
    let cos = metrics.cosines[z];
    let equal = fuzz.l_eq(len_p, len_q);
    let right = fuzz.a_eq(cos, COS_90);

    let in_order = [p, q, z];
    let shorter_first = match len_p <= len_q {
        true => [p, q, z],
        false => [q, p, z],
    };

    let (lattice, order) = if equal && right {
        (BravaisLattice::Square, in_order)
    } else if right {
        (BravaisLattice::Rectangular, shorter_first)
    } else if equal && fuzz.a_eq(cos, COS_120) {
        (BravaisLattice::Hexagonal2d, in_order)
    } else if equal && diagonals_are_orthogonal(metrics, p, q, fuzz) {
        (BravaisLattice::CenteredRectangular, in_order)
    } else {
        (BravaisLattice::Oblique, shorter_first)
    };
    trace!("2d cell: lengths ({}, {}), cosine {} -> {}", len_p, len_q, cos, lattice.short_name());

    let permutation = AxisPerm::from_canonical_order(order).expect("(BUG) bad axis order");
    BravaisInfo::new(lattice, permutation)
})}

fn diagonals_are_orthogonal(metrics: &CellMetrics, p: usize, q: usize, fuzz: Fuzz) -> bool
{
    let v = metrics.lattice.vectors();
    let sum = &v[p] + &v[q];
    let diff = &v[p] - &v[q];
    fuzz.a_eq(sum.cos_to(&diff), COS_90)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::{mat, M33};
    use kpath_structure::analyze;
    use crate::fuzz::Tolerances;

    fn run(cell: &M33, pbc: Pbc) -> BravaisInfo {
        let geom = analyze(cell, pbc).unwrap();
        classify(geom.metrics.as_ref().unwrap(), pbc, Fuzz(Tolerances::default())).unwrap()
    }

    const XY: Pbc = Pbc([true, true, false]);

    #[test]
    fn square_and_rectangular() {
        let info = run(&mat::from_array([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 10.0]]), XY);
        assert_eq!(info.lattice, BravaisLattice::Square);
        assert_eq!(info.index(), 1);
        assert_eq!(info.permutation, AxisPerm::eye());

        // longer vector given first
        let info = run(&mat::from_array([[3.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 10.0]]), XY);
        assert_eq!(info.lattice, BravaisLattice::Rectangular);
        assert_eq!(info.index(), 2);
        assert_eq!(info.permutation.canonical_order(), [1, 0, 2]);
    }

    #[test]
    fn hexagonal() {
        let s3 = 3f64.sqrt();
        let cell = mat::from_array([[1.0, 0.0, 0.0], [-0.5, s3 / 2.0, 0.0], [0.0, 0.0, 20.0]]);
        let info = run(&cell, XY);
        assert_eq!(info.short_name(), "hex");
        assert_eq!(info.index(), 4);
        assert_eq!(info.dimension(), 2);
    }

    #[test]
    fn centered_rectangular() {
        // equal lengths, neither right nor 120 degrees
        let cell = mat::from_array([[1.0, 0.4, 0.0], [1.0, -0.4, 0.0], [0.0, 0.0, 5.0]]);
        let info = run(&cell, XY);
        assert_eq!(info.lattice, BravaisLattice::CenteredRectangular);
        assert_eq!(info.index(), 3);
    }

    #[test]
    fn oblique() {
        let cell = mat::from_array([[2.0, 0.0, 0.0], [0.3, 1.0, 0.0], [0.0, 0.0, 5.0]]);
        let info = run(&cell, XY);
        assert_eq!(info.lattice, BravaisLattice::Oblique);
        assert_eq!(info.index(), 5);
        assert_eq!(info.permutation.canonical_order(), [1, 0, 2]);
    }

    #[test]
    fn nonperiodic_axis_goes_last() {
        // the plane is spanned by axes 0 and 2
        let cell = mat::from_array([[2.0, 0.0, 0.0], [0.0, 7.0, 0.0], [0.0, 0.0, 3.0]]);
        let info = run(&cell, Pbc([true, false, true]));
        assert_eq!(info.lattice, BravaisLattice::Rectangular);
        assert_eq!(info.permutation.canonical_order(), [0, 2, 1]);

        let info = run(&cell, Pbc([false, true, true]));
        assert_eq!(info.permutation.canonical_order(), [2, 1, 0]);
    }
}
