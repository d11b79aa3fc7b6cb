/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;

use kpath_array_types::{V3, M33};
use kpath_structure::{analyze, Coords, Pbc};

use crate::FailResult;
use crate::fuzz::Tolerances;
use crate::info::BravaisInfo;
use crate::classify::classify_geometry;
use crate::table::lookup;

/// Special points and a suggested path, in the axis order of the input cell.
#[derive(Debug, Clone, PartialEq)]
pub struct KpointsPath {
    /// Fractional coordinates of the reciprocal cell, or cartesian
    /// wavevectors if these were requested.
    pub point_coords: BTreeMap<String, V3>,
    pub path: Vec<(String, String)>,
    pub bravais_info: BravaisInfo,
}

/// Classify a cell and produce the special points of its Brillouin zone.
///
/// Unless `cartesian` is set, the points are fractional coordinates
/// with respect to the reciprocal cell `2π (cell⁻¹)ᵀ`.
pub fn kpoints_path(cell: &M33, pbc: Pbc, cartesian: bool, tol: &Tolerances) -> FailResult<KpointsPath>
{Ok({
    let geom = analyze(cell, pbc)?;
    let bravais_info = classify_geometry(&geom, pbc, tol)?;
    let table = lookup(&bravais_info.lattice);

    let labels: Vec<String> = table.points.keys().cloned().collect();
    let fracs: Vec<V3> = {
        table.points.values()
            .map(|point| bravais_info.to_input_axes(point))
            .collect()
    };

    let coords = match (cartesian, &geom.metrics) {
        (true, Some(metrics)) => Coords::Fracs(fracs).into_carts(&metrics.reciprocal),
        // (without periodicity, the zone center is the only point)
        _ => fracs,
    };

    let point_coords = izip!(labels, coords).collect();
    KpointsPath { point_coords, path: table.path, bravais_info }
})}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::mat;
    use kpath_structure::AxisPerm;

    #[test]
    fn simple_cubic() {
        let cell = M33::eye();
        let out = kpoints_path(&cell, Pbc::default(), false, &Tolerances::default()).unwrap();
        assert_eq!(out.bravais_info.short_name(), "cub");
        assert_eq!(out.bravais_info.permutation, AxisPerm::eye());
        assert_eq!(out.point_coords["G"], V3([0.0, 0.0, 0.0]));
        assert_eq!(out.point_coords["X"], V3([0.0, 0.5, 0.0]));
    }

    #[test]
    fn cubic_at_any_scale() {
        for &scale in &[1e-3, 0.7, 1.0, 5.43, 1e4] {
            let cell = M33::eye() * scale;
            let out = kpoints_path(&cell, Pbc::default(), false, &Tolerances::default()).unwrap();
            assert_eq!(out.bravais_info.short_name(), "cub");
        }
    }

    #[test]
    fn zero_dimensional() {
        let cell = mat::from_fn(|r, c| (r + 2 * c) as f64);
        for &cartesian in &[false, true] {
            let out = kpoints_path(&cell, Pbc([false; 3]), cartesian, &Tolerances::default()).unwrap();
            assert_eq!(out.bravais_info.short_name(), "0D");
            assert_eq!(out.point_coords.len(), 1);
            assert_eq!(out.point_coords["G"], V3::zero());
            assert_eq!(out.path, vec![("G".to_string(), "G".to_string())]);
        }
    }

    #[test]
    fn hexagonal_2d() {
        let s3 = 3f64.sqrt();
        let cell = mat::from_array([[2.0, 0.0, 0.0], [-1.0, s3, 0.0], [0.0, 0.0, 15.0]]);
        let out = kpoints_path(&cell, Pbc([true, true, false]), false, &Tolerances::default()).unwrap();
        assert_eq!(out.bravais_info.short_name(), "hex");
        assert_eq!(out.bravais_info.index(), 4);
        let labels: Vec<_> = out.point_coords.keys().map(|s| s.as_str()).collect();
        assert_eq!(labels, vec!["G", "K", "M"]);
    }

    #[test]
    fn permutation_is_applied() {
        // tetragonal with the unique axis given first
        let cell = mat::from_array([[3.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let out = kpoints_path(&cell, Pbc::default(), false, &Tolerances::default()).unwrap();
        assert_eq!(out.bravais_info.short_name(), "tet");
        // Z lies along the unique axis
        assert_eq!(out.point_coords["Z"], V3([0.5, 0.0, 0.0]));
    }

    #[test]
    fn cartesian_points_do_not_depend_on_axis_order() {
        let cell = mat::from_array([
            [0.0, 1.0, 1.5],
            [0.5, 0.0, 1.5],
            [0.5, 1.0, 0.0],
        ]);
        let tol = Tolerances::default();
        let reference = kpoints_path(&cell, Pbc::default(), true, &tol).unwrap();
        assert_eq!(reference.bravais_info.variation(), Some("orcf1"));

        for &order in &[[1, 0, 2], [2, 1, 0], [1, 2, 0]] {
            let permuted = mat::from_fn(|r, c| cell[order[r]][c]);
            let out = kpoints_path(&permuted, Pbc::default(), true, &tol).unwrap();
            assert_eq!(out.path, reference.path);
            for (label, point) in &out.point_coords {
                let expected = reference.point_coords[label].norm();
                assert_close!(abs=1e-9, point.norm(), expected, "{:?} {}", order, label);
            }
        }
    }

    #[test]
    fn reversed_axis_is_applied() {
        let (cos, sin) = (110f64.to_radians().cos(), 110f64.to_radians().sin());
        let obtuse = mat::from_array([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 3.0 * cos, 3.0 * sin]]);
        // same lattice, third vector reversed
        let acute = mat::from_array([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, -3.0 * cos, -3.0 * sin]]);

        let tol = Tolerances::default();
        let out = kpoints_path(&obtuse, Pbc::default(), false, &tol).unwrap();
        let reference = kpoints_path(&acute, Pbc::default(), false, &tol).unwrap();
        assert_eq!(out.bravais_info.short_name(), "mcl");
        assert_eq!(out.bravais_info.negated, [false, false, true]);
        assert_eq!(reference.bravais_info.negated, [false; 3]);
        for (label, point) in &out.point_coords {
            let expected = reference.point_coords[label];
            assert_close!(abs=1e-12, point.0, [expected[0], expected[1], -expected[2]], "{}", label);
        }

        let out = kpoints_path(&obtuse, Pbc::default(), true, &tol).unwrap();
        let reference = kpoints_path(&acute, Pbc::default(), true, &tol).unwrap();
        for (label, point) in &out.point_coords {
            assert_close!(abs=1e-12, point.0, reference.point_coords[label].0, "{}", label);
        }
    }

    #[test]
    fn cartesian_matches_reciprocal_cell() {
        let cell = mat::from_array([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let tol = Tolerances::default();
        let out = kpoints_path(&cell, Pbc::default(), true, &tol).unwrap();
        // |b| = 2π / 2
        let pi = std::f64::consts::PI;
        assert_close!(out.point_coords["X"].0, [0.0, 0.5 * pi, 0.0]);
        assert_close!(out.point_coords["R"].0, [0.5 * pi, 0.5 * pi, 0.5 * pi]);
    }
}
