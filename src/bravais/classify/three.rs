/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Classification of fully periodic cells.
//!
//! The decision is made by counting which pairs of lattice vectors have
//! equal lengths and which pairs of angles are equal.  Cells that match
//! nothing more specific are triclinic.

use kpath_array_types::V3;
use kpath_structure::{AxisPerm, CellMetrics};

use crate::FailResult;
use crate::fuzz::{Fuzz, matched, odd_axis};
use crate::info::{BravaisInfo, BravaisLattice};
use super::{COS_90, COS_60, COS_120, COS_BCC};

type Branch = FailResult<Option<BravaisInfo>>;

fn found(lattice: BravaisLattice, permutation: AxisPerm) -> Branch
{ found_negating(lattice, permutation, None) }

fn found_negating(lattice: BravaisLattice, permutation: AxisPerm, axis: Option<usize>) -> Branch
{
    let info = BravaisInfo::new(lattice, permutation);
    Ok(Some(match axis {
        Some(axis) => info.negating(axis),
        None => info,
    }))
}

pub(super) fn classify(metrics: &CellMetrics, fuzz: Fuzz) -> FailResult<BravaisInfo>
{Ok({
    let len_pairs = matched(&fuzz.length_pairs(&metrics.lengths));
    let cos_pairs = matched(&fuzz.angle_pairs(&metrics.cosines));

    let special = match len_pairs.len() {
        3 => three_equal_lengths(metrics, fuzz, &cos_pairs)?,
        1 => two_equal_lengths(metrics, fuzz, len_pairs[0], &cos_pairs)?,
        0 => no_equal_lengths(metrics, fuzz, &cos_pairs)?,
        _ => inconsistent!("lengths {:?} are not transitively equal", metrics.lengths),
    };
    match special {
        Some(info) => info,
        None => triclinic(metrics, fuzz)?,
    }
})}

fn three_equal_lengths(metrics: &CellMetrics, fuzz: Fuzz, cos_pairs: &[usize]) -> Branch
{
    let cosines = &metrics.cosines;
    match cos_pairs.len() {
        3 => {
            let c = cosines[0];
            let lattice = if fuzz.a_eq(c, COS_90) {
                BravaisLattice::Cub
            } else if fuzz.a_eq(c, COS_60) {
                BravaisLattice::Fcc
            } else if fuzz.a_eq(c, COS_BCC) {
                BravaisLattice::Bcc
            } else if c > 0.0 {
                let eta = (1.0 + 4.0 * c) / (2.0 + 4.0 * c);
                BravaisLattice::Rhl1 { eta, nu: 0.75 - eta / 2.0 }
            } else {
                let eta = (1.0 + c) / (2.0 * (1.0 - c));
                BravaisLattice::Rhl2 { eta, nu: 0.75 - eta / 2.0 }
            };
            found(lattice, AxisPerm::eye())
        },

        // body-centered tetragonal, or a centered cell with a right angle
        1 => {
            let k = cos_pairs[0];
            let odd = odd_axis(k);
            let shared = cosines[k];
            if fuzz.a_eq(shared, COS_90) {
                return hex_or_orcc(metrics, fuzz, odd);
            }
            if shared > 0.0 {
                inconsistent!("equal cosines {} of a body-centered cell must be negative", shared);
            }

            let a = metrics.lengths[0];
            let c2 = -4.0 * shared * a * a;
            let a2 = 2.0 * a * a - c2 / 2.0;
            let lattice = match c2 < a2 {
                true => BravaisLattice::Bct1 { eta: (1.0 + c2 / a2) / 4.0 },
                false => BravaisLattice::Bct2 {
                    eta: (1.0 + a2 / c2) / 4.0,
                    csi: a2 / (2.0 * c2),
                },
            };
            found(lattice, AxisPerm::with_odd_axis_last(odd))
        },

        0 => orci(metrics, fuzz),

        _ => inconsistent!("cosines {:?} are not transitively equal", cosines),
    }
}

fn two_equal_lengths(metrics: &CellMetrics, fuzz: Fuzz, k: usize, cos_pairs: &[usize]) -> Branch
{
    let odd = odd_axis(k);
    let cosines = &metrics.cosines;
    match cos_pairs.len() {
        3 if fuzz.a_eq(cosines[0], COS_90) => {
            found(BravaisLattice::Tet, AxisPerm::with_odd_axis_last(odd))
        },
        2 => inconsistent!("cosines {:?} are not transitively equal", cosines),
        1 if cos_pairs[0] == k => match fuzz.a_eq(cosines[k], COS_90) {
            true => hex_or_orcc(metrics, fuzz, odd),
            false => mclc(metrics, fuzz, odd),
        },
        _ => Ok(None),
    }
}

fn no_equal_lengths(metrics: &CellMetrics, fuzz: Fuzz, cos_pairs: &[usize]) -> Branch
{
    let cosines = &metrics.cosines;
    match cos_pairs.len() {
        3 if fuzz.a_eq(cosines[0], COS_90) => {
            found(BravaisLattice::Orc, AxisPerm::ranking(&metrics.lengths))
        },
        2 => inconsistent!("cosines {:?} are not transitively equal", cosines),
        1 if fuzz.a_eq(cosines[cos_pairs[0]], COS_90) => mcl(metrics, odd_axis(cos_pairs[0])),
        0 => orcf(metrics, fuzz),
        _ => Ok(None),
    }
}

/// Two equal vectors perpendicular to the third.
///
/// The conventional cells have an obtuse angle between the equal vectors;
/// an acute angle is made obtuse by reversing the second of them.
fn hex_or_orcc(metrics: &CellMetrics, fuzz: Fuzz, odd: usize) -> Branch
{
    let perm = AxisPerm::with_odd_axis_last(odd);
    let cos = metrics.cosines[odd];
    let flip = match cos > 0.0 {
        true => Some(1),
        false => None,
    };
    if fuzz.a_eq(-cos.abs(), COS_120) {
        return found_negating(BravaisLattice::Hex, perm, flip);
    }

    let (u, w, _) = odd_last_vectors(metrics, odd);
    let sum = (u + w).norm();
    let diff = (u - w).norm();
    let (a, b) = (sum.min(diff), sum.max(diff));
    found_negating(BravaisLattice::Orcc { zeta: (1.0 + a * a / (b * b)) / 4.0 }, perm, flip)
}

/// The two equal-length vectors (in cyclic order) followed by the odd one.
fn odd_last_vectors(metrics: &CellMetrics, odd: usize) -> (&V3, &V3, &V3)
{
    let v = metrics.lattice.vectors();
    (&v[(odd + 1) % 3], &v[(odd + 2) % 3], &v[odd])
}

fn mclc(metrics: &CellMetrics, fuzz: Fuzz, odd: usize) -> Branch
{
    let perm = AxisPerm::with_odd_axis_last(odd);
    let (u, w, t) = odd_last_vectors(metrics, odd);
    let a = (u - w).norm();
    let b = (u + w).norm();
    let c = t.norm();
    let cosa = t.dot(&(u + w)) / (b * c);
    // reversing the third vector makes an obtuse angle acute, and leaves
    // the reciprocal vectors of the other two untouched
    let (cosa, flip) = match cosa < 0.0 {
        true => (-cosa, Some(2)),
        false => (cosa, None),
    };
    let sin2 = 1.0 - cosa * cosa;
    let ratio = b * cosa / c;

    let kcos = metrics.reciprocal_cosines[odd];
    if fuzz.a_eq(kcos, COS_90) || kcos < 0.0 {
        let zeta = (2.0 - ratio) / (4.0 * sin2);
        let eta = 0.5 + 2.0 * zeta * c * cosa / b;
        let psi = 0.75 - a * a / (4.0 * b * b * sin2);
        let phi = psi + (0.75 - psi) * ratio;
        let lattice = match fuzz.a_eq(kcos, COS_90) {
            true => BravaisLattice::Mclc2 { zeta, eta, psi, phi },
            false => BravaisLattice::Mclc1 { zeta, eta, psi, phi },
        };
        return found_negating(lattice, perm, flip);
    }

    let x = ratio + b * b * sin2 / (a * a);
    if fuzz.a_eq(x, 1.0) || x < 1.0 {
        let mu = (1.0 + b * b / (a * a)) / 4.0;
        let delta = b * c * cosa / (2.0 * a * a);
        let zeta = mu - 0.25 + (1.0 - ratio) / (4.0 * sin2);
        let eta = 0.5 + 2.0 * zeta * c * cosa / b;
        let phi = 1.0 + zeta - 2.0 * mu;
        let psi = eta - 2.0 * delta;
        let lattice = match fuzz.a_eq(x, 1.0) {
            true => BravaisLattice::Mclc4 { mu, delta, zeta, eta, phi, psi },
            false => BravaisLattice::Mclc3 { mu, delta, zeta, eta, phi, psi },
        };
        return found_negating(lattice, perm, flip);
    }

    let zeta = (b * b / (a * a) + (1.0 - ratio) / sin2) / 4.0;
    let eta = 0.5 + 2.0 * zeta * c * cosa / b;
    let mu = eta / 2.0 + b * b / (4.0 * a * a) - b * c * cosa / (2.0 * a * a);
    let nu = 2.0 * mu - zeta;
    let omega = (4.0 * nu - 1.0 - b * b * sin2 / (a * a)) * c / (2.0 * b * cosa);
    let delta = zeta * c * cosa / b + omega / 2.0 - 0.25;
    let rho = 1.0 - zeta * a * a / (b * b);
    found_negating(BravaisLattice::Mclc5 { zeta, eta, mu, nu, omega, delta, rho }, perm, flip)
}

/// Two right angles and no equal lengths.
///
/// An obtuse angle between the other two axes is made acute by reversing
/// the longer of them.
fn mcl(metrics: &CellMetrics, odd: usize) -> Branch
{
    let lengths = &metrics.lengths;
    let (o0, o1) = ((odd + 1) % 3, (odd + 2) % 3);
    let (short, long) = match lengths[o0] <= lengths[o1] {
        true => (o0, o1),
        false => (o1, o0),
    };
    let perm = AxisPerm::from_canonical_order([odd, short, long]).expect("(BUG) bad axis order");

    let b = lengths[short];
    let c = lengths[long];
    let (cosa, flip) = match metrics.cosines[odd] {
        cos if cos < 0.0 => (-cos, Some(2)),
        cos => (cos, None),
    };
    let sin2 = 1.0 - cosa * cosa;
    let eta = (1.0 - b * cosa / c) / (2.0 * sin2);
    let nu = 0.5 - eta * c * cosa / b;
    found_negating(BravaisLattice::Mcl { eta, nu }, perm, flip)
}

/// Checks for the metric of a body-centered orthorhombic cell.
fn orci(metrics: &CellMetrics, fuzz: Fuzz) -> Branch
{
    let v = metrics.lattice.vectors();
    let diagonals = [(&v[1] + &v[2]).norm(), (&v[2] + &v[0]).norm(), (&v[0] + &v[1]).norm()];
    let perm = AxisPerm::ranking(&diagonals);
    let [a, b, c] = perm.canonicalize(&diagonals);
    let (a, b, c) = (a * a, b * b, c * c);

    let sqnorms = metrics.lattice.sqnorms();
    let l2 = (sqnorms[0] + sqnorms[1] + sqnorms[2]) / 3.0;
    let expected = [
        -(-a + b + c) / (4.0 * l2),
        -(a - b + c) / (4.0 * l2),
        -(a + b - c) / (4.0 * l2),
    ];
    let actual = perm.canonicalize(&metrics.cosines);
    if !izip!(&actual, &expected).all(|(&x, &y)| fuzz.a_eq(x, y)) {
        trace!("not orci: cosines {:?}, expected {:?}", actual, expected);
        return Ok(None);
    }

    found(BravaisLattice::Orci {
        csi: (1.0 + a / c) / 4.0,
        eta: (1.0 + b / c) / 4.0,
        dlt: (b - a) / (4.0 * c),
        mu: (a + b) / (4.0 * c),
    }, perm)
}

/// Checks for the metric of a face-centered orthorhombic cell.
fn orcf(metrics: &CellMetrics, fuzz: Fuzz) -> Branch
{
    let v = metrics.lattice.vectors();
    let diagonals = [
        (&v[1] + &v[2] - &v[0]).norm(),
        (&v[2] + &v[0] - &v[1]).norm(),
        (&v[0] + &v[1] - &v[2]).norm(),
    ];
    let perm = AxisPerm::ranking(&diagonals);
    let [a, b, c] = perm.canonicalize(&diagonals);
    let (a, b, c) = (a * a, b * b, c * c);

    let expected = [
        a / ((a + c) * (a + b)).sqrt(),
        b / ((b + c) * (a + b)).sqrt(),
        c / ((b + c) * (a + c)).sqrt(),
    ];
    let actual = perm.canonicalize(&metrics.cosines);
    if !izip!(&actual, &expected).all(|(&x, &y)| fuzz.a_eq(x, y)) {
        trace!("not orcf: cosines {:?}, expected {:?}", actual, expected);
        return Ok(None);
    }

    let x = 1.0 - a / b - a / c;
    let lattice = if fuzz.a_eq(x, 0.0) {
        BravaisLattice::Orcf3 {
            zeta: (1.0 + a / b - a / c) / 4.0,
            eta: (1.0 + a / b + a / c) / 4.0,
        }
    } else if x > 0.0 {
        BravaisLattice::Orcf1 {
            zeta: (1.0 + a / b - a / c) / 4.0,
            eta: (1.0 + a / b + a / c) / 4.0,
        }
    } else {
        BravaisLattice::Orcf2 {
            eta: (1.0 + a / b - a / c) / 4.0,
            phi: (1.0 + c / b - c / a) / 4.0,
            delta: (1.0 + b / a - b / c) / 4.0,
        }
    };
    found(lattice, perm)
}

/// Decided by the reciprocal angles, with the reciprocal axes ordered
/// from shortest to longest.  The first two cosines pick `a` or `b`,
/// and a right third angle picks type 2.
fn triclinic(metrics: &CellMetrics, fuzz: Fuzz) -> FailResult<BravaisInfo>
{Ok({
    let permutation = AxisPerm::ranking(&metrics.reciprocal_lengths);
    let [ca, cb, cc] = permutation.canonicalize(&metrics.reciprocal_cosines);

    let flat = fuzz.a_eq(cc, COS_90);
    let lattice = match () {
        _ if ca < 0.0 && cb < 0.0 => match flat {
            true => BravaisLattice::Tri2a,
            false => BravaisLattice::Tri1a,
        },
        _ if ca > 0.0 && cb > 0.0 => match flat {
            true => BravaisLattice::Tri2b,
            false => BravaisLattice::Tri1b,
        },
        _ => inconsistent!("mixed signs in reciprocal cosines {:?}", [ca, cb, cc]),
    };
    BravaisInfo::new(lattice, permutation)
})}
