/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Special points and suggested paths for each Bravais lattice.
//!
//! Coordinates are fractional, in terms of the reciprocal lattice vectors
//! of the *canonical* cell.  Labels are ASCII: `G` stands for the zone
//! center, and `S`/`S1` in `bct2` are the points usually written Σ and Σ1.

use std::collections::BTreeMap;

use kpath_array_types::V3;

use crate::info::BravaisLattice;

mod three;
mod low;

/// Named points and a path through them.
#[derive(Debug, Clone, PartialEq)]
pub struct KpathTable {
    pub points: BTreeMap<String, V3>,
    /// Consecutive legs of the path.  A break in the path appears as a leg
    /// whose start differs from the end of the previous leg.
    pub path: Vec<(String, String)>,
}

/// The special points and path of a lattice, in canonical axis order.
pub fn lookup(lattice: &BravaisLattice) -> KpathTable
{
    use crate::info::BravaisLattice::*;

    match *lattice {
        Cub => three::CUB.clone(),
        Fcc => three::FCC.clone(),
        Bcc => three::BCC.clone(),
        Tet => three::TET.clone(),
        Bct1 { eta } => three::bct1(eta),
        Bct2 { eta, csi } => three::bct2(eta, csi),
        Orc => three::ORC.clone(),
        Orcf1 { zeta, eta } => three::orcf13(zeta, eta, three::ORCF1_PATH),
        Orcf2 { eta, phi, delta } => three::orcf2(eta, phi, delta),
        Orcf3 { zeta, eta } => three::orcf13(zeta, eta, three::ORCF3_PATH),
        Orci { csi, eta, dlt, mu } => three::orci(csi, eta, dlt, mu),
        Orcc { zeta } => three::orcc(zeta),
        Hex => three::HEX.clone(),
        Rhl1 { eta, nu } => three::rhl1(eta, nu),
        Rhl2 { eta, nu } => three::rhl2(eta, nu),
        Mcl { eta, nu } => three::mcl(eta, nu),
        Mclc1 { zeta, eta, psi, phi } => three::mclc12(zeta, eta, psi, phi, false),
        Mclc2 { zeta, eta, psi, phi } => three::mclc12(zeta, eta, psi, phi, true),
        Mclc3 { mu, delta, zeta, eta, phi, psi } => three::mclc34(mu, delta, zeta, eta, phi, psi, three::MCLC3_PATH),
        Mclc4 { mu, delta, zeta, eta, phi, psi } => three::mclc34(mu, delta, zeta, eta, phi, psi, three::MCLC4_PATH),
        Mclc5 { zeta, eta, mu, nu, omega, delta, rho } => three::mclc5(zeta, eta, mu, nu, omega, delta, rho),
        Tri1a | Tri2a => three::TRI_A.clone(),
        Tri1b | Tri2b => three::TRI_B.clone(),

        Square => low::SQUARE.clone(),
        Rectangular => low::RECTANGULAR.clone(),
        CenteredRectangular => low::CENTERED_RECTANGULAR.clone(),
        Hexagonal2d => low::HEXAGONAL.clone(),
        Oblique => low::OBLIQUE.clone(),
        Line => low::LINE.clone(),
        Point => low::POINT.clone(),
    }
}

impl KpathTable {
    /// Build a table from points (the zone center is always included)
    /// and a path written like `"G-X-M|R-G"`.
    pub(crate) fn new(points: &[(&str, [f64; 3])], path: &str) -> KpathTable
    {
        let mut map = BTreeMap::new();
        map.insert("G".to_string(), V3::zero());
        for &(label, coords) in points {
            map.insert(label.to_string(), V3(coords));
        }
        let path = parse_path(path);
        debug_assert!(
            path.iter().all(|(a, b)| map.contains_key(a) && map.contains_key(b)),
            "(BUG) path {:?} mentions an undefined point", path,
        );
        KpathTable { points: map, path }
    }

    /// The labels in the order they are first visited by the path.
    pub fn labels_on_path(&self) -> Vec<&str>
    {
        let mut out: Vec<&str> = vec![];
        for (a, b) in &self.path {
            for label in vec![a, b] {
                if !out.contains(&label.as_str()) {
                    out.push(label);
                }
            }
        }
        out
    }
}

/// `"G-X-M|R-G"` becomes `[(G, X), (X, M), (R, G)]`.
///
/// A one-label piece contributes a leg that starts and ends on that label.
pub(crate) fn parse_path(path: &str) -> Vec<(String, String)>
{
    let mut out = vec![];
    for piece in path.split('|') {
        let labels: Vec<_> = piece.split('-').map(|s| s.trim().to_string()).collect();
        match labels.len() {
            1 => out.push((labels[0].clone(), labels[0].clone())),
            _ => out.extend(labels.windows(2).map(|w| (w[0].clone(), w[1].clone()))),
        }
    }
    out
}
