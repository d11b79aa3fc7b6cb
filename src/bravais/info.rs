/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_array_types::{mat, V3, M33};
use kpath_structure::AxisPerm;

/// A Bravais lattice together with the variation of its Brillouin zone.
///
/// Variants that need extra parameters to place their special points
/// carry exactly those parameters.  Names of 3D variants follow the
/// Setyawan-Curtarolo short names.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BravaisLattice {
    Cub,
    Fcc,
    Bcc,
    Tet,
    Bct1 { eta: f64 },
    Bct2 { eta: f64, csi: f64 },
    Orc,
    Orcf1 { zeta: f64, eta: f64 },
    Orcf2 { eta: f64, phi: f64, delta: f64 },
    Orcf3 { zeta: f64, eta: f64 },
    Orci { csi: f64, eta: f64, dlt: f64, mu: f64 },
    Orcc { zeta: f64 },
    Hex,
    Rhl1 { eta: f64, nu: f64 },
    Rhl2 { eta: f64, nu: f64 },
    Mcl { eta: f64, nu: f64 },
    Mclc1 { zeta: f64, eta: f64, psi: f64, phi: f64 },
    Mclc2 { zeta: f64, eta: f64, psi: f64, phi: f64 },
    Mclc3 { mu: f64, delta: f64, zeta: f64, eta: f64, phi: f64, psi: f64 },
    Mclc4 { mu: f64, delta: f64, zeta: f64, eta: f64, phi: f64, psi: f64 },
    Mclc5 { zeta: f64, eta: f64, mu: f64, nu: f64, omega: f64, delta: f64, rho: f64 },
    Tri1a,
    Tri1b,
    Tri2a,
    Tri2b,

    Square,
    Rectangular,
    CenteredRectangular,
    Hexagonal2d,
    Oblique,

    Line,
    Point,
}

/// The result of classifying a cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BravaisInfo {
    pub lattice: BravaisLattice,
    /// Takes points from canonical order to the order of the input cell.
    pub permutation: AxisPerm,
    /// Canonical axes whose vector is reversed with respect to the input
    /// cell.  Some lattices (e.g. monoclinic with an obtuse angle) only
    /// reach their conventional setting this way.
    pub negated: [bool; 3],
}

impl BravaisLattice {
    pub fn dimension(&self) -> usize {
        use self::BravaisLattice::*;
        match *self {
            Square | Rectangular | CenteredRectangular | Hexagonal2d | Oblique => 2,
            Line => 1,
            Point => 0,
            _ => 3,
        }
    }

    /// 1-14 in three dimensions, 1-5 in two, and 1 otherwise.
    pub fn index(&self) -> u32 {
        use self::BravaisLattice::*;
        match *self {
            Cub => 1,
            Fcc => 2,
            Bcc => 3,
            Tet => 4,
            Bct1 { .. } | Bct2 { .. } => 5,
            Orc => 6,
            Orcf1 { .. } | Orcf2 { .. } | Orcf3 { .. } => 7,
            Orci { .. } => 8,
            Orcc { .. } => 9,
            Hex => 10,
            Rhl1 { .. } | Rhl2 { .. } => 11,
            Mcl { .. } => 12,
            Mclc1 { .. } | Mclc2 { .. } | Mclc3 { .. } | Mclc4 { .. } | Mclc5 { .. } => 13,
            Tri1a | Tri1b | Tri2a | Tri2b => 14,

            Square => 1,
            Rectangular => 2,
            CenteredRectangular => 3,
            Hexagonal2d => 4,
            Oblique => 5,

            Line | Point => 1,
        }
    }

    pub fn short_name(&self) -> &'static str {
        use self::BravaisLattice::*;
        match *self {
            Cub => "cub",
            Fcc => "fcc",
            Bcc => "bcc",
            Tet => "tet",
            Bct1 { .. } | Bct2 { .. } => "bct",
            Orc => "orc",
            Orcf1 { .. } | Orcf2 { .. } | Orcf3 { .. } => "orcf",
            Orci { .. } => "orci",
            Orcc { .. } => "orcc",
            Hex => "hex",
            Rhl1 { .. } | Rhl2 { .. } => "rhl",
            Mcl { .. } => "mcl",
            Mclc1 { .. } | Mclc2 { .. } | Mclc3 { .. } | Mclc4 { .. } | Mclc5 { .. } => "mclc",
            Tri1a | Tri1b | Tri2a | Tri2b => "tri",

            Square => "sq",
            Rectangular => "rec",
            CenteredRectangular => "crec",
            Hexagonal2d => "hex",
            Oblique => "obl",

            Line => "1D",
            Point => "0D",
        }
    }

    pub fn extended_name(&self) -> &'static str {
        use self::BravaisLattice::*;
        match *self {
            Cub => "cubic",
            Fcc => "face-centered cubic",
            Bcc => "body-centered cubic",
            Tet => "tetragonal",
            Bct1 { .. } | Bct2 { .. } => "body-centered tetragonal",
            Orc => "orthorhombic",
            Orcf1 { .. } | Orcf2 { .. } | Orcf3 { .. } => "face-centered orthorhombic",
            Orci { .. } => "body-centered orthorhombic",
            Orcc { .. } => "C-centered orthorhombic",
            Hex => "hexagonal",
            Rhl1 { .. } | Rhl2 { .. } => "rhombohedral",
            Mcl { .. } => "monoclinic",
            Mclc1 { .. } | Mclc2 { .. } | Mclc3 { .. } | Mclc4 { .. } | Mclc5 { .. } => "C-centered monoclinic",
            Tri1a | Tri1b | Tri2a | Tri2b => "triclinic",

            Square => "square",
            Rectangular => "rectangular",
            CenteredRectangular => "centered rectangular",
            Hexagonal2d => "hexagonal",
            Oblique => "oblique",

            Line => "one dimension",
            Point => "zero dimension",
        }
    }

    /// Name of the Brillouin zone variation, for lattices that have several.
    pub fn variation(&self) -> Option<&'static str> {
        use self::BravaisLattice::*;
        Some(match *self {
            Bct1 { .. } => "bct1",
            Bct2 { .. } => "bct2",
            Orcf1 { .. } => "orcf1",
            Orcf2 { .. } => "orcf2",
            Orcf3 { .. } => "orcf3",
            Rhl1 { .. } => "rhl1",
            Rhl2 { .. } => "rhl2",
            Mclc1 { .. } => "mclc1",
            Mclc2 { .. } => "mclc2",
            Mclc3 { .. } => "mclc3",
            Mclc4 { .. } => "mclc4",
            Mclc5 { .. } => "mclc5",
            Tri1a => "tri1a",
            Tri1b => "tri1b",
            Tri2a => "tri2a",
            Tri2b => "tri2b",
            _ => return None,
        })
    }

    /// The named parameters carried by this variant (empty if none).
    pub fn extra(&self) -> Vec<(&'static str, f64)> {
        use self::BravaisLattice::*;
        match *self {
            Bct1 { eta } => vec![("eta", eta)],
            Bct2 { eta, csi } => vec![("eta", eta), ("csi", csi)],
            Orcf1 { zeta, eta } |
            Orcf3 { zeta, eta } => vec![("zeta", zeta), ("eta", eta)],
            Orcf2 { eta, phi, delta } => vec![("eta", eta), ("phi", phi), ("delta", delta)],
            Orci { csi, eta, dlt, mu } => vec![("csi", csi), ("eta", eta), ("dlt", dlt), ("mu", mu)],
            Orcc { zeta } => vec![("zeta", zeta)],
            Rhl1 { eta, nu } |
            Rhl2 { eta, nu } |
            Mcl { eta, nu } => vec![("eta", eta), ("nu", nu)],
            Mclc1 { zeta, eta, psi, phi } |
            Mclc2 { zeta, eta, psi, phi } => {
                vec![("zeta", zeta), ("eta", eta), ("psi", psi), ("phi", phi)]
            },
            Mclc3 { mu, delta, zeta, eta, phi, psi } |
            Mclc4 { mu, delta, zeta, eta, phi, psi } => vec![
                ("mu", mu), ("delta", delta), ("zeta", zeta),
                ("eta", eta), ("phi", phi), ("psi", psi),
            ],
            Mclc5 { zeta, eta, mu, nu, omega, delta, rho } => vec![
                ("zeta", zeta), ("eta", eta), ("mu", mu), ("nu", nu),
                ("omega", omega), ("delta", delta), ("rho", rho),
            ],
            _ => vec![],
        }
    }
}

impl BravaisInfo {
    pub fn new(lattice: BravaisLattice, permutation: AxisPerm) -> Self
    { BravaisInfo { lattice, permutation, negated: [false; 3] } }

    /// Reverse a canonical axis.
    pub fn negating(mut self, axis: usize) -> Self
    {
        self.negated[axis] = !self.negated[axis];
        self
    }

    /// Bring a point from the canonical tables into the input cell's
    /// reciprocal basis.
    pub fn to_input_axes(&self, point: &V3) -> V3
    {
        // (0.0 - x keeps zeros positive)
        let signed = V3::from_fn(|k| match self.negated[k] {
            true => 0.0 - point[k],
            false => point[k],
        });
        self.permutation.permute(&signed)
    }

    /// The input cell, rewritten in the setting the tables are written for.
    pub fn canonical_cell(&self, cell: &M33) -> M33
    {
        let rows = self.permutation.canonicalize_rows(cell);
        mat::from_fn(|r, c| match self.negated[r] {
            true => -rows[r][c],
            false => rows[r][c],
        })
    }
}

// Forwarding accessors, so that callers rarely need to reach into `lattice`.
impl BravaisInfo {
    pub fn short_name(&self) -> &'static str { self.lattice.short_name() }
    pub fn extended_name(&self) -> &'static str { self.lattice.extended_name() }
    pub fn index(&self) -> u32 { self.lattice.index() }
    pub fn dimension(&self) -> usize { self.lattice.dimension() }
    pub fn variation(&self) -> Option<&'static str> { self.lattice.variation() }
    pub fn extra(&self) -> Vec<(&'static str, f64)> { self.lattice.extra() }
}
