/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::f64::consts::PI;
use std::sync::Arc;

use kpath_array_types::{V3, M33, inv};
use kpath_assert_close::{CheckClose, Tolerances, CheckCloseError};

use crate::{FailResult, DegenerateCellError};

/// Cells whose determinant is smaller than this fraction of the
/// product of the row norms are considered degenerate.
const DEGENERACY_THRESHOLD: f64 = 1e-10;

/// A vector basis for periodic boundary conditions in three dimensions.
///
/// In kpath, a Lattice is what you multiply against fractional data to
/// produce cartesian data.  The cell of a structure is a Lattice, and so
/// is its reciprocal cell.
///
/// Construction verifies that the rows are linearly independent,
/// so the precomputed inverse is always finite.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    pub fn new(matrix: &M33) -> FailResult<Self>
    {Ok({
        let norms = [matrix[0].norm(), matrix[1].norm(), matrix[2].norm()];
        let det = matrix.det();
        let threshold = DEGENERACY_THRESHOLD * norms[0] * norms[1] * norms[2];

        // NOTE: the negated comparison also rejects NaN
        let has_zero_row = norms.iter().any(|&x| x == 0.0);
        if has_zero_row || !(det.abs() >= threshold) {
            throw!(DegenerateCellError {
                backtrace: failure::Backtrace::new(),
                det, norms,
            });
        }

        let inverse = Arc::new(inv(matrix));
        let matrix = Arc::new(*matrix);
        Lattice { matrix, inverse }
    })}

    /// Get the reciprocal lattice.
    ///
    /// This is `2π` times the inverse transpose, so that its rows `b_i`
    /// satisfy `a_i · b_j = 2π δ_ij`.  It is the lattice that converts
    /// reciprocal-space fractional coordinates into cartesian wavevectors.
    #[inline]
    pub fn reciprocal(&self) -> Self {
        Lattice {
            matrix: Arc::new(self.inverse.t() * (2.0 * PI)),
            inverse: Arc::new(self.matrix.t() * (0.5 / PI)),
        }
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix().0 }

    pub fn norms(&self) -> [f64; 3]
    {
        let v = self.vectors();
        [v[0].norm(), v[1].norm(), v[2].norm()]
    }

    pub fn sqnorms(&self) -> [f64; 3]
    {
        let v = self.vectors();
        [v[0].sqnorm(), v[1].sqnorm(), v[2].sqnorm()]
    }

    /// Cosines of the angles between lattice vectors.
    ///
    /// Element `i` is the angle between the two vectors other than `i`,
    /// so the output is `[cos α, cos β, cos γ]`.
    pub fn cosines(&self) -> [f64; 3]
    {
        let v = self.vectors();
        [v[1].cos_to(&v[2]), v[2].cos_to(&v[0]), v[0].cos_to(&v[1])]
    }
}

#[cfg(test)]
impl Lattice {
    pub(crate) fn random_uniform(max: f64) -> Self {
        loop {
            let m = kpath_array_types::mat::from_fn(|_, _| (::rand::random::<f64>() - 0.5) * 2.0 * max);
            if let Ok(lattice) = Lattice::new(&m) {
                return lattice;
            }
        }
    }
}

impl CheckClose for Lattice {
    fn check_close(&self, other: &Lattice, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.matrix().check_close(other.matrix(), tol) }
}
