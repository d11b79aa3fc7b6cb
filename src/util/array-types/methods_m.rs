/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Square 3x3 matrices, compatible with `V3`.
//!
//! Matrices are conceptually understood to be containers of row-vectors.

use crate::types::{V3, M3, M33};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> M33<X>
where F: FnMut(usize, usize) -> X,
{ M3([
    V3::from_fn(|c| f(0, c)),
    V3::from_fn(|c| f(1, c)),
    V3::from_fn(|c| f(2, c)),
])}

/// Construct a matrix from a 2D array (of rows).
#[inline(always)]
pub fn from_array<X>(arr: [[X; 3]; 3]) -> M33<X>
{
    let [a, b, c] = arr;
    M3([V3(a), V3(b), V3(c)])
}

/// The identity matrix.
#[inline(always)]
pub fn eye() -> M33
{ from_fn(|r, c| if r == c { 1.0 } else { 0.0 }) }

/// The zero matrix.
#[inline(always)]
pub fn zero() -> M33
{ M3([V3::zero(); 3]) }

/// Matrix inverse.
///
/// This does not check for singularity; a singular input produces
/// infinities and NaNs.  Callers that care should check `det()` first.
#[inline]
pub fn inv(m: &M33) -> M33
{
    // adjugate over determinant, where the rows of the adjugate's transpose
    // are cross products of pairs of rows
    let cofactor_rows = [
        m[1].cross(&m[2]),
        m[2].cross(&m[0]),
        m[0].cross(&m[1]),
    ];
    let det = m[0].dot(&cofactor_rows[0]);
    from_fn(|r, c| cofactor_rows[c][r] / det)
}

impl<X> M33<X> {
    /// Construct a matrix from a function on indices.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> M33<B>
    where F: FnMut(X) -> B,
    {
        let M3([a, b, c]) = self;
        M3([a.map(&mut f), b.map(&mut f), c.map(&mut f)])
    }

    /// Cast into a plain `[[X; 3]; 3]`.
    #[inline]
    pub fn into_array(self) -> [[X; 3]; 3]
    {
        let M3([a, b, c]) = self;
        [a.0, b.0, c.0]
    }
}

impl M33 {
    /// Construct the identity matrix.
    #[inline(always)]
    pub fn eye() -> Self
    { eye() }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> M33
    { from_fn(|r, c| self[c][r]) }

    /// Matrix determinant.
    #[inline]
    pub fn det(&self) -> f64
    { self[0].dot(&self[1].cross(&self[2])) }

    /// Get a column as a vector.
    #[inline]
    pub fn col(&self, c: usize) -> V3
    { V3::from_fn(|r| self[r][c]) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn get_inverse() {
        // matrix whose inverse should be able to be computed exactly
        // by any reasonable matrix inversion algorithm working on f64s
        let matrix = from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let exact_inverse = from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]);
        assert_eq!(inv(&matrix), exact_inverse);
        assert_eq!(&matrix * &exact_inverse, eye());
        assert_eq!(matrix.det(), 16.0);
    }

    #[test]
    fn random_inverse() {
        for _ in 0..20 {
            let m: M33 = from_fn(|_, _| ::rand::random::<f64>() - 0.5);
            if m.det().abs() < 1e-3 {
                continue;
            }
            assert_close!(abs=1e-9, &m * &inv(&m), eye());
            assert_close!(abs=1e-9, &inv(&m) * &m, eye());
        }
    }

    #[test]
    fn transpose_and_columns() {
        let m = from_array([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(m.t()[0], V3([1.0, 4.0, 7.0]));
        assert_eq!(m.col(2), V3([3.0, 6.0, 9.0]));
        assert_eq!(m.t().t(), m);
    }
}
