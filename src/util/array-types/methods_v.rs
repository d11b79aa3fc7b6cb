/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::V3;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a vector from a function on indices.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> V3<X>
where F: FnMut(usize) -> X,
{ V3([f(0), f(1), f(2)]) }

/// The zero vector.
#[inline(always)]
pub fn zero() -> V3
{ V3([0.0; 3]) }

/// Inner product of vectors.
///
/// This is `V3::dot` as a free function, because everyone loves symmetry.
#[inline(always)]
pub fn dot(a: &V3, b: &V3) -> f64
{ a.dot(b) }

impl<X> V3<X> {
    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }

    /// Cast into a plain `[X; 3]`.
    #[inline(always)]
    pub fn into_array(self) -> [X; 3]
    { self.0 }
}

impl V3 {
    /// Get the zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &V3) -> f64
    { self[0] * other[0] + self[1] * other[1] + self[2] * other[2] }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> f64
    { self.dot(self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    /// Cosine of the angle between this vector and another.
    ///
    /// This is clamped to `[-1, 1]`, so that rounding errors on
    /// (anti)parallel vectors cannot produce a NaN in a later `acos`.
    #[inline]
    pub fn cos_to(&self, other: &V3) -> f64
    {
        let arg = self.dot(other) / (self.sqnorm() * other.sqnorm()).sqrt();
        arg.min(1.0).max(-1.0)
    }

    /// Cross-product.
    #[inline]
    pub fn cross(&self, other: &V3) -> V3 {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    /// Linear interpolation, with `self` at `t = 0` and `other` at `t = 1`.
    ///
    /// The endpoints are reproduced exactly.
    #[inline]
    pub fn lerp(&self, other: &V3, t: f64) -> V3
    {
        if t == 1.0 {
            return *other;
        }
        V3::from_fn(|k| self[k] + (other[k] - self[k]) * t)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn basic_products() {
        let a = V3([1.0, 2.0, 3.0]);
        let b = V3([-2.0, 0.5, 1.0]);
        assert_eq!(dot(&a, &b), 2.0);
        assert_eq!(a.sqnorm(), 14.0);
        assert_eq!(a.cross(&b), V3([0.5, -7.0, 4.5]));
    }

    #[test]
    fn cos_is_clamped() {
        let a = V3([1e-3, 1e-3, 1e-3]);
        let b = a * 3.0;
        assert!(a.cos_to(&b) <= 1.0);
        assert!(a.cos_to(&-b) >= -1.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = V3([0.1, 0.2, 0.3]);
        let b = V3([0.7, -0.3, 1.0 / 3.0]);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_close!(abs=1e-15, a.lerp(&b, 0.5), V3([0.4, -0.05, (0.3 + 1.0 / 3.0) / 2.0]));
    }
}
