/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Tolerances for deciding that two lengths or two angles are equal.
///
/// Lengths are compared in the units of the cell.  Angles are compared
/// through their cosines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub epsilon_length: f64,
    pub epsilon_angle: f64,
}

impl Tolerances {
    pub const DEFAULT_EPSILON_LENGTH: f64 = 1e-5;
    pub const DEFAULT_EPSILON_ANGLE: f64 = 1e-5;
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            epsilon_length: Tolerances::DEFAULT_EPSILON_LENGTH,
            epsilon_angle: Tolerances::DEFAULT_EPSILON_ANGLE,
        }
    }
}

/// Fuzzy comparisons shared by every branch of the classifier.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Fuzz(pub(crate) Tolerances);

impl Fuzz {
    pub(crate) fn l_eq(&self, a: f64, b: f64) -> bool
    { (a - b).abs() <= self.0.epsilon_length }

    /// Compare cosines (or other dimensionless quantities).
    pub(crate) fn a_eq(&self, a: f64, b: f64) -> bool
    { (a - b).abs() <= self.0.epsilon_angle }

    /// Which of the pairs `(0, 1), (1, 2), (2, 0)` have equal lengths.
    ///
    /// Pair `k` leaves out axis `(k + 2) % 3`.
    pub(crate) fn length_pairs(&self, x: &[f64; 3]) -> [bool; 3]
    {
        let out = pairs(x, |a, b| self.l_eq(a, b));
        trace!("length pairs {:?} -> {:?}", x, out);
        out
    }

    /// Like `length_pairs`, for cosines.
    pub(crate) fn angle_pairs(&self, x: &[f64; 3]) -> [bool; 3]
    {
        let out = pairs(x, |a, b| self.a_eq(a, b));
        trace!("cosine pairs {:?} -> {:?}", x, out);
        out
    }
}

fn pairs(x: &[f64; 3], eq: impl Fn(f64, f64) -> bool) -> [bool; 3]
{ [eq(x[0], x[1]), eq(x[1], x[2]), eq(x[2], x[0])] }

/// The axis that is not a member of pair `k`.
pub(crate) fn odd_axis(k: usize) -> usize
{ (k + 2) % 3 }

/// The pair indices for which a comparison held.
pub(crate) fn matched(pairs: &[bool; 3]) -> Vec<usize>
{ (0..3).filter(|&k| pairs[k]).collect() }

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn pair_convention() {
        let fuzz = Fuzz(Tolerances::default());
        assert_eq!(fuzz.length_pairs(&[1.0, 1.0, 2.0]), [true, false, false]);
        assert_eq!(fuzz.length_pairs(&[2.0, 1.0, 1.0]), [false, true, false]);
        assert_eq!(fuzz.length_pairs(&[1.0, 2.0, 1.0]), [false, false, true]);
        assert_eq!(odd_axis(0), 2);
        assert_eq!(odd_axis(1), 0);
        assert_eq!(odd_axis(2), 1);
        assert_eq!(matched(&[true, false, true]), vec![0, 2]);
    }

    #[test]
    fn tolerances_are_honored() {
        let fuzz = Fuzz(Tolerances { epsilon_length: 1e-3, epsilon_angle: 1e-8 });
        assert!(fuzz.l_eq(1.0, 1.0 + 5e-4));
        assert!(!fuzz.l_eq(1.0, 1.0 + 2e-3));
        assert!(fuzz.a_eq(0.0, 1e-9));
        assert!(!fuzz.a_eq(0.0, 1e-7));
    }
}
