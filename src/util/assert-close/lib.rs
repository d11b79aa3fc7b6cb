/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!`, for comparing nested float data in tests.
//!
//! ```
//! # #[macro_use] extern crate kpath_assert_close;
//! # fn main() {
//! assert_close!(1.0, 1.0 + 1e-12);
//! assert_close!(abs=1e-8, [0.0, 1.0], [1e-10, 1.0]);
//! assert_close!(rel=1e-3, abs=1e-8, vec![2.0], vec![2.001], "at step {}", 3);
//! # }
//! ```

#[macro_use]
extern crate failure;

use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => { $crate::__assert_close_impl!{[$rel, $abs] $($rest)+} };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => { $crate::__assert_close_impl!{[$rel, $abs] $($rest)+} };
    (rel=$rel:expr, $($rest:tt)+) => { $crate::__assert_close_impl!{[$rel, 0.0] $($rest)+} };
    (abs=$abs:expr, $($rest:tt)+) => { $crate::__assert_close_impl!{[$crate::DEFAULT_NONZERO_TOL, $abs] $($rest)+} };
    ($($rest:tt)+) => { $crate::__assert_close_impl!{[$crate::DEFAULT_NONZERO_TOL, 0.0] $($rest)+} };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    ([$rel:expr, $abs:expr] $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close_impl!{[$rel, $abs] $a, $b, "not nearly equal!"}
    };
    ([$rel:expr, $abs:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let a = $a;
        let b = $b;
        let tol = $crate::Tolerances { rel: $rel, abs: $abs };
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, a, b, e,
            );
        }
    }};
}

/// Closeness test for a pair of floats.
///
/// Two values are close if they differ by no more than `abs`, or by no
/// more than `rel` times the larger magnitude.  Infinities are only close
/// to themselves, and NaN is never close to anything.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

/// Location of an element inside nested data, outermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElemPath(Vec<String>);

impl fmt::Display for ElemPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for part in &self.0 {
            write!(f, "[{}]", part)?;
        }
        Ok(())
    }
}

#[derive(Debug, Fail)]
pub enum CheckCloseError {
    #[fail(display = "values differ at {}:\n  left: {:?}\n right: {:?}\n   tol: {:?}", path, left, right, tol)]
    Values {
        path: ElemPath,
        left: f64,
        right: f64,
        tol: Tolerances,
    },
    #[fail(display = "shapes differ at {}: {}", path, message)]
    Shape {
        path: ElemPath,
        message: String,
    },
}

impl CheckCloseError {
    /// Record that the error occurred inside the element `index` of a container.
    pub fn within(mut self, index: impl fmt::Display) -> Self {
        match &mut self {
            CheckCloseError::Values { path, .. } |
            CheckCloseError::Shape { path, .. } => path.0.insert(0, index.to_string()),
        }
        self
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::Values {
                path: ElemPath::default(),
                left: *self,
                right: *other,
                tol,
            }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if self.len() != other.len() {
            return Err(CheckCloseError::Shape {
                path: ElemPath::default(),
                message: format!("lengths {} and {}", self.len(), other.len()),
            });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.within(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

/// Maps must have identical key sets.
impl<K: Ord + fmt::Debug, T: CheckClose> CheckClose for BTreeMap<K, T> {
    fn check_close(&self, other: &BTreeMap<K, T>, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        if !self.keys().eq(other.keys()) {
            return Err(CheckCloseError::Shape {
                path: ElemPath::default(),
                message: format!(
                    "keys {:?} and {:?}",
                    self.keys().collect::<Vec<_>>(),
                    other.keys().collect::<Vec<_>>(),
                ),
            });
        }
        for ((key, a), b) in self.iter().zip(other.values()) {
            a.check_close(b, tol).map_err(|e| e.within(format!("{:?}", key)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, 1.0, 1.0, "{}", "hello");
        debug_assert_close!(abs=1e-10, [1.0, 2.0], [1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    fn error_reports_location() {
        let tol = Tolerances { abs: 1e-6, rel: 0.0 };
        let a = vec![[0.0, 1.0], [2.0, 3.0]];
        let b = vec![[0.0, 1.0], [2.0, 3.5]];
        match a.check_close(&b, tol) {
            Err(CheckCloseError::Values { path, left, right, .. }) => {
                assert_eq!(path.to_string(), "[1][1]");
                assert_eq!((left, right), (3.0, 3.5));
            },
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn maps_compare_keys() {
        let tol = Tolerances::default();
        let mut a = BTreeMap::new();
        a.insert("G", 0.0);
        a.insert("X", 0.5);
        let mut b = a.clone();
        assert!(a.check_close(&b, tol).is_ok());

        b.insert("M", 0.5);
        assert!(a.check_close(&b, tol).is_err());
    }

    #[test]
    fn nan_is_never_close() {
        let tol = Tolerances { abs: 1.0, rel: 1.0 };
        assert!(!is_close(::std::f64::NAN, ::std::f64::NAN, tol));
        assert!(is_close(::std::f64::INFINITY, ::std::f64::INFINITY, tol));
        assert!(!is_close(::std::f64::INFINITY, ::std::f64::NEG_INFINITY, tol));
    }
}
