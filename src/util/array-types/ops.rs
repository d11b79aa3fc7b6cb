/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use crate::types::{V3, M3, M33};

// Generates all four owned/borrowed combinations of a binary operator.
// The body always sees both operands by reference.
macro_rules! impl_binop {
    (
        $Trait:ident::$method:ident,
        ($a:ident: $Lhs:ty, $b:ident: $Rhs:ty) -> $Out:ty $body:block
    ) => {
        impl $Trait<$Rhs> for $Lhs {
            type Output = $Out;

            #[inline]
            fn $method(self, other: $Rhs) -> $Out
            { let ($a, $b): (&$Lhs, &$Rhs) = (&self, &other); $body }
        }

        impl<'b> $Trait<&'b $Rhs> for $Lhs {
            type Output = $Out;

            #[inline]
            fn $method(self, other: &'b $Rhs) -> $Out
            { let ($a, $b): (&$Lhs, &$Rhs) = (&self, other); $body }
        }

        impl<'a> $Trait<$Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline]
            fn $method(self, other: $Rhs) -> $Out
            { let ($a, $b): (&$Lhs, &$Rhs) = (self, &other); $body }
        }

        impl<'a, 'b> $Trait<&'b $Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline]
            fn $method(self, other: &'b $Rhs) -> $Out
            { let ($a, $b): (&$Lhs, &$Rhs) = (self, other); $body }
        }
    };
}

// ---------------------------------------------------------------------------
// vector-vector ops

impl_binop!(Add::add, (a: V3, b: V3) -> V3 { V3::from_fn(|k| a[k] + b[k]) });
impl_binop!(Sub::sub, (a: V3, b: V3) -> V3 { V3::from_fn(|k| a[k] - b[k]) });

// ---------------------------------------------------------------------------
// vector-scalar ops

impl_binop!(Mul::mul, (v: V3, s: f64) -> V3 { V3::from_fn(|k| v[k] * *s) });
impl_binop!(Div::div, (v: V3, s: f64) -> V3 { V3::from_fn(|k| v[k] / *s) });
impl_binop!(Mul::mul, (s: f64, v: V3) -> V3 { v * *s });

impl Neg for V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { self.map(|x| -x) }
}

impl<'a> Neg for &'a V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { -*self }
}

impl<'b> AddAssign<&'b V3> for V3 {
    #[inline]
    fn add_assign(&mut self, other: &'b V3)
    { *self = &*self + other; }
}

impl AddAssign<V3> for V3 {
    #[inline]
    fn add_assign(&mut self, other: V3)
    { *self += &other; }
}

impl<'b> SubAssign<&'b V3> for V3 {
    #[inline]
    fn sub_assign(&mut self, other: &'b V3)
    { *self = &*self - other; }
}

impl SubAssign<V3> for V3 {
    #[inline]
    fn sub_assign(&mut self, other: V3)
    { *self -= &other; }
}

impl MulAssign<f64> for V3 {
    #[inline]
    fn mul_assign(&mut self, s: f64)
    { *self = *self * s; }
}

impl DivAssign<f64> for V3 {
    #[inline]
    fn div_assign(&mut self, s: f64)
    { *self = *self / s; }
}

// ---------------------------------------------------------------------------
// matrix ops

// row-vector * matrix
impl_binop!(Mul::mul, (v: V3, m: M33) -> V3 {
    V3::from_fn(|c| v[0] * m[0][c] + v[1] * m[1][c] + v[2] * m[2][c])
});

// matrix * column-vector
impl_binop!(Mul::mul, (m: M33, v: V3) -> V3 {
    V3::from_fn(|r| m[r].dot(v))
});

// matrix * matrix
impl_binop!(Mul::mul, (a: M33, b: M33) -> M33 {
    M3([&a[0] * b, &a[1] * b, &a[2] * b])
});

impl_binop!(Mul::mul, (m: M33, s: f64) -> M33 { m.map(|x| x * *s) });
impl_binop!(Mul::mul, (s: f64, m: M33) -> M33 { m * *s });

impl_binop!(Add::add, (a: M33, b: M33) -> M33 { M3([&a[0] + &b[0], &a[1] + &b[1], &a[2] + &b[2]]) });
impl_binop!(Sub::sub, (a: M33, b: M33) -> M33 { M3([&a[0] - &b[0], &a[1] - &b[1], &a[2] - &b[2]]) });
