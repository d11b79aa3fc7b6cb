/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use ansi_term::Style;

pub fn gpaint<U, T>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: Default::default() } }

/// A wrapper that colorizes the `Display` output of a value.
///
/// It has two parameters so that it can `borrow()` `U` as `T`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<U, T=U> {
    style: Style,
    value: U,
    _target: std::marker::PhantomData<T>,
}

impl<U, T> fmt::Display for Wrapper<U, T>
where
    U: std::borrow::Borrow<T>,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style.prefix())?;
        T::fmt(self.value.borrow(), f)?;
        write!(f, "{}", self.style.suffix())?;
        Ok(())
    }
}
