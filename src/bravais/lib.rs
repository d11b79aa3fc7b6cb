/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Geometric classification of cells into Bravais lattices, and the
//! high-symmetry points and paths of their Brillouin zones.
//!
//! Special points follow Setyawan and Curtarolo, *Comp. Mat. Sci.* **49**
//! (2010) 299-312, written in "canonical" axis order.  The classifier
//! reports an `AxisPerm` that brings them back into the order of the
//! caller's cell.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate itertools;
#[macro_use] extern crate lazy_static;
#[cfg(test)] #[macro_use] extern crate kpath_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

macro_rules! throw {
    ($e:expr) => {{
        return Err(::std::convert::Into::into($e));
    }}
}

/// Exit with a `ClassificationError`.
macro_rules! inconsistent {
    ($($fmt:tt)+) => {
        throw!(crate::ClassificationError(format!($($fmt)+)))
    };
}

/// A cell reached a branch of the classification with no matching case.
///
/// This indicates either a pathological cell or tolerances that are
/// too loose (or too tight) for it.
#[derive(Debug, Fail)]
#[fail(display = "Cannot classify lattice: {}", _0)]
pub struct ClassificationError(pub String);

mod fuzz;
mod info;
mod classify;
mod path;
pub mod table;

pub use crate::fuzz::Tolerances;
pub use crate::info::{BravaisLattice, BravaisInfo};
pub use crate::classify::{classify, classify_geometry};
pub use crate::path::{KpointsPath, kpoints_path};
pub use crate::table::{KpathTable, lookup};
