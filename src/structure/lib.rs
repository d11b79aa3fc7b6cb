/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Periodic cells, the geometry derived from them, and the bookkeeping
//! needed to move points between axis orders and coordinate systems.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[cfg_attr(test, macro_use)] extern crate kpath_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

macro_rules! throw {
    ($e:expr) => {{
        return Err(::std::convert::Into::into($e));
    }}
}

/// A cell whose rows do not span three dimensions.
#[derive(Debug, Fail)]
#[fail(display = "Degenerate cell (|det| = {:e}, row norms = {:?})", det, norms)]
pub struct DegenerateCellError {
    backtrace: failure::Backtrace,
    pub det: f64,
    pub norms: [f64; 3],
}

#[derive(Debug, Fail)]
#[fail(display = "Not a permutation of three axes: {:?}", indices)]
pub struct BadPermError {
    pub indices: [usize; 3],
}

mod core;
mod oper;
mod util;

//---------------------------
// public reexports; API

pub use crate::core::lattice::Lattice;
pub use crate::core::coords::Coords;
pub use crate::core::geometry::{Pbc, CellGeometry, CellMetrics, analyze};

pub use crate::oper::perm::AxisPerm;

pub use crate::util::dot_n3_33;
