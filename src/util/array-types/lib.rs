/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vector and matrix types for 3d lattice work.
//!
//! Like most of kpath, this library uses a row-based formalism;
//! a matrix is a container of row vectors, and the bulk of all
//! matrix-vector products put the vector on the left.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[macro_use]
extern crate kpath_assert_close;

mod types;
mod methods_v;
mod methods_m;
mod ops;
mod close;

pub use crate::types::{V3, M3, M33};
pub use crate::methods_v::dot;
pub use crate::methods_m::inv;

/// Functions for constructing vectors.
pub mod vee {
    pub use crate::methods_v::{from_fn, zero};
}

/// Functions for constructing matrices.
pub mod mat {
    pub use crate::methods_m::{from_array, from_fn, eye, zero, inv};
}
