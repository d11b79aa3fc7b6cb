/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Explicit k-point sequences along a path through the Brillouin zone,
//! suitable for band structure calculations.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate itertools;
#[cfg(test)] #[macro_use] extern crate kpath_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

macro_rules! throw {
    ($e:expr) => {{
        return Err(::std::convert::Into::into($e));
    }}
}

mod errors;
mod spec;
mod explicit;

pub use crate::errors::{PathSpecError, DimensionalityMismatchError, IntPrecisionError};
pub use crate::spec::{PathSpec, RawSegment, LabeledPoint};
pub use crate::explicit::{ExplicitSettings, ExplicitPath, explicit_kpoints_path};
