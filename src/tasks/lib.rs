/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Front end of kpath: reads a settings file, runs the library crates,
//! and writes JSON.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate clap;
#[cfg(test)] #[macro_use] extern crate kpath_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

mod ui {
    pub(crate) mod color;
    pub(crate) mod logging;
    pub(crate) mod cli_deserialize;
}

mod traits;
mod cmd;
pub mod filetypes;
pub mod entry_points;

pub use crate::cmd::{kpath_json, explicit_kpath_json};
