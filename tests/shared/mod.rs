/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub mod cli_test;

use std::path::PathBuf;

/// Absolute path to a file under `tests/resources`.
pub fn resource(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "resources", name].iter().collect()
}
