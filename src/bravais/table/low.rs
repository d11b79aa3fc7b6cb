/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Tables for cells with fewer than three periodic directions.
//!
//! The out-of-plane components are always zero.

use super::KpathTable;

lazy_static! {
    pub(super) static ref SQUARE: KpathTable = KpathTable::new(&[
        ("M", [0.5, 0.5, 0.0]),
        ("X", [0.5, 0.0, 0.0]),
    ], "G-X-M-G");

    pub(super) static ref RECTANGULAR: KpathTable = KpathTable::new(&[
        ("X", [0.5, 0.0, 0.0]),
        ("Y", [0.0, 0.5, 0.0]),
        ("S", [0.5, 0.5, 0.0]),
    ], "G-X-S-Y-G-S");

    // NOTE: Y is not at (0, 1/4) as a reading of the reference paper would
    //       suggest; the value below is the one this table has always used.
    pub(super) static ref CENTERED_RECTANGULAR: KpathTable = KpathTable::new(&[
        ("X", [0.5, 0.0, 0.0]),
        ("Y", [-0.25, 0.25, 0.0]),
        ("Y1", [0.25, 0.75, 0.0]),
        ("C", [0.0, 0.5, 0.0]),
    ], "X-G|G-Y|Y1-C|C-G");

    pub(super) static ref HEXAGONAL: KpathTable = KpathTable::new(&[
        ("M", [0.5, 0.0, 0.0]),
        ("K", [1.0 / 3.0, 1.0 / 3.0, 0.0]),
    ], "G-M-K-G");

    pub(super) static ref OBLIQUE: KpathTable = KpathTable::new(&[
        ("X", [0.5, 0.0, 0.0]),
        ("Y", [0.0, 0.5, 0.0]),
    ], "X-G-Y");

    pub(super) static ref LINE: KpathTable = KpathTable::new(&[
        ("X", [0.5, 0.0, 0.0]),
    ], "G-X");

    pub(super) static ref POINT: KpathTable = KpathTable::new(&[], "G");
}
