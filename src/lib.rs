/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bravais lattice classification of periodic cells, the high-symmetry
//! points of their Brillouin zones, and explicit k-point paths through them.
//!
//! The functionality lives in the workspace crates; this crate gathers
//! their public API in one place.

pub use kpath_array_types::{V3, M33};
pub use kpath_structure::{Pbc, AxisPerm, Lattice, Coords, DegenerateCellError, BadPermError};
pub use kpath_bravais::{
    BravaisLattice, BravaisInfo, ClassificationError, Tolerances,
    classify, KpointsPath, kpoints_path,
};
pub use kpath_kpoints::{
    PathSpec, RawSegment, PathSpecError, DimensionalityMismatchError, IntPrecisionError,
    ExplicitSettings, ExplicitPath, explicit_kpoints_path,
};
