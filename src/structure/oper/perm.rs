/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ordered_float::OrderedFloat;

use kpath_array_types::{V3, M3, M33};

use crate::BadPermError;

/// A reordering of the three cell axes.
///
/// Lattice classification works in a "canonical" axis order, in which
/// tables of special points are written.  An `AxisPerm` records where
/// each of the caller's axes went: caller axis `i` became canonical axis
/// `perm[i]`.  Consequently, a point in canonical coordinates is brought
/// back to the caller's order by `out[i] = point[perm[i]]` (see `permute`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[usize; 3]", into = "[usize; 3]"))]
pub struct AxisPerm([usize; 3]);

impl Default for AxisPerm {
    fn default() -> Self
    { AxisPerm::eye() }
}

impl AxisPerm {
    pub fn eye() -> AxisPerm
    { AxisPerm([0, 1, 2]) }

    /// Validates the input.
    pub fn from_array(indices: [usize; 3]) -> Result<AxisPerm, BadPermError>
    {
        let mut sorted = indices;
        sorted.sort();
        match sorted == [0, 1, 2] {
            true => Ok(AxisPerm(indices)),
            false => Err(BadPermError { indices }),
        }
    }

    pub fn into_array(self) -> [usize; 3]
    { self.0 }

    /// The permutation that makes caller axis `order[j]` into canonical axis `j`.
    pub fn from_canonical_order(order: [usize; 3]) -> Result<AxisPerm, BadPermError>
    { AxisPerm::from_array(order).map(|p| p.inverted()) }

    /// Inverse of `from_canonical_order`.
    pub fn canonical_order(&self) -> [usize; 3]
    { self.inverted().0 }

    /// Cyclic permutation that sends the given axis to canonical axis 2.
    ///
    /// The other two axes keep their cyclic order, so the handedness
    /// of the cell is preserved.
    pub fn with_odd_axis_last(odd: usize) -> AxisPerm
    {
        assert!(odd < 3, "invalid axis: {}", odd);
        let mut out = [0; 3];
        out[odd] = 2;
        out[(odd + 1) % 3] = 0;
        out[(odd + 2) % 3] = 1;
        AxisPerm(out)
    }

    /// Sends the axis with the smallest value to canonical axis 0, and
    /// so on.  Ties are broken by axis index.
    pub fn ranking(values: &[f64; 3]) -> AxisPerm
    {
        let mut order = [0, 1, 2];
        order.sort_by_key(|&k| OrderedFloat(values[k]));
        AxisPerm(order).inverted()
    }

    pub fn inverted(&self) -> AxisPerm
    {
        let mut out = [0; 3];
        for (i, &p) in self.0.iter().enumerate() {
            out[p] = i;
        }
        AxisPerm(out)
    }

    /// Flipped group operator.
    ///
    /// `x.permute(a).permute(b) == x.permute(a.then(b))`.
    pub fn then(&self, other: &AxisPerm) -> AxisPerm
    { AxisPerm(other.permute_array(&self.0)) }

    /// Bring a point from canonical order to the caller's axis order.
    ///
    /// `out[i] = point[self[i]]`.
    #[inline]
    pub fn permute(&self, point: &V3) -> V3
    { V3(self.permute_array(&point.0)) }

    pub fn permute_array<T: Clone>(&self, items: &[T; 3]) -> [T; 3]
    {
        let p = &self.0;
        [items[p[0]].clone(), items[p[1]].clone(), items[p[2]].clone()]
    }

    /// Bring per-axis data from the caller's axis order into canonical order.
    ///
    /// This is the inverse of `permute_array`.
    pub fn canonicalize<T: Clone>(&self, items: &[T; 3]) -> [T; 3]
    { self.inverted().permute_array(items) }

    /// Reorder the rows of a cell into canonical order.
    pub fn canonicalize_rows(&self, cell: &M33) -> M33
    { M3(self.canonicalize(&cell.0)) }
}

impl std::ops::Index<usize> for AxisPerm {
    type Output = usize;

    #[inline]
    fn index(&self, i: usize) -> &usize
    { &self.0[i] }
}

impl std::convert::TryFrom<[usize; 3]> for AxisPerm {
    type Error = BadPermError;

    fn try_from(indices: [usize; 3]) -> Result<Self, BadPermError>
    { AxisPerm::from_array(indices) }
}

impl From<AxisPerm> for [usize; 3] {
    fn from(perm: AxisPerm) -> [usize; 3]
    { perm.0 }
}
