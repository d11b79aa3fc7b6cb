/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// A path specification that cannot be turned into k-points.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum PathSpecError {
    #[fail(display = "The path has no segments.")]
    EmptyPath,

    #[fail(display = "Path segment {} does not have the same shape as segment 0.", index)]
    MixedSegmentShapes { index: usize },

    #[fail(display = "Different points cannot have the same label ({:?}).", label)]
    ConflictingLabel { label: String },

    #[fail(display = "No special point is labeled {:?} (known labels: {:?}).", label, known)]
    UnknownLabel { label: String, known: Vec<String> },

    #[fail(display = "Path segment {} would have {} point(s); at least 2 are required.", index, count)]
    TooFewPoints { index: usize, count: usize },

    #[fail(display = "A cell is required {}.", purpose)]
    MissingCell { purpose: &'static str },

    #[fail(display = "The k-point distance must be positive, not {}.", value)]
    BadKpointDistance { value: f64 },
}

/// A coordinate with the wrong number of components.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "Point {:?} has {} components, expected {}.", label, found, expected)]
pub struct DimensionalityMismatchError {
    pub label: String,
    pub expected: usize,
    pub found: usize,
}

/// A number of points that is not a whole number.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "Expected a whole number of points, got {}.", value)]
pub struct IntPrecisionError {
    pub value: f64,
}

/// Convert a point count, which may have come from a float, into an integer.
pub(crate) fn whole_count(value: f64) -> Result<usize, IntPrecisionError>
{
    // NOTE: negated comparison also rejects NaN
    if !(value >= 0.0) || value.fract() != 0.0 || value > (u32::max_value() as f64) {
        return Err(IntPrecisionError { value });
    }
    Ok(value as usize)
}
