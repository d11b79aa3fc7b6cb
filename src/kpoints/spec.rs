/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use slice_of_array::prelude::*;

use kpath_array_types::V3;

use crate::FailResult;
use crate::errors::{PathSpecError, DimensionalityMismatchError, whole_count};

/// A label with coordinates.
pub type LabeledPoint = (String, V3);

/// How the user described the path.
///
/// Every segment of a path has the same shape; this is decided once,
/// when the specification is built.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSpec {
    /// Use the suggested path of the cell's Bravais lattice.
    Auto,
    /// Legs between special points of the cell's Bravais lattice.
    LabelPairs(Vec<(String, String)>),
    LabelPairsWithCounts(Vec<(String, String, usize)>),
    /// Legs between points given explicitly.
    LabelCoordPairs(Vec<(LabeledPoint, LabeledPoint)>),
    LabelCoordPairsWithCounts(Vec<(LabeledPoint, LabeledPoint, usize)>),
}

/// One segment of a path as written in a config file.
///
/// The shape is recognized from the number of elements:
///
/// * `[A, B]`
/// * `[A, B, count]`
/// * `[A, [x, y, z], B, [x, y, z]]`
/// * `[A, [x, y, z], B, [x, y, z], count]`
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawSegment {
    LabelCoordPairWithCount(String, Vec<f64>, String, Vec<f64>, f64),
    LabelCoordPair(String, Vec<f64>, String, Vec<f64>),
    LabelPairWithCount(String, String, f64),
    LabelPair(String, String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Shape { Pair, PairWithCount, CoordPair, CoordPairWithCount }

impl RawSegment {
    fn shape(&self) -> Shape {
        match *self {
            RawSegment::LabelPair(..) => Shape::Pair,
            RawSegment::LabelPairWithCount(..) => Shape::PairWithCount,
            RawSegment::LabelCoordPair(..) => Shape::CoordPair,
            RawSegment::LabelCoordPairWithCount(..) => Shape::CoordPairWithCount,
        }
    }
}

impl PathSpec {
    /// Validate the segments of a path and decide its shape.
    ///
    /// `None` (no path given at all) means `Auto`.
    pub fn from_segments(segments: Option<&[RawSegment]>) -> FailResult<PathSpec>
    {Ok({
        let segments = match segments {
            None => return Ok(PathSpec::Auto),
            Some(segments) => segments,
        };
        let first = match segments.first() {
            None => throw!(PathSpecError::EmptyPath),
            Some(first) => first.shape(),
        };
        if let Some(index) = segments.iter().position(|s| s.shape() != first) {
            throw!(PathSpecError::MixedSegmentShapes { index });
        }

        match first {
            Shape::Pair => PathSpec::LabelPairs({
                segments.iter().map(|seg| match seg {
                    RawSegment::LabelPair(a, b) => (a.clone(), b.clone()),
                    _ => unreachable!(),
                }).collect()
            }),

            Shape::PairWithCount => PathSpec::LabelPairsWithCounts({
                segments.iter().map(|seg| match seg {
                    RawSegment::LabelPairWithCount(a, b, n) => {
                        Ok((a.clone(), b.clone(), whole_count(*n)?))
                    },
                    _ => unreachable!(),
                }).collect::<FailResult<_>>()?
            }),

            Shape::CoordPair => PathSpec::LabelCoordPairs({
                segments.iter().map(|seg| match seg {
                    RawSegment::LabelCoordPair(a, ka, b, kb) => {
                        Ok((labeled_point(a, ka)?, labeled_point(b, kb)?))
                    },
                    _ => unreachable!(),
                }).collect::<FailResult<_>>()?
            }),

            Shape::CoordPairWithCount => PathSpec::LabelCoordPairsWithCounts({
                segments.iter().map(|seg| match seg {
                    RawSegment::LabelCoordPairWithCount(a, ka, b, kb, n) => {
                        Ok((labeled_point(a, ka)?, labeled_point(b, kb)?, whole_count(*n)?))
                    },
                    _ => unreachable!(),
                }).collect::<FailResult<_>>()?
            }),
        }
    })}

    /// The explicitly requested number of points on each segment, if any.
    pub fn counts(&self) -> Option<Vec<usize>>
    {
        match self {
            PathSpec::LabelPairsWithCounts(segs) => Some(segs.iter().map(|s| s.2).collect()),
            PathSpec::LabelCoordPairsWithCounts(segs) => Some(segs.iter().map(|s| s.2).collect()),
            _ => None,
        }
    }
}

fn labeled_point(label: &str, coords: &[f64]) -> FailResult<LabeledPoint>
{Ok({
    if coords.len() != 3 {
        throw!(DimensionalityMismatchError {
            label: label.to_string(),
            expected: 3,
            found: coords.len(),
        });
    }
    (label.to_string(), V3(*SliceArrayExt::as_array::<[f64; 3]>(&coords[..])))
})}
