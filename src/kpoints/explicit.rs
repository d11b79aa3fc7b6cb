/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;

use kpath_array_types::{V3, M33};
use kpath_structure::{Coords, Lattice, Pbc};
use kpath_bravais::{kpoints_path, BravaisInfo, Tolerances};

use crate::FailResult;
use crate::errors::{PathSpecError, whole_count};
use crate::spec::{PathSpec, LabeledPoint};

/// Number of points on the longest segment when no density is requested.
const DEFAULT_POINTS_ON_LONGEST: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitSettings {
    /// Target spacing between consecutive points, in fractional units of
    /// the reciprocal cell.  Ignored when the path supplies counts.
    pub kpoint_distance: Option<f64>,
    /// Whether user-supplied coordinates are cartesian wavevectors.
    pub cartesian: bool,
    pub tolerances: Tolerances,
}

impl Default for ExplicitSettings {
    fn default() -> Self {
        ExplicitSettings {
            kpoint_distance: None,
            cartesian: false,
            tolerances: Tolerances::default(),
        }
    }
}

/// A path through the Brillouin zone, sampled into individual k-points.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitPath {
    /// Fractional coordinates of every known point.
    pub point_coords: BTreeMap<String, V3>,
    pub path: Vec<(String, String)>,
    /// Only known when the points came from classifying a cell.
    pub bravais_info: Option<BravaisInfo>,
    /// Fractional coordinates.
    pub explicit_kpoints: Vec<V3>,
    /// Indices into `explicit_kpoints` that sit on a labeled point.
    pub labels: Vec<(usize, String)>,
}

impl ExplicitPath {
    /// The k-points as cartesian wavevectors.
    pub fn cartesian_kpoints(&self, reciprocal: &Lattice) -> Vec<V3>
    { Coords::Fracs(self.explicit_kpoints.clone()).into_carts(reciprocal) }
}

/// Sample a path into a list of k-points, labeling the special points
/// that lie on it.
///
/// `cell` is needed whenever points must be derived from the lattice
/// (`PathSpec::Auto` and label-only paths) or when user coordinates are
/// cartesian.
pub fn explicit_kpoints_path(
    spec: &PathSpec,
    cell: Option<&M33>,
    pbc: Pbc,
    settings: &ExplicitSettings,
) -> FailResult<ExplicitPath>
{Ok({
    if let Some(value) = settings.kpoint_distance {
        if !(value > 0.0) {
            throw!(PathSpecError::BadKpointDistance { value });
        }
    }

    let Resolved { point_coords, path, bravais_info } = resolve_points(spec, cell, pbc, settings)?;
    for label in path.iter().flat_map(|(a, b)| vec![a, b]) {
        if !point_coords.contains_key(label) {
            throw!(PathSpecError::UnknownLabel {
                label: label.clone(),
                known: point_coords.keys().cloned().collect(),
            });
        }
    }

    let segments: Vec<(V3, V3)> = {
        path.iter()
            .map(|(a, b)| (point_coords[a], point_coords[b]))
            .collect()
    };
    let counts = match spec.counts() {
        Some(counts) => {
            if let Some(value) = settings.kpoint_distance {
                warn!("kpoint-distance {} is ignored because the path gives point counts", value);
            }
            counts
        },
        None => counts_from_lengths(&segments, settings.kpoint_distance)?,
    };
    for (index, &count) in counts.iter().enumerate() {
        if count < 2 {
            throw!(PathSpecError::TooFewPoints { index, count });
        }
    }

    let (explicit_kpoints, labels) = sample_segments(&path, &segments, &counts);
    debug!("Sampled {} k-points along {} segments", explicit_kpoints.len(), path.len());

    ExplicitPath { point_coords, path, bravais_info, explicit_kpoints, labels }
})}

struct Resolved {
    point_coords: BTreeMap<String, V3>,
    path: Vec<(String, String)>,
    bravais_info: Option<BravaisInfo>,
}

fn resolve_points(
    spec: &PathSpec,
    cell: Option<&M33>,
    pbc: Pbc,
    settings: &ExplicitSettings,
) -> FailResult<Resolved>
{Ok({
    let from_cell = |path: Option<Vec<(String, String)>>| -> FailResult<Resolved> {
        let cell = match cell {
            Some(cell) => cell,
            None => throw!(PathSpecError::MissingCell { purpose: "to find special points" }),
        };
        let found = kpoints_path(cell, pbc, false, &settings.tolerances)?;
        Ok(Resolved {
            point_coords: found.point_coords,
            path: path.unwrap_or(found.path),
            bravais_info: Some(found.bravais_info),
        })
    };

    match spec {
        PathSpec::Auto => from_cell(None)?,
        PathSpec::LabelPairs(pairs) => from_cell(Some(pairs.clone()))?,
        PathSpec::LabelPairsWithCounts(segs) => {
            from_cell(Some(segs.iter().map(|(a, b, _)| (a.clone(), b.clone())).collect()))?
        },
        PathSpec::LabelCoordPairs(segs) => {
            user_points(segs.iter().map(|(a, b)| (a, b)), cell, settings.cartesian)?
        },
        PathSpec::LabelCoordPairsWithCounts(segs) => {
            user_points(segs.iter().map(|(a, b, _)| (a, b)), cell, settings.cartesian)?
        },
    }
})}

fn user_points<'a>(
    segments: impl Iterator<Item=(&'a LabeledPoint, &'a LabeledPoint)>,
    cell: Option<&M33>,
    cartesian: bool,
) -> FailResult<Resolved>
{Ok({
    let mut point_coords = BTreeMap::new();
    let mut path = vec![];
    for (start, end) in segments {
        for (label, coords) in vec![start, end] {
            if let Some(existing) = point_coords.insert(label.clone(), *coords) {
                if existing != *coords {
                    throw!(PathSpecError::ConflictingLabel { label: label.clone() });
                }
            }
        }
        path.push((start.0.clone(), end.0.clone()));
    }

    if cartesian {
        let cell = match cell {
            Some(cell) => cell,
            None => throw!(PathSpecError::MissingCell { purpose: "to convert cartesian coordinates" }),
        };
        let reciprocal = Lattice::new(cell)?.reciprocal();
        let carts = point_coords.values().cloned().collect();
        let fracs = Coords::Carts(carts).into_fracs(&reciprocal);
        for (point, frac) in point_coords.values_mut().zip(fracs) {
            *point = frac;
        }
    }
    Resolved { point_coords, path, bravais_info: None }
})}

fn counts_from_lengths(segments: &[(V3, V3)], kpoint_distance: Option<f64>) -> FailResult<Vec<usize>>
{Ok({
    let lengths: Vec<f64> = segments.iter().map(|(a, b)| (b - a).norm()).collect();
    let max_length = lengths.iter().cloned().fold(0.0, f64::max);

    let mut counts = Vec::with_capacity(lengths.len());
    for length in lengths {
        let count = match kpoint_distance {
            Some(distance) => whole_count((length / distance).floor())?,
            None if max_length == 0.0 => 2,
            None => whole_count((DEFAULT_POINTS_ON_LONGEST * length / max_length).floor())?,
        };
        counts.push(usize::max(2, count));
    }
    counts
})}

fn sample_segments(
    path: &[(String, String)],
    segments: &[(V3, V3)],
    counts: &[usize],
) -> (Vec<V3>, Vec<(usize, String)>)
{
    let mut kpoints: Vec<V3> = vec![];
    let mut labels = vec![];
    if let (Some((first_label, _)), Some(&(first_point, _))) = (path.first(), segments.first()) {
        kpoints.push(first_point);
        labels.push((0, first_label.clone()));
    }

    for ((start_label, end_label), &(start, end), &count) in izip!(path, segments, counts) {
        for k in 0..count {
            let point = start.lerp(&end, k as f64 / (count - 1) as f64);
            if kpoints.last() == Some(&point) {
                continue;
            }
            kpoints.push(point);
            if k == 0 {
                labels.push((kpoints.len() - 1, start_label.clone()));
            } else if k == count - 1 {
                labels.push((kpoints.len() - 1, end_label.clone()));
            }
        }
    }
    (kpoints, labels)
}
