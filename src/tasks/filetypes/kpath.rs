/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! JSON documents written by the `kpath` binary.

use std::collections::BTreeMap;

use kpath_array_types::V3;
use kpath_bravais::{BravaisInfo, KpointsPath};
use kpath_kpoints::ExplicitPath;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct BravaisJson {
    pub short_name: String,
    pub extended_name: String,
    pub index: u32,
    pub dimension: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Axis `i` of the input cell is axis `permutation[i]` of the
    /// table the special points were taken from.
    pub permutation: [usize; 3],
    /// Table axes whose vector points opposite to the input vector.
    #[serde(default)]
    pub negated: [bool; 3],
    #[serde(default)]
    pub extra: BTreeMap<String, f64>,
}

/// Special points and the suggested path.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct KpathJson {
    pub point_coords: BTreeMap<String, [f64; 3]>,
    pub path: Vec<(String, String)>,
    pub bravais_info: BravaisJson,
}

/// A path sampled into k-points.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitKpathJson {
    pub point_coords: BTreeMap<String, [f64; 3]>,
    pub path: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bravais_info: Option<BravaisJson>,
    /// Fractional coordinates.
    pub explicit_kpoints: Vec<[f64; 3]>,
    /// Only written when a cell is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_kpoints_cartesian: Option<Vec<[f64; 3]>>,
    pub labels: Vec<(usize, String)>,
}

impl<'a> From<&'a BravaisInfo> for BravaisJson {
    fn from(info: &'a BravaisInfo) -> Self {
        BravaisJson {
            short_name: info.short_name().to_string(),
            extended_name: info.extended_name().to_string(),
            index: info.index(),
            dimension: info.dimension(),
            variation: info.variation().map(|s| s.to_string()),
            permutation: info.permutation.into_array(),
            negated: info.negated,
            extra: info.extra().into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

impl<'a> From<&'a KpointsPath> for KpathJson {
    fn from(kpath: &'a KpointsPath) -> Self {
        KpathJson {
            point_coords: unvee_map(&kpath.point_coords),
            path: kpath.path.clone(),
            bravais_info: (&kpath.bravais_info).into(),
        }
    }
}

impl ExplicitKpathJson {
    pub fn new(explicit: &ExplicitPath, cartesian: Option<Vec<V3>>) -> Self {
        ExplicitKpathJson {
            point_coords: unvee_map(&explicit.point_coords),
            path: explicit.path.clone(),
            bravais_info: explicit.bravais_info.as_ref().map(BravaisJson::from),
            explicit_kpoints: explicit.explicit_kpoints.iter().map(|v| v.0).collect(),
            explicit_kpoints_cartesian: cartesian.map(|vs| vs.into_iter().map(|v| v.0).collect()),
            labels: explicit.labels.clone(),
        }
    }
}

fn unvee_map(map: &BTreeMap<String, V3>) -> BTreeMap<String, [f64; 3]>
{ map.iter().map(|(k, v)| (k.clone(), v.0)).collect() }

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::M33;
    use kpath_structure::Pbc;
    use kpath_bravais::{kpoints_path, Tolerances};

    #[test]
    fn bravais_json() {
        let cell = kpath_array_types::mat::from_array([
            [3.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 4.0],
        ]);
        let kpath = kpoints_path(&cell, Pbc::default(), false, &Tolerances::default()).unwrap();
        let json = KpathJson::from(&kpath);
        assert_eq!(json.bravais_info.short_name, "orc");
        assert_eq!(json.bravais_info.index, 6);
        assert_eq!(json.bravais_info.variation, None);
        assert_eq!(json.bravais_info.negated, [false; 3]);
        assert!(json.bravais_info.extra.is_empty());
        assert_eq!(json.point_coords.len(), kpath.point_coords.len());

        let text = serde_json::to_string(&json).unwrap();
        assert!(!text.contains("variation"));
        assert_eq!(serde_json::from_str::<KpathJson>(&text).unwrap(), json);
    }

    #[test]
    fn negated_axes_are_written() {
        // monoclinic with an obtuse angle between the second and third vectors
        let (sin, cos) = 110f64.to_radians().sin_cos();
        let cell = kpath_array_types::mat::from_array([
            [1.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 3.0 * cos, 3.0 * sin],
        ]);
        let kpath = kpoints_path(&cell, Pbc::default(), false, &Tolerances::default()).unwrap();
        let json = KpathJson::from(&kpath);
        assert_eq!(json.bravais_info.short_name, "mcl");
        assert_eq!(json.bravais_info.negated, [false, false, true]);

        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["bravais_info"]["negated"], serde_json::json!([false, false, true]));
    }

    #[test]
    fn explicit_json() {
        let kpath = kpoints_path(&M33::eye(), Pbc::default(), false, &Tolerances::default()).unwrap();
        let explicit = ExplicitPath {
            point_coords: kpath.point_coords.clone(),
            path: vec![("G".into(), "X".into())],
            bravais_info: None,
            explicit_kpoints: vec![V3([0.0; 3]), V3([0.0, 0.5, 0.0])],
            labels: vec![(0, "G".into()), (1, "X".into())],
        };
        let json = ExplicitKpathJson::new(&explicit, None);
        let value = serde_json::to_value(&json).unwrap();
        assert!(value.get("bravais_info").is_none());
        assert!(value.get("explicit_kpoints_cartesian").is_none());
        assert_eq!(value["labels"][1], serde_json::json!([1, "X"]));
    }
}
