/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use serde::de;

use kpath_array_types::{M33, mat};
use kpath_structure::Pbc;
use kpath_bravais::Tolerances;
use kpath_kpoints::{ExplicitSettings, PathSpec, RawSegment};

use crate::YamlRead;

/// Root settings object.
///
/// This is what you should deserialize.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings {
    pub(crate) raw: Settings,
    pub(crate) path: PathSpec,
}

/// Raw deserialized form of settings.
///
/// You shouldn't deserialize this type directly; deserialize `ValidatedSettings` instead,
/// so that the path can be checked and resolved into a `PathSpec`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Lattice vectors as rows.
    ///
    /// Only optional for paths that give every coordinate explicitly.
    #[serde(default)]
    pub cell: Option<[[f64; 3]; 3]>,

    /// Periodicity along each lattice vector.
    #[serde(default = "_settings__pbc")]
    pub pbc: [bool; 3],

    /// List of segments.  When absent, the suggested path of the
    /// lattice is used.
    ///
    /// Each segment is one of:
    ///
    /// ```yaml
    /// - [G, X]
    /// - [G, X, 20]
    /// - [G, [0, 0, 0], X, [0.5, 0, 0]]
    /// - [G, [0, 0, 0], X, [0.5, 0, 0], 20]
    /// ```
    ///
    /// and all segments must have the same form.
    #[serde(default)]
    pub path: Option<Vec<RawSegment>>,

    /// Spacing of points along the path (in fractional units of the
    /// reciprocal cell) when the path does not give counts.
    #[serde(default)]
    pub kpoint_distance: Option<f64>,

    /// Read coordinates in `path` as cartesian, and write cartesian
    /// special points.
    #[serde(default)]
    pub cartesian: bool,

    #[serde(default = "_settings__epsilon_length")]
    pub epsilon_length: f64,

    #[serde(default = "_settings__epsilon_angle")]
    pub epsilon_angle: f64,
}
fn _settings__pbc() -> [bool; 3] { [true; 3] }
fn _settings__epsilon_length() -> f64 { Tolerances::DEFAULT_EPSILON_LENGTH }
fn _settings__epsilon_angle() -> f64 { Tolerances::DEFAULT_EPSILON_ANGLE }

derive_yaml_read!{ValidatedSettings}

impl<'de> de::Deserialize<'de> for ValidatedSettings {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cereal: Settings = de::Deserialize::deserialize(deserializer)?;

        cereal.validate().map_err(de::Error::custom)
    }
}

impl ValidatedSettings {
    pub fn raw(&self) -> &Settings
    { &self.raw }

    pub fn cell(&self) -> Option<M33>
    { self.raw.cell.map(mat::from_array) }

    pub fn pbc(&self) -> Pbc
    { Pbc(self.raw.pbc) }

    pub fn path(&self) -> &PathSpec
    { &self.path }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            epsilon_length: self.raw.epsilon_length,
            epsilon_angle: self.raw.epsilon_angle,
        }
    }

    pub fn explicit_settings(&self) -> ExplicitSettings {
        ExplicitSettings {
            kpoint_distance: self.raw.kpoint_distance,
            cartesian: self.raw.cartesian,
            tolerances: self.tolerances(),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::V3;

    fn read(yaml: &str) -> Result<ValidatedSettings, serde_yaml::Error>
    { ValidatedSettings::from_reader(yaml.as_bytes()) }

    #[test]
    fn defaults() {
        let settings = read("cell: [[1, 0, 0], [0, 1, 0], [0, 0, 1]]").unwrap();
        assert_eq!(settings.pbc(), Pbc([true; 3]));
        assert_eq!(settings.path(), &PathSpec::Auto);
        assert_eq!(settings.tolerances(), Tolerances::default());
        assert_eq!(settings.explicit_settings(), ExplicitSettings::default());
        assert_eq!(settings.cell(), Some(M33::eye()));
    }

    #[test]
    fn full_settings() {
        let settings = read("
            cell: [[2, 0, 0], [0, 2, 0], [0, 0, 2]]
            pbc: [true, true, false]
            path:
            - [G, [0, 0, 0], X, [0.5, 0, 0], 4]
            kpoint-distance: 0.1
            cartesian: true
            epsilon-length: 0.001
            epsilon-angle: 0.0001
        ").unwrap();
        assert_eq!(settings.cell(), Some(M33::eye() * 2.0));
        assert_eq!(settings.pbc(), Pbc([true, true, false]));
        assert_eq!(settings.path(), &PathSpec::LabelCoordPairsWithCounts(vec![
            (("G".into(), V3([0.0; 3])), ("X".into(), V3([0.5, 0.0, 0.0])), 4),
        ]));
        assert_eq!(settings.explicit_settings(), ExplicitSettings {
            kpoint_distance: Some(0.1),
            cartesian: true,
            tolerances: Tolerances { epsilon_length: 1e-3, epsilon_angle: 1e-4 },
        });
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let settings = read("
            cell: [[1, 0, 0], [0, 1, 0], [0, 0, 1]]
            kpoint-distanse: 0.1
        ").unwrap();
        assert_eq!(settings.raw().kpoint_distance, None);
    }

    #[test]
    fn validation_errors_surface() {
        let err = read("path: [[G, X], [X, M, 3]]").unwrap_err();
        assert!(err.to_string().contains("segment 1"), "{}", err);

        assert!(read("epsilon-length: -1").is_err());
        assert!(read("kpoint-distance: 0").is_err());
    }
}
