/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! All of the post-processing that occurs after deserialization is written here.

use crate::config::*;
use failure::Error;

use kpath_kpoints::PathSpec;

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        check_tolerance("epsilon-length", self.epsilon_length)?;
        check_tolerance("epsilon-angle", self.epsilon_angle)?;

        if let Some(distance) = self.kpoint_distance {
            if !(distance > 0.0) {
                bail!("kpoint-distance must be positive (got {})", distance);
            }
        }

        if let Some(cell) = &self.cell {
            if cell.iter().flat_map(|row| row.iter()).any(|x| !x.is_finite()) {
                bail!("cell contains non-finite values");
            }
        }

        let path = PathSpec::from_segments(self.path.as_ref().map(|v| &v[..]))?;
        if self.cartesian && self.cell.is_none() {
            match path {
                PathSpec::LabelCoordPairs(_) |
                PathSpec::LabelCoordPairsWithCounts(_) => {
                    bail!("cartesian coordinates in the path require a cell");
                },
                _ => {},
            }
        }

        Ok(ValidatedSettings { raw: self, path })
    }
}

fn check_tolerance(name: &str, value: f64) -> Result<(), Error> {
    if !(value >= 0.0) {
        bail!("{} must be non-negative (got {})", name, value);
    }
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            cell: None,
            pbc: [true; 3],
            path: None,
            kpoint_distance: None,
            cartesian: false,
            epsilon_length: 1e-5,
            epsilon_angle: 1e-5,
        }
    }

    #[test]
    fn tolerances() {
        assert!(Settings { epsilon_length: 0.0, ..settings() }.validate().is_ok());
        let err = Settings { epsilon_angle: -1e-3, ..settings() }.validate().unwrap_err();
        assert_eq!(err.to_string(), "epsilon-angle must be non-negative (got -0.001)");
        assert!(Settings { epsilon_length: std::f64::NAN, ..settings() }.validate().is_err());
    }

    #[test]
    fn cartesian_needs_cell() {
        use kpath_kpoints::RawSegment;

        let path = Some(vec![
            RawSegment::LabelCoordPair("G".into(), vec![0.0; 3], "X".into(), vec![1.0, 0.0, 0.0]),
        ]);
        assert!(Settings { path: path.clone(), ..settings() }.validate().is_ok());
        assert!(Settings { path: path.clone(), cartesian: true, ..settings() }.validate().is_err());

        let cell = Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(Settings { path, cell, cartesian: true, ..settings() }.validate().is_ok());
    }

    #[test]
    fn bad_cell() {
        let cell = Some([[1.0, 0.0, 0.0], [0.0, std::f64::INFINITY, 0.0], [0.0, 0.0, 1.0]]);
        assert!(Settings { cell, ..settings() }.validate().is_err());
    }
}
