/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fs::File;

use pretty_assertions::assert_eq;

use kpath_assert_close::assert_close;
use kpath_tasks::filetypes::{BravaisJson, KpathJson, ExplicitKpathJson};
use kpath_tasks_config::{ValidatedSettings, YamlRead};

mod shared;
use self::shared::resource;
use self::shared::cli_test::CliTest;

fn settings(name: &str) -> ValidatedSettings {
    let file = File::open(resource(name)).unwrap();
    ValidatedSettings::from_reader(file).unwrap()
}

// JSON text does not always round-trip an f64 exactly.
fn assert_bravais_close(actual: &BravaisJson, expected: &BravaisJson) {
    assert_close!(abs=1e-12, &actual.extra, &expected.extra);
    let actual = BravaisJson { extra: Default::default(), ..actual.clone() };
    let expected = BravaisJson { extra: Default::default(), ..expected.clone() };
    assert_eq!(actual, expected);
}

#[test]
fn special_points_to_stdout() {
    CliTest::kpath()
        .arg("-c").arg(resource("fcc.yaml"))
        .check(|_, out| {
            let actual: KpathJson = serde_json::from_str(&out.stdout)?;
            let expected = kpath_tasks::kpath_json(&settings("fcc.yaml"))?;
            assert_eq!(actual.path, expected.path);
            assert_close!(abs=1e-12, &actual.point_coords, &expected.point_coords);
            assert_bravais_close(&actual.bravais_info, &expected.bravais_info);

            assert_eq!(actual.bravais_info.short_name, "fcc");
            assert_eq!(actual.bravais_info.permutation, [0, 1, 2]);
            assert_close!(abs=1e-12, actual.point_coords["K"], [0.375, 0.375, 0.75]);
            // G-X-W-K-G-L-U-W-L-K|U-X
            assert_eq!(actual.path.len(), 10);
            assert_eq!(actual.path[9], ("U".to_string(), "X".to_string()));
            Ok(())
        })
        .run().unwrap();
}

#[test]
fn explicit_path_to_file() {
    CliTest::kpath()
        .arg("-c").arg(resource("graphene.yaml"))
        .arg("--explicit")
        .arg("-o").arg("out.json")
        .check(|dir, out| {
            // logging never goes to stdout
            assert_eq!(out.stdout, "");

            let actual: ExplicitKpathJson = serde_json::from_reader(File::open(dir.join("out.json"))?)?;
            let expected = kpath_tasks::explicit_kpath_json(&settings("graphene.yaml"))?;
            assert_eq!(actual.path, expected.path);
            assert_eq!(actual.labels, expected.labels);
            assert_close!(abs=1e-12, &actual.point_coords, &expected.point_coords);
            assert_close!(abs=1e-12, &actual.explicit_kpoints, &expected.explicit_kpoints);
            assert_close!(abs=1e-12,
                actual.explicit_kpoints_cartesian.as_ref().unwrap(),
                expected.explicit_kpoints_cartesian.as_ref().unwrap(),
            );
            assert_bravais_close(
                actual.bravais_info.as_ref().unwrap(),
                expected.bravais_info.as_ref().unwrap(),
            );

            let info = actual.bravais_info.as_ref().unwrap();
            assert_eq!((info.short_name.as_str(), info.dimension), ("hex", 2));
            assert_eq!(actual.labels[0], (0, "G".to_string()));
            assert!(actual.explicit_kpoints.iter().all(|k| k[2] == 0.0));

            let cartesian = actual.explicit_kpoints_cartesian.as_ref().unwrap();
            assert_eq!(cartesian.len(), actual.explicit_kpoints.len());
            Ok(())
        })
        .run().unwrap();
}

#[test]
fn explicit_segments_without_cell() {
    CliTest::kpath()
        .arg("-c").arg(resource("segments.yaml"))
        .arg("--explicit")
        .check(|_, out| {
            let actual: ExplicitKpathJson = serde_json::from_str(&out.stdout)?;
            assert_eq!(actual.bravais_info, None);
            assert_eq!(actual.explicit_kpoints_cartesian, None);
            assert_eq!(actual.explicit_kpoints.len(), 9);
            assert_eq!(actual.labels, vec![
                (0, "G".to_string()),
                (4, "X".to_string()),
                (8, "M".to_string()),
            ]);
            Ok(())
        })
        .run().unwrap();

    // special points can't be found without a cell
    CliTest::kpath()
        .arg("-c").arg(resource("segments.yaml"))
        .expect_failure()
        .check(|_, out| {
            assert!(out.stderr.contains("a cell is required"), "{}", out.stderr);
            Ok(())
        })
        .run().unwrap();
}

#[test]
fn unknown_config_keys_are_tolerated() {
    CliTest::kpath()
        .arg("-c").arg(resource("typo.yaml"))
        .arg("--explicit")
        .check(|_, out| {
            assert!(out.stderr.contains("possible typo"), "{}", out.stderr);
            assert!(out.stderr.contains("kpoint-distanse"), "{}", out.stderr);
            let actual: ExplicitKpathJson = serde_json::from_str(&out.stdout)?;
            assert_eq!(actual.bravais_info.unwrap().short_name, "cub");
            Ok(())
        })
        .run().unwrap();
}

#[test]
fn errors_exit_nonzero() {
    CliTest::kpath()
        .arg("-c").arg(resource("mixed-shapes.yaml"))
        .arg("--explicit")
        .expect_failure()
        .check(|_, out| {
            assert!(out.stderr.contains("does not have the same shape"), "{}", out.stderr);
            assert_eq!(out.stdout, "");
            Ok(())
        })
        .run().unwrap();

    CliTest::kpath()
        .arg("-c").arg("does-not-exist.yaml")
        .expect_failure()
        .check(|_, out| {
            assert!(out.stderr.contains("could not open does-not-exist.yaml"), "{}", out.stderr);
            Ok(())
        })
        .run().unwrap();
}
