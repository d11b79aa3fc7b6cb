/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::filetypes::{KpathJson, ExplicitKpathJson};
use crate::traits::{Save, Json};

use std::fs::File;
use std::path::Path;

use failure::ResultExt;
use kpath_structure::Lattice;
use kpath_bravais::{kpoints_path, BravaisInfo};
use kpath_kpoints::explicit_kpoints_path;
use kpath_tasks_config::{ValidatedSettings, YamlRead};

/// Read a config file, compute, and write the resulting document to
/// `output` (or stdout).
pub(crate) fn run_kpath(config: &Path, explicit: bool, output: Option<&Path>) -> FailResult<()>
{Ok({
    let settings = read_settings(config)?;
    match explicit {
        false => emit(Json(kpath_json(&settings)?), output)?,
        true => emit(Json(explicit_kpath_json(&settings)?), output)?,
    }
})}

fn read_settings(path: &Path) -> FailResult<ValidatedSettings>
{Ok({
    let file = File::open(path).with_context(|_| format!("could not open {}", path.display()))?;
    ValidatedSettings::from_reader(file).with_context(|_| format!("while reading {}", path.display()))?
})}

fn emit(doc: impl Save, output: Option<&Path>) -> FailResult<()>
{
    match output {
        Some(path) => {
            doc.save(path)?;
            info!("Wrote {}", path.display());
            Ok(())
        },
        None => doc.print(),
    }
}

/// Special points and suggested path of the configured cell.
pub fn kpath_json(settings: &ValidatedSettings) -> FailResult<KpathJson>
{Ok({
    let cell = match settings.cell() {
        Some(cell) => cell,
        None => bail!("a cell is required to find special points"),
    };
    if settings.raw().path.is_some() {
        warn!("`path` is only used for explicit k-points (--explicit)");
    }
    if settings.raw().kpoint_distance.is_some() {
        warn!("`kpoint-distance` is only used for explicit k-points (--explicit)");
    }

    let kpath = kpoints_path(&cell, settings.pbc(), settings.raw().cartesian, &settings.tolerances())?;
    log_bravais_info(&kpath.bravais_info);
    KpathJson::from(&kpath)
})}

/// The configured path, sampled into k-points.
pub fn explicit_kpath_json(settings: &ValidatedSettings) -> FailResult<ExplicitKpathJson>
{Ok({
    let cell = settings.cell();
    let explicit = explicit_kpoints_path(
        settings.path(),
        cell.as_ref(),
        settings.pbc(),
        &settings.explicit_settings(),
    )?;
    if let Some(info) = &explicit.bravais_info {
        log_bravais_info(info);
    }
    info!("{} k-points along {} segments", explicit.explicit_kpoints.len(), explicit.path.len());

    let cartesian = match cell {
        Some(cell) if settings.pbc().dimension() > 0 => {
            let reciprocal = Lattice::new(&cell)?.reciprocal();
            Some(explicit.cartesian_kpoints(&reciprocal))
        },
        _ => None,
    };
    ExplicitKpathJson::new(&explicit, cartesian)
})}

fn log_bravais_info(info: &BravaisInfo) {
    match info.variation() {
        Some(variation) => info!("Lattice: {} ({}, {})", info.extended_name(), info.short_name(), variation),
        None => info!("Lattice: {} ({})", info.extended_name(), info.short_name()),
    }
    for (name, value) in info.extra() {
        debug!("  {} = {}", name, value);
    }
}
