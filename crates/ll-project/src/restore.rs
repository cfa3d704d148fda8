//! Rebuild live models from a loaded project and re-validate them.

use crate::error::ProjectResult;
use crate::schema::ProjectFile;
use ll_models::{BlockModel, InputSignal, Pid, Plant, Sensor, get_plant};

/// The four reconstructed blocks of a project.
#[derive(Debug, Clone)]
pub struct RestoredModels {
    pub plant: Plant,
    pub pid: Pid,
    pub input: InputSignal,
    pub sensor: Sensor,
}

/// Reconstruct the blocks from the stored parameter maps and run every
/// validation path: plant and sensor transfer functions (lazy checks)
/// and the input constraints (eager checks).
///
/// A file that loads structurally can still fail here, e.g. when it was
/// edited by hand; the caller keeps its previous models in that case.
pub fn restore_models(project: &ProjectFile) -> ProjectResult<RestoredModels> {
    let mut plant = get_plant(&project.plant_type)?;
    plant.set_parameters(&project.plant)?;
    plant.transfer_function()?;

    let mut pid = Pid::default();
    pid.set_parameters(&project.pid)?;

    let mut input = InputSignal::default();
    input.set_parameters(&project.input)?;

    let mut sensor = Sensor::default();
    sensor.set_parameters(&project.sensor)?;
    sensor.transfer_function()?;

    Ok(RestoredModels {
        plant,
        pid,
        input,
        sensor,
    })
}

/// Snapshot the current blocks into a saveable project.
pub fn capture_models(
    name: &str,
    plant: &Plant,
    pid: &Pid,
    input: &InputSignal,
    sensor: &Sensor,
) -> ProjectFile {
    ProjectFile {
        name: name.to_string(),
        plant_type: plant.name().to_string(),
        pid: pid.parameters(),
        plant: plant.parameters(),
        input: input.parameters(),
        sensor: sensor.parameters(),
    }
}
