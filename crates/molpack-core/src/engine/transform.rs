use super::config::RotationSpec;
use super::error::EngineError;
use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry;
use nalgebra::Vector3;

/// Rotates every atom about the origin by `Rz · Ry · Rx` built from `rotation`.
///
/// Returns a new molecule; labels, order and the radius table are unchanged.
pub fn rotate(molecule: &Molecule, rotation: &RotationSpec) -> Molecule {
    let matrix = rotation.matrix();
    molecule.map_positions(|p| matrix * p)
}

/// Shifts every atom by `distance` along the normalized `direction`.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateInput`] if `direction` has zero length.
pub fn translate(
    molecule: &Molecule,
    distance: f64,
    direction: &Vector3<f64>,
) -> Result<Molecule, EngineError> {
    let unit = geometry::normalize_direction(direction).ok_or_else(EngineError::zero_direction)?;
    let offset = unit.into_inner() * distance;
    Ok(molecule.map_positions(|p| p + offset))
}
