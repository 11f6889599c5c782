use crate::core::models::molecule::Molecule;
use crate::engine::config::ContactConfig;
use crate::engine::contact::{ContactEngine, ContactResult};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::transform;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct PackingResult {
    /// The input molecule after the configured rotation, sized by the configured radii.
    pub rotated: Molecule,
    /// `rotated` shifted by the contact displacement along the configured axis.
    pub copy: Molecule,
    pub contact: ContactResult,
}

impl PackingResult {
    pub fn displacement(&self) -> f64 {
        self.contact.displacement
    }

    /// The rotated molecule followed by its translated copy.
    pub fn dimer(&self) -> Molecule {
        self.rotated.merged(&self.copy)
    }
}

/// Rotates `molecule`, finds the displacement that clears it along the configured
/// axis and builds the translated copy.
///
/// Radii come from `config.radii`, not from the table the molecule was loaded with.
/// Both output molecules carry `config.radii` as well.
#[instrument(skip_all, name = "packing_workflow", fields(atoms = molecule.len()))]
pub fn run(
    molecule: &Molecule,
    config: &ContactConfig,
    reporter: &ProgressReporter,
) -> Result<PackingResult, EngineError> {
    config.validate()?;
    if molecule.len() < 2 {
        reporter.report(Progress::Message(format!(
            "Only {} atom(s); nothing can overlap.",
            molecule.len()
        )));
    }

    // === Phase 1: Rotation ===
    reporter.report(Progress::PhaseStart { name: "Rotation" });
    let molecule = molecule.with_radii(config.radii.clone());
    let rotated = if config.rotation.is_identity() {
        molecule
    } else {
        info!(
            x = config.rotation.x,
            y = config.rotation.y,
            z = config.rotation.z,
            "Rotating molecule about the origin."
        );
        transform::rotate(&molecule, &config.rotation)
    };
    if let Some(center) = rotated.centroid() {
        debug!(x = center.x, y = center.y, z = center.z, "Centroid after rotation.");
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Contact scan ===
    reporter.report(Progress::PhaseStart {
        name: "Contact Scan",
    });
    let engine = ContactEngine::new(config.radii.clone());
    let contact = engine.scan(&rotated, &config.direction, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Assembly ===
    reporter.report(Progress::PhaseStart { name: "Assembly" });
    let copy = transform::translate(&rotated, contact.displacement, &contact.direction)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        displacement = contact.displacement,
        constraining_pairs = contact.constraining_pairs,
        "Packing workflow completed."
    );

    Ok(PackingResult {
        rotated,
        copy,
        contact,
    })
}
