use crate::error::{CliError, Result};
use molpack::core::io::{sdf::SdfFile, traits::MolecularFile, xyz::XyzFile};
use molpack::core::models::molecule::Molecule;
use molpack::core::radii::table::RadiusTable;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Sdf,
    Xyz,
}

impl StructureFormat {
    /// Infers the format from the file extension. Inputs default to SDF and outputs to XYZ.
    fn from_path(path: &Path, fallback: StructureFormat) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("sdf" | "sd" | "mol") => Self::Sdf,
            Some("xyz") => Self::Xyz,
            _ => fallback,
        }
    }

    pub fn for_input(path: &Path) -> Self {
        Self::from_path(path, Self::Sdf)
    }

    pub fn for_output(path: &Path) -> Self {
        Self::from_path(path, Self::Xyz)
    }
}

pub fn read_structure(path: &Path, radii: Arc<RadiusTable>) -> Result<Molecule> {
    let format = StructureFormat::for_input(path);
    info!("Reading {:?} as {:?}", path, format);
    let parsed = match format {
        StructureFormat::Sdf => SdfFile::read_from_path(path, radii).map_err(anyhow::Error::from),
        StructureFormat::Xyz => XyzFile::read_from_path(path, radii).map_err(anyhow::Error::from),
    };
    parsed.map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_structure(molecule: &Molecule, path: &Path) -> Result<()> {
    let format = StructureFormat::for_output(path);
    info!("Writing {} atoms to {:?} as {:?}", molecule.len(), path, format);
    let written = match format {
        StructureFormat::Sdf => SdfFile::write_to_path(molecule, path).map_err(anyhow::Error::from),
        StructureFormat::Xyz => XyzFile::write_to_path(molecule, path).map_err(anyhow::Error::from),
    };
    written.map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}
