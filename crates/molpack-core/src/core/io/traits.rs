use crate::core::models::molecule::Molecule;
use crate::core::radii::table::RadiusTable;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Defines the interface for reading and writing molecular file formats.
///
/// Readers produce a [`Molecule`] sized by the supplied radius table; writers
/// serialize atoms in their stored order.
pub trait MolecularFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `radii` - The radius table the resulting molecule will carry.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the format cannot be interpreted.
    fn read_from(
        reader: &mut impl BufRead,
        radii: Arc<RadiusTable>,
    ) -> Result<Molecule, Self::Error>;

    /// Writes a molecule to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a molecule from an in-memory string.
    fn read_from_str(content: &str, radii: Arc<RadiusTable>) -> Result<Molecule, Self::Error> {
        let mut reader = content.as_bytes();
        Self::read_from(&mut reader, radii)
    }

    /// Reads a molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        radii: Arc<RadiusTable>,
    ) -> Result<Molecule, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, radii)
    }

    /// Serializes a molecule into a `String`.
    fn write_to_string(molecule: &Molecule) -> Result<String, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(molecule, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes a molecule to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(molecule: &Molecule, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(molecule, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
