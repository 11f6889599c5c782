use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::radii::table::RadiusTable;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

const COUNTS_LINE_MARKER: &str = "V2000";
const BLOCK_TERMINATOR: &str = "$$$$";

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Best-effort reader and minimal writer for V2000 SD files.
///
/// Reading is tolerant. Atom-reading starts on the line after any line
/// whose last token is `V2000` and stops at a line starting with `$$$$`. Inside a
/// block, a line counts as an atom when it has at least four tokens, the fourth is
/// purely alphabetic, and the first three parse as numbers; everything else (bond
/// lines, property lines, garbage) is skipped without error. Successive blocks are
/// concatenated in file order.
pub struct SdfFile;

impl SdfFile {
    /// Extracts atoms from SDF text without attaching radii.
    pub fn read_atoms(reader: &mut impl BufRead) -> Result<Vec<Atom>, SdfError> {
        let mut atoms = Vec::new();
        let mut in_atom_block = false;
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;

            if line.starts_with(BLOCK_TERMINATOR) {
                in_atom_block = false;
            } else if line.split_whitespace().last() == Some(COUNTS_LINE_MARKER) {
                in_atom_block = true;
                continue;
            }

            if !in_atom_block {
                continue;
            }

            match parse_atom_line(&line) {
                Some(atom) => atoms.push(atom),
                None => skipped += 1,
            }
        }

        debug!(
            atoms = atoms.len(),
            skipped_lines = skipped,
            "Finished reading SDF records."
        );
        Ok(atoms)
    }
}

fn parse_atom_line(line: &str) -> Option<Atom> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return None;
    }
    let label = tokens[3];
    if label.is_empty() || !label.chars().all(char::is_alphabetic) {
        return None;
    }
    let x = tokens[0].parse::<f64>().ok()?;
    let y = tokens[1].parse::<f64>().ok()?;
    let z = tokens[2].parse::<f64>().ok()?;
    Some(Atom::from_record(x, y, z, label))
}

impl MolecularFile for SdfFile {
    type Error = SdfError;

    fn read_from(
        reader: &mut impl BufRead,
        radii: Arc<RadiusTable>,
    ) -> Result<Molecule, Self::Error> {
        let atoms = Self::read_atoms(reader)?;
        Ok(Molecule::new(atoms, radii))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "molpack")?;
        writeln!(writer, "  molpack-core")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{:>3}{:>3}  0  0  0  0  0  0  0  0999 {}",
            molecule.len(),
            0,
            COUNTS_LINE_MARKER
        )?;
        for atom in molecule.atoms() {
            writeln!(
                writer,
                "{:>10.4}{:>10.4}{:>10.4} {:<3} 0  0  0  0  0  0  0  0  0  0  0  0",
                atom.position.x, atom.position.y, atom.position.z, atom.element
            )?;
        }
        writeln!(writer, "M  END")?;
        writeln!(writer, "{}", BLOCK_TERMINATOR)?;
        Ok(())
    }
}
