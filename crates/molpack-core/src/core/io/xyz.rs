use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::radii::table::RadiusTable;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;

const MAX_PREALLOCATED_ATOMS: usize = 4096;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {details}")]
    Parse { line: usize, details: String },
    #[error("Header declares {declared} atoms but {found} atom lines were found")]
    CountMismatch { declared: usize, found: usize },
}

impl XyzError {
    fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}

/// Plain XYZ point-cloud format: atom count, a blank comment line, then
/// `label x y z` per atom with coordinates fixed to three decimals.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    type Error = XyzError;

    fn read_from(
        reader: &mut impl BufRead,
        radii: Arc<RadiusTable>,
    ) -> Result<Molecule, Self::Error> {
        let mut lines = reader.lines().enumerate();

        let declared = match lines.next() {
            Some((_, line)) => {
                let line = line?;
                line.trim().parse::<usize>().map_err(|_| {
                    XyzError::parse(1, format!("invalid atom count '{}'", line.trim()))
                })?
            }
            None => return Err(XyzError::parse(1, "missing atom count line")),
        };
        // Comment line; its content is ignored.
        if let Some((_, line)) = lines.next() {
            line?;
        }

        // The header is untrusted; a bogus count surfaces as `CountMismatch` below.
        let mut atoms = Vec::with_capacity(declared.min(MAX_PREALLOCATED_ATOMS));
        for (idx, line) in lines {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 4 {
                return Err(XyzError::parse(
                    line_no,
                    "atom line needs a label and three coordinates",
                ));
            }
            let coord = |k: usize| {
                tokens[k].parse::<f64>().map_err(|_| {
                    XyzError::parse(line_no, format!("invalid coordinate '{}'", tokens[k]))
                })
            };
            atoms.push(Atom::from_record(coord(1)?, coord(2)?, coord(3)?, tokens[0]));
        }

        if atoms.len() != declared {
            return Err(XyzError::CountMismatch {
                declared,
                found: atoms.len(),
            });
        }
        Ok(Molecule::new(atoms, radii))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", molecule.len())?;
        writeln!(writer)?;
        for atom in molecule.atoms() {
            writeln!(
                writer,
                "{} {:.3} {:.3} {:.3}",
                atom.element, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn radii() -> Arc<RadiusTable> {
        Arc::new(RadiusTable::default())
    }

    #[test]
    fn writes_count_blank_line_and_fixed_point_atoms() {
        let mol = Molecule::from_records(
            [(0.0, 1.23456, -2.0, "C"), (10.0, 0.0005, 0.0, "H")],
            radii(),
        );
        let text = XyzFile::write_to_string(&mol).unwrap();
        assert_eq!(text, "2\n\nC 0.000 1.235 -2.000\nH 10.000 0.001 0.000\n");
    }

    #[test]
    fn empty_molecule_writes_only_header() {
        let mol = Molecule::new(Vec::new(), radii());
        assert_eq!(XyzFile::write_to_string(&mol).unwrap(), "0\n\n");
    }

    #[test]
    fn reads_back_written_output() {
        let text = "2\n\nO 0.000 0.000 0.000\nH 0.960 0.000 0.000\n";
        let mol = XyzFile::read_from_str(text, radii()).unwrap();
        assert_eq!(mol.len(), 2);
        assert_eq!(mol.atom(1).unwrap().position, Point3::new(0.96, 0.0, 0.0));
    }

    #[test]
    fn rejects_invalid_count_line() {
        let result = XyzFile::read_from_str("two\n\n", radii());
        assert!(matches!(result, Err(XyzError::Parse { line: 1, .. })));
    }

    #[test]
    fn rejects_bad_coordinate_with_line_number() {
        let result = XyzFile::read_from_str("1\ncomment\nC 0.0 x 0.0\n", radii());
        assert!(matches!(result, Err(XyzError::Parse { line: 3, .. })));
    }

    #[test]
    fn reports_count_mismatch() {
        let result = XyzFile::read_from_str("3\n\nC 0 0 0\n", radii());
        assert!(matches!(
            result,
            Err(XyzError::CountMismatch {
                declared: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn oversized_header_count_is_a_mismatch_not_an_allocation() {
        for header in ["18446744073709551615", "10000000000"] {
            let text = format!("{header}\n\nC 0 0 0\n");
            let result = XyzFile::read_from_str(&text, radii());
            assert!(
                matches!(result, Err(XyzError::CountMismatch { found: 1, .. })),
                "header {header} should be rejected"
            );
        }
    }
}
