use crate::cli::ConvertArgs;
use crate::error::Result;
use crate::utils::format;
use molpack::core::radii::table::RadiusTable;
use molpack::engine::config::RotationSpec;
use molpack::engine::transform;
use std::sync::Arc;
use tracing::{info, warn};

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Loading input structure from {:?}", &args.input);
    let molecule = format::read_structure(&args.input, Arc::new(RadiusTable::default()))?;
    if molecule.is_empty() {
        warn!("No atom records found in {:?}.", &args.input);
    }

    let molecule = match args.rotate {
        Some([x, y, z]) => {
            let rotation = RotationSpec::new(x, y, z);
            info!("Rotating by ({}, {}, {}) degrees.", x, y, z);
            transform::rotate(&molecule, &rotation)
        }
        None => molecule,
    };

    format::write_structure(&molecule, &args.output)?;
    println!(
        "✓ Wrote {} atom(s) to: {}",
        molecule.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DIATOMIC_SDF: &str = "\
diatomic

  2  1  0  0  0  0  0  0  0  0999 V2000
    1.0000    0.0000    0.0000 C   0  0
    0.0000    2.0000    0.0000 O   0  0
  1  2  1  0
M  END
$$$$
";

    #[test]
    fn converts_sdf_to_xyz() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("diatomic.sdf");
        let output = dir.path().join("diatomic.xyz");
        fs::write(&input, DIATOMIC_SDF).unwrap();

        run(ConvertArgs {
            input,
            output: output.clone(),
            rotate: None,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "2\n\nC 1.000 0.000 0.000\nO 0.000 2.000 0.000\n"
        );
    }

    #[test]
    fn applies_rotation_before_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("diatomic.sdf");
        let output = dir.path().join("diatomic.xyz");
        fs::write(&input, DIATOMIC_SDF).unwrap();

        run(ConvertArgs {
            input,
            output: output.clone(),
            rotate: Some([0.0, 0.0, 180.0]),
        })
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let coords: Vec<Vec<f64>> = written
            .lines()
            .skip(2)
            .map(|line| {
                line.split_whitespace()
                    .skip(1)
                    .map(|v| v.parse().unwrap())
                    .collect()
            })
            .collect();
        assert_eq!(coords.len(), 2);
        let expected = [[-1.0, 0.0, 0.0], [0.0, -2.0, 0.0]];
        for (actual, expected) in coords.iter().zip(expected) {
            for (a, e) in actual.iter().zip(expected) {
                assert!((a - e).abs() < 1e-9);
            }
        }
    }
}
