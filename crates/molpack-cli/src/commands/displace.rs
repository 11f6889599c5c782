use crate::cli::DisplaceArgs;
use crate::config;
use crate::error::Result;
use crate::utils::format;
use crate::utils::progress::CliProgressHandler;
use molpack::core::models::molecule::Molecule;
use molpack::engine::progress::ProgressReporter;
use molpack::workflows::{self, pack::PackingResult};
use tracing::info;

pub fn run(args: DisplaceArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file, CLI arguments and defaults...");
    let app_config = config::build_config(&args)?;

    info!("Loading input structure from {:?}", &app_config.input_path);
    let molecule = format::read_structure(
        &app_config.input_path,
        app_config.core_config.radii.clone(),
    )?;

    let progress_handler = CliProgressHandler::new();
    let reporter = if quiet {
        ProgressReporter::new()
    } else {
        ProgressReporter::with_callback(progress_handler.get_callback())
    };

    info!("Invoking the core packing workflow...");
    let result = workflows::pack::run(&molecule, &app_config.core_config, &reporter)?;

    print_summary(&result);

    if let Some(output_path) = &app_config.output_path {
        let structure = if app_config.copy_only {
            result.copy.clone()
        } else {
            result.dimer()
        };
        format::write_structure(&structure, output_path)?;
        println!(
            "✓ {} ({} atoms) written to: {}",
            if app_config.copy_only {
                "Translated copy"
            } else {
                "Molecule and translated copy"
            },
            structure.len(),
            output_path.display()
        );
    }

    Ok(())
}

fn print_summary(result: &PackingResult) {
    let axis = result.contact.direction;
    println!(
        "Displacement along ({:.3}, {:.3}, {:.3}): {:.3} Å",
        axis.x,
        axis.y,
        axis.z,
        result.displacement()
    );
    match result.contact.binding_pair {
        Some((i, j)) => println!(
            "Binding pair: {} and {} ({} of {} pairs constrain)",
            describe_atom(&result.rotated, i),
            describe_atom(&result.rotated, j),
            result.contact.constraining_pairs,
            pair_count(result.rotated.len())
        ),
        None => println!("No atom pair constrains the displacement."),
    }
}

fn describe_atom(molecule: &Molecule, index: usize) -> String {
    match molecule.atom(index) {
        Some(atom) => format!("#{} {}", index, atom.element),
        None => format!("#{}", index),
    }
}

fn pair_count(atoms: usize) -> usize {
    atoms * atoms.saturating_sub(1) / 2
}
