use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileDirection, FileRadiiConfig};
use super::models::AppConfig;
use crate::cli::DisplaceArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use molpack::core::radii::table::RadiusTable;
use molpack::engine::config as core_config;
use nalgebra::Vector3;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const RADII_TABLE_PREFIX: &str = "radii.table.";

pub fn build_config(args: &DisplaceArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let rotation = args
        .rotate
        .or_else(|| {
            file_config
                .rotation
                .as_ref()
                .map(|r| r.resolve(defaults.rotation))
        })
        .unwrap_or(defaults.rotation);

    let direction = args
        .direction
        .or_else(|| file_config.direction.as_ref().map(FileDirection::resolve))
        .unwrap_or(defaults.direction);

    let radii = build_radius_table(
        args.radii.as_deref(),
        file_config.radii.take().unwrap_or_default(),
    )?;

    let core_config = core_config::ContactConfigBuilder::new()
        .radii(radii)
        .direction(Vector3::from(direction))
        .rotation(core_config::RotationSpec::new(
            rotation[0],
            rotation[1],
            rotation[2],
        ))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        copy_only: args.copy_only,
        core_config,
    })
}

/// Starts from a radius file (CLI first, then config) or the conventional radii, then
/// layers the config's `default-radius` and `table` entries on top.
fn build_radius_table(cli_path: Option<&Path>, file: FileRadiiConfig) -> Result<Arc<RadiusTable>> {
    let base = match cli_path.or(file.file.as_deref()) {
        Some(path) => {
            info!("Loading radius table from {:?}", path);
            RadiusTable::load(path)?
        }
        None => RadiusTable::default(),
    };

    if file.table.is_empty() && file.default_radius.is_none() {
        return Ok(Arc::new(base));
    }

    let mut radii: HashMap<String, f64> = base
        .iter()
        .map(|(element, radius)| (element.to_string(), radius))
        .collect();
    radii.extend(file.table);

    let table = RadiusTable::new(
        radii,
        file.default_radius.unwrap_or(base.default_radius()),
    )?;
    debug!(
        entries = table.len(),
        default_radius = table.default_radius(),
        "Radius table assembled from overrides."
    );
    Ok(Arc::new(table))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let parse_float = || {
            value_str.parse::<f64>().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })
        };

        match key {
            "rotation.x" => {
                config.rotation.get_or_insert_with(Default::default).x = Some(parse_float()?);
            }
            "rotation.y" => {
                config.rotation.get_or_insert_with(Default::default).y = Some(parse_float()?);
            }
            "rotation.z" => {
                config.rotation.get_or_insert_with(Default::default).z = Some(parse_float()?);
            }
            "direction.x" | "direction.y" | "direction.z" => {
                let value = Some(parse_float()?);
                let mut vector = config
                    .direction
                    .take()
                    .map(FileDirection::into_components)
                    .unwrap_or_default();
                match key {
                    "direction.x" => vector.x = value,
                    "direction.y" => vector.y = value,
                    _ => vector.z = value,
                }
                config.direction = Some(FileDirection::Table(vector));
            }
            "radii.default-radius" => {
                config.radii.get_or_insert_with(Default::default).default_radius =
                    Some(parse_float()?);
            }
            "radii.file" => {
                config.radii.get_or_insert_with(Default::default).file =
                    Some(PathBuf::from(value_str));
            }
            _ if key.len() > RADII_TABLE_PREFIX.len() && key.starts_with(RADII_TABLE_PREFIX) => {
                let element = &key[RADII_TABLE_PREFIX.len()..];
                let radius = parse_float()?;
                config
                    .radii
                    .get_or_insert_with(Default::default)
                    .table
                    .insert(element.to_string(), radius);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
