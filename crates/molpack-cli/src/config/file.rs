use crate::error::{CliError, Result};
use crate::utils::parser::Triple;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileVector {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl FileVector {
    /// Unset components fall back to the matching entry of `fallback`.
    pub fn resolve(&self, fallback: Triple) -> Triple {
        [
            self.x.unwrap_or(fallback[0]),
            self.y.unwrap_or(fallback[1]),
            self.z.unwrap_or(fallback[2]),
        ]
    }
}

/// The `direction` key accepts either `direction = [x, y, z]` or a `[direction]` table.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileDirection {
    Array(Triple),
    Table(FileVector),
}

impl FileDirection {
    /// Converts to the table form so single components can be overridden.
    pub fn into_components(self) -> FileVector {
        match self {
            FileDirection::Array([x, y, z]) => FileVector {
                x: Some(x),
                y: Some(y),
                z: Some(z),
            },
            FileDirection::Table(vector) => vector,
        }
    }

    /// Components missing from a file-specified axis are zero.
    pub fn resolve(&self) -> Triple {
        match self {
            FileDirection::Array(triple) => *triple,
            FileDirection::Table(vector) => vector.resolve([0.0; 3]),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRadiiConfig {
    /// Radius table file replacing the conventional radii, resolved relative to the config file.
    pub file: Option<PathBuf>,
    pub default_radius: Option<f64>,
    #[serde(default)]
    pub table: HashMap<String, f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub rotation: Option<FileVector>,
    pub direction: Option<FileDirection>,
    pub radii: Option<FileRadiiConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let Some(radii_file) = config.radii.as_mut().and_then(|r| r.file.as_mut()) {
            if radii_file.is_relative() {
                if let Some(base) = path.parent() {
                    *radii_file = base.join(&*radii_file);
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_table_sections() {
        let config: FileConfig = toml::from_str(
            r#"
            [rotation]
            x = 90.0
            z = -45.0

            [direction]
            y = 1.0

            [radii]
            default-radius = 1.4
            table = { Cl = 1.75, Br = 1.85 }
            "#,
        )
        .unwrap();

        let rotation = config.rotation.unwrap();
        assert_eq!(rotation.resolve([0.0; 3]), [90.0, 0.0, -45.0]);
        assert_eq!(config.direction.unwrap().resolve(), [0.0, 1.0, 0.0]);
        let radii = config.radii.unwrap();
        assert_eq!(radii.default_radius, Some(1.4));
        assert_eq!(radii.table.get("Cl"), Some(&1.75));
        assert!(radii.file.is_none());
    }

    #[test]
    fn direction_accepts_array_form() {
        let config: FileConfig = toml::from_str("direction = [0.0, 0.0, 2.0]").unwrap();
        assert_eq!(
            config.direction,
            Some(FileDirection::Array([0.0, 0.0, 2.0]))
        );
    }

    #[test]
    fn array_direction_converts_to_components_for_editing() {
        let mut vector = FileDirection::Array([1.0, 2.0, 3.0]).into_components();
        vector.y = Some(-2.0);
        assert_eq!(FileDirection::Table(vector).resolve(), [1.0, -2.0, 3.0]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("[rotation]\nw = 1.0\n");
        assert!(result.is_err());
        let result: std::result::Result<FileConfig, _> = toml::from_str("s-factor = 1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_resolves_radii_path_next_to_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molpack.toml");
        fs::write(&path, "[radii]\nfile = \"radii.csv\"\n").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(
            config.radii.unwrap().file,
            Some(dir.path().join("radii.csv"))
        );
    }

    #[test]
    fn from_file_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[rotation\n").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
