use phf::phf_map;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Radius returned for element labels that have no explicit entry.
pub const DEFAULT_FALLBACK_RADIUS: f64 = 1.5;

/// Conventional van der Waals radii in Angstroms.
static CONVENTIONAL_RADII: phf::Map<&'static str, f64> = phf_map! {
    "C" => 1.7,
    "H" => 1.2,
    "O" => 1.52,
    "N" => 1.55,
    "S" => 1.8,
};

#[derive(Debug, Error)]
pub enum RadiusTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid contact radius {radius} for '{element}': radii must be positive and finite")]
    InvalidRadius { element: String, radius: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadiusFile {
    #[serde(rename = "default-radius")]
    default_radius: Option<f64>,
    #[serde(default)]
    radii: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RadiusRecord {
    element: String,
    radius: f64,
}

/// Maps element labels to contact (van der Waals) radii.
///
/// Lookups never fail: labels without an explicit entry resolve to the table's
/// default radius. Every stored radius is positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusTable {
    radii: HashMap<String, f64>,
    default_radius: f64,
}

impl RadiusTable {
    /// Builds a table from an explicit mapping and fallback radius.
    ///
    /// # Errors
    ///
    /// Returns [`RadiusTableError::InvalidRadius`] if any radius, including the
    /// fallback, is not a positive finite number.
    pub fn new(radii: HashMap<String, f64>, default_radius: f64) -> Result<Self, RadiusTableError> {
        validate_radius("<default>", default_radius)?;
        for (element, &radius) in &radii {
            validate_radius(element, radius)?;
        }
        Ok(Self {
            radii,
            default_radius,
        })
    }

    /// Layers `overrides` on top of the conventional radii.
    pub fn with_defaults_and<I, S>(overrides: I) -> Result<Self, RadiusTableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut radii = conventional_radii();
        radii.extend(overrides.into_iter().map(|(k, v)| (k.into(), v)));
        Self::new(radii, DEFAULT_FALLBACK_RADIUS)
    }

    /// Returns the contact radius for `element`, falling back to the default radius.
    #[inline]
    pub fn lookup(&self, element: &str) -> f64 {
        self.radii
            .get(element)
            .copied()
            .unwrap_or(self.default_radius)
    }

    /// Returns the explicit entry for `element`, if any.
    pub fn get(&self, element: &str) -> Option<f64> {
        self.radii.get(element).copied()
    }

    pub fn default_radius(&self) -> f64 {
        self.default_radius
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.radii.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Loads a table from disk. Files ending in `.csv` are read as `element,radius`
    /// records; anything else is parsed as TOML.
    pub fn load(path: &Path) -> Result<Self, RadiusTableError> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::load_csv(path)
        } else {
            Self::load_toml(path)
        }
    }

    fn load_toml(path: &Path) -> Result<Self, RadiusTableError> {
        let content = std::fs::read_to_string(path).map_err(|e| RadiusTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse_toml(&content, &path.to_string_lossy())
    }

    /// Parses a TOML table of the form
    ///
    /// ```toml
    /// default-radius = 1.5
    ///
    /// [radii]
    /// C = 1.7
    /// Cl = 1.75
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, RadiusTableError> {
        Self::parse_toml(content, "<inline>")
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, RadiusTableError> {
        let file: RadiusFile = toml::from_str(content).map_err(|e| RadiusTableError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        Self::new(
            file.radii,
            file.default_radius.unwrap_or(DEFAULT_FALLBACK_RADIUS),
        )
    }

    fn load_csv(path: &Path) -> Result<Self, RadiusTableError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| RadiusTableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut radii = HashMap::new();
        for result in reader.deserialize::<RadiusRecord>() {
            let record = result.map_err(|e| RadiusTableError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            radii.insert(record.element, record.radius);
        }
        Self::new(radii, DEFAULT_FALLBACK_RADIUS)
    }
}

impl Default for RadiusTable {
    fn default() -> Self {
        Self {
            radii: conventional_radii(),
            default_radius: DEFAULT_FALLBACK_RADIUS,
        }
    }
}

fn conventional_radii() -> HashMap<String, f64> {
    CONVENTIONAL_RADII
        .entries()
        .map(|(&k, &v)| (k.to_string(), v))
        .collect()
}

fn validate_radius(element: &str, radius: f64) -> Result<(), RadiusTableError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(RadiusTableError::InvalidRadius {
            element: element.to_string(),
            radius,
        })
    }
}
