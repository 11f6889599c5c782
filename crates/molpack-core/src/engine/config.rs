use crate::core::radii::table::RadiusTable;
use crate::core::utils::geometry;
use nalgebra::{Matrix3, Unit, Vector3};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Rotation angles in degrees about the X, Y and Z axes.
///
/// Applied as `Rz · Ry · Rx`, so the X rotation acts first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationSpec {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationSpec {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        geometry::rotation_zyx(self.x, self.y, self.z)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (parameter, angle) in [
            ("rotation.x", self.x),
            ("rotation.y", self.y),
            ("rotation.z", self.z),
        ] {
            if !angle.is_finite() {
                return Err(ConfigError::InvalidValue {
                    parameter,
                    reason: format!("angle must be finite, got {angle}"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub radii: Arc<RadiusTable>,
    /// Displacement axis. Need not be unit length.
    pub direction: Vector3<f64>,
    pub rotation: RotationSpec,
}

impl ContactConfig {
    /// The displacement axis scaled to unit length, or `None` if it is degenerate.
    pub fn unit_direction(&self) -> Option<Unit<Vector3<f64>>> {
        geometry::normalize_direction(&self.direction)
    }

    /// Checks values that cannot be expressed through the type system.
    ///
    /// A zero-length direction is not reported here; the contact engine rejects it
    /// with [`EngineError::DegenerateInput`](super::error::EngineError::DegenerateInput).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rotation.validate()
    }
}

#[derive(Default)]
pub struct ContactConfigBuilder {
    radii: Option<Arc<RadiusTable>>,
    direction: Option<Vector3<f64>>,
    rotation: Option<RotationSpec>,
}

impl ContactConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radii(mut self, radii: Arc<RadiusTable>) -> Self {
        self.radii = Some(radii);
        self
    }
    pub fn direction(mut self, direction: Vector3<f64>) -> Self {
        self.direction = Some(direction);
        self
    }
    pub fn rotation(mut self, rotation: RotationSpec) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn build(self) -> Result<ContactConfig, ConfigError> {
        let direction = self
            .direction
            .ok_or(ConfigError::MissingParameter("direction"))?;
        if geometry::normalize_direction(&direction).is_none() {
            return Err(ConfigError::InvalidValue {
                parameter: "direction",
                reason: "vector must be non-zero and finite".to_string(),
            });
        }

        let config = ContactConfig {
            radii: self.radii.ok_or(ConfigError::MissingParameter("radii"))?,
            direction,
            rotation: self.rotation.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_direction() {
        let result = ContactConfigBuilder::new()
            .radii(Arc::new(RadiusTable::default()))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("direction")
        );
    }

    #[test]
    fn builder_requires_radii() {
        let result = ContactConfigBuilder::new().direction(Vector3::x()).build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingParameter("radii"));
    }

    #[test]
    fn builder_rejects_zero_direction() {
        let result = ContactConfigBuilder::new()
            .radii(Arc::new(RadiusTable::default()))
            .direction(Vector3::zeros())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "direction",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_non_finite_angles() {
        let result = ContactConfigBuilder::new()
            .radii(Arc::new(RadiusTable::default()))
            .direction(Vector3::x())
            .rotation(RotationSpec::new(0.0, f64::INFINITY, 0.0))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "rotation.y",
                ..
            })
        ));
    }

    #[test]
    fn builder_defaults_rotation_to_identity() {
        let config = ContactConfigBuilder::new()
            .radii(Arc::new(RadiusTable::default()))
            .direction(Vector3::new(0.0, 2.0, 0.0))
            .build()
            .unwrap();
        assert!(config.rotation.is_identity());
        assert_eq!(config.direction, Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(config.unit_direction().unwrap().into_inner(), Vector3::y());
    }
}
