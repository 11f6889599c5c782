use nalgebra::Point3;
use std::fmt;

/// A single atom: an element label and a position in Angstroms.
///
/// Atoms carry no connectivity, charge, or force field information. They are never
/// moved in place; transforms build new atoms via [`Atom::with_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element label as read from the structure file (e.g., "C", "Cl").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }

    /// Convenience constructor from a loader record `(x, y, z, label)`.
    pub fn from_record(x: f64, y: f64, z: f64, element: &str) -> Self {
        Self::new(element, Point3::new(x, y, z))
    }

    /// Returns a copy of this atom placed at `position`.
    pub fn with_position(&self, position: Point3<f64>) -> Self {
        Self {
            element: self.element.clone(),
            position,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.3}, {:.3}, {:.3})",
            self.element, self.position.x, self.position.y, self.position.z
        )
    }
}
