use super::atom::Atom;
use crate::core::radii::table::RadiusTable;
use nalgebra::Point3;
use std::sync::Arc;

/// An ordered point cloud of atoms paired with the radius table used to size them.
///
/// Atom order is the order of the source file and is preserved by every operation,
/// so atoms can be addressed positionally. The radius table is shared, never copied:
/// molecules derived from one another point at the same table.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    radii: Arc<RadiusTable>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, radii: Arc<RadiusTable>) -> Self {
        Self { atoms, radii }
    }

    /// Builds a molecule from loader records of the form `(x, y, z, label)`.
    pub fn from_records<I, S>(records: I, radii: Arc<RadiusTable>) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64, S)>,
        S: AsRef<str>,
    {
        let atoms = records
            .into_iter()
            .map(|(x, y, z, label)| Atom::from_record(x, y, z, label.as_ref()))
            .collect();
        Self::new(atoms, radii)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn radii(&self) -> &Arc<RadiusTable> {
        &self.radii
    }

    /// Contact radius of the atom at `index`, resolved through this molecule's table.
    pub fn radius_of(&self, index: usize) -> Option<f64> {
        self.atoms
            .get(index)
            .map(|atom| self.radii.lookup(&atom.element))
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Point3<f64>> {
        self.atoms.iter().map(|atom| &atom.position)
    }

    /// Same atoms, sized by `radii` instead.
    pub fn with_radii(&self, radii: Arc<RadiusTable>) -> Self {
        Self::new(self.atoms.clone(), radii)
    }

    /// Returns a new molecule with each atom moved by `f`, keeping labels and order.
    pub fn map_positions<F>(&self, f: F) -> Self
    where
        F: Fn(&Point3<f64>) -> Point3<f64>,
    {
        let atoms = self
            .atoms
            .iter()
            .map(|atom| atom.with_position(f(&atom.position)))
            .collect();
        Self::new(atoms, Arc::clone(&self.radii))
    }

    /// Concatenates `other` after `self`. The result uses `self`'s radius table.
    ///
    /// Used to assemble a molecule and its displaced copy into one structure for output.
    pub fn merged(&self, other: &Molecule) -> Self {
        let mut atoms = Vec::with_capacity(self.len() + other.len());
        atoms.extend_from_slice(&self.atoms);
        atoms.extend_from_slice(&other.atoms);
        Self::new(atoms, Arc::clone(&self.radii))
    }

    /// Geometric center of all atom positions, or `None` for an empty molecule.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum = self
            .atoms
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, atom| {
                acc + atom.position.coords
            });
        Some(Point3::from(sum / self.atoms.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Molecule {
        Molecule::from_records(
            [
                (0.0, 0.0, 0.0, "O"),
                (0.96, 0.0, 0.0, "H"),
                (-0.24, 0.93, 0.0, "H"),
            ],
            Arc::new(RadiusTable::default()),
        )
    }

    #[test]
    fn from_records_preserves_order_and_labels() {
        let mol = water();
        assert_eq!(mol.len(), 3);
        assert_eq!(mol.atom(0).unwrap().element, "O");
        assert_eq!(mol.atom(1).unwrap().position, Point3::new(0.96, 0.0, 0.0));
        assert_eq!(mol.atom(2).unwrap().element, "H");
        assert!(mol.atom(3).is_none());
    }

    #[test]
    fn radius_of_resolves_through_table_with_fallback() {
        let mol = Molecule::from_records(
            [(0.0, 0.0, 0.0, "C"), (1.0, 0.0, 0.0, "Zz")],
            Arc::new(RadiusTable::default()),
        );
        assert_eq!(mol.radius_of(0), Some(1.7));
        assert_eq!(mol.radius_of(1), Some(1.5));
        assert_eq!(mol.radius_of(2), None);
    }

    #[test]
    fn map_positions_returns_new_molecule_and_shares_radii() {
        let mol = water();
        let shifted = mol.map_positions(|p| p + nalgebra::Vector3::new(0.0, 0.0, 1.0));

        assert_eq!(shifted.atom(0).unwrap().position, Point3::new(0.0, 0.0, 1.0));
        assert_eq!(mol.atom(0).unwrap().position, Point3::origin());
        assert!(Arc::ptr_eq(mol.radii(), shifted.radii()));
    }

    #[test]
    fn with_radii_swaps_table_and_keeps_atoms() {
        let mol = water();
        let unit = Arc::new(RadiusTable::new(Default::default(), 1.0).unwrap());
        let resized = mol.with_radii(unit);

        assert_eq!(resized.atoms(), mol.atoms());
        assert_eq!(resized.radius_of(0), Some(1.0));
        assert_eq!(mol.radius_of(0), Some(1.52));
    }

    #[test]
    fn merged_appends_other_after_self() {
        let mol = water();
        let dimer = mol.merged(&mol);
        assert_eq!(dimer.len(), 6);
        assert_eq!(dimer.atom(3).unwrap(), mol.atom(0).unwrap());
        assert_eq!(dimer.atom(5).unwrap(), mol.atom(2).unwrap());
    }

    #[test]
    fn centroid_of_empty_molecule_is_none() {
        let mol = Molecule::new(Vec::new(), Arc::new(RadiusTable::default()));
        assert!(mol.centroid().is_none());
        assert!(mol.is_empty());
    }

    #[test]
    fn centroid_averages_positions() {
        let mol = Molecule::from_records(
            [(0.0, 0.0, 0.0, "C"), (2.0, 4.0, -2.0, "C")],
            Arc::new(RadiusTable::default()),
        );
        assert_eq!(mol.centroid(), Some(Point3::new(1.0, 2.0, -1.0)));
    }
}
