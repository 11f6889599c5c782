use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::molecule::Molecule;
use crate::core::radii::table::RadiusTable;
use crate::core::utils::geometry;
use nalgebra::{Unit, Vector3};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The displacement one atom pair demands on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairConstraint {
    pub i: usize,
    pub j: usize,
    pub displacement: f64,
}

impl PairConstraint {
    /// Larger displacement wins; ties go to the lexicographically smaller pair so the
    /// choice does not depend on iteration order.
    fn dominates(&self, other: &PairConstraint) -> bool {
        match self.displacement.total_cmp(&other.displacement) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => (self.i, self.j) < (other.i, other.j),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactResult {
    /// Distance a copy must travel along `direction` to clear every constraining pair.
    pub displacement: f64,
    /// The pair `(i, j)`, `i < j`, that sets `displacement`.
    pub binding_pair: Option<(usize, usize)>,
    /// Number of pairs whose perpendicular offset is within their contact distance.
    pub constraining_pairs: usize,
    pub direction: Unit<Vector3<f64>>,
}

impl ContactResult {
    fn clear(direction: Unit<Vector3<f64>>) -> Self {
        Self {
            displacement: 0.0,
            binding_pair: None,
            constraining_pairs: 0,
            direction,
        }
    }
}

/// Minimum push along `axis` for two spheres whose centers differ by `separation`
/// and whose radii sum to `contact_distance`.
///
/// Returns `None` when the perpendicular offset exceeds the contact distance, in which
/// case the spheres never meet no matter how far one slides. Exact tangency
/// (`normal == contact_distance`) still constrains.
#[inline]
pub fn pair_displacement(
    separation: &Vector3<f64>,
    contact_distance: f64,
    axis: &Unit<Vector3<f64>>,
) -> Option<f64> {
    let (along, normal) = geometry::decompose_along(separation, axis);
    if normal <= contact_distance {
        let reach = (contact_distance * contact_distance - normal * normal)
            .max(0.0)
            .sqrt();
        Some(along.abs() + reach)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ScanSummary {
    best: Option<PairConstraint>,
    constraining: usize,
}

impl ScanSummary {
    fn offer(&mut self, candidate: PairConstraint) {
        self.constraining += 1;
        match &self.best {
            Some(best) if !candidate.dominates(best) => {}
            _ => self.best = Some(candidate),
        }
    }

    fn merge(self, other: ScanSummary) -> ScanSummary {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(if b.dominates(&a) { b } else { a }),
            (a, b) => a.or(b),
        };
        ScanSummary {
            best,
            constraining: self.constraining + other.constraining,
        }
    }
}

/// Computes how far a rigid molecule must be translated along an axis so that the
/// translated copy no longer overlaps the original.
///
/// The engine owns the radius table it sizes atoms with. Use [`ContactEngine::for_molecule`]
/// to reuse the table a molecule was loaded with, or [`ContactEngine::new`] to score
/// the same coordinates against a different table.
#[derive(Debug, Clone)]
pub struct ContactEngine {
    radii: Arc<RadiusTable>,
}

impl ContactEngine {
    pub fn new(radii: Arc<RadiusTable>) -> Self {
        Self { radii }
    }

    pub fn for_molecule(molecule: &Molecule) -> Self {
        Self::new(Arc::clone(molecule.radii()))
    }

    pub fn radii(&self) -> &RadiusTable {
        &self.radii
    }

    pub fn max_displacement(
        &self,
        molecule: &Molecule,
        direction: &Vector3<f64>,
    ) -> Result<ContactResult, EngineError> {
        self.scan(molecule, direction, &ProgressReporter::new())
    }

    /// Evaluates every unordered atom pair `i < j` and reduces to the largest
    /// per-pair displacement.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateInput`] if `direction` has zero length.
    #[instrument(skip_all, name = "contact_scan", fields(atoms = molecule.len()))]
    pub fn scan(
        &self,
        molecule: &Molecule,
        direction: &Vector3<f64>,
        reporter: &ProgressReporter,
    ) -> Result<ContactResult, EngineError> {
        let axis =
            geometry::normalize_direction(direction).ok_or_else(EngineError::zero_direction)?;

        let n = molecule.len();
        if n < 2 {
            return Ok(ContactResult::clear(axis));
        }

        let positions: Vec<Vector3<f64>> = molecule.positions().map(|p| p.coords).collect();
        let radii: Vec<f64> = molecule
            .atoms()
            .iter()
            .map(|atom| self.radii.lookup(&atom.element))
            .collect();

        reporter.report(Progress::TaskStart {
            total_steps: (n * (n - 1) / 2) as u64,
        });

        let scan_row = |i: usize| {
            let mut row = ScanSummary::default();
            for j in (i + 1)..n {
                let separation = positions[i] - positions[j];
                if let Some(displacement) =
                    pair_displacement(&separation, radii[i] + radii[j], &axis)
                {
                    row.offer(PairConstraint { i, j, displacement });
                }
            }
            reporter.report(Progress::TaskAdvance {
                steps: (n - 1 - i) as u64,
            });
            row
        };

        #[cfg(not(feature = "parallel"))]
        let summary = (0..n - 1)
            .map(scan_row)
            .fold(ScanSummary::default(), ScanSummary::merge);

        #[cfg(feature = "parallel")]
        let summary = (0..n - 1)
            .into_par_iter()
            .map(scan_row)
            .reduce(ScanSummary::default, ScanSummary::merge);

        reporter.report(Progress::TaskFinish);

        let result = match summary.best {
            Some(best) => {
                debug!(
                    i = best.i,
                    j = best.j,
                    displacement = best.displacement,
                    constraining = summary.constraining,
                    "Binding pair found."
                );
                ContactResult {
                    displacement: best.displacement,
                    binding_pair: Some((best.i, best.j)),
                    constraining_pairs: summary.constraining,
                    direction: axis,
                }
            }
            None => {
                debug!("No pair constrains the displacement along this axis.");
                ContactResult::clear(axis)
            }
        };
        Ok(result)
    }
}

/// Displacement along `direction` using the molecule's own radius table.
pub fn max_displacement(molecule: &Molecule, direction: &Vector3<f64>) -> Result<f64, EngineError> {
    ContactEngine::for_molecule(molecule)
        .max_displacement(molecule, direction)
        .map(|result| result.displacement)
}
