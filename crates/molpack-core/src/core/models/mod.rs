//! Molecular data models.
//!
//! A [`molecule::Molecule`] is an ordered sequence of [`atom::Atom`]s plus a shared
//! radius table. There are no bonds, residues, or charges: every consumer sees a plain
//! point cloud where each point has an element label and a contact radius.

pub mod atom;
pub mod molecule;
