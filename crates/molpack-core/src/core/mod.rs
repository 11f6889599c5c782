//! # Core Module
//!
//! Stateless building blocks shared by the engine and workflows.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms and molecules as ordered point clouds
//! - **Contact Radii** ([`radii`]) - Element label to van der Waals radius lookup with fallback
//! - **File I/O** ([`io`]) - Tolerant SDF loading and XYZ serialization
//! - **Geometry** ([`utils`]) - Rotation matrices, direction normalization, axis decomposition
//!
//! Nothing in this module mutates a molecule after construction; every transform
//! returns a fresh value.

pub mod io;
pub mod models;
pub mod radii;
pub mod utils;
