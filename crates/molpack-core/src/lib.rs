//! # MolPack Core Library
//!
//! Rigid-body packing primitives for small molecules: given a molecule and an axis,
//! find how far a copy must slide along that axis so the two no longer overlap.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Atom`, `Molecule`), the
//!   element radius table, geometry helpers, and SDF/XYZ file I/O.
//!
//! - **[`engine`]: The Logic Core.** Rotation and translation of whole molecules and
//!   the contact scan that reduces every atom pair to a single displacement.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into the
//!   complete rotate, scan and translate procedure used by the command-line tool.

pub mod core;
pub mod engine;
pub mod workflows;
