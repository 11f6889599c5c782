//! Provides input/output functionality for molecular file formats.
//!
//! Structures come in through the tolerant [`sdf::SdfFile`] loader and go out through
//! the [`xyz::XyzFile`] point-cloud format consumed by external viewers. Both implement
//! the [`traits::MolecularFile`] interface.

pub mod sdf;
pub mod traits;
pub mod xyz;
