//! # Workflows Module
//!
//! High-level entry points that run a complete packing procedure.
//!
//! - **Packing Workflow** ([`pack`]) - Rotates a molecule, scans for the contact
//!   displacement along an axis and builds the translated copy.

pub mod pack;
