//! # Engine Module
//!
//! The computational layer of MolPack: rigid transforms of a molecule and the
//! directional contact scan that decides how far a copy must travel to clear it.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Displacement axis, rotation angles and the radius table
//! - **Contact Scan** ([`contact`]) - Pairwise sphere-sweep reduction to the maximum displacement
//! - **Transforms** ([`transform`]) - Rotation about the origin and translation along an axis
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! The contact scan evaluates atom rows in parallel when the `parallel` feature is
//! enabled. The reduction is order independent, so both paths produce identical results.

pub mod config;
pub mod contact;
pub mod error;
pub mod progress;
pub mod transform;
