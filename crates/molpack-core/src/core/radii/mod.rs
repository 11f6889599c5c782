//! Per-element contact radii.
//!
//! The [`table::RadiusTable`] is injected wherever radii are needed; there is no
//! process-wide mutable table. Its `Default` implementation carries the conventional
//! van der Waals radii for C, H, O, N and S with a 1.5 Å fallback.

pub mod table;
