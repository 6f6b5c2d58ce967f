//! Shared definitions for the VMD asset container.
//!
//! Format headers and constants live in [`formats`]; the conversion tool
//! (`vmd-export`) and any future reader both depend on this crate so the
//! byte layout is defined in exactly one place.

pub mod formats;

pub use formats::*;
