//! VMD binary container format
//!
//! Big-endian, fixed header with a section-offset/size table that is
//! back-patched after each section's contents are written. All layout
//! constants here are format-revision constants pinned by conformance tests,
//! not derived at runtime.

pub mod attribute;
pub mod vmd;

pub use attribute::*;
pub use vmd::*;
