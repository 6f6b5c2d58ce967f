//! vmd-export library
//!
//! Converts glTF scene descriptions (JSON plus external `.bin` buffers) to
//! the VMD binary container. The binary is a thin CLI over this crate; other
//! tools can call the conversion functions directly.

pub mod batch;
pub mod document;
pub mod encoder;
pub mod error;

pub use batch::{process_dir, BatchOptions, BatchSummary};
pub use document::GltfDocument;
pub use encoder::{convert_gltf, convert_gltf_to_memory, encode_document, VmdWriter};
pub use error::EncodeError;
