//! Conversion failure kinds.
//!
//! Every variant aborts the conversion of a single `.gltf` file; batch
//! traversal reports the failure and moves on to the next file. None of
//! these are transient, so there are no retries.

use std::path::PathBuf;
use vmd_common::MAX_BUFFERS;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Referenced buffer file does not exist: {0}")]
    MissingBuffer(PathBuf),

    #[error("Buffer file {path} is {actual} bytes, but byteLength declares {declared}")]
    TruncatedSource {
        path: PathBuf,
        declared: u32,
        actual: u64,
    },

    #[error("Unsupported accessor componentType {0} (expected 5126 FLOAT or 5123 UNSIGNED_SHORT)")]
    UnsupportedComponentType(u32),

    #[error("Unknown vertex attribute {0:?}")]
    UnknownAttribute(String),

    #[error("{kind} index {index} out of range ({len} entries)")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Document references {0} buffers, format supports at most {MAX_BUFFERS}")]
    TooManyBuffers(usize),

    #[error("Failed to parse glTF JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
