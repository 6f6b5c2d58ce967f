//! Serde model of the glTF 2.0 subset the encoder consumes.
//!
//! Only the fields the VMD encoder reads are modeled: buffers, buffer views,
//! accessors, and mesh primitives. Everything else in the document (nodes,
//! materials, animations, extensions) is ignored by serde. Cross-references
//! are plain indices; resolution and range checking happen in the encoder.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::EncodeError;

/// glTF `componentType` for 32-bit floats.
pub const COMPONENT_FLOAT: u32 = 5126;

/// glTF `componentType` for unsigned 16-bit integers.
pub const COMPONENT_UNSIGNED_SHORT: u32 = 5123;

/// Byte width of a supported accessor component type.
pub fn component_byte_width(component_type: u32) -> Result<i32, EncodeError> {
    match component_type {
        COMPONENT_FLOAT => Ok(4),
        COMPONENT_UNSIGNED_SHORT => Ok(2),
        other => Err(EncodeError::UnsupportedComponentType(other)),
    }
}

/// Parsed glTF document (the subset relevant to VMD conversion).
#[derive(Debug, Deserialize)]
pub struct GltfDocument {
    #[serde(default)]
    pub buffers: Vec<Buffer>,
    #[serde(default, rename = "bufferViews")]
    pub buffer_views: Vec<BufferView>,
    #[serde(default)]
    pub accessors: Vec<Accessor>,
    #[serde(default)]
    pub meshes: Vec<Mesh>,
}

impl GltfDocument {
    /// Load and parse a `.gltf` file.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let text = fs::read_to_string(path).map_err(|source| EncodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// External binary buffer reference.
#[derive(Debug, Deserialize)]
pub struct Buffer {
    /// Path relative to the directory containing the `.gltf` file.
    /// Data-URIs are not supported.
    pub uri: String,
    #[serde(rename = "byteLength")]
    pub byte_length: u32,
}

/// Byte range into a buffer.
#[derive(Debug, Deserialize)]
pub struct BufferView {
    pub buffer: u32,
    #[serde(default, rename = "byteOffset")]
    pub byte_offset: u32,
}

/// Typed view over a buffer view's bytes.
#[derive(Debug, Deserialize)]
pub struct Accessor {
    #[serde(rename = "bufferView")]
    pub buffer_view: u32,
    #[serde(rename = "componentType")]
    pub component_type: u32,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct Mesh {
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Deserialize)]
pub struct Primitive {
    /// Attribute semantic name -> accessor index, in document order.
    #[serde(default, deserialize_with = "attribute_entries")]
    pub attributes: Vec<(String, u32)>,
    /// Accessor index of the primitive's index buffer.
    pub indices: u32,
}

/// Deserialize a JSON object into `(name, accessor index)` pairs without
/// losing the document's key order. Both mesh-section record groups iterate
/// the same list, so whatever order lands here is the order on disk.
fn attribute_entries<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
        type Value = Vec<(String, u32)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of attribute names to accessor indices")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntryVisitor)
}
