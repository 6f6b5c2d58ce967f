//! glTF -> VMD encoder.
//!
//! The whole output image is buffered in memory: the header skeleton is
//! written first, sections are appended sequentially, and fields whose value
//! is only known later (section table entries, total file size) are patched
//! at their fixed byte addresses before the image is handed out. A failed
//! conversion therefore never leaves a partial file on disk.

use anyhow::Context;
use std::fs;
use std::path::Path;

use vmd_common::{
    is_skinning_attribute, section_slot_offset, VertexAttribute, VmdHeader, ATTRIBUTE_FLAG_TAIL,
    ATTRIBUTE_TERMINATOR_CODE, BUFFER_SECTION_SLOT_BASE, MAX_BUFFERS, MESH_SECTION_SLOT,
    TOTAL_SIZE_OFFSET,
};

use crate::document::{component_byte_width, GltfDocument, Primitive};
use crate::error::EncodeError;

/// Convert a `.gltf` file to a VMD file next to it or at `output`.
pub fn convert_gltf(input: &Path, output: &Path) -> anyhow::Result<()> {
    let image = convert_gltf_to_memory(input)
        .with_context(|| format!("Failed to convert {:?}", input))?;
    fs::write(output, &image).with_context(|| format!("Failed to write output: {:?}", output))?;
    tracing::info!("Converted {:?} -> {:?} ({} bytes)", input, output, image.len());
    Ok(())
}

/// Convert a `.gltf` file to an in-memory VMD image (for direct packing).
///
/// Buffer `uri`s resolve relative to the file's parent directory.
pub fn convert_gltf_to_memory(input: &Path) -> Result<Vec<u8>, EncodeError> {
    let document = GltfDocument::from_path(input)?;
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    encode_document(&document, dir)
}

/// Encode a parsed document. `dir` is the directory its buffer `uri`s are
/// relative to.
///
/// A document with zero meshes yields just the header skeleton with the
/// total-size field patched; no mesh or buffer section is emitted.
pub fn encode_document(document: &GltfDocument, dir: &Path) -> Result<Vec<u8>, EncodeError> {
    let mut writer = VmdWriter::new();
    if document.meshes.is_empty() {
        return Ok(writer.finish());
    }
    writer.write_mesh_section(document)?;
    writer.append_buffers(document, dir)?;
    Ok(writer.finish())
}

/// In-progress VMD image.
///
/// Owns the output buffer and the current write position (the buffer's end);
/// back-patching is a plain slice write at a fixed address instead of the
/// seek/tell round-trips a file handle would need.
pub struct VmdWriter {
    buf: Vec<u8>,
}

/// Fully resolved per-attribute data, gathered before any bytes are written
/// so a resolution failure aborts the primitive cleanly. Both record groups
/// (type list, then data locations) iterate this same list.
struct AttributeRecord {
    code: i32,
    byte_width: i32,
    buffer: u32,
    byte_offset: u32,
    count: u32,
}

impl VmdWriter {
    /// Start a new image containing only the header skeleton: magic,
    /// version, section count, then a zero total-size field and a zero
    /// section table. See `vmd_common::formats::vmd` for the layout.
    pub fn new() -> Self {
        Self {
            buf: VmdHeader::skeleton().to_bytes().to_vec(),
        }
    }

    fn position(&self) -> usize {
        self.buf.len()
    }

    fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn patch_u32(&mut self, at: usize, value: u32) {
        self.buf[at..at + 4].copy_from_slice(&value.to_be_bytes());
    }

    fn patch_section(&mut self, slot: usize, offset: u32, size: u32) {
        let at = section_slot_offset(slot);
        self.patch_u32(at, offset);
        self.patch_u32(at + 4, size);
    }

    /// Serialize mesh topology for every mesh in the document, then patch
    /// the mesh section's table entry. Within the section everything is
    /// written sequentially; only the table entry needs back-patching.
    pub fn write_mesh_section(&mut self, document: &GltfDocument) -> Result<(), EncodeError> {
        let start = self.position();

        for mesh in &document.meshes {
            self.put_i32(mesh.primitives.len() as i32);
            for primitive in &mesh.primitives {
                self.write_primitive(document, primitive)?;
            }
        }

        let size = self.position() - start;
        self.patch_section(MESH_SECTION_SLOT, start as u32, size as u32);
        Ok(())
    }

    fn write_primitive(
        &mut self,
        document: &GltfDocument,
        primitive: &Primitive,
    ) -> Result<(), EncodeError> {
        let records = resolve_attributes(document, primitive)?;
        let indices = lookup(&document.accessors, primitive.indices, "accessor")?;
        let indices_view = lookup(&document.buffer_views, indices.buffer_view, "bufferView")?;

        // +1 for the terminator record that ends the type list.
        self.put_i32(records.len() as i32 + 1);

        for record in &records {
            self.put_i32(record.code);
            self.put_i32(1); // component count
            self.put_i32(record.byte_width);
            self.buf.extend_from_slice(&ATTRIBUTE_FLAG_TAIL);
        }
        self.put_i32(ATTRIBUTE_TERMINATOR_CODE);
        self.put_i32(1);
        self.put_i32(0);
        self.buf.extend_from_slice(&ATTRIBUTE_FLAG_TAIL);

        // Data locations, same attribute order as the type list, kept as a
        // separate group so a reader can skip past the type list directly.
        for record in &records {
            self.put_i32(record.buffer as i32);
            self.put_i32(record.byte_offset as i32);
            self.put_i32(record.count as i32);
        }

        self.put_i32(indices_view.byte_offset as i32);
        self.put_i32(indices.count as i32);
        Ok(())
    }

    /// Append every referenced buffer file's bytes, in `buffers` order, and
    /// patch the corresponding fixed table slots in the header.
    pub fn append_buffers(&mut self, document: &GltfDocument, dir: &Path) -> Result<(), EncodeError> {
        if document.buffers.len() > MAX_BUFFERS {
            return Err(EncodeError::TooManyBuffers(document.buffers.len()));
        }

        for (index, buffer) in document.buffers.iter().enumerate() {
            let path = dir.join(&buffer.uri);
            if !path.exists() {
                return Err(EncodeError::MissingBuffer(path));
            }
            let data = fs::read(&path).map_err(|source| EncodeError::Io {
                path: path.clone(),
                source,
            })?;

            let declared = buffer.byte_length as usize;
            if data.len() < declared {
                return Err(EncodeError::TruncatedSource {
                    path,
                    declared: buffer.byte_length,
                    actual: data.len() as u64,
                });
            }

            self.patch_section(
                BUFFER_SECTION_SLOT_BASE + index,
                self.position() as u32,
                buffer.byte_length,
            );
            // Exactly byteLength bytes; longer sources are truncated to the
            // declared length.
            self.buf.extend_from_slice(&data[..declared]);
        }
        Ok(())
    }

    /// Patch the total-file-size field and yield the finished image. This is
    /// always the last write.
    pub fn finish(mut self) -> Vec<u8> {
        let total = self.position() as u32;
        self.patch_u32(TOTAL_SIZE_OFFSET, total);
        self.buf
    }
}

impl Default for VmdWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a primitive's attributes to fully-checked records. Skinning
/// attributes are skipped; anything else outside the attribute enumeration
/// is an error, as is any accessor/bufferView/buffer index that does not
/// resolve.
fn resolve_attributes(
    document: &GltfDocument,
    primitive: &Primitive,
) -> Result<Vec<AttributeRecord>, EncodeError> {
    let mut records = Vec::with_capacity(primitive.attributes.len());
    for (name, accessor_index) in &primitive.attributes {
        if is_skinning_attribute(name) {
            continue;
        }
        let attribute = VertexAttribute::from_gltf_name(name)
            .ok_or_else(|| EncodeError::UnknownAttribute(name.clone()))?;
        let accessor = lookup(&document.accessors, *accessor_index, "accessor")?;
        let view = lookup(&document.buffer_views, accessor.buffer_view, "bufferView")?;
        lookup(&document.buffers, view.buffer, "buffer")?;

        records.push(AttributeRecord {
            code: attribute.code(),
            byte_width: component_byte_width(accessor.component_type)?,
            buffer: view.buffer,
            byte_offset: view.byte_offset,
            count: accessor.count,
        });
    }
    Ok(records)
}

fn lookup<'a, T>(items: &'a [T], index: u32, kind: &'static str) -> Result<&'a T, EncodeError> {
    items.get(index as usize).ok_or(EncodeError::IndexOutOfRange {
        kind,
        index: index as usize,
        len: items.len(),
    })
}
