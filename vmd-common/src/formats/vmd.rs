//! VMD container layout (.vmd)
//!
//! # Layout
//! ```text
//! 0x00: magic "VMD\0"
//! 0x04: version u32
//! 0x08: section count u32 (always 13)
//! 0x0C: total file size u32 (patched last)
//! 0x10: section table, 13 x { offset u32, size u32 }
//! 0x78: mesh section (variable, see vmd-export encoder)
//! var:  buffer section (concatenated raw buffer bytes)
//! ```
//!
//! All integers big-endian. Slot assignment within the section table is
//! fixed per format revision: slot 0 is the mesh section, slots 1..=4 are
//! reserved (always zero), and buffer `i` occupies slot `5 + i`, so at most
//! 8 buffers fit. Buffer slot addresses (`0x38 + 8*i`) must never be
//! recomputed from the section count; they are pinned by the tests below.

/// File magic, first 4 bytes of every VMD file.
pub const VMD_MAGIC: [u8; 4] = *b"VMD\0";

/// Format revision written at offset 4.
pub const VMD_VERSION: u32 = 1;

/// Number of section-table slots. Fixed per format revision, not derived
/// from content.
pub const SECTION_COUNT: u32 = 13;

/// Byte offset of the total-file-size field.
pub const TOTAL_SIZE_OFFSET: usize = 12;

/// Byte offset of the first section-table slot.
pub const SECTION_TABLE_OFFSET: usize = 16;

/// Table slot holding the mesh section's offset/size pair.
pub const MESH_SECTION_SLOT: usize = 0;

/// Table slot of buffer 0; buffer `i` lives at slot `BUFFER_SECTION_SLOT_BASE + i`.
pub const BUFFER_SECTION_SLOT_BASE: usize = 5;

/// Maximum number of buffer slots in the table.
pub const MAX_BUFFERS: usize = 8;

/// Output file extension.
pub const VMD_EXT: &str = "vmd";

/// Byte address of section-table slot `slot`.
pub const fn section_slot_offset(slot: usize) -> usize {
    SECTION_TABLE_OFFSET + slot * 8
}

/// Byte address of the table slot for buffer `index`.
pub const fn buffer_slot_offset(index: usize) -> usize {
    section_slot_offset(BUFFER_SECTION_SLOT_BASE + index)
}

/// One `{offset, size}` pair from the section table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionEntry {
    pub offset: u32,
    pub size: u32,
}

impl SectionEntry {
    pub fn is_empty(&self) -> bool {
        self.offset == 0 && self.size == 0
    }
}

/// Parsed VMD header (120 bytes on disk).
#[derive(Debug, Clone, Copy)]
pub struct VmdHeader {
    pub version: u32,
    pub total_size: u32,
    pub sections: [SectionEntry; SECTION_COUNT as usize],
}

impl VmdHeader {
    pub const SIZE: usize = SECTION_TABLE_OFFSET + 8 * SECTION_COUNT as usize;

    /// Header skeleton as written before any section exists: magic, version
    /// and section count filled in, total size and every table slot zero.
    pub fn skeleton() -> Self {
        Self {
            version: VMD_VERSION,
            total_size: 0,
            sections: [SectionEntry::default(); SECTION_COUNT as usize],
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&VMD_MAGIC);
        bytes[4..8].copy_from_slice(&self.version.to_be_bytes());
        bytes[8..12].copy_from_slice(&SECTION_COUNT.to_be_bytes());
        bytes[12..16].copy_from_slice(&self.total_size.to_be_bytes());
        for (slot, entry) in self.sections.iter().enumerate() {
            let at = section_slot_offset(slot);
            bytes[at..at + 4].copy_from_slice(&entry.offset.to_be_bytes());
            bytes[at + 4..at + 8].copy_from_slice(&entry.size.to_be_bytes());
        }
        bytes
    }

    /// Read header from bytes. Returns `None` if the slice is too short,
    /// the magic does not match, or the section count differs from this
    /// format revision.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        if bytes[0..4] != VMD_MAGIC {
            return None;
        }
        let read_u32 =
            |at: usize| u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        if read_u32(8) != SECTION_COUNT {
            return None;
        }
        let mut sections = [SectionEntry::default(); SECTION_COUNT as usize];
        for (slot, entry) in sections.iter_mut().enumerate() {
            let at = section_slot_offset(slot);
            entry.offset = read_u32(at);
            entry.size = read_u32(at + 4);
        }
        Some(Self {
            version: read_u32(4),
            total_size: read_u32(12),
            sections,
        })
    }

    /// Mesh section table entry (slot 0).
    pub fn mesh_section(&self) -> SectionEntry {
        self.sections[MESH_SECTION_SLOT]
    }

    /// Table entry for buffer `index`, or `None` past the 8-slot limit.
    pub fn buffer_section(&self, index: usize) -> Option<SectionEntry> {
        if index >= MAX_BUFFERS {
            return None;
        }
        Some(self.sections[BUFFER_SECTION_SLOT_BASE + index])
    }
}
