//! Vertex attribute codes used in VMD mesh-section records.
//!
//! The attribute enumeration is closed: every glTF attribute name a primitive
//! may carry either maps to one of these codes, is a skinning attribute
//! (skipped by the encoder), or is a conversion error. Code 255 terminates a
//! primitive's attribute-type list.

/// Reserved code that ends a primitive's attribute-type list.
pub const ATTRIBUTE_TERMINATOR_CODE: i32 = 255;

/// Trailing four flag/padding bytes of every attribute-type record,
/// always this exact pattern (signed bytes `{0, -1, -1, -1}`).
pub const ATTRIBUTE_FLAG_TAIL: [u8; 4] = [0x00, 0xFF, 0xFF, 0xFF];

/// Vertex attribute kinds the VMD mesh section can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttribute {
    Position,
    Normal,
    Color0,
    Color1,
    TexCoord0,
    TexCoord1,
    TexCoord2,
    TexCoord3,
    TexCoord4,
    TexCoord5,
    TexCoord6,
    TexCoord7,
}

impl VertexAttribute {
    /// Code written into the attribute-type record.
    pub fn code(self) -> i32 {
        match self {
            Self::Position => 9,
            Self::Normal => 10,
            Self::Color0 => 11,
            Self::Color1 => 12,
            Self::TexCoord0 => 13,
            Self::TexCoord1 => 14,
            Self::TexCoord2 => 15,
            Self::TexCoord3 => 16,
            Self::TexCoord4 => 17,
            Self::TexCoord5 => 18,
            Self::TexCoord6 => 19,
            Self::TexCoord7 => 20,
        }
    }

    /// Look up a glTF attribute semantic name. Returns `None` for names
    /// outside the enumeration (including skinning attributes).
    pub fn from_gltf_name(name: &str) -> Option<Self> {
        Some(match name {
            "POSITION" => Self::Position,
            "NORMAL" => Self::Normal,
            "COLOR_0" => Self::Color0,
            "COLOR_1" => Self::Color1,
            "TEXCOORD_0" => Self::TexCoord0,
            "TEXCOORD_1" => Self::TexCoord1,
            "TEXCOORD_2" => Self::TexCoord2,
            "TEXCOORD_3" => Self::TexCoord3,
            "TEXCOORD_4" => Self::TexCoord4,
            "TEXCOORD_5" => Self::TexCoord5,
            "TEXCOORD_6" => Self::TexCoord6,
            "TEXCOORD_7" => Self::TexCoord7,
            _ => return None,
        })
    }
}

/// Whether a glTF attribute name carries skinning data (`JOINTS_*` /
/// `WEIGHTS_*`). Skinning attributes are recognized but never encoded.
pub fn is_skinning_attribute(name: &str) -> bool {
    name.starts_with("JOINTS") || name.starts_with("WEIGHTS")
}
