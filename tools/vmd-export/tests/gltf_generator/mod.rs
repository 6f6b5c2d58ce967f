//! Programmatic glTF scene generation for integration tests.
//!
//! Writes `.gltf` JSON plus the external `.bin` buffer files it references
//! into a test directory, so tests exercise the same file-based path the
//! CLI uses.

use serde_json::json;
use std::path::{Path, PathBuf};

/// Deterministic buffer contents so tests can compare byte-for-byte.
pub fn buffer_bytes(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// One buffer (`data.bin`, 1024 bytes), one mesh, one primitive with
/// POSITION (FLOAT, count 100) and UNSIGNED_SHORT indices (count 300).
pub fn write_single_primitive_scene(dir: &Path) -> PathBuf {
    std::fs::write(dir.join("data.bin"), buffer_bytes(1024, 1)).unwrap();

    let root = json!({
        "asset": {"version": "2.0"},
        "buffers": [{"uri": "data.bin", "byteLength": 1024}],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0},
            {"buffer": 0, "byteOffset": 800}
        ],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 100},
            {"bufferView": 1, "componentType": 5123, "count": 300}
        ],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "indices": 1}]}]
    });

    write_gltf(dir, "model.gltf", &root)
}

/// Three buffers of different sizes, one primitive spanning them.
pub fn write_multi_buffer_scene(dir: &Path) -> PathBuf {
    std::fs::write(dir.join("a.bin"), buffer_bytes(512, 2)).unwrap();
    std::fs::write(dir.join("b.bin"), buffer_bytes(64, 3)).unwrap();
    std::fs::write(dir.join("c.bin"), buffer_bytes(2048, 4)).unwrap();

    let root = json!({
        "asset": {"version": "2.0"},
        "buffers": [
            {"uri": "a.bin", "byteLength": 512},
            {"uri": "b.bin", "byteLength": 64},
            {"uri": "c.bin", "byteLength": 2048}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0},
            {"buffer": 1, "byteOffset": 0},
            {"buffer": 2, "byteOffset": 128}
        ],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 40},
            {"bufferView": 2, "componentType": 5126, "count": 40},
            {"bufferView": 1, "componentType": 5123, "count": 30}
        ],
        "meshes": [{"primitives": [{
            "attributes": {"POSITION": 0, "TEXCOORD_0": 1},
            "indices": 2
        }]}]
    });

    write_gltf(dir, "multi.gltf", &root)
}

/// Primitive carrying skinning attributes alongside the geometry ones.
pub fn write_skinned_scene(dir: &Path) -> PathBuf {
    std::fs::write(dir.join("skinned.bin"), buffer_bytes(256, 5)).unwrap();

    let root = json!({
        "asset": {"version": "2.0"},
        "buffers": [{"uri": "skinned.bin", "byteLength": 256}],
        "bufferViews": [{"buffer": 0, "byteOffset": 0}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 16},
            {"bufferView": 0, "componentType": 5123, "count": 24}
        ],
        "meshes": [{"primitives": [{
            "attributes": {
                "POSITION": 0,
                "JOINTS_0": 0,
                "NORMAL": 0,
                "WEIGHTS_0": 0
            },
            "indices": 1
        }]}]
    });

    write_gltf(dir, "skinned.gltf", &root)
}

/// References a buffer file that does not exist on disk.
pub fn write_broken_scene(dir: &Path) -> PathBuf {
    let root = json!({
        "asset": {"version": "2.0"},
        "buffers": [{"uri": "missing.bin", "byteLength": 128}],
        "bufferViews": [{"buffer": 0, "byteOffset": 0}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 4},
            {"bufferView": 0, "componentType": 5123, "count": 6}
        ],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "indices": 1}]}]
    });

    write_gltf(dir, "broken.gltf", &root)
}

/// Valid JSON, zero meshes.
pub fn write_empty_scene(dir: &Path) -> PathBuf {
    let root = json!({"asset": {"version": "2.0"}, "meshes": []});
    write_gltf(dir, "empty.gltf", &root)
}

fn write_gltf(dir: &Path, name: &str, root: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(root).unwrap()).unwrap();
    path
}
