//! CPU-side mesh buffers ready for GPU upload.

use crate::TerrainVertex;

/// Corners per tessellation patch.
pub const VERTICES_PER_PATCH: usize = 4;

/// Triangle mesh with a `u32` index buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMeshData {
    pub vertices: Vec<TerrainVertex>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl IndexedMeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex data as a byte slice (zero-copy).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as a byte slice (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Unindexed quad patches for a tessellation pipeline. Every consecutive run
/// of `vertices_per_patch` vertices is one patch.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchMeshData {
    pub vertices: Vec<TerrainVertex>,
    pub vertices_per_patch: usize,
}

impl Default for PatchMeshData {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            vertices_per_patch: VERTICES_PER_PATCH,
        }
    }
}

impl PatchMeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn patch_count(&self) -> usize {
        self.vertices.len() / self.vertices_per_patch
    }

    /// Iterate over the corners of each patch.
    pub fn patches(&self) -> std::slice::ChunksExact<'_, TerrainVertex> {
        self.vertices.chunks_exact(self.vertices_per_patch)
    }

    /// Returns the vertex data as a byte slice (zero-copy).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_views_match_lengths() {
        let mesh = IndexedMeshData {
            vertices: vec![TerrainVertex::default(); 3],
            indices: vec![0, 1, 2],
        };
        assert_eq!(mesh.as_bytes().len(), 3 * 20);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_empty_patch_mesh() {
        let patches = PatchMeshData::default();
        assert!(patches.is_empty());
        assert_eq!(patches.patch_count(), 0);
        assert_eq!(patches.vertices_per_patch, 4);
        assert_eq!(patches.patches().count(), 0);
    }
}
