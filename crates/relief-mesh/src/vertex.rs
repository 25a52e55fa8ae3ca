//! GPU vertex format shared by the grid and patch meshes.
//!
//! | Location | Offset | Components | Field    |
//! |----------|--------|------------|----------|
//! | 0        | 0      | 3 × f32    | position |
//! | 1        | 12     | 2 × f32    | uv       |

use std::mem;

/// One terrain vertex: world-space position and texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// `x` right, `y` up, `z` toward the viewer; the grid is centered on the origin.
    pub position: [f32; 3],
    /// Texture coordinates in `[0, 1]`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 20]);

impl TerrainVertex {
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

/// A float vertex attribute as a renderer binds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location.
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
    /// Byte offset inside [`TerrainVertex`].
    pub offset: u64,
}

impl VertexAttribute {
    pub const fn size(&self) -> u64 {
        self.components as u64 * mem::size_of::<f32>() as u64
    }
}

/// Attribute table for [`TerrainVertex`], stride `size_of::<TerrainVertex>()`.
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        location: 0,
        components: 3,
        offset: mem::offset_of!(TerrainVertex, position) as u64,
    },
    VertexAttribute {
        location: 1,
        components: 2,
        offset: mem::offset_of!(TerrainVertex, uv) as u64,
    },
];

const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[1].offset == 12);
const _: () = assert!(
    TERRAIN_VERTEX_ATTRIBUTES[1].offset + TERRAIN_VERTEX_ATTRIBUTES[1].size()
        == mem::size_of::<TerrainVertex>() as u64,
    "attributes must cover the whole vertex"
);
