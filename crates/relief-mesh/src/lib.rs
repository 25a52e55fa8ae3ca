//! Terrain mesh geometry: a height-displaced indexed grid and a flat grid of
//! tessellation patches, both in a 20-byte position + uv vertex format.

mod error;
mod grid;
mod mesh_data;
mod patch;
mod vertex;

pub use error::MeshError;
pub use grid::{GRID_VERTICAL_SCALE, grid_mesh, grid_mesh_with_scale};
pub use mesh_data::{IndexedMeshData, PatchMeshData, VERTICES_PER_PATCH};
pub use patch::create_grid_patch;
pub use vertex::{TERRAIN_VERTEX_ATTRIBUTES, TerrainVertex, VertexAttribute};
