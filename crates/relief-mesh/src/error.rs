/// Errors returned by the mesh builders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Grid meshes need at least one vertex per axis.
    #[error("cannot build a {width}x{height} grid mesh")]
    EmptyGrid { width: usize, height: usize },

    /// The grid samples one height per vertex, so it cannot exceed the map.
    #[error("{width}x{height} grid exceeds the {map_width}x{map_height} height map")]
    HeightMapTooSmall {
        width: usize,
        height: usize,
        map_width: usize,
        map_height: usize,
    },

    /// Indices are `u32`.
    #[error("grid mesh needs {0} vertices, more than a u32 index can address")]
    TooManyVertices(usize),

    /// A patch grid needs at least one patch per side.
    #[error("patch count must be at least 1")]
    ZeroPatches,

    /// Every normalized height must be a valid curve parameter.
    #[error("height curve domain [{0}, {1}] does not cover [0, 1]")]
    CurveDomain(f32, f32),
}
