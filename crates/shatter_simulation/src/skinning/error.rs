use thiserror::Error;

/// Load-time failure of a mesh's skin data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkinError {
    #[error("mesh '{mesh}' has no vertex positions")]
    MissingPositions { mesh: String },

    #[error("mesh '{mesh}': position buffer length {len} is not a multiple of 3")]
    MalformedPositions { mesh: String, len: usize },

    #[error("mesh '{mesh}' has no skeleton")]
    MissingSkeleton { mesh: String },

    #[error("mesh '{mesh}' has no {buffer} buffer")]
    MissingInfluences { mesh: String, buffer: &'static str },

    #[error("mesh '{mesh}': {buffer} buffer has {len} values, expected {expected}")]
    InfluenceLengthMismatch {
        mesh: String,
        buffer: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("mesh '{mesh}': vertex {vertex} references bone {bone}, skeleton has {bone_count}")]
    BoneOutOfRange {
        mesh: String,
        vertex: usize,
        bone: u32,
        bone_count: usize,
    },

    #[error("mesh '{mesh}': vertex {vertex} has invalid weight {weight}")]
    InvalidWeight { mesh: String, vertex: usize, weight: f32 },
}

impl SkinError {
    /// Positions unusable → mesh contributes no pieces at all.
    pub fn is_fatal_for_mesh(&self) -> bool {
        matches!(
            self,
            SkinError::MissingPositions { .. } | SkinError::MalformedPositions { .. }
        )
    }
}
