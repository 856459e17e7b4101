//! Mesh loading: raw loader buffers → validated pieces source.

use bevy::prelude::*;

use crate::skinning::SkinError;

/// Influences per vertex.
pub const MAX_INFLUENCES: usize = 4;

/// Raw buffers handed over by the mesh/skeleton loader.
#[derive(Debug, Clone, Default)]
pub struct MeshSource {
    pub name: String,
    /// Bind-pose positions, stride 3
    pub positions: Option<Vec<f32>>,
    /// Bone indices, stride 4
    pub bone_indices: Option<Vec<u32>>,
    /// Bone weights, stride 4 (sum ≤ 1)
    pub bone_weights: Option<Vec<f32>>,
    /// Bones in the mesh's skeleton (`None` = mesh is not skinned)
    pub bone_count: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoneInfluence {
    pub bone: u32,
    pub weight: f32,
}

/// One skinned vertex that became a piece.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinnedVertex {
    pub bind_position: Vec3,
    pub influences: [BoneInfluence; MAX_INFLUENCES],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkinnedMesh {
    pub name: String,
    pub bone_count: usize,
    pub vertices: Vec<SkinnedVertex>,
}

/// A mesh after load-time validation.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedMesh {
    Skinned(SkinnedMesh),
    /// Skin data unusable: pieces stay at the bind pose
    Static { name: String, positions: Vec<Vec3> },
}

impl LoadedMesh {
    pub fn name(&self) -> &str {
        match self {
            LoadedMesh::Skinned(mesh) => &mesh.name,
            LoadedMesh::Static { name, .. } => name,
        }
    }

    pub fn piece_count(&self) -> usize {
        match self {
            LoadedMesh::Skinned(mesh) => mesh.vertices.len(),
            LoadedMesh::Static { positions, .. } => positions.len(),
        }
    }

    pub fn is_skinned(&self) -> bool {
        matches!(self, LoadedMesh::Skinned(_))
    }
}

fn bind_positions(source: &MeshSource) -> Result<Vec<Vec3>, SkinError> {
    let raw = source.positions.as_ref().ok_or_else(|| SkinError::MissingPositions {
        mesh: source.name.clone(),
    })?;

    if raw.len() % 3 != 0 {
        return Err(SkinError::MalformedPositions {
            mesh: source.name.clone(),
            len: raw.len(),
        });
    }

    Ok(raw.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2])).collect())
}

fn influence_buffer<'a, T>(
    mesh: &str,
    buffer: &'static str,
    data: Option<&'a Vec<T>>,
    vertex_count: usize,
) -> Result<&'a [T], SkinError> {
    let data = data.ok_or_else(|| SkinError::MissingInfluences {
        mesh: mesh.to_string(),
        buffer,
    })?;

    let expected = vertex_count * MAX_INFLUENCES;
    if data.len() < expected {
        return Err(SkinError::InfluenceLengthMismatch {
            mesh: mesh.to_string(),
            buffer,
            len: data.len(),
            expected,
        });
    }

    Ok(&data[..expected])
}

impl SkinnedMesh {
    /// Validate a source as a skinned mesh.
    ///
    /// Vertices whose four weights are all zero produce no piece.
    pub fn from_source(source: &MeshSource) -> Result<Self, SkinError> {
        let positions = bind_positions(source)?;
        let name = source.name.as_str();

        let bone_count = source.bone_count.ok_or_else(|| SkinError::MissingSkeleton {
            mesh: name.to_string(),
        })?;

        let indices = influence_buffer(name, "bone index", source.bone_indices.as_ref(), positions.len())?;
        let weights = influence_buffer(name, "bone weight", source.bone_weights.as_ref(), positions.len())?;

        let mut vertices = Vec::with_capacity(positions.len());

        for (vertex, bind_position) in positions.into_iter().enumerate() {
            let mut influences = [BoneInfluence::default(); MAX_INFLUENCES];
            let mut weighted = false;

            for slot in 0..MAX_INFLUENCES {
                let bone = indices[vertex * MAX_INFLUENCES + slot];
                let weight = weights[vertex * MAX_INFLUENCES + slot];

                if weight.is_nan() || weight < 0.0 {
                    return Err(SkinError::InvalidWeight {
                        mesh: name.to_string(),
                        vertex,
                        weight,
                    });
                }
                if weight > 0.0 && bone as usize >= bone_count {
                    return Err(SkinError::BoneOutOfRange {
                        mesh: name.to_string(),
                        vertex,
                        bone,
                        bone_count,
                    });
                }

                weighted |= weight > 0.0;
                influences[slot] = BoneInfluence { bone, weight };
            }

            if weighted {
                vertices.push(SkinnedVertex {
                    bind_position,
                    influences,
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            bone_count,
            vertices,
        })
    }
}

/// Loaded mesh + its position in the loader's source list.
///
/// Bone palettes per frame are indexed by `source_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct RigMesh {
    pub source_index: usize,
    pub mesh: LoadedMesh,
}

/// Character made of several meshes. Pieces are laid out mesh by mesh.
#[derive(Debug, Clone, Default)]
pub struct Rig {
    meshes: Vec<RigMesh>,
    /// Load failures, для диагностики хоста
    failures: Vec<SkinError>,
}

impl Rig {
    /// Load every source; failures are contained per mesh.
    pub fn load(sources: &[MeshSource]) -> Self {
        let mut rig = Rig::default();

        for (source_index, source) in sources.iter().enumerate() {
            let mesh = match SkinnedMesh::from_source(source) {
                Ok(mesh) => {
                    crate::logger::log(&format!(
                        "🦴 Mesh '{}': {} skinned pieces ({} bones)",
                        mesh.name,
                        mesh.vertices.len(),
                        mesh.bone_count
                    ));
                    LoadedMesh::Skinned(mesh)
                }
                Err(err) if err.is_fatal_for_mesh() => {
                    crate::logger::log_error(&format!("Mesh skipped: {}", err));
                    rig.failures.push(err);
                    continue;
                }
                Err(err) => {
                    crate::logger::log_warning(&format!(
                        "Skinning disabled, static fallback pose: {}",
                        err
                    ));
                    rig.failures.push(err);
                    // Positions уже прошли валидацию (иначе ошибка была бы fatal)
                    LoadedMesh::Static {
                        name: source.name.clone(),
                        positions: bind_positions(source).unwrap_or_default(),
                    }
                }
            };

            rig.meshes.push(RigMesh { source_index, mesh });
        }

        rig
    }

    pub fn meshes(&self) -> &[RigMesh] {
        &self.meshes
    }

    pub fn failures(&self) -> &[SkinError] {
        &self.failures
    }

    pub fn piece_count(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.piece_count()).sum()
    }
}
