//! Per-frame skeletal sampler (linear blend skinning).

use bevy::prelude::*;

use crate::skinning::{BoneInfluence, LoadedMesh, Rig, MAX_INFLUENCES};

/// Current bone transforms of one mesh's skeleton (column-major, glam convention).
pub type BonePalette = Vec<Mat4>;

/// Build a palette from the loader's flat buffer (16 floats per bone).
///
/// A trailing partial block is ignored.
pub fn palette_from_floats(raw: &[f32]) -> BonePalette {
    raw.chunks_exact(16)
        .map(|block| {
            let mut cols = [0.0; 16];
            cols.copy_from_slice(block);
            Mat4::from_cols_array(&cols)
        })
        .collect()
}

/// Weighted sum of the referenced bone matrices; zero-weight influences are skipped.
pub fn blend_skin_matrix(influences: &[BoneInfluence; MAX_INFLUENCES], palette: &[Mat4]) -> Mat4 {
    let mut blended = Mat4::ZERO;

    for influence in influences.iter().filter(|i| i.weight > 0.0) {
        if let Some(bone) = palette.get(influence.bone as usize) {
            blended += *bone * influence.weight;
        }
    }

    blended
}

/// Bind-pose position → current world position.
///
/// Homogeneous transform (divide by w), so weights summing below 1 are
/// renormalised. `None` when no influence resolved (w == 0).
pub fn skin_position(
    bind_position: Vec3,
    influences: &[BoneInfluence; MAX_INFLUENCES],
    palette: &[Mat4],
) -> Option<Vec3> {
    let blended = blend_skin_matrix(influences, palette);
    let h = blended * bind_position.extend(1.0);

    if h.w.abs() <= f32::EPSILON {
        return None;
    }

    Some(h.truncate() / h.w)
}

/// Computes the rest pose of every piece once per frame.
///
/// Output is indexed like the PieceStore. `None` = no sample this frame
/// (skeleton palette missing for the mesh) → piece keeps its last pose.
#[derive(Debug, Clone, Default)]
pub struct SkeletalSampler {
    rest: Vec<Option<Vec3>>,
}

impl SkeletalSampler {
    /// `palettes[i]` belongs to the mesh loaded from source `i`.
    pub fn sample(&mut self, rig: &Rig, palettes: &[BonePalette]) -> &[Option<Vec3>] {
        self.rest.clear();
        self.rest.reserve(rig.piece_count());

        for rig_mesh in rig.meshes() {
            match &rig_mesh.mesh {
                LoadedMesh::Skinned(mesh) => match palettes.get(rig_mesh.source_index) {
                    Some(palette) => self.rest.extend(
                        mesh.vertices
                            .iter()
                            .map(|v| skin_position(v.bind_position, &v.influences, palette)),
                    ),
                    None => self.rest.extend(std::iter::repeat(None).take(mesh.vertices.len())),
                },
                // Sampler выключен для этого mesh: fixed fallback pose
                LoadedMesh::Static { positions, .. } => {
                    self.rest.extend(positions.iter().copied().map(Some))
                }
            }
        }

        &self.rest
    }

    pub fn rest_positions(&self) -> &[Option<Vec3>] {
        &self.rest
    }
}
