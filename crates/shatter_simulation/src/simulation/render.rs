//! Render-ready flat buffers.

use bevy::prelude::*;

use crate::pieces::Piece;
use crate::simulation::ShotResolved;
use crate::targeting::TargetingState;

pub const TRANSFORM_STRIDE: usize = 16;
pub const COLOR_STRIDE: usize = 4;

/// World transform of a piece: scale 1, Euler rotation (YXZ), position.
pub fn piece_transform(piece: &Piece) -> Mat4 {
    let r = piece.rotation;
    let rotation = Quat::from_euler(EulerRot::YXZ, r.y, r.x, r.z);
    Mat4::from_scale_rotation_translation(Vec3::ONE, rotation, piece.position)
}

/// One frame for the external renderer.
///
/// piece i → `transforms[16i..16i+16]` (row-vector layout, translation in 12/13/14)
/// and `colors[4i..4i+4]` (RGBA, alpha 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub frame: u64,
    pub transforms: Vec<f32>,
    pub colors: Vec<f32>,
    pub targeting: TargetingState,
    /// Resolutions applied during this tick
    pub resolved: Vec<ShotResolved>,
}

impl RenderFrame {
    pub fn with_capacity(piece_count: usize) -> Self {
        Self {
            transforms: vec![0.0; piece_count * TRANSFORM_STRIDE],
            colors: vec![0.0; piece_count * COLOR_STRIDE],
            ..Default::default()
        }
    }

    pub fn piece_count(&self) -> usize {
        self.colors.len() / COLOR_STRIDE
    }

    pub(crate) fn resize(&mut self, piece_count: usize) {
        self.transforms.resize(piece_count * TRANSFORM_STRIDE, 0.0);
        self.colors.resize(piece_count * COLOR_STRIDE, 0.0);
    }

    pub(crate) fn write_piece(&mut self, index: usize, piece: &Piece) {
        let matrix = piece_transform(piece).to_cols_array();
        let t = index * TRANSFORM_STRIDE;
        self.transforms[t..t + TRANSFORM_STRIDE].copy_from_slice(&matrix);

        let c = index * COLOR_STRIDE;
        self.colors[c..c + COLOR_STRIDE].copy_from_slice(&piece.color.to_rgba());
    }

    /// Read back piece i's transform.
    pub fn transform(&self, index: usize) -> Option<Mat4> {
        let block = self
            .transforms
            .get(index * TRANSFORM_STRIDE..(index + 1) * TRANSFORM_STRIDE)?;
        let mut matrix = [0.0; TRANSFORM_STRIDE];
        matrix.copy_from_slice(block);
        Some(Mat4::from_cols_array(&matrix))
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        let t = index * TRANSFORM_STRIDE;
        let block = self.transforms.get(t..t + TRANSFORM_STRIDE)?;
        Some(Vec3::new(block[12], block[13], block[14]))
    }

    pub fn color(&self, index: usize) -> Option<[f32; 4]> {
        let block = self.colors.get(index * COLOR_STRIDE..(index + 1) * COLOR_STRIDE)?;
        Some([block[0], block[1], block[2], block[3]])
    }
}
