//! Tests for render buffer layout.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::pieces::{Piece, Rgb};
    use crate::simulation::{piece_transform, RenderFrame};

    #[test]
    fn test_renderer_buffer_layout() {
        let mut piece = Piece::new(100);
        piece.position = Vec3::new(1.0, 2.0, 3.0);
        piece.color = Rgb::new(0.1, 0.2, 0.3);

        let mut frame = RenderFrame::with_capacity(2);
        frame.write_piece(1, &piece);

        // Translation в элементах 12 / 13 / 14 блока, как у thin-instance буфера
        assert_eq!(&frame.transforms[16..20], &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(frame.transforms[16 + 3], 0.0);
        assert_eq!(frame.transforms[16 + 7], 0.0);
        assert_eq!(frame.transforms[16 + 11], 0.0);
        assert_eq!(&frame.transforms[16 + 12..32], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(frame.position(1), Some(Vec3::new(1.0, 2.0, 3.0)));

        assert_eq!(frame.color(1), Some([0.1, 0.2, 0.3, 1.0]));
        assert_eq!(frame.color(0), Some([0.0; 4]));
        assert_eq!(frame.color(2), None);
    }

    #[test]
    fn test_rotation_readback() {
        let mut piece = Piece::new(100);
        piece.rotation = Vec3::new(0.3, 1.1, -0.4);
        piece.position = Vec3::new(-5.0, 0.5, 9.0);

        let mut frame = RenderFrame::with_capacity(1);
        frame.write_piece(0, &piece);

        let expected = piece_transform(&piece);
        let read = frame.transform(0).expect("block 0");
        assert!(read.abs_diff_eq(expected, 1e-6));

        // Scale остаётся 1
        let (scale, _, translation) = read.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::ONE, 1e-5));
        assert!(translation.abs_diff_eq(piece.position, 1e-6));
    }
}
