//! Tests for PieceStore.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::pieces::{PieceState, PieceStore};

    #[test]
    fn test_reset_rearms_every_piece() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = PieceStore::new(32, 100_000);

        for (i, piece) in store.iter_mut().enumerate() {
            piece.is_shot = i % 2 == 0;
            piece.disabled = i % 3 == 0;
            piece.ticks = i as i32;
            piece.position = Vec3::splat(i as f32);
        }

        store.reset(&mut rng, 100_000);

        for piece in store.iter() {
            assert_eq!(piece.state(), PieceState::AtRest);
            assert_eq!(piece.ticks, 0);
            assert_eq!(piece.ttl, 100_000);
            assert_eq!(piece.position, Vec3::ZERO);
            // Grayscale: один random на все каналы
            assert_eq!(piece.color.r, piece.color.g);
            assert_eq!(piece.color.g, piece.color.b);
            assert!((0.0..1.0).contains(&piece.color.r));
        }
        assert_eq!(store.shot_count(), 0);
    }

    #[test]
    fn test_reset_twice_same_state_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut store = PieceStore::new(8, 500);

        store.reset(&mut rng, 500);
        let first: Vec<_> = store.iter().map(|p| (p.is_shot, p.ticks, p.ttl)).collect();
        store.reset(&mut rng, 500);
        let second: Vec<_> = store.iter().map(|p| (p.is_shot, p.ticks, p.ttl)).collect();

        assert_eq!(first, second);
        assert_eq!(store.len(), 8);
    }
}
