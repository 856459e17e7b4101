//! Tests for shot resolution.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::ShatterConfig;
    use crate::pieces::{warning_gradient, PieceState, PieceStore, Rgb};
    use crate::shooting::{partition_neighbors, random_in_disc, PendingFire, ShotResolver};
    use crate::targeting::{BruteForceQuery, Neighbor, NeighborQuery};

    /// Pieces на оси X: 0, 1, 2, ... units от query point
    fn setup(count: usize) -> (PieceStore, PendingFire, ShatterConfig) {
        let config = ShatterConfig::default();
        let mut store = PieceStore::new(count, config.rest_ttl);
        for (i, piece) in store.iter_mut().enumerate() {
            piece.position = Vec3::new(i as f32, 0.0, 0.0);
            piece.orig_color = Rgb::gray(0.5);
        }

        let query_point = Vec3::ZERO;
        let snapshot = BruteForceQuery.query(store.as_slice(), query_point, config.shot_radius);
        (store, PendingFire { query_point, snapshot }, config)
    }

    #[test]
    fn test_partition_threshold() {
        let neighbors = vec![
            Neighbor { index: 0, distance: 6.3 },
            Neighbor { index: 1, distance: 6.4 },
            Neighbor { index: 2, distance: 7.9 },
        ];
        let (inner, outer) = partition_neighbors(&neighbors, 6.4);
        assert_eq!(inner.iter().map(|n| n.index).collect::<Vec<_>>(), vec![0]);
        assert_eq!(outer.iter().map(|n| n.index).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_hit_and_near_miss_split() {
        let (mut store, pending, config) = setup(12);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut resolver = ShotResolver::default();
        let pre_fire: Vec<Vec3> = store.iter().map(|p| p.position).collect();

        let origin = Vec3::new(0.0, 0.0, -100.0);
        let resolution = resolver.resolve(&mut store, &pending, origin, &config, &mut rng);

        // R = 8, inner < 6.4: pieces 0..=6 hit; 7 near miss; 8+ вне радиуса
        assert_eq!(resolution.hit_count, 7);
        assert_eq!(resolution.near_miss_count, 1);

        for (i, piece) in store.iter().enumerate() {
            let d = pre_fire[i].distance(pending.query_point);
            if piece.is_shot {
                assert!(d < config.inner_radius());
            } else if piece.orig_color != Rgb::gray(0.5) {
                assert!(d >= config.inner_radius() && d < config.shot_radius);
            }
        }

        let near_miss = store.get(7).map(|p| p.orig_color);
        let t: f32 = 7.0 / 8.0;
        assert_eq!(near_miss, Some(warning_gradient(t * t * t * t)));
        assert!(store.get(8).is_some_and(|p| p.orig_color == Rgb::gray(0.5)));
    }

    #[test]
    fn test_detached_piece_parameters() {
        let (mut store, pending, config) = setup(3);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut resolver = ShotResolver::default();

        let origin = Vec3::new(0.0, 0.0, -50.0);
        let resolution = resolver.resolve(&mut store, &pending, origin, &config, &mut rng);
        let shot = resolution.shot.expect("hit recorded");

        assert_eq!(shot.id, 1);
        assert_eq!(shot.hit_count, 3);
        assert_eq!(shot.origin, origin);
        assert_eq!(shot.target, pending.query_point);

        let base = (pending.query_point - origin).normalize();
        for (i, piece) in store.iter().enumerate() {
            assert_eq!(piece.state(), PieceState::Flying);
            assert_eq!(piece.start_position, Vec3::new(i as f32, 0.0, 0.0));
            assert_eq!(piece.rotation_direction, piece.direction);
            assert_eq!(piece.speed, 50.0 * config.speed_factor);
            assert_eq!(piece.ttl, config.flight_ttl);
            assert_eq!(piece.ticks, 0);

            let offset = piece.direction - base;
            assert!(Vec2::new(offset.x, offset.y).length() <= config.disc_radius + 1e-5);
            assert!(offset.z.abs() <= config.z_jitter + 1e-5);

            for angle in piece.start_rotation.to_array() {
                assert!((0.0..=std::f32::consts::PI).contains(&angle));
            }
            assert_eq!(piece.color.r, piece.color.b);
        }
    }

    #[test]
    fn test_miss_counts_attempt_without_shot() {
        let (mut store, _, config) = setup(12);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut resolver = ShotResolver::default();

        // Query point так, что все neighbors в outer кольце
        let query_point = Vec3::new(-7.0, 0.0, 0.0);
        let snapshot = BruteForceQuery.query(store.as_slice(), query_point, config.shot_radius);
        assert!(!snapshot.is_empty());
        let pending = PendingFire { query_point, snapshot };

        let resolution = resolver.resolve(&mut store, &pending, Vec3::ZERO, &config, &mut rng);

        assert_eq!(resolution.hit_count, 0);
        assert!(resolution.shot.is_none());
        assert_eq!(resolver.shot_attempts(), 1);
        assert_eq!(resolver.hits(), 0);
        assert_eq!(store.shot_count(), 0);
    }

    #[test]
    fn test_random_in_disc_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..1000 {
            assert!(random_in_disc(&mut rng, 2.0).length() <= 2.0 + 1e-5);
        }
    }
}
