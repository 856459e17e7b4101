//! Radius query over piece positions.

use bevy::prelude::*;

use crate::pieces::Piece;

/// A piece within the targeting radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// Result of one query. Not persisted beyond the next query.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSnapshot {
    pub query_point: Vec3,
    pub radius: f32,
    /// Pieces with `distance < radius`, in store order
    pub neighbors: Vec<Neighbor>,
    /// Minimum distance over *all* pieces (`INFINITY` for an empty store)
    pub min_distance: f32,
}

impl NeighborSnapshot {
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }
}

/// Spatial query contract. A grid or k-d tree can replace the brute-force scan.
pub trait NeighborQuery: Send + Sync {
    fn query(&self, pieces: &[Piece], point: Vec3, radius: f32) -> NeighborSnapshot;
}

/// Linear scan, enough for low-thousands piece counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceQuery;

impl NeighborQuery for BruteForceQuery {
    fn query(&self, pieces: &[Piece], point: Vec3, radius: f32) -> NeighborSnapshot {
        let mut neighbors = Vec::new();
        let mut min_distance = f32::INFINITY;

        for (index, piece) in pieces.iter().enumerate() {
            let distance = piece.position.distance(point);

            if distance < min_distance {
                min_distance = distance;
            }
            if distance < radius {
                neighbors.push(Neighbor { index, distance });
            }
        }

        NeighborSnapshot {
            query_point: point,
            radius,
            neighbors,
            min_distance,
        }
    }
}
