//! PieceStore — fixed-size ordered collection of pieces for a round.

use rand::Rng;

use crate::pieces::Piece;

/// Owns every Piece of the round. Pieces are never removed, only reset.
#[derive(Debug, Clone, Default)]
pub struct PieceStore {
    pieces: Vec<Piece>,
}

impl PieceStore {
    pub fn new(count: usize, rest_ttl: i32) -> Self {
        Self {
            pieces: (0..count).map(|_| Piece::new(rest_ttl)).collect(),
        }
    }

    /// Re-arm the population: random grayscale tint, rest state, zeroed motion.
    ///
    /// Idempotent up to the drawn colors (one RNG draw per piece).
    pub fn reset(&mut self, rng: &mut impl Rng, rest_ttl: i32) {
        for piece in &mut self.pieces {
            let gray: f32 = rng.gen();
            piece.reset(gray, rest_ttl);
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn shot_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_shot).count()
    }
}
