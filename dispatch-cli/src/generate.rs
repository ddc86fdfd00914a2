//! Random initial population of the queue.

use dispatch_core::{Piece, PieceKind};
use rand::Rng;

/// Draw `count` pieces uniformly from the seven tetromino kinds.
pub fn random_pieces<R: Rng>(rng: &mut R, count: usize) -> Vec<Piece> {
    (0..count)
        .filter_map(|_| PieceKind::from_index(rng.random_range(0..PieceKind::ALL.len())))
        .map(Piece::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_and_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = random_pieces(&mut rng, 25);
        assert_eq!(pieces.len(), 25);
        for piece in &pieces {
            assert!(PieceKind::ALL.iter().any(|k| k.label() == piece.label()));
        }
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = random_pieces(&mut StdRng::seed_from_u64(42), 5);
        let b = random_pieces(&mut StdRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }
}
