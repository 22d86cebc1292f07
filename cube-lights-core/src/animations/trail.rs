//! A self-avoiding random walk. The snakes are a trail of recent head positions.
use circular_buffer::CircularBuffer;
use heapless::Vec;
use rand::{Rng, RngCore};

use crate::cube::Cube;
use crate::errors::{CubeError, CubeResult};
use crate::logging::trace;
use crate::vector::Vector;

/// cell `n` of a serpentine walk across rows of `width`. neighboring cells are always adjacent
pub fn serpentine(n: usize, width: usize) -> (usize, usize) {
    let row = n / width;
    let col = match row % 2 {
        0 => n % width,
        _ => width - 1 - (n % width),
    };
    (col, row)
}

/// The most recent `N` positions, head first.
#[derive(Clone, Debug)]
pub struct Trail<const N: usize> {
    points: CircularBuffer<N, Vector>,
}

impl<const N: usize> Trail<N> {
    /// `points` must already be distinct and in the cube
    pub fn new(points: [Vector; N]) -> Self {
        const {
            assert!(N > 0, "a trail needs a head");
        }

        Self {
            points: CircularBuffer::from(points),
        }
    }

    pub fn head(&self) -> Vector {
        self.points[0]
    }

    pub fn contains(&self, v: &Vector) -> bool {
        self.points.iter().any(|p| p == v)
    }

    /// head first
    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.points.iter()
    }

    /// Every move from the head that stays in the cube and doesn't run into the trail.
    pub fn legal_moves<const X: usize, const Y: usize, const Z: usize, const D: usize>(
        &self,
        directions: &[Vector; D],
    ) -> Vec<Vector, D> {
        let head = self.head();

        let mut moves = Vec::new();

        for candidate in directions.iter().map(|d| head + *d) {
            if Cube::<X, Y, Z>::contains(candidate) && !self.contains(&candidate) {
                // at most one candidate per direction, so this can't overflow
                let _ = moves.push(candidate);
            }
        }

        moves
    }

    /// Step the head to a random legal neighbor and drop the tail. Each legal move is equally likely.
    pub fn advance<const X: usize, const Y: usize, const Z: usize, const D: usize, R: RngCore + ?Sized>(
        &mut self,
        directions: &[Vector; D],
        rng: &mut R,
    ) -> CubeResult<Vector> {
        let moves = self.legal_moves::<X, Y, Z, D>(directions);

        if moves.is_empty() {
            return Err(CubeError::SnakeTrapped(self.head()));
        }

        let next = moves[rng.random_range(0..moves.len())];

        trace!("snake head {} -> {} ({} options)", self.head(), next, moves.len());

        self.points.push_front(next);

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{Trail, serpentine};
    use crate::errors::CubeError;
    use crate::vector::Vector;
    use biski64::Biski64Rng;

    #[test]
    fn test_serpentine() {
        assert_eq!(serpentine(0, 3), (0, 0));
        assert_eq!(serpentine(2, 3), (2, 0));
        assert_eq!(serpentine(3, 3), (2, 1));
        assert_eq!(serpentine(5, 3), (0, 1));
        assert_eq!(serpentine(6, 3), (0, 2));

        // each step is a single move
        for n in 1..64 {
            let (ax, ay) = serpentine(n - 1, 8);
            let (bx, by) = serpentine(n, 8);
            assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1);
        }
    }

    #[test]
    fn test_legal_moves_avoid_walls_and_trail() {
        let trail = Trail::new([Vector::new(0, 0, 0), Vector::new(1, 0, 0), Vector::new(1, 1, 0)]);

        let moves = trail.legal_moves::<3, 3, 3, 6>(&Vector::DIRECTIONS);

        assert_eq!(moves.as_slice(), &[Vector::new(0, 1, 0), Vector::new(0, 0, 1)]);
    }

    #[test]
    fn test_advance_shifts() {
        let mut trail = Trail::new([Vector::new(0, 0, 0), Vector::new(1, 0, 0), Vector::new(2, 0, 0)]);

        let mut rng = Biski64Rng::from_seed_for_stream(7, 0, 2);

        let next = trail.advance::<3, 3, 3, 6, _>(&Vector::DIRECTIONS, &mut rng).unwrap();

        assert_eq!(trail.head(), next);
        assert!(next == Vector::new(0, 1, 0) || next == Vector::new(0, 0, 1));

        let points: std::vec::Vec<_> = trail.iter().copied().collect();
        assert_eq!(points, [next, Vector::new(0, 0, 0), Vector::new(1, 0, 0)]);
    }

    #[test]
    fn test_trapped() {
        // a 1x1x2 cube with a trail filling it has nowhere to go
        let mut trail = Trail::new([Vector::new(0, 0, 0), Vector::new(0, 0, 1)]);

        let mut rng = Biski64Rng::from_seed_for_stream(1, 0, 2);

        assert_eq!(
            trail.advance::<1, 1, 2, 6, _>(&Vector::DIRECTIONS, &mut rng),
            Err(CubeError::SnakeTrapped(Vector::ZERO))
        );
    }
}
