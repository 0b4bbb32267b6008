use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::piece::{Piece, Shape, ALL_SHAPES};

/// Upcoming pieces: `preview_len` visible slots plus one trailing slot that
/// is left empty after each dequeue and refilled on the next one.
pub struct PieceQueue {
    slots: Vec<Option<Shape>>,
    rng: StdRng,
}

impl PieceQueue {
    pub fn new(preview_len: usize, rng: StdRng) -> Self {
        PieceQueue {
            slots: vec![None; preview_len + 1],
            rng,
        }
    }

    pub fn seeded(preview_len: usize, seed: u64) -> Self {
        PieceQueue::new(preview_len, StdRng::seed_from_u64(seed))
    }

    /// Fixed slot count, regardless of how many are filled right now.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn random_shape(&mut self) -> Shape {
        ALL_SHAPES[self.rng.random_range(0..ALL_SHAPES.len())]
    }

    /// Fills empty trailing slots from the back, then takes the front.
    pub fn dequeue(&mut self) -> Piece {
        for i in (1..self.slots.len()).rev() {
            if self.slots[i].is_some() {
                break;
            }
            self.slots[i] = Some(self.random_shape());
        }
        let front = match self.slots[0].take() {
            Some(shape) => shape,
            None => self.random_shape(),
        };
        self.slots.rotate_left(1);
        front.template()
    }

    /// The visible upcoming shapes, next first.
    pub fn preview(&self) -> impl Iterator<Item = Shape> + '_ {
        self.slots[..self.slots.len() - 1].iter().flatten().copied()
    }

    /// Empties every slot; the next dequeue draws a fresh sequence.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_keeps_fixed_length_and_full_preview() {
        let mut queue = PieceQueue::seeded(5, 7);
        for _ in 0..100 {
            let piece = queue.dequeue();
            assert_eq!(piece.cells.len(), 4);
            assert_eq!(queue.capacity(), 6);
            assert_eq!(queue.preview().count(), 5);
        }
    }

    #[test]
    fn preview_front_is_next_dequeued() {
        let mut queue = PieceQueue::seeded(5, 99);
        queue.dequeue();
        for _ in 0..50 {
            let upcoming: Vec<Shape> = queue.preview().collect();
            let next = queue.dequeue();
            assert_eq!(next.shape, upcoming[0]);
            let after: Vec<Shape> = queue.preview().collect();
            assert_eq!(&after[..4], &upcoming[1..]);
        }
    }

    #[test]
    fn cleared_queue_refills_every_slot() {
        let mut queue = PieceQueue::seeded(3, 5);
        queue.dequeue();
        queue.clear();
        assert_eq!(queue.preview().count(), 0);
        queue.dequeue();
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.preview().count(), 3);
        assert!(queue.slots[3].is_none());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PieceQueue::seeded(5, 1234);
        let mut b = PieceQueue::seeded(5, 1234);
        for _ in 0..30 {
            assert_eq!(a.dequeue().shape, b.dequeue().shape);
        }
    }

    #[test]
    fn every_shape_eventually_appears() {
        let mut queue = PieceQueue::seeded(5, 3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(queue.dequeue().shape);
        }
        assert_eq!(seen.len(), ALL_SHAPES.len());
    }
}
