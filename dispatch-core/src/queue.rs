//! Fixed-capacity circular FIFO.
//!
//! # Index layout
//!
//! ```text
//! empty:     front = None, back = None
//! non-empty: front = oldest slot, back = newest slot (both occupied)
//! full:      (front == 0 && back == N-1) || front == back + 1
//! ```
//!
//! Removing the last element resets both indices to `None` instead of just
//! advancing `front`, so the full test above stays valid after wraparound.

use crate::error::{Error, Result};

/// Circular queue holding at most `N` elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: Option<usize>,
    back: Option<usize>,
}

impl<T, const N: usize> BoundedQueue<T, N> {
    /// Create an empty queue.
    pub fn new() -> Self {
        BoundedQueue {
            slots: std::array::from_fn(|_| None),
            front: None,
            back: None,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        if N == 0 {
            return true;
        }
        match (self.front, self.back) {
            (Some(front), Some(back)) => (front == 0 && back == N - 1) || front == back + 1,
            _ => false,
        }
    }

    /// Number of stored elements, derived from the indices.
    pub fn len(&self) -> usize {
        match (self.front, self.back) {
            (Some(front), Some(back)) if back >= front => back - front + 1,
            (Some(front), Some(back)) => N - front + back + 1,
            _ => 0,
        }
    }

    /// Slot index of the oldest element, `None` when empty.
    #[inline]
    pub fn front_index(&self) -> Option<usize> {
        self.front
    }

    /// Slot index of the newest element, `None` when empty.
    #[inline]
    pub fn back_index(&self) -> Option<usize> {
        self.back
    }

    /// Append at the back. Fails with [`Error::Full`] and leaves the queue
    /// untouched when at capacity.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full);
        }

        let back = match self.back {
            Some(back) => (back + 1) % N,
            None => {
                self.front = Some(0);
                0
            }
        };
        self.slots[back] = Some(item);
        self.back = Some(back);
        Ok(())
    }

    /// Remove from the front.
    pub fn dequeue(&mut self) -> Result<T> {
        let (front, back) = match (self.front, self.back) {
            (Some(front), Some(back)) => (front, back),
            _ => return Err(Error::Empty),
        };

        let item = self.slots[front].take().ok_or(Error::Empty)?;
        if front == back {
            // Last element: back to the sentinel state.
            self.front = None;
            self.back = None;
        } else {
            self.front = Some((front + 1) % N);
        }
        Ok(item)
    }

    /// Read the front element without removing it.
    pub fn peek_front(&self) -> Result<&T> {
        self.front
            .and_then(|front| self.slots[front].as_ref())
            .ok_or(Error::Empty)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_slots().map(|(_, item)| item)
    }

    /// Iterate front to back, paired with the slot each element occupies.
    pub fn iter_slots(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let start = self.front.unwrap_or(0);
        (0..self.len()).filter_map(move |i| {
            let slot = (start + i) % N;
            self.slots[slot].as_ref().map(|item| (slot, item))
        })
    }
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
