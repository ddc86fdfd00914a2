//! Fixed-capacity LIFO.

use crate::error::{Error, Result};

/// Array-backed stack holding at most `N` elements.
///
/// `top` is `None` when empty (the -1 sentinel), otherwise the index of the
/// most recently pushed slot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoundedStack<T, const N: usize> {
    slots: [Option<T>; N],
    top: Option<usize>,
}

impl<T, const N: usize> BoundedStack<T, N> {
    /// Create an empty stack.
    pub fn new() -> Self {
        BoundedStack {
            slots: std::array::from_fn(|_| None),
            top: None,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        match self.top {
            Some(top) => top + 1 == N,
            None => N == 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.top.map_or(0, |top| top + 1)
    }

    /// Push onto the top. Fails with [`Error::Full`] at capacity.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full);
        }
        let top = self.top.map_or(0, |top| top + 1);
        self.slots[top] = Some(item);
        self.top = Some(top);
        Ok(())
    }

    /// Pop the top element.
    pub fn pop(&mut self) -> Result<T> {
        let top = self.top.ok_or(Error::Empty)?;
        let item = self.slots[top].take().ok_or(Error::Empty)?;
        self.top = top.checked_sub(1);
        Ok(item)
    }

    /// Read the top element without removing it.
    pub fn peek_top(&self) -> Result<&T> {
        self.top
            .and_then(|top| self.slots[top].as_ref())
            .ok_or(Error::Empty)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len()].iter().filter_map(Option::as_ref)
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
