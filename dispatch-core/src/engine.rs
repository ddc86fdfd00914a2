//! The dispatcher: five transformations plus undo over one live queue and
//! one live stack.
//!
//! Each transformation checkpoints first and only then acts. The checkpoint
//! is kept even when the transformation fails, so an undo right after a
//! failed action restores an identical state and consumes that entry.

use serde::Serialize;
use tracing::{debug, warn};

use crate::action::Action;
use crate::error::{Error, Result};
use crate::history::SnapshotHistory;
use crate::piece::Piece;
use crate::{PieceQueue, PieceStack};

/// What a successful action did.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Piece moved from the queue front onto the stack.
    Played { piece: Piece },
    /// Piece removed from the queue front and discarded.
    Reserved { piece: Piece },
    /// Piece removed from the stack top and discarded.
    Used { piece: Piece },
    /// `from_queue` now sits on the stack, `from_stack` at the queue back.
    Swapped { from_queue: Piece, from_stack: Piece },
    /// Contents exchanged; lengths are after the exchange.
    Inverted { queue_len: usize, stack_len: usize },
    /// The checkpoint taken before `action` was restored.
    Undone { action: Action },
}

/// Whether the pre-action checkpoint made it into the history.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkpoint {
    Saved,
    /// History was full; the action still ran.
    Skipped,
}

/// Result of one transformation attempt.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Report {
    pub action: Action,
    pub checkpoint: Checkpoint,
    pub outcome: Result<Outcome>,
}

impl Report {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Read-only copy of the live containers for display.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct StateView {
    /// Front to back.
    pub queue: Vec<Piece>,
    /// Bottom to top.
    pub stack: Vec<Piece>,
    pub history_len: usize,
}

/// Owns the live queue, the live stack and their undo history.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    queue: PieceQueue,
    stack: PieceStack,
    history: SnapshotHistory,
}

impl Dispatcher {
    /// Empty queue, empty stack, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing containers with an empty history.
    pub fn from_parts(queue: PieceQueue, stack: PieceStack) -> Self {
        Dispatcher {
            queue,
            stack,
            history: SnapshotHistory::new(),
        }
    }

    #[inline]
    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    #[inline]
    pub fn stack(&self) -> &PieceStack {
        &self.stack
    }

    #[inline]
    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Enqueue initial pieces. Stops at the first refusal; pieces past that
    /// point are dropped. Returns how many were enqueued.
    pub fn seed<I>(&mut self, pieces: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Piece>,
    {
        let mut seeded = 0;
        for piece in pieces {
            if self.queue.enqueue(piece.into()).is_err() {
                debug!(seeded, "queue full, remaining seed pieces dropped");
                break;
            }
            seeded += 1;
        }
        seeded
    }

    /// Copy out the current contents.
    pub fn snapshot_view(&self) -> StateView {
        StateView {
            queue: self.queue.iter().cloned().collect(),
            stack: self.stack.iter().cloned().collect(),
            history_len: self.history.len(),
        }
    }

    /// Queue front onto the stack.
    ///
    /// If the stack is full the piece goes back to the *back* of the queue,
    /// so the piece count is preserved but the queue order changes.
    pub fn play(&mut self) -> Report {
        self.transform(Action::Play, play)
    }

    /// Queue front discarded.
    pub fn reserve(&mut self) -> Report {
        self.transform(Action::Reserve, |queue, _| {
            let piece = queue.dequeue()?;
            Ok(Outcome::Reserved { piece })
        })
    }

    /// Stack top discarded.
    pub fn use_reserved(&mut self) -> Report {
        self.transform(Action::UseReserved, |_, stack| {
            let piece = stack.pop()?;
            Ok(Outcome::Used { piece })
        })
    }

    /// Exchange the queue front with the stack top.
    pub fn swap(&mut self) -> Report {
        self.transform(Action::Swap, swap)
    }

    /// Exchange the full contents of the queue and the stack.
    pub fn invert(&mut self) -> Report {
        self.transform(Action::Invert, invert)
    }

    /// Restore the state saved before the most recent transformation.
    pub fn undo(&mut self) -> Result<Outcome> {
        let action = self.history.undo(&mut self.queue, &mut self.stack)?;
        Ok(Outcome::Undone { action })
    }

    fn transform<F>(&mut self, action: Action, op: F) -> Report
    where
        F: FnOnce(&mut PieceQueue, &mut PieceStack) -> Result<Outcome>,
    {
        debug_assert!(action.is_transformation());
        let checkpoint = match self.history.checkpoint(&self.queue, &self.stack, action) {
            Ok(()) => Checkpoint::Saved,
            Err(_) => Checkpoint::Skipped,
        };

        let outcome = op(&mut self.queue, &mut self.stack);
        match &outcome {
            Ok(_) => debug!(%action, "action applied"),
            Err(err) => debug!(%action, %err, "action refused"),
        }

        Report {
            action,
            checkpoint,
            outcome,
        }
    }
}

fn play(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<Outcome> {
    let piece = queue.dequeue()?;
    if let Err(err) = stack.push(piece.clone()) {
        warn!(%piece, "stack full, piece returned to the back of the queue");
        queue.enqueue(piece)?;
        return Err(err);
    }
    Ok(Outcome::Played { piece })
}

fn swap(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<Outcome> {
    if queue.is_empty() || stack.is_empty() {
        return Err(Error::OperandsUnavailable);
    }

    // Each side has just freed the slot the other side's piece goes into,
    // so re-insertion cannot be refused.
    let from_queue = queue.dequeue()?;
    let from_stack = stack.pop()?;
    queue.enqueue(from_stack.clone())?;
    stack.push(from_queue.clone())?;

    Ok(Outcome::Swapped {
        from_queue,
        from_stack,
    })
}

/// Afterwards the queue reads front-to-back as the old stack read
/// top-to-bottom, and the stack reads top-to-bottom as the old queue read
/// front-to-back. Applying it twice is the identity.
fn invert(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<Outcome> {
    // Old queue, back on top.
    let mut from_queue = PieceStack::new();
    while let Ok(piece) = queue.dequeue() {
        from_queue.push(piece)?;
    }

    // Old stack, old top at the front.
    let mut from_stack = PieceQueue::new();
    while let Ok(piece) = stack.pop() {
        from_stack.enqueue(piece)?;
    }

    // Popping yields the old back first, leaving the old front on top.
    while let Ok(piece) = from_queue.pop() {
        stack.push(piece)?;
    }

    while let Ok(piece) = from_stack.dequeue() {
        queue.enqueue(piece)?;
    }

    Ok(Outcome::Inverted {
        queue_len: queue.len(),
        stack_len: stack.len(),
    })
}
