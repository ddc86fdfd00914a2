//! Snapshot history backing undo.
//!
//! Every transformation checkpoints the live queue and stack *before* it
//! touches them, whether or not it later succeeds. Undo pops the newest
//! snapshot and overwrites both live containers with it.

use tracing::{debug, warn};

use crate::action::Action;
use crate::error::{Error, Result};
use crate::stack::BoundedStack;
use crate::{PieceQueue, PieceStack, HISTORY_CAPACITY};

/// Deep copy of both containers taken just before a transformation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub queue: PieceQueue,
    pub stack: PieceStack,
    /// Transformation that triggered the checkpoint.
    pub action: Action,
}

/// Bounded stack of snapshots.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SnapshotHistory {
    snapshots: BoundedStack<Snapshot, HISTORY_CAPACITY>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.snapshots.is_full()
    }

    /// Action tag of the snapshot the next undo would restore.
    pub fn last_action(&self) -> Option<Action> {
        self.snapshots.peek_top().ok().map(|s| s.action)
    }

    /// Save copies of `queue` and `stack`.
    ///
    /// When the history is full nothing is copied and [`Error::HistoryFull`]
    /// is returned; callers treat this as a warning and carry on.
    pub fn checkpoint(
        &mut self,
        queue: &PieceQueue,
        stack: &PieceStack,
        action: Action,
    ) -> Result<()> {
        if self.snapshots.is_full() {
            warn!(%action, capacity = HISTORY_CAPACITY, "history full, checkpoint skipped");
            return Err(Error::HistoryFull);
        }

        self.snapshots
            .push(Snapshot {
                queue: queue.clone(),
                stack: stack.clone(),
                action,
            })
            .map_err(|_| Error::HistoryFull)?;

        debug!(
            %action,
            queue_len = queue.len(),
            stack_len = stack.len(),
            history_len = self.len(),
            "checkpoint saved"
        );
        Ok(())
    }

    /// Restore the newest snapshot into `queue` and `stack`, replacing their
    /// whole contents. Returns the action the snapshot was taken for.
    pub fn undo(&mut self, queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<Action> {
        let snapshot = self.snapshots.pop().map_err(|_| Error::HistoryEmpty)?;

        *queue = snapshot.queue;
        *stack = snapshot.stack;

        debug!(
            action = %snapshot.action,
            queue_len = queue.len(),
            stack_len = stack.len(),
            history_len = self.len(),
            "snapshot restored"
        );
        Ok(snapshot.action)
    }
}
