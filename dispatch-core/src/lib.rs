//! Piece dispatch engine.
//!
//! An upcoming-pieces queue and an in-play reserve stack, moved between by
//! five transformations, with snapshot-based undo.
//!
//! ```text
//!             play                     use_reserved
//!   queue ─────────────────> stack ─────────────────> (discarded)
//!     │   <───── swap ─────>   │
//!     │   <──── invert ────>   │
//!     │ reserve
//!     v
//!  (discarded)
//! ```
//!
//! # Capacities
//!
//! ```text
//! queue:    CAPACITY pieces (circular buffer)
//! stack:    CAPACITY pieces
//! history:  HISTORY_CAPACITY snapshots of (queue, stack)
//! label:    LABEL_WIDTH characters per piece
//! ```
//!
//! Every transformation checkpoints the pair before acting, successful or
//! not; `undo` pops one checkpoint.

pub mod action;
pub mod engine;
pub mod error;
pub mod history;
pub mod piece;
pub mod queue;
pub mod stack;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use action::Action;
pub use engine::{Checkpoint, Dispatcher, Outcome, Report, StateView};
pub use error::{Error, Result};
pub use history::{Snapshot, SnapshotHistory};
pub use piece::{Piece, PieceKind, LABEL_WIDTH};
pub use queue::BoundedQueue;
pub use stack::BoundedStack;

/// Slots in the live queue and the live stack.
pub const CAPACITY: usize = 10;

/// Snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 10;

/// The live upcoming-pieces queue.
pub type PieceQueue = BoundedQueue<Piece, CAPACITY>;

/// The live reserve stack.
pub type PieceStack = BoundedStack<Piece, CAPACITY>;
