//! Error taxonomy shared by the containers, the history and the engine.

use serde::Serialize;
use thiserror::Error;

/// Every failure the core can report.
///
/// All variants are recoverable: the operation that produced one leaves the
/// live containers either untouched or explicitly compensated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Error {
    /// Container at capacity on insert.
    #[error("container is full")]
    Full,
    /// Container has no element to remove or peek.
    #[error("container is empty")]
    Empty,
    /// Checkpoint skipped because the history is at capacity.
    #[error("undo history is full, state was not saved")]
    HistoryFull,
    /// Undo attempted with nothing to restore.
    #[error("undo history is empty, nothing to undo")]
    HistoryEmpty,
    /// Swap attempted while the queue or the stack is empty.
    #[error("swap needs a piece in both the queue and the stack")]
    OperandsUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
