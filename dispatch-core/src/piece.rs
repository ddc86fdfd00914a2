//! Piece tokens and the tetromino catalogue used to generate them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a piece label.
///
/// Matches a 30-byte slot with room for a terminator.
pub const LABEL_WIDTH: usize = 29;

/// An opaque, bounded-length piece label.
///
/// The engine never looks inside a piece; it only moves them between
/// containers. Labels longer than [`LABEL_WIDTH`] characters are truncated.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Piece(String);

impl Piece {
    /// Create a piece, truncating the label to [`LABEL_WIDTH`] characters.
    pub fn new(label: impl Into<String>) -> Piece {
        let mut label = label.into();
        if let Some((cut, _)) = label.char_indices().nth(LABEL_WIDTH) {
            label.truncate(cut);
        }
        Piece(label)
    }

    /// The (possibly truncated) label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Piece {
    fn from(label: String) -> Self {
        Piece::new(label)
    }
}

impl From<&str> for Piece {
    fn from(label: &str) -> Self {
        Piece::new(label)
    }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self {
        piece.0
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Piece::new(kind.label())
    }
}

/// The seven tetromino kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalogue order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// One-letter label for this kind.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Convert from catalogue index (0-6).
    #[inline]
    pub fn from_index(idx: usize) -> Option<PieceKind> {
        Self::ALL.get(idx).copied()
    }
}
