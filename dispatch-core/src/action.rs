//! User-facing actions and their menu numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action the dispatcher can perform.
///
/// The discriminant is the number shown in the interactive menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Action {
    /// Queue front -> stack top.
    Play = 1,
    /// Queue front -> discarded.
    Reserve = 2,
    /// Stack top -> discarded.
    UseReserved = 3,
    /// Queue front <-> stack top.
    Swap = 4,
    /// Restore the most recent checkpoint.
    Undo = 5,
    /// Exchange the whole queue and stack contents.
    Invert = 6,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Play,
        Action::Reserve,
        Action::UseReserved,
        Action::Swap,
        Action::Undo,
        Action::Invert,
    ];

    /// Menu number (1-6).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Convert from a menu number (1-6).
    pub fn from_number(n: u8) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.number() == n)
    }

    /// Whether this action mutates the containers and therefore checkpoints.
    #[inline]
    pub fn is_transformation(self) -> bool {
        !matches!(self, Action::Undo)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Play => "play",
            Action::Reserve => "reserve",
            Action::UseReserved => "use reserved",
            Action::Swap => "swap",
            Action::Undo => "undo",
            Action::Invert => "invert",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_roundtrip() {
        for action in Action::ALL {
            assert_eq!(Action::from_number(action.number()), Some(action));
        }
        assert_eq!(Action::from_number(0), None);
        assert_eq!(Action::from_number(7), None);
    }

    #[test]
    fn test_only_undo_skips_checkpoint() {
        let skipping: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|a| !a.is_transformation())
            .collect();
        assert_eq!(skipping, vec![Action::Undo]);
    }
}
