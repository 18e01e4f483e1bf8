//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the turn controller is in the round cycle.
///
/// ```text
/// Setup -> AwaitingPartition -> AwaitingFlips -> ResolvingMove -> CheckWin
///                ^                                                  |
///                +------------------- NextRound <-------------------+--> GameOver
/// ```
///
/// `AwaitingPartition`, `AwaitingFlips` and `GameOver` are the resting
/// phases a caller observes between operations; the others are passed
/// through inside a single controller call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    AwaitingPartition,
    AwaitingFlips,
    ResolvingMove,
    CheckWin,
    NextRound,
    GameOver,
}

impl Phase {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::AwaitingPartition => "awaiting-partition",
            Phase::AwaitingFlips => "awaiting-flips",
            Phase::ResolvingMove => "resolving-move",
            Phase::CheckWin => "check-win",
            Phase::NextRound => "next-round",
            Phase::GameOver => "game-over",
        };
        f.write_str(name)
    }
}
