use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Shoot,
    ThroughBall,
    Pass,
    Cross,
    Tackle,
    Intercept,
    Slide,
    Run,
    Sprint,
    Cleared,
    Boot,
    Penalty,
    Wait,
}

/// Order of the entries in every weight vector.
pub const WEIGHTED_ACTIONS: [PlayerAction; 11] = [
    PlayerAction::Shoot,
    PlayerAction::ThroughBall,
    PlayerAction::Pass,
    PlayerAction::Cross,
    PlayerAction::Tackle,
    PlayerAction::Intercept,
    PlayerAction::Slide,
    PlayerAction::Run,
    PlayerAction::Sprint,
    PlayerAction::Cleared,
    PlayerAction::Boot,
];

/// Substitutes for a contact action forced on the ball holder.
pub const BALL_RELEASE_ACTIONS: [PlayerAction; 6] = [
    PlayerAction::Shoot,
    PlayerAction::ThroughBall,
    PlayerAction::Pass,
    PlayerAction::Cross,
    PlayerAction::Cleared,
    PlayerAction::Boot,
];

impl PlayerAction {
    pub fn is_ball_action(&self) -> bool {
        matches!(
            self,
            PlayerAction::Shoot
                | PlayerAction::ThroughBall
                | PlayerAction::Pass
                | PlayerAction::Cross
                | PlayerAction::Cleared
                | PlayerAction::Boot
                | PlayerAction::Penalty
        )
    }

    pub fn is_contact(&self) -> bool {
        matches!(
            self,
            PlayerAction::Tackle | PlayerAction::Slide | PlayerAction::Intercept
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Shoot => "shoot",
            PlayerAction::ThroughBall => "throughBall",
            PlayerAction::Pass => "pass",
            PlayerAction::Cross => "cross",
            PlayerAction::Tackle => "tackle",
            PlayerAction::Intercept => "intercept",
            PlayerAction::Slide => "slide",
            PlayerAction::Run => "run",
            PlayerAction::Sprint => "sprint",
            PlayerAction::Cleared => "cleared",
            PlayerAction::Boot => "boot",
            PlayerAction::Penalty => "penalty",
            PlayerAction::Wait => "wait",
        }
    }
}

impl Display for PlayerAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the actions a caller may force on a player. `wait` is only ever chosen by the engine.
impl FromStr for PlayerAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEIGHTED_ACTIONS
            .iter()
            .chain(std::iter::once(&PlayerAction::Penalty))
            .find(|action| action.as_str() == s)
            .copied()
            .ok_or(())
    }
}
