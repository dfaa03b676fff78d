use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{TeamSide, ROSTER_SIZE};

pub const MATCH_INJURY_ODDS: i32 = 40000;

const INJURY_DRAW: i32 = 23;

pub struct InjuryModel;

impl InjuryModel {
    pub fn is_injured(odds: i32, rng: &mut dyn MatchRng) -> bool {
        odds == INJURY_DRAW || rng.random_int(0, odds) == INJURY_DRAW
    }

    /// Background injury draw for one randomly picked member of the starting eleven.
    pub fn match_injury(state: &mut MatchState, side: TeamSide, rng: &mut dyn MatchRng) {
        let index = rng.random_int(0, ROSTER_SIZE as i32 - 1) as usize;

        if !Self::is_injured(MATCH_INJURY_ODDS, rng) {
            return;
        }

        if state.team(side).players.get(index).is_some_and(|p| p.on_pitch()) {
            Self::injure(state, PlayerRef::new(side, index));
        }
    }

    pub fn roll(state: &mut MatchState, player: PlayerRef, odds: i32, rng: &mut dyn MatchRng) {
        if Self::is_injured(odds, rng) {
            Self::injure(state, player);
        }
    }

    fn injure(state: &mut MatchState, player: PlayerRef) {
        let player = state.player_mut(player);
        player.injured = true;

        let name = player.name.clone();
        state.log(format!("Player Injured - {}", name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::random::ScriptedRng;
    use crate::r#match::engine::test_support::state;

    #[test]
    fn test_injury_draw() {
        let mut rng = ScriptedRng::new(&[23, 22]);

        assert!(InjuryModel::is_injured(40000, &mut rng));
        assert!(!InjuryModel::is_injured(40000, &mut rng));
        assert!(InjuryModel::is_injured(23, &mut rng));
    }

    #[test]
    fn test_match_injury_flags_drawn_player() {
        let mut state = state();
        let mut rng = ScriptedRng::new(&[4, 23]);

        InjuryModel::match_injury(&mut state, TeamSide::Second, &mut rng);

        assert!(state.second_team.players[4].injured);
        assert_eq!(state.iteration_log, vec![String::from("Player Injured - Away 4")]);
    }

    #[test]
    fn test_match_injury_usually_misses() {
        let mut state = state();
        let mut rng = ScriptedRng::new(&[4, 100]);

        InjuryModel::match_injury(&mut state, TeamSide::KickOff, &mut rng);

        assert!(state.kick_off_team.players.iter().all(|p| !p.injured));
        assert!(state.iteration_log.is_empty());
    }
}
