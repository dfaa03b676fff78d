use crate::r#match::engine::error::{MatchError, MatchResult};
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use log::warn;

pub const MAX_SUBSTITUTIONS: u32 = 5;
pub const MAX_SUBSTITUTION_WINDOWS: u32 = 3;

pub struct Substitutions;

impl Substitutions {
    /// In-play substitution. Uses one of the team's substitution windows.
    pub fn substitute_player(
        state: &mut MatchState,
        side: TeamSide,
        out_id: u32,
        in_id: u32,
    ) -> MatchResult<bool> {
        Self::swap(state, side, out_id, in_id, true)
    }

    /// Substitution made during the break. Counts as a swap but not as a window.
    pub fn substitute_player_half_time(
        state: &mut MatchState,
        side: TeamSide,
        out_id: u32,
        in_id: u32,
    ) -> MatchResult<bool> {
        Self::swap(state, side, out_id, in_id, false)
    }

    fn swap(
        state: &mut MatchState,
        side: TeamSide,
        out_id: u32,
        in_id: u32,
        uses_window: bool,
    ) -> MatchResult<bool> {
        let team = state.team(side);

        let slot = team.find_index(out_id).ok_or(MatchError::UnknownPlayer(out_id))?;
        let bench = team
            .subs
            .iter()
            .position(|p| p.id == in_id)
            .ok_or(MatchError::UnknownPlayer(in_id))?;

        if team.substitutions.substitutions >= MAX_SUBSTITUTIONS
            || team.substitutions.windows >= MAX_SUBSTITUTION_WINDOWS
        {
            warn!("{}: maximum substitutions reached", team.name);
            return Ok(false);
        }

        if !team.players[slot].on_pitch() {
            warn!("{} was sent off and cannot be replaced", team.players[slot].name);
            return Ok(false);
        }

        let had_ball = team.players[slot].has_ball;

        let team = state.team_mut(side);
        let mut incoming = team.subs.remove(bench);
        let outgoing = &team.players[slot];

        incoming.current_pos = outgoing.current_pos;
        incoming.origin_pos = outgoing.origin_pos;
        incoming.intent_pos = outgoing.intent_pos;
        incoming.has_ball = false;
        incoming.offside = false;

        let outgoing = std::mem::replace(&mut team.players[slot], incoming);
        let message = format!("Substitution: {} replaced by {}", outgoing.name, team.players[slot].name);

        team.subs.push(outgoing);
        team.substitutions.substitutions += 1;
        if uses_window {
            team.substitutions.windows += 1;
        }

        state.log(message);

        if had_ball {
            state.give_ball(PlayerRef::new(side, slot));
        }

        Ok(true)
    }
}
