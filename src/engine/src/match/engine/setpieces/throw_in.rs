use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

pub const THROWER_SLOT: usize = 5;

const THROW_IN_MIN_Y: f32 = 30.0;
const THROW_IN_BYLINE_GAP: f32 = 10.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Touchline {
    Left,
    Right,
}

pub struct ThrowIn;

impl ThrowIn {
    pub fn spot(intended_y: f32, height: f32) -> f32 {
        intended_y.clamp(THROW_IN_MIN_Y, height - THROW_IN_BYLINE_GAP)
    }

    pub fn set(state: &mut MatchState, side: TeamSide, touchline: Touchline, intended_y: f32) {
        state.remove_ball_from_all_players();

        let field = state.pitch;
        let spot = Self::spot(intended_y, field.height);

        let thrower = state.team(side).available_index(THROWER_SLOT);

        let shift = spot - state.team(side).players[THROWER_SLOT].origin_pos.y;

        Self::shift_team(state, side, shift);
        Self::shift_team(state, side.opposite(), shift);

        let x = |offset: f32| match touchline {
            Touchline::Left => offset,
            Touchline::Right => field.width - offset,
        };

        let height = field.height;
        let attack = [
            (8, Vector2::new(x(15.0), spot)),
            (7, Vector2::new(x(10.0), (spot + 10.0).min(height))),
            (9, Vector2::new(x(10.0), (spot - 10.0).max(0.0))),
        ];
        let defence = [
            (5, Vector2::new(x(20.0), spot)),
            (7, Vector2::new(x(30.0), (spot + 5.0).min(height))),
            (8, Vector2::new(x(25.0), (spot - 15.0).max(0.0))),
            (9, Vector2::new(x(10.0), (spot - 30.0).max(0.0))),
        ];

        for (index, position) in attack {
            state.place_player(PlayerRef::new(side, index), position);
        }

        for (index, position) in defence {
            state.place_player(PlayerRef::new(side.opposite(), index), position);
        }

        let team = state.team_mut(side);
        team.statistics.throw_ins += 1;
        let name = team.name.clone();

        let line = Vector2::new(x(0.0), spot);

        let Some(thrower) = thrower else {
            SetPieceDispatcher::no_taker(state, side, "throw in", line);
            return;
        };

        let thrower = PlayerRef::new(side, thrower);
        state.place_player(thrower, line);
        state.give_ball(thrower);

        state.log(format!("Throw in to - {}", name));
        state.end_iteration = true;
    }

    /// Keepers go home, the outfield follows the throw up or down the line.
    fn shift_team(state: &mut MatchState, side: TeamSide, shift: f32) {
        for index in 0..state.team(side).players.len() {
            let player = &state.team(side).players[index];

            let position = if player.position.is_goalkeeper() {
                player.origin_pos
            } else {
                Vector2::new(player.origin_pos.x, player.origin_pos.y + shift)
            };

            state.place_player(PlayerRef::new(side, index), position);
        }
    }
}
