use crate::r#match::engine::field::{is_between, PitchSide};
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

const GOAL_KICK_PUSH: f32 = 80.0;
const GOAL_KICK_SPOT: f32 = 20.0;

pub struct GoalKick;

impl GoalKick {
    /// Keeper of `side` restarts from its own six-yard area with the outfield pushed upfield.
    /// A player whose push would leave the pitch keeps the formation spot.
    pub fn set(state: &mut MatchState, side: TeamSide) {
        state.remove_ball_from_all_players();
        state.reset_player_positions();

        let field = state.pitch;
        let pitch_side = state.team(side).pitch_side(&field);
        let push = pitch_side.forward() * GOAL_KICK_PUSH;

        for index in 1..state.team(side).players.len() {
            let origin = state.team(side).players[index].origin_pos;
            let pushed = origin.y + push;

            if is_between(pushed, -1.0, field.height + 1.0) {
                state.place_player(PlayerRef::new(side, index), Vector2::new(origin.x, pushed));
            }
        }

        let spot = Vector2::new(
            field.width / 2.0,
            match pitch_side {
                PitchSide::Top => GOAL_KICK_SPOT,
                PitchSide::Bottom => field.height - GOAL_KICK_SPOT,
            },
        );

        let team = state.team_mut(side);
        team.statistics.goal_kicks += 1;
        let name = team.name.clone();

        let Some(keeper) = state.team(side).available_index(0) else {
            SetPieceDispatcher::no_taker(state, side, "goal kick", spot);
            return;
        };

        let keeper = PlayerRef::new(side, keeper);
        state.place_player(keeper, spot);
        state.give_ball(keeper);
        state.ball.set_ground_position(spot);

        state.log(format!("Goal Kick to - {}", name));
        state.end_iteration = true;
    }
}
