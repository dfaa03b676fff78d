use crate::r#match::engine::ball::BallDirection;
use crate::r#match::engine::field::PitchSide;
use crate::r#match::engine::player::{PlayerAction, PlayerRef};
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

pub const PENALTY_TAKER_SLOT: usize = 10;

pub struct Penalty;

impl Penalty {
    /// Spot kick for `side` at the goal it attacks.
    pub fn set(state: &mut MatchState, side: TeamSide) {
        state.remove_ball_from_all_players();

        let field = state.pitch;
        let defending = side.opposite();
        let goal = state.team(side).pitch_side(&field).opposite();

        let (edge, spot, direction) = match goal {
            PitchSide::Top => (
                Vector2::new(field.width / 2.0, field.height / 6.0),
                Vector2::new(field.width / 2.0, (field.height / 17.5).round()),
                BallDirection::North,
            ),
            PitchSide::Bottom => (
                Vector2::new(field.width / 2.0, field.height - field.height / 6.0),
                Vector2::new(field.width / 2.0, field.height - (field.height / 17.5).round()),
                BallDirection::South,
            ),
        };

        for team_side in [side, defending] {
            let origin = state.team(team_side).players[0].origin_pos;
            state.place_player(PlayerRef::new(team_side, 0), origin);
        }

        // players line up across the edge of the area, alternating between the teams
        for (n, index) in (1..=10).enumerate() {
            let offset = 2.0 * n as f32;

            if index != PENALTY_TAKER_SLOT {
                let position = Vector2::new(edge.x - 9.0 + offset, edge.y);
                state.place_player(PlayerRef::new(side, index), position);
            }

            let position = Vector2::new(edge.x - 10.0 + offset, edge.y);
            state.place_player(PlayerRef::new(defending, index), position);
        }

        let Some(taker) = state.team(side).available_index(PENALTY_TAKER_SLOT) else {
            SetPieceDispatcher::no_taker(state, side, "penalty", spot);
            return;
        };

        let taker = PlayerRef::new(side, taker);
        state.place_player(taker, spot);
        state.player_mut(taker).action = PlayerAction::Penalty.to_string();
        state.give_ball(taker);
        state.ball.direction = direction;
        state.end_iteration = true;
    }
}
