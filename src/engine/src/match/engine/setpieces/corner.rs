use crate::r#match::engine::field::PitchSide;
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::{SetPieceDispatcher, Touchline};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

pub const CORNER_TAKER_SLOT: usize = 1;

const BACK_LINE: std::ops::Range<usize> = 0..5;
const BOX_CROWD: std::ops::Range<usize> = 5..11;

pub struct Corner;

impl Corner {
    /// Corner for `side` at the `end` goal line, taken from the `flank` flag.
    pub fn set(
        state: &mut MatchState,
        side: TeamSide,
        end: PitchSide,
        flank: Touchline,
        rng: &mut dyn MatchRng,
    ) {
        state.remove_ball_from_all_players();

        let field = state.pitch;
        let defending = side.opposite();

        for team_side in [side, defending] {
            for index in BACK_LINE {
                let origin = state.team(team_side).players[index].origin_pos;
                state.place_player(PlayerRef::new(team_side, index), origin);
            }

            for index in BOX_CROWD {
                let position = match end {
                    PitchSide::Top => field.random_top_penalty_position(rng),
                    PitchSide::Bottom => field.random_bottom_penalty_position(rng),
                };
                state.place_player(PlayerRef::new(team_side, index), position);
            }
        }

        let x = |offset: f32| match flank {
            Touchline::Left => offset,
            Touchline::Right => field.width - offset,
        };
        let y = |offset: f32| match end {
            PitchSide::Top => offset,
            PitchSide::Bottom => field.height - offset,
        };

        state.place_player(PlayerRef::new(side, 4), Vector2::new(x(10.0), y(20.0)));

        let marker = match flank {
            Touchline::Left => 1,
            Touchline::Right => 4,
        };
        state.place_player(PlayerRef::new(defending, marker), Vector2::new(x(12.0), y(10.0)));

        let team = state.team_mut(side);
        team.statistics.corners += 1;
        let name = team.name.clone();

        let flag = Vector2::new(x(0.0), y(0.0));

        let Some(taker) = state.team(side).available_index(CORNER_TAKER_SLOT) else {
            SetPieceDispatcher::no_taker(state, side, "corner", flag);
            return;
        };

        let taker = PlayerRef::new(side, taker);
        state.place_player(taker, flag);
        state.give_ball(taker);

        state.log(format!("Corner to - {}", name));
        state.end_iteration = true;
    }
}
