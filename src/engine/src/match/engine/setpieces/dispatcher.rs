use crate::r#match::engine::field::PitchSide;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::{Corner, Freekick, Goal, GoalKick, Penalty, ThrowIn, Touchline};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use log::warn;
use nalgebra::Vector2;

pub struct SetPieceDispatcher;

impl SetPieceDispatcher {
    /// Turns a ball headed for `intended` off the pitch into the matching restart.
    ///
    /// `kick_team_id` is the team that last played the ball. Anything other than the
    /// kick-off team counts as the second team. Returns `true` when a restart was set.
    pub fn keep_in_boundaries(
        state: &mut MatchState,
        kick_team_id: Option<u32>,
        intended: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) -> bool {
        let field = state.pitch;

        let kicked_by = if kick_team_id == Some(state.kick_off_team.id) {
            TeamSide::KickOff
        } else {
            TeamSide::Second
        };

        if intended.x < 0.0 || intended.x > field.width {
            let touchline = if intended.x < 0.0 {
                Touchline::Left
            } else {
                Touchline::Right
            };

            ThrowIn::set(state, kicked_by.opposite(), touchline, intended.y);
            return true;
        }

        let end = if intended.y < 0.0 {
            PitchSide::Top
        } else if intended.y > field.height {
            PitchSide::Bottom
        } else {
            return false;
        };

        let defending = Self::defender_of(state, end);
        let attacking = defending.opposite();

        if field.in_goal_mouth(intended.x) {
            Goal::set(state, attacking, rng);
        } else if kicked_by == defending {
            let flank = if intended.x < field.width / 2.0 {
                Touchline::Left
            } else {
                Touchline::Right
            };

            Corner::set(state, attacking, end, flank, rng);
        } else {
            GoalKick::set(state, defending);
        }

        true
    }

    /// Dead ball to `side` after a foul or an offside: a penalty inside the box it attacks,
    /// a free kick anywhere else.
    pub fn award_set_piece(state: &mut MatchState, side: TeamSide, rng: &mut dyn MatchRng) {
        let field = state.pitch;
        let ball = state.ball.position_2d();

        let in_box = match state.team(side).pitch_side(&field) {
            PitchSide::Top => field.in_bottom_penalty(&ball),
            PitchSide::Bottom => field.in_top_penalty(&ball),
        };

        let team = state.team_mut(side);
        let name = team.name.clone();

        if in_box {
            team.statistics.penalties += 1;
            state.log(format!("penalty to: {}", name));

            Penalty::set(state, side);
        } else {
            team.statistics.freekicks += 1;
            state.log(format!("freekick to: {} [{}, {}]", name, ball.x, ball.y));

            Freekick::set(state, side, rng);
        }

        state.end_iteration = true;
    }

    /// Restart for `side` with nobody left to take it: the ball lies dead on `spot` and the tick ends.
    pub fn no_taker(state: &mut MatchState, side: TeamSide, restart: &str, spot: Vector2<f32>) {
        state.remove_ball_from_all_players();
        state.ball.clear_owner();
        state.ball.ball_over_iterations.clear();
        state.ball.set_ground_position(state.pitch.clamp(spot));

        let name = state.team(side).name.clone();
        warn!("{}: no player left to take the {}", name, restart);
        state.log(format!("No player left to take the {} - {}", restart, name));

        state.end_iteration = true;
    }

    fn defender_of(state: &MatchState, end: PitchSide) -> TeamSide {
        if state.kick_off_team.pitch_side(&state.pitch) == end {
            TeamSide::KickOff
        } else {
            TeamSide::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::player::PlayerRef;
    use crate::r#match::engine::random::SeededRng;
    use crate::r#match::engine::test_support::state;

    #[test]
    fn test_ball_in_play_needs_no_restart() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        let restarted =
            SetPieceDispatcher::keep_in_boundaries(&mut state, Some(1), Vector2::new(50.0, 70.0), &mut rng);

        assert!(!restarted);
        assert!(!state.end_iteration);
        assert!(state.iteration_log.is_empty());
    }

    #[test]
    fn test_side_exit_gives_throw_in_to_other_team() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        let restarted =
            SetPieceDispatcher::keep_in_boundaries(&mut state, Some(1), Vector2::new(-5.0, 70.0), &mut rng);

        assert!(restarted);
        assert!(state.end_iteration);
        assert_eq!(state.second_team.statistics.throw_ins, 1);

        let thrower = state.holder().map(|h| state.player(h));
        assert!(thrower.is_some_and(|p| p.current_pos.x == 0.0));
        assert!(thrower.is_some_and(|p| (30.0..=130.0).contains(&p.current_pos.y)));
        assert_eq!(state.ball.with_team, Some(state.second_team.id));
    }

    #[test]
    fn test_goal_mouth_exit_scores() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        let restarted =
            SetPieceDispatcher::keep_in_boundaries(&mut state, Some(1), Vector2::new(50.0, 145.0), &mut rng);

        assert!(restarted);
        assert!(state.end_iteration);
        assert_eq!(state.kick_off_team.statistics.goals, 1);
        assert_eq!(state.second_team.statistics.goals, 0);
        assert_eq!(state.holder().map(|h| h.side), Some(TeamSide::Second));
    }

    #[test]
    fn test_defender_touch_over_byline_is_corner() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        SetPieceDispatcher::keep_in_boundaries(&mut state, Some(2), Vector2::new(10.0, 145.0), &mut rng);

        assert_eq!(state.kick_off_team.statistics.corners, 1);
        assert_eq!(state.holder(), Some(PlayerRef::new(TeamSide::KickOff, 1)));
        assert!(state.end_iteration);
    }

    #[test]
    fn test_attacker_touch_over_byline_is_goal_kick() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        SetPieceDispatcher::keep_in_boundaries(&mut state, Some(2), Vector2::new(90.0, -3.0), &mut rng);

        assert_eq!(state.kick_off_team.statistics.goal_kicks, 1);
        assert_eq!(state.holder(), Some(PlayerRef::new(TeamSide::KickOff, 0)));
        assert!(state.end_iteration);
    }

    #[test]
    fn test_foul_in_attacked_box_is_penalty() {
        let mut state = state();
        let mut rng = SeededRng::new(1);
        state.ball.set_ground_position(Vector2::new(50.0, 130.0));

        SetPieceDispatcher::award_set_piece(&mut state, TeamSide::KickOff, &mut rng);

        assert_eq!(state.kick_off_team.statistics.penalties, 1);
        assert_eq!(state.kick_off_team.statistics.freekicks, 0);
        assert_eq!(state.holder(), Some(PlayerRef::new(TeamSide::KickOff, 10)));
        assert_eq!(state.iteration_log[0], "penalty to: Home");
        assert!(state.end_iteration);
    }

    #[test]
    fn test_no_taker_leaves_dead_ball() {
        let mut state = state();
        state.give_ball(PlayerRef::new(TeamSide::Second, 6));

        SetPieceDispatcher::no_taker(&mut state, TeamSide::KickOff, "corner", Vector2::new(104.0, 140.0));

        assert_eq!(state.holder(), None);
        assert_eq!(state.ball.with_team, None);
        assert!(state.players().all(|(_, p)| !p.has_ball));
        assert_eq!(state.ball.position_2d(), Vector2::new(100.0, 140.0));
        assert_eq!(state.iteration_log, vec![String::from("No player left to take the corner - Home")]);
        assert!(state.end_iteration);
    }

    #[test]
    fn test_foul_elsewhere_is_freekick() {
        let mut state = state();
        let mut rng = SeededRng::new(1);

        SetPieceDispatcher::award_set_piece(&mut state, TeamSide::KickOff, &mut rng);

        assert_eq!(state.kick_off_team.statistics.freekicks, 1);
        assert_eq!(state.kick_off_team.statistics.penalties, 0);
        assert_eq!(state.iteration_log[0], "freekick to: Home [50, 70]");
        assert!(state.end_iteration);
    }
}
