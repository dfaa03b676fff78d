use crate::r#match::engine::field::{is_between, MatchField, PitchSide};
use crate::r#match::engine::player::{MatchPlayer, PlayerAction, PlayerRef};
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::state::MatchState;
use nalgebra::Vector2;

const BALL_NEAR_RANGE: f32 = 60.0;
const CLOSEST_OFFSET_LIMIT: f32 = 29.0;

const RUN_FITNESS_DECAY: f32 = 0.005;
const RUN_FITNESS_FLOOR: f32 = 20.0;
const SPRINT_FITNESS_DECAY: f32 = 0.01;
const SPRINT_FITNESS_FLOOR: f32 = 30.0;

pub struct PlayerMovement;

impl PlayerMovement {
    /// Per-axis displacement for `action`. `ball_offset` is player position minus ball position.
    pub fn get_movement(
        state: &mut MatchState,
        player_ref: PlayerRef,
        action: PlayerAction,
        ball_offset: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        let field = state.pitch;

        match action {
            PlayerAction::Tackle | PlayerAction::Slide => Self::step_towards(-ball_offset),
            PlayerAction::Intercept => Self::intercept_movement(state, player_ref),
            PlayerAction::Run => {
                Self::run_movement(state.player_mut(player_ref), &field, ball_offset, rng)
            }
            PlayerAction::Sprint => {
                Self::sprint_movement(state.player_mut(player_ref), &field, ball_offset, rng)
            }
            _ => Vector2::zeros(),
        }
    }

    /// Applies each axis only when the result stays within one unit of the pitch.
    pub fn complete_movement(
        field: &MatchField,
        current: Vector2<f32>,
        movement: Vector2<f32>,
    ) -> Vector2<f32> {
        let mut result = current;

        let intended = current + movement;

        if is_between(intended.x, -1.0, field.width + 1.0) {
            result.x = intended.x;
        }

        if is_between(intended.y, -1.0, field.height + 1.0) {
            result.y = intended.y;
        }

        result
    }

    /// Offset seen by the closest chaser, limited to the ±29 band.
    pub fn clamp_closest_offset(offset: Vector2<f32>) -> Vector2<f32> {
        offset.map(|v| {
            if is_between(v, -30.0, 30.0) {
                v
            } else if v > CLOSEST_OFFSET_LIMIT {
                CLOSEST_OFFSET_LIMIT
            } else {
                -CLOSEST_OFFSET_LIMIT
            }
        })
    }

    /// Unit step along each axis of `direction`.
    pub fn step_towards(direction: Vector2<f32>) -> Vector2<f32> {
        direction.map(|v| {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else {
                0.0
            }
        })
    }

    fn intercept_movement(state: &MatchState, player_ref: PlayerRef) -> Vector2<f32> {
        let current = state.player(player_ref).current_pos;
        let target = Self::intercept_position(state, player_ref);

        Self::step_towards(target - current)
    }

    /// Point on the nearest opponent's run towards goal closest to the player.
    pub fn intercept_position(state: &MatchState, player_ref: PlayerRef) -> Vector2<f32> {
        let current = state.player(player_ref).current_pos;
        let trajectory = Self::intercept_trajectory(state, player_ref.side.opposite());

        let mut closest: Option<(usize, Vector2<f32>)> = None;
        let mut best = f32::MAX;

        for (idx, point) in trajectory.iter().enumerate() {
            let diff = (current.x - point.x).abs() + (current.y - point.y).abs();
            if diff < best {
                best = diff;
                closest = Some((idx, *point));
            }
        }

        match closest {
            Some((idx, point)) if point == current && idx > 0 => trajectory[idx - 1],
            Some((_, point)) => point,
            None => current,
        }
    }

    /// Whole-unit steps from the opponent nearest the ball to the centre of the goal it attacks.
    pub fn intercept_trajectory(
        state: &MatchState,
        opposition_side: crate::r#match::engine::team::TeamSide,
    ) -> Vec<Vector2<f32>> {
        let field = &state.pitch;
        let ball = state.ball.position_2d();

        let runner = state
            .team(opposition_side)
            .players
            .iter()
            .filter(|p| p.on_pitch() && !p.position.is_goalkeeper())
            .min_by(|a, b| {
                a.manhattan_distance(&ball)
                    .total_cmp(&b.manhattan_distance(&ball))
            });

        let Some(runner) = runner else {
            return Vec::new();
        };

        let target = Vector2::new(
            field.width / 2.0,
            match PitchSide::from_origin_y(runner.origin_pos.y, field.height) {
                PitchSide::Top => field.height,
                PitchSide::Bottom => 0.0,
            },
        );

        let movement = target - runner.current_pos;
        let high_num = movement.x.abs().max(movement.y.abs());

        let mut points = vec![runner.current_pos];

        if high_num == 0.0 {
            return points;
        }

        let step = movement / high_num;

        for _ in 0..high_num.round() as usize {
            let last = points[points.len() - 1];
            points.push((last + step).map(|v| v.round()));
        }

        points
    }

    fn run_movement(
        player: &mut MatchPlayer,
        field: &MatchField,
        ball_offset: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        player.tire(RUN_FITNESS_DECAY, RUN_FITNESS_FLOOR);

        if player.has_ball {
            return match PitchSide::from_origin_y(player.origin_pos.y, field.height) {
                PitchSide::Bottom => Vector2::new(
                    rng.random_int(0, 2) as f32,
                    rng.random_int(0, 2) as f32,
                ),
                PitchSide::Top => Vector2::new(
                    rng.random_int(-2, 0) as f32,
                    rng.random_int(-2, 0) as f32,
                ),
            };
        }

        if Self::ball_is_near(&ball_offset) {
            return ball_offset.map(|v| {
                if is_between(v, -BALL_NEAR_RANGE, 0.0) {
                    1.0
                } else if is_between(v, 0.0, BALL_NEAR_RANGE) {
                    -1.0
                } else {
                    0.0
                }
            });
        }

        let formation = player.intent_pos - player.current_pos;

        formation.map(|v| {
            if v < 0.0 {
                rng.random_int(-1, 0) as f32
            } else if v > 0.0 {
                rng.random_int(0, 1) as f32
            } else {
                0.0
            }
        })
    }

    fn sprint_movement(
        player: &mut MatchPlayer,
        field: &MatchField,
        ball_offset: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        player.tire(SPRINT_FITNESS_DECAY, SPRINT_FITNESS_FLOOR);

        if player.has_ball {
            return match PitchSide::from_origin_y(player.origin_pos.y, field.height) {
                PitchSide::Bottom => Vector2::new(
                    rng.random_int(-4, 4) as f32,
                    rng.random_int(-4, -2) as f32,
                ),
                PitchSide::Top => Vector2::new(
                    rng.random_int(-4, 4) as f32,
                    rng.random_int(2, 4) as f32,
                ),
            };
        }

        if Self::ball_is_near(&ball_offset) {
            return ball_offset.map(|v| {
                if is_between(v, -BALL_NEAR_RANGE, 0.0) {
                    rng.random_int(1, 2) as f32
                } else if is_between(v, 0.0, BALL_NEAR_RANGE) {
                    rng.random_int(-2, -1) as f32
                } else {
                    0.0
                }
            });
        }

        let formation = player.intent_pos - player.current_pos;

        formation.map(|v| {
            if v < 0.0 {
                rng.random_int(-2, 0) as f32
            } else if v > 0.0 {
                rng.random_int(0, 2) as f32
            } else {
                0.0
            }
        })
    }

    fn ball_is_near(ball_offset: &Vector2<f32>) -> bool {
        is_between(ball_offset.x, -BALL_NEAR_RANGE, BALL_NEAR_RANGE)
            && is_between(ball_offset.y, -BALL_NEAR_RANGE, BALL_NEAR_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::random::{ScriptedRng, SeededRng};
    use crate::r#match::engine::team::TeamSide;
    use crate::r#match::engine::test_support::{field, state};

    #[test]
    fn test_complete_movement_skips_axis_leaving_pitch() {
        let field = field();

        let moved = PlayerMovement::complete_movement(
            &field,
            Vector2::new(0.5, 70.0),
            Vector2::new(-2.0, 1.0),
        );

        assert_eq!(moved, Vector2::new(0.5, 71.0));

        let moved = PlayerMovement::complete_movement(
            &field,
            Vector2::new(100.0, 140.0),
            Vector2::new(0.5, 2.0),
        );

        assert_eq!(moved, Vector2::new(100.5, 140.0));
    }

    #[test]
    fn test_tackle_steps_towards_ball() {
        let mut state = state();
        let mut rng = ScriptedRng::new(&[]);
        let player = PlayerRef::new(TeamSide::KickOff, 6);

        let movement = PlayerMovement::get_movement(
            &mut state,
            player,
            PlayerAction::Tackle,
            Vector2::new(12.0, -3.0),
            &mut rng,
        );

        assert_eq!(movement, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn test_ball_actions_do_not_move() {
        let mut state = state();
        let mut rng = ScriptedRng::new(&[]);
        let player = PlayerRef::new(TeamSide::KickOff, 6);

        for action in [PlayerAction::Pass, PlayerAction::Penalty, PlayerAction::Wait] {
            let movement =
                PlayerMovement::get_movement(&mut state, player, action, Vector2::new(5.0, 5.0), &mut rng);
            assert_eq!(movement, Vector2::zeros());
        }
    }

    #[test]
    fn test_run_near_ball_moves_towards_it() {
        let mut state = state();
        let mut rng = ScriptedRng::new(&[]);
        let player = PlayerRef::new(TeamSide::KickOff, 6);

        let movement = PlayerMovement::get_movement(
            &mut state,
            player,
            PlayerAction::Run,
            Vector2::new(-10.0, 20.0),
            &mut rng,
        );

        assert_eq!(movement, Vector2::new(1.0, -1.0));
        assert!(state.player(player).fitness < 100.0);
    }

    #[test]
    fn test_run_far_from_ball_returns_to_intent() {
        let mut state = state();
        let mut rng = SeededRng::new(17);
        let player = PlayerRef::new(TeamSide::KickOff, 6);
        state.player_mut(player).intent_pos = Vector2::new(80.0, 10.0);

        for _ in 0..50 {
            let movement = PlayerMovement::get_movement(
                &mut state,
                player,
                PlayerAction::Run,
                Vector2::new(100.0, 100.0),
                &mut rng,
            );

            assert!(movement.x == 0.0 || movement.x == 1.0);
            assert!(movement.y == 0.0 || movement.y == -1.0);
        }
    }

    #[test]
    fn test_sprint_with_ball_heads_upfield() {
        let mut state = state();
        let mut rng = SeededRng::new(23);
        let top = PlayerRef::new(TeamSide::KickOff, 9);
        let bottom = PlayerRef::new(TeamSide::Second, 9);

        state.give_ball(top);
        for _ in 0..20 {
            let movement =
                PlayerMovement::get_movement(&mut state, top, PlayerAction::Sprint, Vector2::zeros(), &mut rng);
            assert!(movement.y >= 2.0 && movement.y <= 4.0);
        }

        state.give_ball(bottom);
        for _ in 0..20 {
            let movement =
                PlayerMovement::get_movement(&mut state, bottom, PlayerAction::Sprint, Vector2::zeros(), &mut rng);
            assert!(movement.y >= -4.0 && movement.y <= -2.0);
        }
    }

    #[test]
    fn test_sprint_decay_stops_at_floor() {
        let mut state = state();
        let mut rng = SeededRng::new(1);
        let player = PlayerRef::new(TeamSide::KickOff, 6);
        state.player_mut(player).fitness = 30.0;

        PlayerMovement::get_movement(&mut state, player, PlayerAction::Sprint, Vector2::zeros(), &mut rng);

        assert_eq!(state.player(player).fitness, 30.0);
    }

    #[test]
    fn test_clamp_closest_offset() {
        let clamped = PlayerMovement::clamp_closest_offset(Vector2::new(45.0, -30.0));
        assert_eq!(clamped, Vector2::new(29.0, -29.0));

        let untouched = PlayerMovement::clamp_closest_offset(Vector2::new(12.0, -29.5));
        assert_eq!(untouched, Vector2::new(12.0, -29.5));
    }

    #[test]
    fn test_intercept_moves_onto_runner_path() {
        let mut state = state();
        state.ball.position.x = 50.0;
        state.ball.position.y = 60.0;

        for player in state.kick_off_team.players.iter_mut().skip(1) {
            player.current_pos = Vector2::new(5.0, 5.0);
        }
        state.kick_off_team.players[9].current_pos = Vector2::new(50.0, 60.0);

        let defender = PlayerRef::new(TeamSide::Second, 6);
        state.player_mut(defender).current_pos = Vector2::new(52.0, 100.0);

        let trajectory = PlayerMovement::intercept_trajectory(&state, TeamSide::KickOff);
        assert_eq!(trajectory.first(), Some(&Vector2::new(50.0, 60.0)));
        assert_eq!(trajectory.last(), Some(&Vector2::new(50.0, 140.0)));
        assert_eq!(trajectory.len(), 81);

        assert_eq!(PlayerMovement::intercept_position(&state, defender), Vector2::new(50.0, 100.0));

        let mut rng = ScriptedRng::new(&[]);
        let movement =
            PlayerMovement::get_movement(&mut state, defender, PlayerAction::Intercept, Vector2::zeros(), &mut rng);
        assert_eq!(movement, Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn test_intercept_on_path_steps_back_one_point() {
        let mut state = state();
        state.ball.position.x = 50.0;
        state.ball.position.y = 60.0;
        state.kick_off_team.players[9].current_pos = Vector2::new(50.0, 60.0);

        let defender = PlayerRef::new(TeamSide::Second, 6);
        state.player_mut(defender).current_pos = Vector2::new(50.0, 100.0);

        assert_eq!(PlayerMovement::intercept_position(&state, defender), Vector2::new(50.0, 99.0));
    }
}
