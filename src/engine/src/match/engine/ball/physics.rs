use crate::r#match::engine::ball::{BallDirection, BallTrajectory};
use crate::r#match::engine::field::PitchSide;
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;
use itertools::Itertools;
use nalgebra::{Vector2, Vector3};

const PASS_CANDIDATES: usize = 3;
const THROUGH_BALL_LEAD: f32 = 20.0;
const CROSS_POWER_SCALE: f32 = 1.5;
const KICK_SPREAD: i32 = 30;
const SHOT_MISS_SPREAD: i32 = 20;

/// Flight of the ball once it leaves a player's feet.
///
/// Every kick returns where the ball is headed; the flight itself is stored on the ball and
/// played out by `move_ball`, one waypoint per tick.
pub trait BallPhysics {
    fn move_ball(&self, state: &mut MatchState, rng: &mut dyn MatchRng);

    /// Long clearance upfield.
    fn kick(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32>;

    fn pass(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32>;

    fn cross(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32>;

    fn shot(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32>;

    fn through_ball(
        &self,
        state: &mut MatchState,
        player: PlayerRef,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32>;

    fn penalty(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32>;

    fn trajectory(&self, from: Vector2<f32>, to: Vector2<f32>, power: f32) -> Vec<Vector3<f32>> {
        BallTrajectory::compute(from, to, power)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBallPhysics;

impl DefaultBallPhysics {
    pub fn new() -> Self {
        DefaultBallPhysics
    }

    /// Kick power from a strength rating.
    pub fn power(strength: f32, rng: &mut dyn MatchRng) -> f32 {
        strength * rng.random_int(1, 5) as f32
    }

    /// Puts the ball in flight from its current spot towards `target`.
    fn launch(&self, state: &mut MatchState, target: Vector2<f32>, power: f32) -> Vector2<f32> {
        let from = state.ball.position_2d();
        let travel = target - from;

        state.ball.ball_over_iterations = self.trajectory(from, target, power);
        state.ball.direction = BallDirection::from_movement(travel.x, travel.y);

        target
    }

    /// Half-width of the error around a target for a given skill.
    fn noise(skill: f32) -> i32 {
        ((100.0 - skill).max(0.0) / 10.0).round() as i32
    }

    fn attacked_end(state: &MatchState, player: PlayerRef) -> PitchSide {
        state.team(player.side).pitch_side(&state.pitch).opposite()
    }

    /// Goal line point just beyond the end the player attacks.
    fn beyond_goal_line(state: &MatchState, player: PlayerRef) -> f32 {
        match Self::attacked_end(state, player) {
            PitchSide::Top => -1.0,
            PitchSide::Bottom => state.pitch.height + 1.0,
        }
    }

    /// Aims between the posts with `accuracy`, and lets the opposing keeper try to save it.
    fn strike(
        &self,
        state: &mut MatchState,
        player: PlayerRef,
        accuracy: f32,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        let field = state.pitch;
        let (left_post, right_post) = field.posts();
        let shooter = state.player(player);
        let power = Self::power(shooter.skill.strength, rng);
        let name = shooter.name.clone();

        let on_target = rng.random_int(0, 100) < accuracy as i32;
        let x = if on_target {
            rng.random_between(left_post + 1.0, right_post - 1.0)
        } else if rng.random_int(0, 1) == 0 {
            left_post - rng.random_int(1, SHOT_MISS_SPREAD) as f32
        } else {
            right_post + rng.random_int(1, SHOT_MISS_SPREAD) as f32
        };

        let target = Vector2::new(x, Self::beyond_goal_line(state, player));

        let stats = &mut state.player_mut(player).stats.shots;
        stats.total += 1;

        if !on_target {
            stats.off += 1;
            state.log(format!("Shot off target by: {}", name));
            return self.launch(state, target, power);
        }

        stats.on += 1;

        let keeper = state
            .team(player.side.opposite())
            .players
            .first()
            .filter(|k| k.on_pitch())
            .map(|k| k.skill.saving);

        if let Some(saving) = keeper {
            if rng.random_int(0, 100) < (saving / 2.0) as i32 {
                let keeper = PlayerRef::new(player.side.opposite(), 0);
                state.log(format!("Shot saved, taken by: {}", name));
                state.set_goalie_has_ball(keeper);

                return state.player(keeper).current_pos;
            }
        }

        state.log(format!("Shot on target by: {}", name));
        self.launch(state, target, power)
    }
}

impl BallPhysics for DefaultBallPhysics {
    fn move_ball(&self, state: &mut MatchState, rng: &mut dyn MatchRng) {
        if state.ball.ball_over_iterations.is_empty() {
            return;
        }

        let next = state.ball.ball_over_iterations.remove(0);
        let kick_team = state.ball.last_touch.team_id;

        if SetPieceDispatcher::keep_in_boundaries(state, kick_team, next.xy(), rng) {
            state.ball.ball_over_iterations.clear();
            return;
        }

        state.ball.position = next;
    }

    fn kick(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32> {
        let forward = state.team(player.side).pitch_side(&state.pitch).forward();
        let power = Self::power(state.player(player).skill.strength, rng);
        let from = state.ball.position_2d();

        let target = Vector2::new(
            from.x + rng.random_int(-KICK_SPREAD, KICK_SPREAD) as f32,
            from.y + forward * power / 2.0,
        );

        self.launch(state, target, power)
    }

    fn pass(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32> {
        let passer = state.player(player);
        let origin = passer.current_pos;
        let (strength, passing) = (passer.skill.strength, passer.skill.passing);

        let candidates = state
            .team(player.side)
            .on_pitch_players()
            .filter(|(index, _)| *index != player.index)
            .map(|(_, p)| p.current_pos)
            .sorted_by(|a, b| {
                let a = (a - origin).abs().sum();
                let b = (b - origin).abs().sum();
                a.total_cmp(&b)
            })
            .take(PASS_CANDIDATES)
            .collect_vec();

        let Some(receiver) = rng.pick(&candidates).copied() else {
            return self.kick(state, player, rng);
        };

        let noise = Self::noise(passing);
        let target = Vector2::new(
            receiver.x + rng.random_int(-noise, noise) as f32,
            receiver.y + rng.random_int(-noise, noise) as f32,
        );

        let power = Self::power(strength, rng);
        state.player_mut(player).stats.passes += 1;

        self.launch(state, target, power)
    }

    fn cross(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32> {
        let own_side = state.team(player.side).pitch_side(&state.pitch);
        let target = state.pitch.random_attacked_penalty_position(own_side, rng);
        let power = Self::power(state.player(player).skill.strength, rng) * CROSS_POWER_SCALE;

        state.player_mut(player).stats.passes += 1;

        self.launch(state, target, power)
    }

    fn shot(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32> {
        let accuracy = state.player(player).skill.shooting;

        self.strike(state, player, accuracy, rng)
    }

    fn through_ball(
        &self,
        state: &mut MatchState,
        player: PlayerRef,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        let field = state.pitch;
        let forward = state.team(player.side).pitch_side(&field).forward();

        let runner = state
            .team(player.side)
            .on_pitch_players()
            .filter(|(index, _)| *index != player.index)
            .map(|(_, p)| p.current_pos)
            .max_by(|a, b| (a.y * forward).total_cmp(&(b.y * forward)));

        let Some(runner) = runner else {
            return self.kick(state, player, rng);
        };

        let target = field.clamp(Vector2::new(runner.x, runner.y + forward * THROUGH_BALL_LEAD));
        let power = Self::power(state.player(player).skill.strength, rng);

        state.player_mut(player).stats.passes += 1;

        self.launch(state, target, power)
    }

    fn penalty(&self, state: &mut MatchState, player: PlayerRef, rng: &mut dyn MatchRng) -> Vector2<f32> {
        let accuracy = state.player(player).skill.penalty_taking;

        self.strike(state, player, accuracy, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::random::{ScriptedRng, SeededRng};
    use crate::r#match::engine::team::TeamSide;
    use crate::r#match::engine::test_support::state;

    fn kick_off(state: &mut MatchState, index: usize) -> PlayerRef {
        let player = PlayerRef::new(TeamSide::KickOff, index);
        state.give_ball(player);
        state.release_ball(player);
        player
    }

    #[test]
    fn test_pass_targets_a_near_teammate() {
        let mut state = state();
        let player = kick_off(&mut state, 6);

        let mut rng = SeededRng::new(4);
        let target = DefaultBallPhysics.pass(&mut state, player, &mut rng);

        assert_eq!(state.player(player).stats.passes, 1);
        assert!(state.ball.is_in_flight());

        let near = [(35.0, 20.0), (10.0, 45.0), (40.0, 65.0)];
        assert!(near
            .iter()
            .any(|(x, y)| (target.x - x).abs() <= 5.0 && (target.y - y).abs() <= 5.0));
    }

    #[test]
    fn test_flight_lands_on_target() {
        let mut state = state();
        let player = kick_off(&mut state, 6);

        let mut rng = SeededRng::new(4);
        let target = DefaultBallPhysics.through_ball(&mut state, player, &mut rng);

        let last = state.ball.ball_over_iterations.last().copied();
        assert_eq!(last.map(|p| p.xy()), Some(target));
        assert_eq!(last.map(|p| p.z), Some(0.0));
    }

    #[test]
    fn test_move_ball_advances_one_waypoint() {
        let mut state = state();
        let mut rng = SeededRng::new(1);
        state.ball.ball_over_iterations = vec![Vector3::new(50.0, 80.0, 2.0), Vector3::new(50.0, 90.0, 0.0)];

        DefaultBallPhysics.move_ball(&mut state, &mut rng);

        assert_eq!(state.ball.position, Vector3::new(50.0, 80.0, 2.0));
        assert_eq!(state.ball.ball_over_iterations.len(), 1);
    }

    #[test]
    fn test_move_ball_out_of_play_restarts() {
        let mut state = state();
        let mut rng = SeededRng::new(1);
        state.ball.last_touch.team_id = Some(state.kick_off_team.id);
        state.ball.ball_over_iterations = vec![Vector3::new(105.0, 80.0, 0.0), Vector3::new(110.0, 85.0, 0.0)];

        DefaultBallPhysics.move_ball(&mut state, &mut rng);

        assert!(state.end_iteration);
        assert!(!state.ball.is_in_flight());
        assert_eq!(state.second_team.statistics.throw_ins, 1);
    }

    #[test]
    fn test_saved_shot_goes_to_keeper() {
        let mut state = state();
        let player = kick_off(&mut state, 9);

        // power, on-target roll, aim, then a save draw under saving / 2
        let mut rng = ScriptedRng::new(&[5, 1, 50, 0]);
        let target = DefaultBallPhysics.shot(&mut state, player, &mut rng);

        let keeper = PlayerRef::new(TeamSide::Second, 0);
        assert_eq!(state.holder(), Some(keeper));
        assert_eq!(target, state.player(keeper).current_pos);
        assert_eq!(state.player(player).stats.shots.on, 1);
        assert!(!state.ball.is_in_flight());
    }

    #[test]
    fn test_missed_shot_flies_wide() {
        let mut state = state();
        let player = kick_off(&mut state, 9);

        // power, miss roll, left side, spread
        let mut rng = ScriptedRng::new(&[1, 100, 0, 10]);
        let target = DefaultBallPhysics.shot(&mut state, player, &mut rng);

        assert_eq!(target, Vector2::new(30.0, 141.0));
        assert_eq!(state.player(player).stats.shots.off, 1);
        assert!(state.ball.is_in_flight());
    }
}
