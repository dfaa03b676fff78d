use crate::r#match::engine::ball::BallDirection;
use crate::r#match::engine::field::{is_between, up_to_max, up_to_min, PitchSide};
use crate::r#match::engine::player::{MatchPlayer, PlayerPositionType, PlayerRef};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

const PUSH_UP: f32 = 20.0;
const DEFENCE_CONVERGE_RANGE: f32 = 40.0;
const LOOSE_CONVERGE_RANGE: f32 = 16.0;
const LOOSE_HOLD_RANGE: f32 = 100.0;

pub struct IntentPlanner;

impl IntentPlanner {
    /// On-pitch player of `side` with the smallest Manhattan distance to the ball.
    pub fn closest_player_to_ball(state: &mut MatchState, side: TeamSide) -> Option<PlayerRef> {
        let ball = state.ball.position_2d();

        let mut closest: Option<(usize, f32)> = None;

        for (index, player) in state.team(side).on_pitch_players() {
            let distance = player.manhattan_distance(&ball);

            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }

        let (index, _) = closest?;
        let player = PlayerRef::new(side, index);

        let name = state.player(player).name.clone();
        state.log(format!("Closest Player to ball: {}", name));

        Some(player)
    }

    /// Recomputes every intent position from possession and each team's closest chaser.
    pub fn set_intent_positions(
        state: &mut MatchState,
        kick_off_closest: Option<PlayerRef>,
        second_closest: Option<PlayerRef>,
    ) {
        let closest_of = |side: TeamSide| match side {
            TeamSide::KickOff => kick_off_closest,
            TeamSide::Second => second_closest,
        };

        match state.holder() {
            Some(holder) => {
                let defending = holder.side.opposite();
                Self::set_defence_relative(state, defending, closest_of(defending));
                Self::set_attack_relative(state, holder.side);
            }
            None => {
                Self::set_loose_intent(state, TeamSide::KickOff, closest_of(TeamSide::KickOff));
                Self::set_loose_intent(state, TeamSide::Second, closest_of(TeamSide::Second));
            }
        }
    }

    fn set_defence_relative(state: &mut MatchState, side: TeamSide, closest: Option<PlayerRef>) {
        let height = state.pitch.height;
        let ball = state.ball.position_2d();
        let pitch_side = state.team(side).pitch_side(&state.pitch);

        let ball_on_opposite_side = match pitch_side {
            PitchSide::Top => ball.y > height / 2.0,
            PitchSide::Bottom => ball.y < height / 2.0,
        };

        for (index, player) in state.team_mut(side).players.iter_mut().enumerate() {
            let diff = ball - player.current_pos;
            let is_closest = closest == Some(PlayerRef::new(side, index));

            let near_ball = is_between(diff.x, -DEFENCE_CONVERGE_RANGE, DEFENCE_CONVERGE_RANGE)
                && is_between(diff.y, -DEFENCE_CONVERGE_RANGE, DEFENCE_CONVERGE_RANGE);

            player.intent_pos = if near_ball || is_closest {
                ball
            } else if ball_on_opposite_side {
                Vector2::new(
                    player.origin_pos.x,
                    Self::relative_y(player, pitch_side, PUSH_UP, height).trunc(),
                )
            } else {
                player.origin_pos
            };
        }
    }

    fn set_attack_relative(state: &mut MatchState, side: TeamSide) {
        let height = state.pitch.height;
        let pitch_side = state.team(side).pitch_side(&state.pitch);

        for player in state.team_mut(side).players.iter_mut() {
            let y = Self::relative_y(player, pitch_side, PUSH_UP, height).trunc();
            player.intent_pos = Vector2::new(player.origin_pos.x, y);
        }
    }

    fn set_loose_intent(state: &mut MatchState, side: TeamSide, closest: Option<PlayerRef>) {
        let height = state.pitch.height;
        let ball = state.ball.position_2d();
        let direction = state.ball.direction;
        let pitch_side = state.team(side).pitch_side(&state.pitch);

        for (index, player) in state.team_mut(side).players.iter_mut().enumerate() {
            let diff = ball - player.current_pos;

            if closest == Some(PlayerRef::new(side, index))
                || (is_between(diff.x, -LOOSE_CONVERGE_RANGE, LOOSE_CONVERGE_RANGE)
                    && is_between(diff.y, -LOOSE_CONVERGE_RANGE, LOOSE_CONVERGE_RANGE))
            {
                player.intent_pos = ball;
                continue;
            }

            let new_y = match (pitch_side, direction) {
                (PitchSide::Top, d) if d.is_northwards() => None,
                (PitchSide::Top, d) if d.is_southwards() => {
                    Some(Self::relative_y(player, PitchSide::Top, PUSH_UP, height))
                }
                (PitchSide::Bottom, d) if d.is_northwards() => {
                    Some(Self::relative_y(player, PitchSide::Bottom, PUSH_UP, height))
                }
                (PitchSide::Bottom, d) if d.is_southwards() => {
                    if is_between(diff.y, -LOOSE_HOLD_RANGE, LOOSE_HOLD_RANGE) {
                        None
                    } else {
                        Self::towards_ball(player, pitch_side, diff.y, height)
                    }
                }
                (_, BallDirection::Wait) => Self::towards_ball(player, pitch_side, diff.y, height),
                _ => None,
            };

            let new_y = new_y.filter(|y| *y != 0.0).unwrap_or(player.origin_pos.y);

            player.intent_pos = Vector2::new(player.origin_pos.x, new_y);
        }
    }

    fn towards_ball(player: &MatchPlayer, side: PitchSide, diff_y: f32, height: f32) -> Option<f32> {
        if diff_y == 0.0 {
            return None;
        }

        let towards_goal = match side {
            PitchSide::Top => diff_y > 0.0,
            PitchSide::Bottom => diff_y < 0.0,
        };

        let push = if towards_goal { PUSH_UP } else { -PUSH_UP };

        Some(Self::relative_y(player, side, push, height))
    }

    /// Moves `push` units upfield from the current spot, but no further than the role allows.
    pub fn relative_y(player: &MatchPlayer, side: PitchSide, push: f32, height: f32) -> f32 {
        let cap = Self::role_cap(player.position, side, height);

        match side {
            PitchSide::Top => up_to_max(player.current_pos.y + push, cap),
            PitchSide::Bottom => up_to_min(player.current_pos.y - push, cap),
        }
    }

    /// Deepest upfield y a role may push to when defending `side`.
    pub fn role_cap(position: PlayerPositionType, side: PitchSide, height: f32) -> f32 {
        let (top, bottom) = match position {
            PlayerPositionType::GK => (0.15, 0.85),
            PlayerPositionType::CB => (0.25, 0.75),
            PlayerPositionType::LB | PlayerPositionType::RB => (0.66, 0.33),
            PlayerPositionType::CM => (0.75, 0.25),
            _ => (1.0, 0.0),
        };

        match side {
            PitchSide::Top => height * top,
            PitchSide::Bottom => height * bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::test_support::state;

    #[test]
    fn test_role_caps_mirror() {
        assert!((IntentPlanner::role_cap(PlayerPositionType::GK, PitchSide::Top, 100.0) - 15.0).abs() < 1e-4);
        assert_eq!(IntentPlanner::role_cap(PlayerPositionType::CB, PitchSide::Bottom, 100.0), 75.0);
        assert_eq!(IntentPlanner::role_cap(PlayerPositionType::ST, PitchSide::Bottom, 100.0), 0.0);
        assert_eq!(IntentPlanner::role_cap(PlayerPositionType::LM, PitchSide::Top, 100.0), 100.0);
    }

    #[test]
    fn test_closest_player_to_ball() {
        let mut state = state();
        state.ball.position.x = 41.0;
        state.ball.position.y = 66.0;

        let closest = IntentPlanner::closest_player_to_ball(&mut state, TeamSide::KickOff);

        assert_eq!(closest, Some(PlayerRef::new(TeamSide::KickOff, 9)));
        assert_eq!(state.iteration_log, vec![String::from("Closest Player to ball: Home 9")]);
    }

    #[test]
    fn test_closest_player_skips_sent_off() {
        let mut state = state();
        state.ball.position.x = 40.0;
        state.ball.position.y = 65.0;
        state.kick_off_team.players[9].dismiss();

        let closest = IntentPlanner::closest_player_to_ball(&mut state, TeamSide::KickOff);

        assert_ne!(closest, Some(PlayerRef::new(TeamSide::KickOff, 9)));
    }

    #[test]
    fn test_attacking_team_pushes_up_to_cap() {
        let mut state = state();
        let holder = PlayerRef::new(TeamSide::KickOff, 9);
        state.give_ball(holder);

        IntentPlanner::set_intent_positions(&mut state, Some(holder), None);

        let team = &state.kick_off_team;
        // keeper at y = 0 is capped at 0.15 * 140
        assert_eq!(team.players[0].intent_pos, Vector2::new(50.0, 20.0));
        assert_eq!(team.players[2].intent_pos, Vector2::new(35.0, 35.0));
        assert_eq!(team.players[9].intent_pos, Vector2::new(40.0, 85.0));
    }

    #[test]
    fn test_defending_team_converges_on_near_ball() {
        let mut state = state();
        let holder = PlayerRef::new(TeamSide::KickOff, 9);
        state.give_ball(holder);

        let chaser = PlayerRef::new(TeamSide::Second, 0);
        IntentPlanner::set_intent_positions(&mut state, None, Some(chaser));

        let ball = state.ball.position_2d();
        let team = &state.second_team;

        // striker near the ball, keeper as the named chaser
        assert_eq!(team.players[9].intent_pos, ball);
        assert_eq!(team.players[0].intent_pos, ball);
        // ball in the other half, far players push up
        assert_eq!(team.players[1].intent_pos, Vector2::new(10.0, 100.0));
    }

    #[test]
    fn test_defending_team_holds_shape_in_own_half() {
        let mut state = state();
        let holder = PlayerRef::new(TeamSide::Second, 9);
        state.player_mut(holder).current_pos = Vector2::new(40.0, 50.0);
        state.give_ball(holder);

        IntentPlanner::set_intent_positions(&mut state, None, None);

        let team = &state.kick_off_team;
        assert_eq!(team.players[4].intent_pos, team.players[4].origin_pos);
    }

    #[test]
    fn test_loose_ball_players_near_target_it() {
        let mut state = state();
        state.ball.position.x = 40.0;
        state.ball.position.y = 60.0;
        state.ball.direction = BallDirection::North;

        IntentPlanner::set_intent_positions(&mut state, None, None);

        let ball = state.ball.position_2d();
        assert_eq!(state.kick_off_team.players[9].intent_pos, ball);
        // top team with the ball heading north holds its shape
        assert_eq!(state.kick_off_team.players[1].intent_pos, state.kick_off_team.players[1].origin_pos);
        // bottom team with the ball heading north pushes up
        assert_eq!(state.second_team.players[1].intent_pos, Vector2::new(10.0, 100.0));
    }
}
