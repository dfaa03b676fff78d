use crate::r#match::engine::ball::BallDirection;
use crate::r#match::engine::field::{is_between, up_to_max, up_to_min, MatchField, PitchSide};
use crate::r#match::engine::player::{PlayerPositionType, PlayerRef};
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

/// Distance from the taker's own goal inside which the keeper's side stays deep.
pub const DEEP_FREEKICK_RANGE: f32 = 101.0;

const DEEP_DEFENCE_DROP: f32 = 100.0;
const LONG_PUSH: f32 = 300.0;
const DEFENDER_TRAIL: f32 = 100.0;
const WALL_GAP: f32 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FreekickZone {
    Deep,
    OwnHalf,
    OpponentHalf,
    OuterBox,
    Byline,
}

/// Measures the pitch from the end the free-kick team defends.
#[derive(Debug, Copy, Clone)]
struct Layout {
    field: MatchField,
    side: PitchSide,
}

impl Layout {
    fn forward(&self) -> f32 {
        self.side.forward()
    }

    fn distance_from_goal(&self, y: f32) -> f32 {
        match self.side {
            PitchSide::Top => y,
            PitchSide::Bottom => self.field.height - y,
        }
    }

    fn line(&self, top: f32, bottom: f32) -> f32 {
        match self.side {
            PitchSide::Top => self.field.height * top,
            PitchSide::Bottom => self.field.height * bottom,
        }
    }

    fn cap(&self, y: f32, top: f32, bottom: f32) -> f32 {
        match self.side {
            PitchSide::Top => up_to_max(y, self.field.height * top),
            PitchSide::Bottom => up_to_min(y, self.field.height * bottom),
        }
    }

    fn attacked_goal_y(&self) -> f32 {
        match self.side {
            PitchSide::Top => self.field.height,
            PitchSide::Bottom => 0.0,
        }
    }

    fn box_position(&self, rng: &mut dyn MatchRng) -> Vector2<f32> {
        self.field.random_attacked_penalty_position(self.side, rng)
    }

    fn upfield(&self) -> BallDirection {
        match self.side {
            PitchSide::Top => BallDirection::South,
            PitchSide::Bottom => BallDirection::North,
        }
    }

    fn angled(&self, ball_x: f32) -> BallDirection {
        let width = self.field.width;

        let centre = is_between(ball_x, width / 4.0 + 5.0, width - width / 4.0 - 5.0);
        let left = is_between(ball_x, 0.0, width / 4.0 + 4.0);

        match (self.side, centre, left) {
            (_, true, _) => self.upfield(),
            (PitchSide::Top, false, true) => BallDirection::SouthEast,
            (PitchSide::Top, false, false) => BallDirection::SouthWest,
            (PitchSide::Bottom, false, true) => BallDirection::NorthEast,
            (PitchSide::Bottom, false, false) => BallDirection::NorthWest,
        }
    }

    fn across(&self, ball_x: f32) -> BallDirection {
        if is_between(ball_x, 0.0, self.field.width / 4.0 + 4.0) {
            BallDirection::East
        } else {
            BallDirection::West
        }
    }
}

pub struct Freekick;

impl Freekick {
    /// Band of the pitch a free kick is taken from, by distance from the taker's own goal.
    pub fn zone(distance: f32, height: f32) -> FreekickZone {
        if distance < DEEP_FREEKICK_RANGE {
            FreekickZone::Deep
        } else if distance < height / 2.0 + 1.0 {
            FreekickZone::OwnHalf
        } else if distance < height - height / 4.0 {
            FreekickZone::OpponentHalf
        } else if distance < height - height / 6.0 - 5.0 {
            FreekickZone::OuterBox
        } else {
            FreekickZone::Byline
        }
    }

    /// Lays out both teams for a free kick to `side` where the ball lies.
    pub fn set(state: &mut MatchState, side: TeamSide, rng: &mut dyn MatchRng) {
        state.remove_ball_from_all_players();

        let field = state.pitch;
        let ball = field.clamp(state.ball.position_2d());
        let layout = Layout {
            field,
            side: state.team(side).pitch_side(&field),
        };

        let distance = layout.distance_from_goal(ball.y);
        let zone = Self::zone(distance, field.height);
        let keeper_takes = match zone {
            FreekickZone::Deep => true,
            FreekickZone::OwnHalf => is_between(distance, 0.0, field.height * 0.25 + 1.0),
            _ => false,
        };

        let direction = match zone {
            FreekickZone::Deep | FreekickZone::OwnHalf => {
                Self::own_half(state, side, layout, ball, zone, keeper_takes);
                layout.upfield()
            }
            FreekickZone::OpponentHalf => {
                Self::opponent_half(state, side, layout, ball, rng);
                layout.angled(ball.x)
            }
            FreekickZone::OuterBox => {
                Self::final_third(state, side, layout, ball, zone, rng);
                layout.angled(ball.x)
            }
            FreekickZone::Byline => {
                Self::final_third(state, side, layout, ball, zone, rng);
                layout.across(ball.x)
            }
        };

        let taker_slot = match (zone, keeper_takes) {
            (_, true) => 0,
            (FreekickZone::OwnHalf, false) => 3,
            _ => 5,
        };

        let Some(taker) = state.team(side).available_index(taker_slot) else {
            SetPieceDispatcher::no_taker(state, side, "free kick", ball);
            return;
        };

        let taker = PlayerRef::new(side, taker);
        state.place_player(taker, ball);
        state.give_ball(taker);
        state.ball.direction = direction;
        state.end_iteration = true;
    }

    fn own_half(
        state: &mut MatchState,
        side: TeamSide,
        layout: Layout,
        ball: Vector2<f32>,
        zone: FreekickZone,
        keeper_takes: bool,
    ) {
        let forward = layout.forward();

        Self::arrange(state, side, |_, position, origin| {
            let y = if zone == FreekickZone::Deep {
                return Some(origin);
            } else if keeper_takes {
                layout.cap(origin.y + forward * LONG_PUSH, 0.9, 0.1)
            } else {
                let push = ball.y + forward * LONG_PUSH;
                match position {
                    PlayerPositionType::GK => layout.cap(push, 0.25, 0.75),
                    p if p.is_defender() => layout.cap(push, 0.5, 0.5),
                    p if p.is_midfielder() => layout.cap(push, 0.75, 0.25),
                    _ => layout.cap(push, 0.9, 0.1),
                }
            };

            Some(Vector2::new(origin.x, y.trunc()))
        });

        Self::arrange(state, side.opposite(), |_, position, origin| {
            if position.is_goalkeeper() {
                return Some(origin);
            }

            if keeper_takes {
                return Some(Vector2::new(origin.x, origin.y - forward * DEEP_DEFENCE_DROP));
            }

            let y = match position {
                p if p.is_defender() => return Some(origin),
                p if p.is_midfielder() => layout.line(0.75, 0.25) + forward * 5.0,
                _ => layout.line(0.5, 0.5),
            };

            Some(Vector2::new(origin.x, y.trunc()))
        });
    }

    fn opponent_half(
        state: &mut MatchState,
        side: TeamSide,
        layout: Layout,
        ball: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) {
        let forward = layout.forward();

        Self::arrange(state, side, |_, position, origin| {
            let y = match position {
                PlayerPositionType::GK => layout.line(0.25, 0.75),
                p if p.is_defender() => layout.cap(ball.y - forward * DEFENDER_TRAIL, 0.5, 0.5),
                p if p.is_midfielder() => {
                    let push = rng.random_int(150, 300) as f32;
                    layout.cap(ball.y + forward * push, 0.75, 0.25)
                }
                _ => {
                    let push = rng.random_int(300, 400) as f32;
                    layout.cap(ball.y + forward * push, 0.9, 0.1)
                }
            };

            Some(Vector2::new(origin.x, y.trunc()))
        });

        Self::arrange(state, side.opposite(), |_, position, origin| {
            let y = match position {
                p if p.is_goalkeeper() || p.is_defender() => return Some(origin),
                p if p.is_midfielder() => layout.line(0.75, 0.25),
                _ => layout.line(0.5, 0.5),
            };

            Some(Vector2::new(origin.x, y.trunc()))
        });
    }

    /// Attack floods the box; the defence builds a wall between the ball and the goal.
    fn final_third(
        state: &mut MatchState,
        side: TeamSide,
        layout: Layout,
        ball: Vector2<f32>,
        zone: FreekickZone,
        rng: &mut dyn MatchRng,
    ) {
        let forward = layout.forward();

        Self::arrange(state, side, |_, position, origin| {
            let y = match position {
                PlayerPositionType::GK => layout.line(0.25, 0.75),
                PlayerPositionType::CB => layout.line(0.5, 0.5),
                p if p.is_full_back() => layout.line(0.66, 0.33),
                _ => return Some(layout.box_position(rng)),
            };

            Some(Vector2::new(origin.x, y.trunc()))
        });

        let wall_x = ((ball.x + layout.field.width / 2.0) / 2.0).trunc();
        let wall_y = ((ball.y + layout.attacked_goal_y()) / 2.0).trunc();
        let mut spacing = -3.0;
        let mut byline_y = (ball.y + forward * 3.0).clamp(0.0, layout.field.height);

        Self::arrange(state, side.opposite(), |_, position, origin| {
            if position.is_goalkeeper() {
                return Some(origin);
            }

            if !position.is_defender() {
                return Some(layout.box_position(rng));
            }

            if zone == FreekickZone::Byline {
                let spot = Vector2::new(wall_x, byline_y);
                byline_y -= forward * WALL_GAP;
                Some(spot)
            } else {
                let spot = Vector2::new(wall_x + spacing, wall_y);
                spacing += WALL_GAP;
                Some(spot)
            }
        });
    }

    fn arrange(
        state: &mut MatchState,
        side: TeamSide,
        mut spot: impl FnMut(usize, PlayerPositionType, Vector2<f32>) -> Option<Vector2<f32>>,
    ) {
        for index in 0..state.team(side).players.len() {
            let player = &state.team(side).players[index];

            if !player.on_pitch() {
                continue;
            }

            if let Some(target) = spot(index, player.position, player.origin_pos) {
                state.place_player(PlayerRef::new(side, index), target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::random::SeededRng;
    use crate::r#match::engine::test_support::state;

    #[test]
    fn test_zone_bands() {
        let height = 1050.0;

        assert_eq!(Freekick::zone(50.0, height), FreekickZone::Deep);
        assert_eq!(Freekick::zone(300.0, height), FreekickZone::OwnHalf);
        assert_eq!(Freekick::zone(525.5, height), FreekickZone::OwnHalf);
        assert_eq!(Freekick::zone(600.0, height), FreekickZone::OpponentHalf);
        assert_eq!(Freekick::zone(800.0, height), FreekickZone::OuterBox);
        assert_eq!(Freekick::zone(900.0, height), FreekickZone::Byline);
        assert_eq!(Freekick::zone(1050.0, height), FreekickZone::Byline);
    }

    #[test]
    fn test_deep_freekick_keeper_takes() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.ball.set_ground_position(Vector2::new(50.0, 60.0));

        Freekick::set(&mut state, TeamSide::KickOff, &mut rng);

        let keeper = PlayerRef::new(TeamSide::KickOff, 0);
        assert_eq!(state.holder(), Some(keeper));
        assert_eq!(state.player(keeper).current_pos, Vector2::new(50.0, 60.0));
        assert_eq!(state.ball.direction, BallDirection::South);
        assert_eq!(state.second_team.players[2].current_pos, Vector2::new(35.0, 20.0));
        assert_eq!(state.second_team.players[0].current_pos, Vector2::new(50.0, 140.0));
        assert!(state.end_iteration);
    }

    #[test]
    fn test_bottom_team_deep_freekick_heads_north() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.ball.set_ground_position(Vector2::new(50.0, 100.0));

        Freekick::set(&mut state, TeamSide::Second, &mut rng);

        assert_eq!(state.holder(), Some(PlayerRef::new(TeamSide::Second, 0)));
        assert_eq!(state.ball.direction, BallDirection::North);
        // defence pushed 100 units towards the bottom goal
        assert_eq!(state.kick_off_team.players[9].current_pos, Vector2::new(40.0, 140.0));
    }

    #[test]
    fn test_opponent_half_freekick() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.ball.set_ground_position(Vector2::new(50.0, 103.0));

        Freekick::set(&mut state, TeamSide::KickOff, &mut rng);

        let taker = PlayerRef::new(TeamSide::KickOff, 5);
        assert_eq!(state.holder(), Some(taker));
        assert_eq!(state.ball.direction, BallDirection::South);
        assert_eq!(state.kick_off_team.players[0].current_pos, Vector2::new(50.0, 35.0));
        assert_eq!(state.kick_off_team.players[2].current_pos, Vector2::new(35.0, 3.0));
        assert_eq!(state.second_team.players[2].current_pos, state.second_team.players[2].origin_pos);
        assert_eq!(state.second_team.players[6].current_pos, Vector2::new(35.0, 105.0));
    }

    #[test]
    fn test_outer_box_freekick_builds_wall() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.ball.set_ground_position(Vector2::new(80.0, 108.0));

        Freekick::set(&mut state, TeamSide::KickOff, &mut rng);

        assert_eq!(state.ball.direction, BallDirection::SouthWest);

        let wall: Vec<_> = state.second_team.players[1..5].iter().map(|p| p.current_pos).collect();
        assert_eq!(
            wall,
            vec![
                Vector2::new(62.0, 124.0),
                Vector2::new(64.0, 124.0),
                Vector2::new(66.0, 124.0),
                Vector2::new(68.0, 124.0),
            ]
        );
    }

    #[test]
    fn test_byline_freekick_lines_defenders_up() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.ball.set_ground_position(Vector2::new(10.0, 130.0));

        Freekick::set(&mut state, TeamSide::KickOff, &mut rng);

        assert_eq!(state.ball.direction, BallDirection::East);
        assert_eq!(state.second_team.players[1].current_pos, Vector2::new(30.0, 133.0));
        assert_eq!(state.second_team.players[4].current_pos, Vector2::new(30.0, 127.0));
        assert_eq!(state.kick_off_team.players[3].current_pos, Vector2::new(65.0, 70.0));
    }

    #[test]
    fn test_freekick_without_players_ends_tick() {
        let mut state = state();
        let mut rng = SeededRng::new(2);
        state.give_ball(PlayerRef::new(TeamSide::Second, 6));
        state.ball.set_ground_position(Vector2::new(50.0, 70.0));
        for player in state.kick_off_team.players.iter_mut() {
            player.dismiss();
        }

        Freekick::set(&mut state, TeamSide::KickOff, &mut rng);

        assert_eq!(state.holder(), None);
        assert!(!state.second_team.players[6].has_ball);
        assert_eq!(state.ball.position_2d(), Vector2::new(50.0, 70.0));
        assert!(state.end_iteration);
    }
}
