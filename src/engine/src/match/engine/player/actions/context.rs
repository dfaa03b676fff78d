use crate::r#match::engine::field::{is_between, MatchField, PitchSide};
use crate::r#match::engine::player::{MatchPlayer, PlayerPositionType, PlayerRef};
use crate::r#match::engine::state::MatchState;
use nalgebra::Vector2;

/// Nearest other player of a squad: where it is and its offset from the reference point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Proximity {
    pub player_id: u32,
    pub position: Vector2<f32>,
    pub offset: Vector2<f32>,
}

impl Proximity {
    pub fn manhattan(&self) -> f32 {
        self.offset.x.abs() + self.offset.y.abs()
    }
}

/// Closest on-pitch player of `players` to `position`, skipping `exclude_id`.
pub fn closest_player_to_position(
    players: &[MatchPlayer],
    exclude_id: Option<u32>,
    position: &Vector2<f32>,
) -> Option<Proximity> {
    let mut closest: Option<Proximity> = None;

    for player in players.iter().filter(|p| p.on_pitch() && Some(p.id) != exclude_id) {
        let candidate = Proximity {
            player_id: player.id,
            position: player.current_pos,
            offset: player.current_pos - position,
        };

        if closest.is_none_or(|c| candidate.manhattan() < c.manhattan()) {
            closest = Some(candidate);
        }
    }

    closest
}

/// Snapshot of everything action selection looks at for one player.
#[derive(Debug, Copy, Clone)]
pub struct ActionContext {
    pub field: MatchField,
    pub position: PlayerPositionType,
    pub current: Vector2<f32>,
    pub origin: Vector2<f32>,
    pub shooting: f32,
    pub has_ball: bool,
    /// Player position minus ball position.
    pub ball_offset: Vector2<f32>,
    pub ball_loose: bool,
    pub opponent: Option<Proximity>,
    pub teammate: Option<Proximity>,
}

impl ActionContext {
    pub fn new(state: &MatchState, player_ref: PlayerRef, ball_offset: Vector2<f32>) -> Self {
        let player = state.player(player_ref);
        let team = state.team(player_ref.side);
        let opposition = state.team(player_ref.side.opposite());

        ActionContext {
            field: state.pitch,
            position: player.position,
            current: player.current_pos,
            origin: player.origin_pos,
            shooting: player.skill.shooting,
            has_ball: player.has_ball,
            ball_offset,
            ball_loose: !state.ball.with_player(),
            opponent: closest_player_to_position(&opposition.players, None, &player.current_pos),
            teammate: closest_player_to_position(&team.players, Some(player.id), &player.current_pos),
        }
    }

    pub fn side(&self) -> PitchSide {
        PitchSide::from_origin_y(self.origin.y, self.field.height)
    }

    pub fn y(&self) -> f32 {
        self.current.y
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    pub fn is_midfielder(&self) -> bool {
        self.position.is_midfielder()
    }

    pub fn is_striker(&self) -> bool {
        self.position == PlayerPositionType::ST
    }

    pub fn opposition_near(&self, space_x: f32, space_y: f32) -> bool {
        self.opponent
            .is_some_and(|o| o.offset.x.abs() < space_x && o.offset.y.abs() < space_y)
    }

    pub fn teammate_space(&self, low_y: f32, high_y: f32) -> bool {
        self.teammate.is_some_and(|t| {
            is_between(t.offset.x.abs(), -10.0, 10.0) && is_between(t.offset.y.abs(), low_y, high_y)
        })
    }

    /// Nearest opponent roughly in line and further down the pitch.
    pub fn opposition_below(&self) -> bool {
        self.opponent.is_some_and(|o| {
            is_between(o.position.x, self.current.x - 4.0, self.current.x + 4.0)
                && o.position.y > self.current.y
        })
    }

    /// Nearest opponent roughly in line and further up the pitch.
    pub fn opposition_ahead(&self) -> bool {
        self.opponent.is_some_and(|o| {
            is_between(o.position.x, self.current.x - 4.0, self.current.x + 4.0)
                && o.position.y < self.current.y
        })
    }

    pub fn ball_within(&self, range: f32) -> bool {
        is_between(self.ball_offset.x, -range, range) && is_between(self.ball_offset.y, -range, range)
    }

    pub fn in_own_box(&self) -> bool {
        match self.side() {
            PitchSide::Top => self.field.in_top_box(&self.current),
            PitchSide::Bottom => self.field.in_bottom_box(&self.current),
        }
    }

    pub fn y_between(&self, low: f32, high: f32) -> bool {
        is_between(self.current.y, low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::team::TeamSide;
    use crate::r#match::engine::test_support::state;

    #[test]
    fn test_closest_player_skips_self_and_sent_off() {
        let mut state = state();
        let target = state.kick_off_team.players[6].current_pos;

        let closest = closest_player_to_position(
            &state.kick_off_team.players,
            Some(state.kick_off_team.players[6].id),
            &target,
        )
        .unwrap();
        assert_ne!(closest.player_id, state.kick_off_team.players[6].id);

        state.kick_off_team.players[6].dismiss();
        let closest = closest_player_to_position(&state.kick_off_team.players, None, &target).unwrap();
        assert_ne!(closest.player_id, state.kick_off_team.players[6].id);
    }

    #[test]
    fn test_proximity_offset_points_from_reference() {
        let state = state();
        let reference = Vector2::new(50.0, 3.0);

        let closest = closest_player_to_position(&state.kick_off_team.players, None, &reference).unwrap();

        assert_eq!(closest.player_id, state.kick_off_team.players[0].id);
        assert_eq!(closest.offset, Vector2::new(0.0, -3.0));
    }

    #[test]
    fn test_context_sides_and_opposition() {
        let mut state = state();
        state.second_team.players[9].current_pos = Vector2::new(42.0, 60.0);

        let player_ref = PlayerRef::new(TeamSide::KickOff, 9);
        let ctx = ActionContext::new(&state, player_ref, Vector2::new(0.0, 0.0));

        assert_eq!(ctx.side(), PitchSide::Top);
        assert!(ctx.opposition_near(10.0, 10.0));
        assert!(ctx.opposition_ahead());
        assert!(!ctx.opposition_below());
    }
}
