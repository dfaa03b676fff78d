use crate::r#match::engine::field::MatchField;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Wait,
}

impl BallDirection {
    /// North points towards y = 0.
    pub fn from_movement(dx: f32, dy: f32) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return BallDirection::Wait;
        }

        if dx == 0.0 {
            return if dy < 0.0 { BallDirection::North } else { BallDirection::South };
        }

        if dy == 0.0 {
            return if dx < 0.0 { BallDirection::West } else { BallDirection::East };
        }

        match (dx < 0.0, dy < 0.0) {
            (true, true) => BallDirection::NorthWest,
            (false, true) => BallDirection::NorthEast,
            (true, false) => BallDirection::SouthWest,
            (false, false) => BallDirection::SouthEast,
        }
    }

    pub fn is_northwards(&self) -> bool {
        matches!(
            self,
            BallDirection::North | BallDirection::NorthEast | BallDirection::NorthWest
        )
    }

    pub fn is_southwards(&self) -> bool {
        matches!(
            self,
            BallDirection::South | BallDirection::SouthEast | BallDirection::SouthWest
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTouch {
    pub player_name: String,
    #[serde(rename = "playerID")]
    pub player_id: Option<u32>,
    #[serde(rename = "teamID")]
    pub team_id: Option<u32>,
}

impl LastTouch {
    pub fn clear(&mut self) {
        *self = LastTouch::default();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    pub position: Vector3<f32>,
    #[serde(rename = "Player")]
    pub player: Option<u32>,
    pub with_team: Option<u32>,
    pub direction: BallDirection,
    pub last_touch: LastTouch,
    pub ball_over_iterations: Vec<Vector3<f32>>,
}

impl Ball {
    pub fn with_coord(field: &MatchField) -> Self {
        Ball {
            position: Vector3::new(field.width / 2.0, field.height / 2.0, 0.0),
            player: None,
            with_team: None,
            direction: BallDirection::Wait,
            last_touch: LastTouch::default(),
            ball_over_iterations: Vec::new(),
        }
    }

    pub fn with_player(&self) -> bool {
        self.player.is_some()
    }

    pub fn is_in_flight(&self) -> bool {
        !self.ball_over_iterations.is_empty()
    }

    pub fn position_2d(&self) -> Vector2<f32> {
        self.position.xy()
    }

    pub fn set_ground_position(&mut self, position: Vector2<f32>) {
        self.position = Vector3::new(position.x, position.y, 0.0);
    }

    pub fn clear_owner(&mut self) {
        self.player = None;
        self.with_team = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_movement() {
        assert_eq!(BallDirection::from_movement(0.0, 0.0), BallDirection::Wait);
        assert_eq!(BallDirection::from_movement(0.0, -3.0), BallDirection::North);
        assert_eq!(BallDirection::from_movement(0.0, 3.0), BallDirection::South);
        assert_eq!(BallDirection::from_movement(-1.0, 0.0), BallDirection::West);
        assert_eq!(BallDirection::from_movement(1.0, 0.0), BallDirection::East);
        assert_eq!(BallDirection::from_movement(-1.0, -1.0), BallDirection::NorthWest);
        assert_eq!(BallDirection::from_movement(1.0, -1.0), BallDirection::NorthEast);
        assert_eq!(BallDirection::from_movement(-1.0, 1.0), BallDirection::SouthWest);
        assert_eq!(BallDirection::from_movement(1.0, 1.0), BallDirection::SouthEast);
    }

    #[test]
    fn test_ball_starts_loose_at_center() {
        let ball = Ball::with_coord(&MatchField::new(100.0, 140.0, 20.0));

        assert_eq!(ball.position, Vector3::new(50.0, 70.0, 0.0));
        assert!(!ball.with_player());
        assert!(!ball.is_in_flight());
    }

    #[test]
    fn test_direction_serialized_lowercase() {
        let json = serde_json::to_string(&BallDirection::NorthEast).unwrap();
        assert_eq!(json, "\"northeast\"");
    }
}
