use crate::r#match::engine::random::MatchRng;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Strict open-interval check used by every zone predicate.
#[inline]
pub fn is_between(num: f32, low: f32, high: f32) -> bool {
    num > low && num < high
}

#[inline]
pub fn up_to_max(num: f32, max: f32) -> f32 {
    if num > max { max } else { num }
}

#[inline]
pub fn up_to_min(num: f32, min: f32) -> f32 {
    if num < min { min } else { num }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum PitchSide {
    Top,
    Bottom,
}

impl PitchSide {
    /// Top side defends y = 0 and attacks towards y = height.
    pub fn from_origin_y(origin_y: f32, height: f32) -> Self {
        if origin_y > height / 2.0 {
            PitchSide::Bottom
        } else {
            PitchSide::Top
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            PitchSide::Top => PitchSide::Bottom,
            PitchSide::Bottom => PitchSide::Top,
        }
    }

    /// Sign of the y axis when moving upfield.
    pub fn forward(self) -> f32 {
        match self {
            PitchSide::Top => 1.0,
            PitchSide::Bottom => -1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchField {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
}

impl MatchField {
    pub fn new(width: f32, height: f32, goal_width: f32) -> Self {
        MatchField {
            width,
            height,
            goal_width,
        }
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Goal-mouth posts, both exclusive.
    pub fn posts(&self) -> (f32, f32) {
        let mid = (self.width / 2.0).floor();
        let half_goal = (self.goal_width / 2.0).floor();

        (mid - half_goal, mid + half_goal)
    }

    pub fn in_goal_mouth(&self, x: f32) -> bool {
        let (left, right) = self.posts();
        is_between(x, left, right)
    }

    /// Tolerated player coordinate range, one unit beyond each line.
    pub fn contains_player(&self, position: &Vector2<f32>) -> bool {
        is_between(position.x, -1.0, self.width + 1.0) && is_between(position.y, -1.0, self.height + 1.0)
    }

    pub fn clamp(&self, position: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            position.x.clamp(0.0, self.width),
            position.y.clamp(0.0, self.height),
        )
    }

    /// Penalty area used when awarding a penalty at the top end.
    pub fn in_top_penalty(&self, position: &Vector2<f32>) -> bool {
        self.in_penalty_width(position.x) && is_between(position.y, -1.0, self.height / 6.0 + 7.0)
    }

    pub fn in_bottom_penalty(&self, position: &Vector2<f32>) -> bool {
        self.in_penalty_width(position.x)
            && is_between(position.y, self.height - self.height / 6.0 - 7.0, self.height + 1.0)
    }

    fn in_penalty_width(&self, x: f32) -> bool {
        is_between(x, self.width / 4.0 + 5.0, self.width - self.width / 4.0 - 5.0)
    }

    /// Box zone used for action selection, slightly wider and shallower than the penalty area.
    pub fn in_top_box(&self, position: &Vector2<f32>) -> bool {
        is_between(position.x, self.width / 4.0 - 5.0, self.width - self.width / 4.0 + 5.0)
            && is_between(position.y, 0.0, self.height / 6.0 - 5.0)
    }

    pub fn in_top_box_close(&self, position: &Vector2<f32>) -> bool {
        is_between(position.x, self.width / 3.0 - 5.0, self.width - self.width / 3.0 + 5.0)
            && is_between(position.y, 0.0, self.height / 12.0 - 5.0)
    }

    pub fn in_bottom_box(&self, position: &Vector2<f32>) -> bool {
        is_between(position.x, self.width / 4.0 - 5.0, self.width - self.width / 4.0 + 5.0)
            && is_between(position.y, self.height - self.height / 6.0 + 5.0, self.height)
    }

    pub fn in_bottom_box_close(&self, position: &Vector2<f32>) -> bool {
        is_between(position.x, self.width / 3.0 - 5.0, self.width - self.width / 3.0 + 5.0)
            && is_between(position.y, self.height - self.height / 12.0 + 5.0, self.height)
    }

    pub fn on_top_corner(&self, position: &Vector2<f32>) -> bool {
        position.y == 0.0 && (position.x == 0.0 || position.x == self.width)
    }

    pub fn on_bottom_corner(&self, position: &Vector2<f32>) -> bool {
        position.y == self.height && (position.x == 0.0 || position.x == self.width)
    }

    pub fn random_top_penalty_position(&self, rng: &mut dyn MatchRng) -> Vector2<f32> {
        Vector2::new(
            rng.random_between(self.width / 4.0 + 6.0, self.width - self.width / 4.0 - 6.0),
            rng.random_between(0.0, self.height / 6.0 + 6.0),
        )
    }

    pub fn random_bottom_penalty_position(&self, rng: &mut dyn MatchRng) -> Vector2<f32> {
        Vector2::new(
            rng.random_between(self.width / 4.0 + 6.0, self.width - self.width / 4.0 - 6.0),
            rng.random_between(self.height - self.height / 6.0 + 6.0, self.height),
        )
    }

    /// Random spot inside the penalty area that `side` attacks.
    pub fn random_attacked_penalty_position(
        &self,
        side: PitchSide,
        rng: &mut dyn MatchRng,
    ) -> Vector2<f32> {
        match side {
            PitchSide::Top => self.random_bottom_penalty_position(rng),
            PitchSide::Bottom => self.random_top_penalty_position(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::random::SeededRng;

    fn field() -> MatchField {
        MatchField::new(100.0, 140.0, 20.0)
    }

    #[test]
    fn test_is_between_is_strict() {
        assert!(is_between(5.0, 4.0, 6.0));
        assert!(!is_between(4.0, 4.0, 6.0));
        assert!(!is_between(6.0, 4.0, 6.0));
    }

    #[test]
    fn test_posts_and_goal_mouth() {
        let field = field();

        assert_eq!(field.posts(), (40.0, 60.0));
        assert!(field.in_goal_mouth(50.0));
        assert!(!field.in_goal_mouth(40.0));
        assert!(!field.in_goal_mouth(61.0));
    }

    #[test]
    fn test_penalty_areas() {
        let field = field();

        let cases = [
            (Vector2::new(50.0, 10.0), true, false),
            (Vector2::new(50.0, 130.0), false, true),
            (Vector2::new(50.0, 70.0), false, false),
            (Vector2::new(10.0, 10.0), false, false),
            (Vector2::new(29.0, 130.0), false, false),
            (Vector2::new(31.0, 130.0), false, true),
        ];

        for (position, top, bottom) in cases {
            assert_eq!(field.in_top_penalty(&position), top, "{:?}", position);
            assert_eq!(field.in_bottom_penalty(&position), bottom, "{:?}", position);
        }
    }

    #[test]
    fn test_action_boxes() {
        let field = field();

        assert!(field.in_top_box(&Vector2::new(50.0, 10.0)));
        assert!(!field.in_top_box(&Vector2::new(50.0, 20.0)));
        assert!(field.in_bottom_box(&Vector2::new(50.0, 125.0)));
        assert!(!field.in_bottom_box(&Vector2::new(50.0, 140.0)));

        assert!(field.in_top_box_close(&Vector2::new(50.0, 5.0)));
        assert!(!field.in_top_box_close(&Vector2::new(50.0, 7.0)));
        assert!(field.in_bottom_box_close(&Vector2::new(50.0, 135.0)));
        assert!(!field.in_bottom_box_close(&Vector2::new(20.0, 135.0)));
    }

    #[test]
    fn test_corners() {
        let field = field();

        assert!(field.on_top_corner(&Vector2::new(0.0, 0.0)));
        assert!(field.on_top_corner(&Vector2::new(100.0, 0.0)));
        assert!(!field.on_top_corner(&Vector2::new(50.0, 0.0)));
        assert!(field.on_bottom_corner(&Vector2::new(100.0, 140.0)));
        assert!(!field.on_bottom_corner(&Vector2::new(100.0, 139.0)));
    }

    #[test]
    fn test_contains_player_tolerance() {
        let field = field();

        assert!(field.contains_player(&Vector2::new(-0.5, 140.5)));
        assert!(!field.contains_player(&Vector2::new(-1.0, 70.0)));
        assert!(!field.contains_player(&Vector2::new(50.0, 141.0)));
    }

    #[test]
    fn test_random_penalty_positions_inside_area() {
        let field = field();
        let mut rng = SeededRng::new(11);

        for _ in 0..100 {
            let top = field.random_top_penalty_position(&mut rng);
            assert!(top.x >= 31.0 && top.x <= 69.0);
            assert!(top.y >= 0.0 && top.y <= 29.0);

            let bottom = field.random_bottom_penalty_position(&mut rng);
            assert!(bottom.y >= 123.0 && bottom.y <= 140.0);
        }
    }

    #[test]
    fn test_pitch_side() {
        assert_eq!(PitchSide::from_origin_y(0.0, 140.0), PitchSide::Top);
        assert_eq!(PitchSide::from_origin_y(140.0, 140.0), PitchSide::Bottom);
        assert_eq!(PitchSide::Top.opposite(), PitchSide::Bottom);
        assert_eq!(PitchSide::Bottom.forward(), -1.0);
    }
}
