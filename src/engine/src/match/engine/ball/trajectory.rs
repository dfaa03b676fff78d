use nalgebra::{Vector2, Vector3};

/// Distance a kicked ball covers in one tick.
pub const BALL_TRAVEL_PER_TICK: f32 = 10.0;

pub struct BallTrajectory;

impl BallTrajectory {
    /// Waypoints from `from` to `to`, one per tick, excluding the start.
    ///
    /// The arc peaks halfway and lands on the target. A harder strike over the same
    /// distance flies higher; once the distance reaches the power the power grows with it.
    pub fn compute(from: Vector2<f32>, to: Vector2<f32>, power: f32) -> Vec<Vector3<f32>> {
        let distance = (to - from).norm().round();

        let power = if distance >= power {
            power + distance
        } else {
            power
        };

        let peak = ((distance / 2.0).powi(2) - (power / 2.0).powi(2)).abs().sqrt();

        let steps = ((distance / BALL_TRAVEL_PER_TICK).ceil() as usize).max(1);

        (1..=steps)
            .map(|step| {
                let progress = step as f32 / steps as f32;
                let ground = from + (to - from) * progress;
                let height = peak * (1.0 - (2.0 * progress - 1.0).abs());

                Vector3::new(ground.x, ground.y, height.max(0.0))
            })
            .collect()
    }

    pub fn peak_height(trajectory: &[Vector3<f32>]) -> f32 {
        trajectory.iter().map(|p| p.z).fold(0.0, f32::max)
    }
}
