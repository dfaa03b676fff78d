use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Source of every random draw the engine makes.
pub trait MatchRng {
    /// Uniform integer in `[min, max]`. Returns `min` when the range is empty.
    fn random_int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn random_float(&mut self) -> f32;
}

impl dyn MatchRng + '_ {
    /// Inclusive draw over float bounds, rounding them inwards first.
    pub fn random_between(&mut self, min: f32, max: f32) -> f32 {
        self.random_int(min.ceil() as i32, max.floor() as i32) as f32
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let idx = self.random_int(0, items.len() as i32 - 1) as usize;

        items.get(idx)
    }
}

pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MatchRng for SeededRng {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }

        self.rng.random_range(min..=max)
    }

    fn random_float(&mut self) -> f32 {
        self.rng.random_range(0.0..1.0)
    }
}

/// Replays queued integer draws, falling back to the lower bound once empty.
#[cfg(test)]
pub struct ScriptedRng {
    draws: std::collections::VecDeque<i32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(draws: &[i32]) -> Self {
        ScriptedRng {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl MatchRng for ScriptedRng {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        match self.draws.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }

    fn random_float(&mut self) -> f32 {
        0.0
    }
}
