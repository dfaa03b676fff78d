use crate::r#match::definitions::{PitchDefinition, TeamDefinition};
use crate::r#match::engine::ball::BallPhysics;
use crate::r#match::engine::engine::FootballEngine;
use crate::r#match::engine::error::MatchResult;
use crate::r#match::engine::random::SeededRng;
use crate::r#match::engine::state::MatchState;
use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Independent matches between the same two rosters, each with its own state and seed.
pub struct MatchBatch<'a> {
    pub team1: &'a TeamDefinition,
    pub team2: &'a TeamDefinition,
    pub pitch: &'a PitchDefinition,
    pub iterations: usize,
}

impl<'a> MatchBatch<'a> {
    pub fn new(
        team1: &'a TeamDefinition,
        team2: &'a TeamDefinition,
        pitch: &'a PitchDefinition,
        iterations: usize,
    ) -> Self {
        MatchBatch {
            team1,
            team2,
            pitch,
            iterations,
        }
    }

    /// Plays `matches` full matches on the rayon pool. Match `i` is seeded with `seed + i`,
    /// so results come back in seed order whatever the scheduling.
    pub fn play_parallel<P: BallPhysics + Sync>(
        &self,
        engine: &FootballEngine<P>,
        matches: usize,
        seed: u64,
    ) -> Vec<MatchResult<MatchState>> {
        info!("playing {} matches from seed {}", matches, seed);

        (0..matches)
            .into_par_iter()
            .map(|idx| {
                let mut rng = SeededRng::new(seed.wrapping_add(idx as u64));

                engine.play(self.team1, self.team2, self.pitch, self.iterations, &mut rng)
            })
            .collect()
    }
}
