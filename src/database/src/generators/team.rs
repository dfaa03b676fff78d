use crate::error::DatabaseResult;
use crate::generators::PlayerGenerator;
use crate::loaders::{NamesEntity, NamesLoader};
use engine::{MatchRng, PitchDefinition, PlayerPositionType, TeamDefinition};
use log::debug;
use nalgebra::Vector2;

/// 4-4-2 laid out as fractions of the pitch, defending the top goal.
const FORMATION: [(PlayerPositionType, f32, f32); 11] = [
    (PlayerPositionType::GK, 0.5, 0.0),
    (PlayerPositionType::LB, 0.12, 0.08),
    (PlayerPositionType::CB, 0.34, 0.08),
    (PlayerPositionType::CB, 0.66, 0.08),
    (PlayerPositionType::RB, 0.88, 0.08),
    (PlayerPositionType::LM, 0.12, 0.26),
    (PlayerPositionType::CM, 0.34, 0.26),
    (PlayerPositionType::CM, 0.66, 0.26),
    (PlayerPositionType::RM, 0.88, 0.26),
    (PlayerPositionType::ST, 0.41, 0.45),
    (PlayerPositionType::ST, 0.59, 0.45),
];

const BENCH: [PlayerPositionType; 3] = [
    PlayerPositionType::GK,
    PlayerPositionType::CM,
    PlayerPositionType::ST,
];

const MIN_LEVEL: i32 = 35;
const MAX_LEVEL: i32 = 75;

pub struct TeamGenerator {
    names: NamesEntity,
    players: PlayerGenerator,
}

impl TeamGenerator {
    pub fn new() -> DatabaseResult<Self> {
        let names = NamesLoader::load()?;
        let players = PlayerGenerator::with_names(&names.first_names, &names.last_names);

        Ok(TeamGenerator { names, players })
    }

    /// A random roster for `pitch`, placed in the top half the way the engine expects input.
    pub fn generate(&self, pitch: &PitchDefinition, rng: &mut dyn MatchRng) -> TeamDefinition {
        let name = rng
            .pick(&self.names.team_names)
            .cloned()
            .unwrap_or_else(|| String::from("Generated FC"));

        let level = rng.random_int(MIN_LEVEL, MAX_LEVEL) as f32;

        let players = FORMATION
            .iter()
            .map(|(position, x, y)| {
                let spot = Vector2::new(
                    (x * pitch.pitch_width).round(),
                    (y * pitch.pitch_height).round(),
                );

                self.players.generate(*position, level, spot, rng)
            })
            .collect();

        let subs = BENCH
            .iter()
            .map(|position| self.players.generate(*position, level, Vector2::zeros(), rng))
            .collect();

        debug!("generated team {} at level {}", name, level);

        TeamDefinition { name, players, subs }
    }

    /// Two rosters with different names.
    pub fn generate_pair(
        &self,
        pitch: &PitchDefinition,
        rng: &mut dyn MatchRng,
    ) -> (TeamDefinition, TeamDefinition) {
        let first = self.generate(pitch, rng);
        let mut second = self.generate(pitch, rng);

        if second.name == first.name {
            second.name = format!("{} Reserves", second.name);
        }

        (first, second)
    }
}
