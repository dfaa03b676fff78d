use engine::{MatchRng, PlayerDefinition, PlayerPositionType, PlayerSkills};
use nalgebra::Vector2;

const SKILL_SPREAD: f32 = 15.0;
const SPECIALIST_BONUS: f32 = 15.0;

pub struct PlayerGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl PlayerGenerator {
    pub fn with_names(first_names: &[String], last_names: &[String]) -> Self {
        PlayerGenerator {
            first_names: first_names.to_vec(),
            last_names: last_names.to_vec(),
        }
    }

    /// A player around `level`, stronger in the skill its role leans on.
    pub fn generate(
        &self,
        position: PlayerPositionType,
        level: f32,
        spot: Vector2<f32>,
        rng: &mut dyn MatchRng,
    ) -> PlayerDefinition {
        let skill = Self::generate_skills(position, level, rng);

        PlayerDefinition {
            name: self.generate_name(rng),
            position,
            rating: Self::rating(&skill),
            skill,
            current_pos: spot,
            fitness: 100.0,
            injured: false,
        }
    }

    fn generate_name(&self, rng: &mut dyn MatchRng) -> String {
        let first = rng.pick(&self.first_names).map(String::as_str).unwrap_or("Player");
        let last = rng.pick(&self.last_names).map(String::as_str).unwrap_or("Unknown");

        format!("{} {}", first, last)
    }

    fn generate_skills(position: PlayerPositionType, level: f32, rng: &mut dyn MatchRng) -> PlayerSkills {
        let mut roll = |bonus: f32| -> f32 {
            let low = (level - SKILL_SPREAD + bonus).clamp(1.0, 99.0);
            let high = (level + SKILL_SPREAD + bonus).clamp(1.0, 99.0);

            rng.random_between(low, high)
        };

        let mut skill = PlayerSkills {
            passing: roll(if position.is_midfielder() { SPECIALIST_BONUS } else { 0.0 }),
            shooting: roll(if position == PlayerPositionType::ST { SPECIALIST_BONUS } else { 0.0 }),
            tackling: roll(if position.is_defender() { SPECIALIST_BONUS } else { 0.0 }),
            saving: roll(-SKILL_SPREAD * 2.0),
            agility: roll(0.0),
            strength: roll(0.0),
            penalty_taking: roll(0.0),
            jumping: roll(0.0),
        };

        if position.is_goalkeeper() {
            skill.saving = roll(SPECIALIST_BONUS * 2.0);
        }

        skill
    }

    fn rating(skill: &PlayerSkills) -> f32 {
        let total = skill.passing
            + skill.shooting
            + skill.tackling
            + skill.saving
            + skill.agility
            + skill.strength
            + skill.penalty_taking
            + skill.jumping;

        (total / 8.0).round()
    }
}
