use crate::error::{DatabaseError, DatabaseResult};
use engine::PitchDefinition;

const STATIC_PITCH_JSON: &str = include_str!("../data/pitch.json");

pub struct PitchLoader;

impl PitchLoader {
    pub fn load_fixture() -> DatabaseResult<PitchDefinition> {
        Ok(PitchDefinition::from_json(STATIC_PITCH_JSON)?)
    }

    pub fn from_file(path: &str) -> DatabaseResult<PitchDefinition> {
        let json = std::fs::read_to_string(path).map_err(|e| DatabaseError::io(path, e))?;

        Ok(PitchDefinition::from_json(&json)?)
    }
}
