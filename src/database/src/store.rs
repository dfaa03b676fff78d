use crate::error::{DatabaseError, DatabaseResult};
use engine::MatchState;
use log::info;

pub struct MatchStore;

impl MatchStore {
    pub fn save(path: &str, state: &MatchState) -> DatabaseResult<()> {
        let json = state.to_json()?;

        std::fs::write(path, json).map_err(|e| DatabaseError::io(path, e))?;

        info!("match {} saved to {}", state.match_id, path);

        Ok(())
    }

    pub fn load(path: &str) -> DatabaseResult<MatchState> {
        let json = std::fs::read_to_string(path).map_err(|e| DatabaseError::io(path, e))?;

        Ok(MatchState::from_json(&json)?)
    }
}
