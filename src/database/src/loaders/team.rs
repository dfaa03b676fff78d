use crate::error::{DatabaseError, DatabaseResult};
use engine::TeamDefinition;
use log::debug;

const STATIC_TEAM1_JSON: &str = include_str!("../data/team1.json");
const STATIC_TEAM2_JSON: &str = include_str!("../data/team2.json");

pub struct TeamLoader;

impl TeamLoader {
    /// The two bundled rosters, in the order they are passed to the engine.
    pub fn load_fixtures() -> DatabaseResult<(TeamDefinition, TeamDefinition)> {
        Ok((
            Self::from_json(STATIC_TEAM1_JSON)?,
            Self::from_json(STATIC_TEAM2_JSON)?,
        ))
    }

    pub fn from_file(path: &str) -> DatabaseResult<TeamDefinition> {
        let json = std::fs::read_to_string(path).map_err(|e| DatabaseError::io(path, e))?;

        let team = Self::from_json(&json)?;

        debug!("team {} loaded from {}", team.name, path);

        Ok(team)
    }

    pub fn from_json(json: &str) -> DatabaseResult<TeamDefinition> {
        Ok(TeamDefinition::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::MatchError;

    #[test]
    fn test_fixtures_are_valid_rosters() {
        let (team1, team2) = TeamLoader::load_fixtures().unwrap();

        assert_eq!(team1.players.len(), 11);
        assert_eq!(team2.players.len(), 11);
        assert_ne!(team1.name, team2.name);
        assert!(!team1.subs.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TeamLoader::from_file("/definitely/not/here/team.json");

        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }

    #[test]
    fn test_short_roster_is_rejected() {
        let mut team: serde_json::Value = serde_json::from_str(STATIC_TEAM1_JSON).unwrap();
        team["players"].as_array_mut().unwrap().pop();

        let result = TeamLoader::from_json(&team.to_string());

        assert!(matches!(result, Err(DatabaseError::Match(MatchError::MalformedInput(_)))));
    }
}
