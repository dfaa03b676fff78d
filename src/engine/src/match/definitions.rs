use crate::r#match::engine::error::{MatchError, MatchResult};
use crate::r#match::engine::field::MatchField;
use crate::r#match::engine::player::{
    MatchPlayer, PlayerPositionType, PlayerSkills, PlayerStats, PlayerStatus, NO_ACTION,
};
use crate::r#match::engine::team::{MatchTeam, SubstitutionTracker, TeamIntent, TeamStatistics, ROSTER_SIZE};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Substitutes get ids above the starting eleven.
const SUB_ID_OFFSET: u32 = 50;

const DEFAULT_GOAL_WIDTH: f32 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDefinition {
    pub name: String,
    pub position: PlayerPositionType,
    pub rating: f32,
    pub skill: PlayerSkills,
    #[serde(rename = "currentPOS")]
    pub current_pos: Vector2<f32>,
    pub fitness: f32,
    pub injured: bool,
}

impl PlayerDefinition {
    fn to_match_player(&self, id: u32) -> MatchPlayer {
        MatchPlayer {
            id,
            name: self.name.clone(),
            position: self.position,
            rating: self.rating,
            skill: self.skill,
            current_pos: self.current_pos,
            origin_pos: self.current_pos,
            intent_pos: self.current_pos,
            fitness: self.fitness,
            injured: self.injured,
            has_ball: false,
            offside: false,
            action: NO_ACTION.to_string(),
            status: PlayerStatus::Active,
            stats: PlayerStats::default(),
        }
    }
}

/// A roster as supplied by the caller, before the engine assigns ids and baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDefinition {
    pub name: String,
    pub players: Vec<PlayerDefinition>,
    #[serde(default)]
    pub subs: Vec<PlayerDefinition>,
}

impl TeamDefinition {
    pub fn from_json(json: &str) -> MatchResult<Self> {
        let team: TeamDefinition = serde_json::from_str(json)?;
        team.validate()?;

        Ok(team)
    }

    pub fn validate(&self) -> MatchResult<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::MalformedInput(String::from("No team name given.")));
        }

        if self.players.len() != ROSTER_SIZE {
            return Err(MatchError::MalformedInput(format!(
                "There must be {} players in a team, {} has {}",
                ROSTER_SIZE,
                self.name,
                self.players.len()
            )));
        }

        for player in self.players.iter().chain(self.subs.iter()) {
            if player.name.trim().is_empty() {
                return Err(MatchError::MalformedInput(format!(
                    "player without a name in team {}",
                    self.name
                )));
            }

            if !player.fitness.is_finite() || !player.rating.is_finite() {
                return Err(MatchError::MalformedInput(format!(
                    "player {} has a non-numeric rating or fitness",
                    player.name
                )));
            }
        }

        Ok(())
    }

    /// Runtime team: ids `team_id * 100 + slot`, baselines taken from the supplied positions.
    pub fn to_match_team(&self, team_id: u32) -> MatchTeam {
        let base = team_id * 100;

        let players: Vec<MatchPlayer> = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, p)| p.to_match_player(base + idx as u32))
            .collect();

        let subs = self
            .subs
            .iter()
            .enumerate()
            .map(|(idx, p)| p.to_match_player(base + SUB_ID_OFFSET + idx as u32))
            .collect();

        let rating = if players.is_empty() {
            0.0
        } else {
            players.iter().map(|p| p.rating).sum::<f32>() / players.len() as f32
        };

        MatchTeam {
            id: team_id,
            name: self.name.clone(),
            rating,
            intent: TeamIntent::Attack,
            players,
            subs,
            statistics: TeamStatistics::default(),
            substitutions: SubstitutionTracker::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDefinition {
    pub pitch_width: f32,
    pub pitch_height: f32,
    #[serde(default = "default_goal_width")]
    pub goal_width: f32,
}

fn default_goal_width() -> f32 {
    DEFAULT_GOAL_WIDTH
}

impl PitchDefinition {
    pub fn from_json(json: &str) -> MatchResult<Self> {
        let pitch: PitchDefinition = serde_json::from_str(json)?;
        pitch.validate()?;

        Ok(pitch)
    }

    pub fn validate(&self) -> MatchResult<()> {
        if !(self.pitch_width > 0.0 && self.pitch_height > 0.0) {
            return Err(MatchError::MalformedInput(String::from(
                "Please provide pitchWidth and pitchHeight",
            )));
        }

        if !(self.goal_width > 0.0 && self.goal_width <= self.pitch_width) {
            return Err(MatchError::MalformedInput(format!(
                "goal width {} does not fit a pitch {} wide",
                self.goal_width, self.pitch_width
            )));
        }

        Ok(())
    }

    pub fn field(&self) -> MatchField {
        MatchField::new(self.pitch_width, self.pitch_height, self.goal_width)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::r#match::engine::test_support::FORMATION;

    pub fn team_definition(name: &str) -> TeamDefinition {
        let players = FORMATION
            .iter()
            .enumerate()
            .map(|(idx, (position, x, y))| PlayerDefinition {
                name: format!("{} {}", name, idx),
                position: *position,
                rating: 50.0,
                skill: PlayerSkills::flat(50.0),
                current_pos: Vector2::new(*x, *y),
                fitness: 100.0,
                injured: false,
            })
            .collect();

        TeamDefinition {
            name: name.to_string(),
            players,
            subs: Vec::new(),
        }
    }

    pub fn pitch_definition() -> PitchDefinition {
        PitchDefinition {
            pitch_width: 100.0,
            pitch_height: 140.0,
            goal_width: 20.0,
        }
    }

    const PLAYER_JSON: &str = r#"{
        "name": "Peter Johnson",
        "position": "ST",
        "rating": "88",
        "skill": {
            "passing": 20, "shooting": 20, "tackling": 20, "saving": 20,
            "agility": 20, "strength": 20, "penalty_taking": 20, "jumping": 20
        },
        "currentPOS": [340, 0],
        "fitness": 100,
        "injured": false
    }"#;

    #[test]
    fn test_pitch_from_json_defaults_goal_width() {
        let pitch = PitchDefinition::from_json(r#"{"pitchWidth": 680, "pitchHeight": 1050}"#).unwrap();

        assert_eq!(pitch.goal_width, 90.0);
        assert_eq!(pitch.field(), MatchField::new(680.0, 1050.0, 90.0));
    }

    #[test]
    fn test_pitch_without_height_is_malformed() {
        let result = PitchDefinition::from_json(r#"{"pitchWidth": 680}"#);

        assert!(matches!(result, Err(MatchError::MalformedInput(_))));
    }

    #[test]
    fn test_zero_sized_pitch_is_rejected() {
        let mut pitch = pitch_definition();
        pitch.pitch_height = 0.0;

        assert!(pitch.validate().is_err());
    }

    #[test]
    fn test_player_rating_must_be_numeric() {
        // ratings arrive as numbers, a quoted rating is malformed
        let result = serde_json::from_str::<PlayerDefinition>(PLAYER_JSON);

        assert!(result.is_err());

        let fixed = PLAYER_JSON.replace("\"88\"", "88");
        let player: PlayerDefinition = serde_json::from_str(&fixed).unwrap();

        assert_eq!(player.rating, 88.0);
        assert_eq!(player.current_pos, Vector2::new(340.0, 0.0));
        assert_eq!(player.position, PlayerPositionType::ST);
    }

    #[test]
    fn test_team_needs_name_and_eleven_players() {
        let mut team = team_definition("Reds");
        assert!(team.validate().is_ok());

        team.players.pop();
        assert!(matches!(team.validate(), Err(MatchError::MalformedInput(_))));

        let mut unnamed = team_definition("Reds");
        unnamed.name = String::from("  ");
        assert!(matches!(unnamed.validate(), Err(MatchError::MalformedInput(_))));
    }

    #[test]
    fn test_to_match_team_assigns_ids_and_baselines() {
        let mut definition = team_definition("Reds");
        definition.players[3].rating = 72.0;
        definition.subs.push(definition.players[6].clone());

        let team = definition.to_match_team(2);

        assert_eq!(team.id, 2);
        assert_eq!(team.players[0].id, 200);
        assert_eq!(team.players[10].id, 210);
        assert_eq!(team.subs[0].id, 250);
        assert_eq!(team.rating, 52.0);
        assert_eq!(team.intent, TeamIntent::Attack);

        let cb = &team.players[2];
        assert_eq!(cb.origin_pos, Vector2::new(35.0, 20.0));
        assert_eq!(cb.intent_pos, cb.current_pos);
        assert_eq!(cb.action, NO_ACTION);
        assert!(cb.on_pitch());
        assert_eq!(cb.stats, PlayerStats::default());
    }
}
