use crate::r#match::engine::field::{MatchField, PitchSide};
use crate::r#match::engine::player::MatchPlayer;
use serde::{Deserialize, Serialize};

pub const ROSTER_SIZE: usize = 11;

/// Fixed labels for the two teams of a match. They never swap, even at half-time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    KickOff,
    Second,
}

impl TeamSide {
    pub fn opposite(self) -> Self {
        match self {
            TeamSide::KickOff => TeamSide::Second,
            TeamSide::Second => TeamSide::KickOff,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamIntent {
    Attack,
    Defend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub goals: u32,
    pub fouls: u32,
    pub corners: u32,
    pub freekicks: u32,
    pub penalties: u32,
    pub throw_ins: u32,
    pub goal_kicks: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionTracker {
    pub substitutions: u32,
    pub windows: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    #[serde(rename = "teamID")]
    pub id: u32,
    pub name: String,
    pub rating: f32,
    pub intent: TeamIntent,
    pub players: Vec<MatchPlayer>,
    pub subs: Vec<MatchPlayer>,
    pub statistics: TeamStatistics,
    pub substitutions: SubstitutionTracker,
}

impl MatchTeam {
    /// Which end the team defends, read from the goalkeeper's formation slot.
    pub fn pitch_side(&self, field: &MatchField) -> PitchSide {
        let origin_y = self.players.first().map(|p| p.origin_pos.y).unwrap_or(0.0);

        PitchSide::from_origin_y(origin_y, field.height)
    }

    pub fn find_index(&self, player_id: u32) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.find_index(player_id).is_some()
    }

    /// `preferred` when that slot can still play, otherwise the nearest outfield slot that can.
    pub fn available_index(&self, preferred: usize) -> Option<usize> {
        if self.players.get(preferred).is_some_and(|p| p.on_pitch()) {
            return Some(preferred);
        }

        (1..self.players.len())
            .map(|offset| (preferred + offset) % self.players.len())
            .find(|&idx| idx != 0 && self.players[idx].on_pitch())
    }

    pub fn remove_ball(&mut self) {
        self.players.iter_mut().for_each(|p| p.has_ball = false);
    }

    pub fn reset_positions(&mut self) {
        self.players.iter_mut().for_each(|p| p.reset_to_origin());
    }

    /// Mirrors the formation baseline onto the other half and gives the squad a breather.
    pub fn switch_side(&mut self, height: f32) {
        for player in self.players.iter_mut() {
            player.origin_pos.y = height - player.origin_pos.y;
            player.current_pos = player.origin_pos;
            player.intent_pos = player.origin_pos;
            player.fitness = if player.fitness < 51.0 {
                crate::r#match::engine::player::round_to(player.fitness + 50.0, 2)
            } else {
                100.0
            };
        }
    }

    pub fn on_pitch_players(&self) -> impl Iterator<Item = (usize, &MatchPlayer)> {
        self.players.iter().enumerate().filter(|(_, p)| p.on_pitch())
    }
}
