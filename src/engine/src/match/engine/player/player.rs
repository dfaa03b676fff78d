use crate::r#match::engine::player::PlayerPositionType;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub const NO_ACTION: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub passing: f32,
    pub shooting: f32,
    pub tackling: f32,
    pub saving: f32,
    pub agility: f32,
    pub strength: f32,
    pub penalty_taking: f32,
    pub jumping: f32,
}

impl PlayerSkills {
    pub fn flat(value: f32) -> Self {
        PlayerSkills {
            passing: value,
            shooting: value,
            tackling: value,
            saving: value,
            agility: value,
            strength: value,
            penalty_taking: value,
            jumping: value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TackleStats {
    pub total: u32,
    pub on: u32,
    pub off: u32,
    pub fouls: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStats {
    pub yellow: u32,
    pub red: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotStats {
    pub total: u32,
    pub on: u32,
    pub off: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub tackles: TackleStats,
    pub cards: CardStats,
    pub passes: u32,
    pub shots: ShotStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerStatus {
    Active,
    SentOff,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    #[serde(rename = "playerID")]
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub rating: f32,
    pub skill: PlayerSkills,
    #[serde(rename = "currentPOS")]
    pub current_pos: Vector2<f32>,
    #[serde(rename = "originPOS")]
    pub origin_pos: Vector2<f32>,
    #[serde(rename = "intentPOS")]
    pub intent_pos: Vector2<f32>,
    pub fitness: f32,
    pub injured: bool,
    pub has_ball: bool,
    pub offside: bool,
    pub action: String,
    pub status: PlayerStatus,
    pub stats: PlayerStats,
}

impl MatchPlayer {
    pub fn on_pitch(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn is_action_forced(&self) -> bool {
        self.action != NO_ACTION
    }

    /// Moves the player and its baseline targets together. Dismissed players keep their last spot.
    pub fn place_at(&mut self, position: Vector2<f32>) {
        if !self.on_pitch() {
            return;
        }

        self.current_pos = position;
        self.intent_pos = position;
    }

    pub fn reset_to_origin(&mut self) {
        self.place_at(self.origin_pos);
    }

    pub fn send_off(&mut self) {
        self.status = PlayerStatus::SentOff;
        self.has_ball = false;
        self.offside = false;
    }

    /// Returns true when the yellow escalates to a red.
    pub fn book(&mut self) -> bool {
        self.stats.cards.yellow += 1;

        if self.stats.cards.yellow >= 2 {
            self.stats.cards.red += 1;
            self.send_off();
            return true;
        }

        false
    }

    pub fn dismiss(&mut self) {
        self.stats.cards.red += 1;
        self.send_off();
    }

    pub fn tire(&mut self, amount: f32, floor: f32) {
        if self.fitness > floor {
            self.fitness = round_to(self.fitness - amount, 6);
        }
    }

    pub fn manhattan_distance(&self, position: &Vector2<f32>) -> f32 {
        (self.current_pos.x - position.x).abs() + (self.current_pos.y - position.y).abs()
    }
}

pub fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (value * factor).round() / factor
}
