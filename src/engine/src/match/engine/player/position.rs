use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    GK,
    CB,
    LB,
    RB,
    CM,
    LM,
    RM,
    ST,
}

impl PlayerPositionType {
    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::GK
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::CB | PlayerPositionType::LB | PlayerPositionType::RB
        )
    }

    pub fn is_full_back(&self) -> bool {
        matches!(self, PlayerPositionType::LB | PlayerPositionType::RB)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::CM | PlayerPositionType::LM | PlayerPositionType::RM
        )
    }

    pub fn get_short_name(&self) -> &'static str {
        match *self {
            PlayerPositionType::GK => "GK",
            PlayerPositionType::CB => "CB",
            PlayerPositionType::LB => "LB",
            PlayerPositionType::RB => "RB",
            PlayerPositionType::CM => "CM",
            PlayerPositionType::LM => "LM",
            PlayerPositionType::RM => "RM",
            PlayerPositionType::ST => "ST",
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_short_name())
    }
}
