use crate::r#match::engine::ball::Ball;
use crate::r#match::engine::field::MatchField;
use crate::r#match::engine::player::{
    MatchPlayer, PlayerPositionType, PlayerSkills, PlayerStats, PlayerStatus, NO_ACTION,
};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{MatchTeam, SubstitutionTracker, TeamIntent, TeamStatistics};
use nalgebra::Vector2;

pub const FORMATION: [(PlayerPositionType, f32, f32); 11] = [
    (PlayerPositionType::GK, 50.0, 0.0),
    (PlayerPositionType::LB, 10.0, 20.0),
    (PlayerPositionType::CB, 35.0, 20.0),
    (PlayerPositionType::CB, 65.0, 20.0),
    (PlayerPositionType::RB, 90.0, 20.0),
    (PlayerPositionType::LM, 10.0, 45.0),
    (PlayerPositionType::CM, 35.0, 45.0),
    (PlayerPositionType::CM, 65.0, 45.0),
    (PlayerPositionType::RM, 90.0, 45.0),
    (PlayerPositionType::ST, 40.0, 65.0),
    (PlayerPositionType::ST, 60.0, 65.0),
];

pub fn field() -> MatchField {
    MatchField::new(100.0, 140.0, 20.0)
}

pub fn player(id: u32, name: &str, position: PlayerPositionType, x: f32, y: f32) -> MatchPlayer {
    let pos = Vector2::new(x, y);

    MatchPlayer {
        id,
        name: name.to_string(),
        position,
        rating: 50.0,
        skill: PlayerSkills::flat(50.0),
        current_pos: pos,
        origin_pos: pos,
        intent_pos: pos,
        fitness: 100.0,
        injured: false,
        has_ball: false,
        offside: false,
        action: NO_ACTION.to_string(),
        status: PlayerStatus::Active,
        stats: PlayerStats::default(),
    }
}

/// Flat 50-skill 4-4-2 on a 100x140 pitch, defending y = 0 unless `bottom`.
pub fn team(id: u32, name: &str, bottom: bool) -> MatchTeam {
    let players = FORMATION
        .iter()
        .enumerate()
        .map(|(idx, (position, x, y))| {
            let y = if bottom { 140.0 - y } else { *y };
            player(id * 100 + idx as u32, &format!("{} {}", name, idx), *position, *x, y)
        })
        .collect();

    MatchTeam {
        id,
        name: name.to_string(),
        rating: 50.0,
        intent: TeamIntent::Attack,
        players,
        subs: vec![player(id * 100 + 50, &format!("{} sub", name), PlayerPositionType::CM, 0.0, 0.0)],
        statistics: TeamStatistics::default(),
        substitutions: SubstitutionTracker::default(),
    }
}

/// Kick-off team defends the top goal, second team the bottom one. Nobody holds the ball.
pub fn state() -> MatchState {
    let field = field();

    let mut second_team = team(2, "Away", true);
    second_team.intent = TeamIntent::Defend;

    MatchState {
        match_id: 1,
        pitch: field,
        half: 1,
        kick_off_team: team(1, "Home", false),
        second_team,
        ball: Ball::with_coord(&field),
        iteration_log: Vec::new(),
        end_iteration: false,
    }
}
