use crate::r#match::engine::field::{is_between, PitchSide};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{MatchTeam, TeamSide};

/// Band of y values between a defending keeper and the last outfield defender.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OffsideLine {
    pub keeper: f32,
    pub last_defender: f32,
}

impl OffsideLine {
    pub fn contains(&self, y: f32) -> bool {
        let low = self.keeper.min(self.last_defender);
        let high = self.keeper.max(self.last_defender);

        is_between(y, low, high)
    }
}

pub struct OffsideEngine;

impl OffsideEngine {
    /// Recomputes every offside flag. A loose ball leaves the flags from the last pass alone.
    pub fn check_offside(state: &mut MatchState) {
        if state.ball.with_team.is_none() {
            return;
        }

        for defending in [TeamSide::KickOff, TeamSide::Second] {
            let field = state.pitch;
            let defending_side = state.team(defending).pitch_side(&field);
            let line = Self::offside_line(state.team(defending), defending_side, field.height);

            let attackers = state.team_mut(defending.opposite());

            Self::flag_attackers(attackers, defending_side, line);
        }
    }

    pub fn offside_line(defenders: &MatchTeam, side: PitchSide, height: f32) -> OffsideLine {
        let mut line = OffsideLine {
            keeper: match side {
                PitchSide::Top => 0.0,
                PitchSide::Bottom => height,
            },
            last_defender: height / 2.0,
        };

        for player in defenders.players.iter().filter(|p| p.on_pitch()) {
            let y = player.current_pos.y;

            if player.position.is_goalkeeper() {
                line.keeper = y;

                if player.has_ball {
                    line.last_defender = y;
                    return line;
                }

                continue;
            }

            let deeper = match side {
                PitchSide::Top => y < line.last_defender,
                PitchSide::Bottom => y > line.last_defender,
            };

            if deeper {
                line.last_defender = y;
            }
        }

        line
    }

    fn flag_attackers(attackers: &mut MatchTeam, defending_side: PitchSide, line: OffsideLine) {
        attackers.players.iter_mut().for_each(|p| p.offside = false);

        let most_advanced = attackers
            .players
            .iter()
            .filter(|p| p.on_pitch())
            .min_by(|a, b| {
                let (a, b) = (a.current_pos.y, b.current_pos.y);
                match defending_side {
                    PitchSide::Top => a.total_cmp(&b),
                    PitchSide::Bottom => b.total_cmp(&a),
                }
            });

        if most_advanced.is_some_and(|p| p.has_ball && line.contains(p.current_pos.y)) {
            return;
        }

        for player in attackers.players.iter_mut().filter(|p| p.on_pitch()) {
            if !player.has_ball && line.contains(player.current_pos.y) {
                player.offside = true;
            }
        }
    }
}
