use crate::r#match::engine::ball::Ball;
use crate::r#match::engine::error::{MatchError, MatchResult};
use crate::r#match::engine::field::MatchField;
use crate::r#match::engine::player::{MatchPlayer, PlayerRef};
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::team::{MatchTeam, TeamIntent, TeamSide, ROSTER_SIZE};
use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Everything a match carries between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    #[serde(rename = "matchID")]
    pub match_id: u64,
    pub pitch: MatchField,
    pub half: u8,
    pub kick_off_team: MatchTeam,
    pub second_team: MatchTeam,
    pub ball: Ball,
    pub iteration_log: Vec<String>,
    pub end_iteration: bool,
}

impl MatchState {
    pub fn from_json(json: &str) -> MatchResult<Self> {
        let state: MatchState = serde_json::from_str(json)?;
        state.validate()?;

        Ok(state)
    }

    pub fn to_json(&self) -> MatchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();

        debug!("{}", message);

        self.iteration_log.push(message);
    }

    pub fn team(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::KickOff => &self.kick_off_team,
            TeamSide::Second => &self.second_team,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut MatchTeam {
        match side {
            TeamSide::KickOff => &mut self.kick_off_team,
            TeamSide::Second => &mut self.second_team,
        }
    }

    /// The team on `side` and its opposition, borrowed together.
    pub fn teams_mut(&mut self, side: TeamSide) -> (&mut MatchTeam, &mut MatchTeam) {
        match side {
            TeamSide::KickOff => (&mut self.kick_off_team, &mut self.second_team),
            TeamSide::Second => (&mut self.second_team, &mut self.kick_off_team),
        }
    }

    pub fn player(&self, player: PlayerRef) -> &MatchPlayer {
        &self.team(player.side).players[player.index]
    }

    pub fn player_mut(&mut self, player: PlayerRef) -> &mut MatchPlayer {
        &mut self.team_mut(player.side).players[player.index]
    }

    pub fn side_of_team(&self, team_id: u32) -> Option<TeamSide> {
        if self.kick_off_team.id == team_id {
            Some(TeamSide::KickOff)
        } else if self.second_team.id == team_id {
            Some(TeamSide::Second)
        } else {
            None
        }
    }

    pub fn find_player(&self, player_id: u32) -> Option<PlayerRef> {
        [TeamSide::KickOff, TeamSide::Second]
            .into_iter()
            .find_map(|side| {
                self.team(side)
                    .find_index(player_id)
                    .map(|index| PlayerRef::new(side, index))
            })
    }

    pub fn holder(&self) -> Option<PlayerRef> {
        self.ball.player.and_then(|id| self.find_player(id))
    }

    pub fn remove_ball_from_all_players(&mut self) {
        self.kick_off_team.remove_ball();
        self.second_team.remove_ball();
    }

    /// Hands the ball to `player`: it becomes the only holder and its team attacks.
    pub fn give_ball(&mut self, player: PlayerRef) {
        self.remove_ball_from_all_players();

        let (team, opposition) = self.teams_mut(player.side);
        team.intent = TeamIntent::Attack;
        opposition.intent = TeamIntent::Defend;

        let team_id = team.id;
        let holder = &mut team.players[player.index];
        holder.has_ball = true;

        let (id, name, position) = (holder.id, holder.name.clone(), holder.current_pos);

        self.ball.player = Some(id);
        self.ball.with_team = Some(team_id);
        self.ball.last_touch.player_name = name;
        self.ball.last_touch.player_id = Some(id);
        self.ball.last_touch.team_id = Some(team_id);
        self.ball.ball_over_iterations.clear();
        self.ball.set_ground_position(position);
    }

    pub fn set_goalie_has_ball(&mut self, goalie: PlayerRef) {
        self.give_ball(goalie);

        let name = self.player(goalie).name.clone();
        self.log(format!("{} has the ball", name));
    }

    /// The holder lets go: the ball is loose and both teams chase it.
    pub fn release_ball(&mut self, player: PlayerRef) {
        self.player_mut(player).has_ball = false;
        self.ball.clear_owner();
        self.kick_off_team.intent = TeamIntent::Attack;
        self.second_team.intent = TeamIntent::Attack;
    }

    /// Puts a player on a restart spot, kept inside the pitch.
    pub fn place_player(&mut self, player: PlayerRef, position: Vector2<f32>) {
        let position = self.pitch.clamp(position);
        self.player_mut(player).place_at(position);
    }

    pub fn reset_player_positions(&mut self) {
        self.kick_off_team.reset_positions();
        self.second_team.reset_positions();
    }

    /// Centres the ball with slot 9 or 10 of `side` on it and the other forward alongside.
    pub fn set_kick_off(&mut self, side: TeamSide, rng: &mut dyn MatchRng) {
        let center = self.pitch.center();

        let preferred = rng.random_int(9, 10) as usize;
        let waiting = if preferred == 9 { 10 } else { 9 };

        let Some(kicker) = self.team(side).available_index(preferred) else {
            self.ball.set_ground_position(center);
            self.ball.clear_owner();
            return;
        };

        self.player_mut(PlayerRef::new(side, kicker)).place_at(center);

        if waiting != kicker {
            if let Some(partner) = self.team_mut(side).players.get_mut(waiting) {
                partner.place_at(Vector2::new(center.x + 20.0, center.y));
            }
        }

        self.give_ball(PlayerRef::new(side, kicker));
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerRef, &MatchPlayer)> {
        [TeamSide::KickOff, TeamSide::Second]
            .into_iter()
            .flat_map(move |side| {
                self.team(side)
                    .players
                    .iter()
                    .enumerate()
                    .map(move |(index, player)| (PlayerRef::new(side, index), player))
            })
    }

    pub fn validate(&self) -> MatchResult<()> {
        if self.pitch.width <= 0.0 || self.pitch.height <= 0.0 {
            return Err(MatchError::MalformedInput(String::from(
                "pitch width and height must be positive",
            )));
        }

        for team in [&self.kick_off_team, &self.second_team] {
            if team.players.len() != ROSTER_SIZE {
                return Err(MatchError::MalformedInput(format!(
                    "team {} must have {} players, found {}",
                    team.name,
                    ROSTER_SIZE,
                    team.players.len()
                )));
            }
        }

        self.validate_player_positions()
    }

    pub fn validate_player_positions(&self) -> MatchResult<()> {
        for (_, player) in self.players().filter(|(_, p)| p.on_pitch()) {
            let position = player.current_pos;

            if !(position.x > -1.0 && position.x < self.pitch.width + 1.0) {
                return Err(MatchError::OutOfBoundsPosition {
                    player: player.name.clone(),
                    axis: 'X',
                    value: position.x,
                });
            }

            if !(position.y > -1.0 && position.y < self.pitch.height + 1.0) {
                return Err(MatchError::OutOfBoundsPosition {
                    player: player.name.clone(),
                    axis: 'Y',
                    value: position.y,
                });
            }
        }

        Ok(())
    }
}
