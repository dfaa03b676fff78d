use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use log::info;

pub struct Goal;

impl Goal {
    /// Credits `side` with a goal and restarts from the centre with the other team.
    pub fn set(state: &mut MatchState, side: TeamSide, rng: &mut dyn MatchRng) {
        let scorer_id = state.ball.last_touch.player_id;
        let scorer_name = state.ball.last_touch.player_name.clone();

        let team = state.team_mut(side);
        team.statistics.goals += 1;

        if let Some(scorer) = team.players.iter_mut().find(|p| Some(p.id) == scorer_id) {
            scorer.stats.goals += 1;
        }

        let message = format!("Goal Scored by - {} - ({})", scorer_name, team.name);
        info!("{}", message);
        state.log(message);

        state.ball.last_touch.clear();
        state.remove_ball_from_all_players();
        state.reset_player_positions();
        state.set_kick_off(side.opposite(), rng);
        state.end_iteration = true;
    }
}
