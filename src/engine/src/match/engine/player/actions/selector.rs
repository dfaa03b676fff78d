use crate::r#match::engine::error::{MatchError, MatchResult};
use crate::r#match::engine::player::actions::{
    evaluate, ActionContext, ActionWeights, PlayerAction, ACTION_RULES, BALL_RELEASE_ACTIONS,
    NO_WEIGHTS, WEIGHTED_ACTIONS,
};
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::state::MatchState;
use log::warn;

pub struct ActionSelector;

impl ActionSelector {
    pub fn find_possible_actions(ctx: &ActionContext) -> ActionWeights {
        evaluate(&ACTION_RULES, ctx)
            .map(|(_, weights)| weights)
            .unwrap_or(NO_WEIGHTS)
    }

    /// Uniform draw over a pool holding every action once per weight point.
    pub fn select_action(weights: &ActionWeights, rng: &mut dyn MatchRng) -> PlayerAction {
        let total: i32 = weights.iter().map(|&w| w as i32).sum();

        if total == 0 {
            return PlayerAction::Wait;
        }

        let mut draw = rng.random_int(0, total - 1);

        for (action, &weight) in WEIGHTED_ACTIONS.iter().zip(weights.iter()) {
            if draw < weight as i32 {
                return *action;
            }
            draw -= weight as i32;
        }

        PlayerAction::Wait
    }

    /// Applies a caller-forced action, swapping it out when possession makes it impossible.
    pub fn check_provided_action(
        state: &mut MatchState,
        player_ref: PlayerRef,
        action: PlayerAction,
        rng: &mut dyn MatchRng,
    ) -> MatchResult<PlayerAction> {
        let player = state.player(player_ref);

        if !player.is_action_forced() {
            return Ok(action);
        }

        let provided: PlayerAction =
            player
                .action
                .parse()
                .map_err(|_| MatchError::InvalidPlayerAction {
                    player: player.name.clone(),
                    action: player.action.clone(),
                })?;

        let holds_ball = state.ball.player == Some(player.id);

        let replacement = if !holds_ball && provided.is_ball_action() {
            PlayerAction::Run
        } else if holds_ball && provided.is_contact() {
            let idx = rng.random_int(0, BALL_RELEASE_ACTIONS.len() as i32 - 1) as usize;
            BALL_RELEASE_ACTIONS[idx]
        } else {
            return Ok(provided);
        };

        let notice = MatchError::IllegalBallAction {
            player: player.name.clone(),
            action: provided.to_string(),
            replacement: replacement.to_string(),
        };

        warn!("{}", notice);
        state.log(notice.to_string());

        Ok(replacement)
    }
}
