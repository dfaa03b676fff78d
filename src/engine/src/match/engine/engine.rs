use crate::r#match::definitions::{PitchDefinition, TeamDefinition};
use crate::r#match::engine::ball::{Ball, BallDirection, BallPhysics, DefaultBallPhysics};
use crate::r#match::engine::error::MatchResult;
use crate::r#match::engine::field::is_between;
use crate::r#match::engine::injury::InjuryModel;
use crate::r#match::engine::player::{
    ActionContext, ActionSelector, IntentPlanner, OffsideEngine, PlayerAction, PlayerMovement,
    PlayerRef, TackleKind, TackleResolver, NO_ACTION,
};
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::{MatchState, StateManager};
use crate::r#match::engine::team::{TeamSide, ROSTER_SIZE};
use log::{debug, info};

/// Distance on each axis inside which a player reaches the ball.
const BALL_REACH: f32 = 3.0;

pub struct FootballEngine<P: BallPhysics = DefaultBallPhysics> {
    physics: P,
}

impl Default for FootballEngine<DefaultBallPhysics> {
    fn default() -> Self {
        Self::new()
    }
}

impl FootballEngine<DefaultBallPhysics> {
    pub fn new() -> Self {
        FootballEngine {
            physics: DefaultBallPhysics::new(),
        }
    }
}

impl<P: BallPhysics> FootballEngine<P> {
    pub fn with_physics(physics: P) -> Self {
        FootballEngine { physics }
    }

    /// Builds the opening state: validated rosters, a drawn kick-off team and the ball on the spot.
    pub fn initiate_game(
        &self,
        team1: &TeamDefinition,
        team2: &TeamDefinition,
        pitch: &PitchDefinition,
        rng: &mut dyn MatchRng,
    ) -> MatchResult<MatchState> {
        team1.validate()?;
        team2.validate()?;
        pitch.validate()?;

        let field = pitch.field();

        let first = team1.to_match_team(1);
        let second = team2.to_match_team(2);

        let (kick_off_team, mut second_team) = if rng.random_int(0, 1) == 0 {
            (first, second)
        } else {
            (second, first)
        };

        second_team.switch_side(field.height);

        let mut state = MatchState {
            match_id: rng.random_int(0, i32::MAX) as u64,
            pitch: field,
            half: 1,
            kick_off_team,
            second_team,
            ball: Ball::with_coord(&field),
            iteration_log: Vec::new(),
            end_iteration: false,
        };

        info!("Team to kick off - {}", state.kick_off_team.name);

        let (kick_off_name, second_name) =
            (state.kick_off_team.name.clone(), state.second_team.name.clone());
        state.log(format!("Team to kick off - {}", kick_off_name));
        state.log(format!("Second team - {}", second_name));

        state.set_kick_off(TeamSide::KickOff, rng);
        state.validate()?;

        Ok(state)
    }

    /// Advances the match by one tick.
    pub fn play_iteration(&self, mut state: MatchState, rng: &mut dyn MatchRng) -> MatchResult<MatchState> {
        state.validate()?;

        state.iteration_log.clear();
        state.end_iteration = false;

        InjuryModel::match_injury(&mut state, TeamSide::KickOff, rng);
        InjuryModel::match_injury(&mut state, TeamSide::Second, rng);

        self.physics.move_ball(&mut state, rng);

        if state.end_iteration {
            return Ok(state);
        }

        let kick_off_closest = IntentPlanner::closest_player_to_ball(&mut state, TeamSide::KickOff);
        let second_closest = IntentPlanner::closest_player_to_ball(&mut state, TeamSide::Second);

        IntentPlanner::set_intent_positions(&mut state, kick_off_closest, second_closest);

        // the kick-off team moves first and can win the ball before the second team acts
        self.decide_movement(&mut state, TeamSide::KickOff, kick_off_closest, rng)?;

        if !state.end_iteration {
            self.decide_movement(&mut state, TeamSide::Second, second_closest, rng)?;
        }

        if state.end_iteration {
            return Ok(state);
        }

        if !state.ball.is_in_flight() || state.ball.with_team.is_some() {
            OffsideEngine::check_offside(&mut state);
        }

        state.validate_player_positions()?;

        Ok(state)
    }

    /// Mirrors both teams, resets the formation and hands the kick-off to the second team.
    pub fn start_second_half(&self, mut state: MatchState, rng: &mut dyn MatchRng) -> MatchResult<MatchState> {
        state.validate()?;

        let height = state.pitch.height;
        state.kick_off_team.switch_side(height);
        state.second_team.switch_side(height);

        state.remove_ball_from_all_players();
        state.reset_player_positions();
        state.ball = Ball::with_coord(&state.pitch);

        state.iteration_log.clear();
        state.end_iteration = false;

        let name = state.second_team.name.clone();
        info!("Second Half Started: {} to kick offs", name);
        state.log(format!("Second Half Started: {} to kick offs", name));

        state.set_kick_off(TeamSide::Second, rng);
        state.half += 1;

        Ok(state)
    }

    /// Plays a whole match of `iterations` ticks per half.
    pub fn play(
        &self,
        team1: &TeamDefinition,
        team2: &TeamDefinition,
        pitch: &PitchDefinition,
        iterations: usize,
        rng: &mut dyn MatchRng,
    ) -> MatchResult<MatchState> {
        let mut state = self.initiate_game(team1, team2, pitch, rng)?;

        let mut state_manager = StateManager::new();

        while let Some(period) = state_manager.next() {
            debug!("match period: {:?}", period);

            if period.need_switch_sides() {
                state = self.start_second_half(state, rng)?;
            } else if period.is_playing() {
                for _ in 0..iterations {
                    state = self.play_iteration(state, rng)?;
                }
            }
        }

        info!(
            "Full time: {} {} - {} {}",
            state.kick_off_team.name,
            state.kick_off_team.statistics.goals,
            state.second_team.statistics.goals,
            state.second_team.name
        );

        Ok(state)
    }

    fn decide_movement(
        &self,
        state: &mut MatchState,
        side: TeamSide,
        closest: Option<PlayerRef>,
        rng: &mut dyn MatchRng,
    ) -> MatchResult<()> {
        let team_id = state.team(side).id;

        for index in 0..ROSTER_SIZE {
            let player_ref = PlayerRef::new(side, index);

            if !state.player(player_ref).on_pitch() {
                continue;
            }

            let ball = state.ball.position_2d();
            let mut ball_offset = state.player(player_ref).current_pos - ball;

            let context = ActionContext::new(state, player_ref, ball_offset);
            let weights = ActionSelector::find_possible_actions(&context);
            let selected = ActionSelector::select_action(&weights, rng);
            let mut action = ActionSelector::check_provided_action(state, player_ref, selected, rng)?;

            let opposition_holds = state.ball.with_team.is_some_and(|team| team != team_id);

            if opposition_holds && closest == Some(player_ref) {
                if !action.is_contact() {
                    action = PlayerAction::Sprint;
                }
                ball_offset = PlayerMovement::clamp_closest_offset(ball_offset);
            }

            let movement = PlayerMovement::get_movement(state, player_ref, action, ball_offset, rng);
            let current = state.player(player_ref).current_pos;
            state.player_mut(player_ref).current_pos =
                PlayerMovement::complete_movement(&state.pitch, current, movement);

            self.resolve_possession(state, player_ref, action, rng);

            if state.end_iteration {
                return Ok(());
            }

            if state.player(player_ref).has_ball {
                self.handle_ball_actions(state, player_ref, action, rng);

                if state.end_iteration {
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    /// Tackles, slides or a plain pick-up once a player has reached the ball.
    fn resolve_possession(
        &self,
        state: &mut MatchState,
        player_ref: PlayerRef,
        action: PlayerAction,
        rng: &mut dyn MatchRng,
    ) {
        let ball = state.ball.position_2d();
        let (position, has_ball) = {
            let player = state.player(player_ref);
            (player.current_pos, player.has_ball)
        };

        let within_reach = is_between(position.x, ball.x - BALL_REACH, ball.x + BALL_REACH)
            && is_between(position.y, ball.y - BALL_REACH, ball.y + BALL_REACH);

        if !within_reach {
            return;
        }

        let team_id = state.team(player_ref.side).id;
        let with_player = state.ball.with_player();

        if state.ball.with_team == Some(team_id) {
            if !with_player {
                Self::take_ball(state, player_ref, rng);
            }
            return;
        }

        let challenges_holder = with_player && !has_ball;

        if position == ball {
            if challenges_holder {
                match action {
                    PlayerAction::Tackle => {
                        TackleResolver::resolve(state, player_ref, TackleKind::Tackle, rng);
                    }
                    PlayerAction::Slide => {
                        TackleResolver::resolve(state, player_ref, TackleKind::Slide, rng);
                    }
                    _ => {}
                }
            } else {
                Self::take_ball(state, player_ref, rng);
            }
        } else if challenges_holder {
            if action == PlayerAction::Slide {
                TackleResolver::resolve(state, player_ref, TackleKind::Slide, rng);
            }
        } else {
            Self::take_ball(state, player_ref, rng);
        }
    }

    fn take_ball(state: &mut MatchState, player_ref: PlayerRef, rng: &mut dyn MatchRng) {
        let (id, name, offside) = {
            let player = state.player(player_ref);
            (player.id, player.name.clone(), player.offside)
        };

        if offside {
            state.log(format!("{} is offside", name));
            SetPieceDispatcher::award_set_piece(state, player_ref.side.opposite(), rng);
            return;
        }

        if state.ball.player == Some(id) {
            return;
        }

        state.give_ball(player_ref);
        state.log(format!("Ball taken by: {}", name));
    }

    /// Keeps the ball at the holder's feet and plays it when the action releases it.
    fn handle_ball_actions(
        &self,
        state: &mut MatchState,
        player_ref: PlayerRef,
        action: PlayerAction,
        rng: &mut dyn MatchRng,
    ) {
        let position = state.player(player_ref).current_pos;
        let travel = position - state.ball.position_2d();

        state.ball.direction = BallDirection::from_movement(travel.x, travel.y);
        state.ball.set_ground_position(position);

        if !action.is_ball_action() {
            return;
        }

        state.release_ball(player_ref);

        let target = match action {
            PlayerAction::Cleared | PlayerAction::Boot => self.physics.kick(state, player_ref, rng),
            PlayerAction::Pass => {
                let target = self.physics.pass(state, player_ref, rng);
                state.log(format!("passed to new position: [{}, {}]", target.x, target.y));
                target
            }
            PlayerAction::Cross => {
                let target = self.physics.cross(state, player_ref, rng);
                state.log(format!("crossed to new position: [{}, {}]", target.x, target.y));
                target
            }
            PlayerAction::ThroughBall => self.physics.through_ball(state, player_ref, rng),
            PlayerAction::Shoot => self.physics.shot(state, player_ref, rng),
            PlayerAction::Penalty => {
                state.player_mut(player_ref).action = NO_ACTION.to_string();
                self.physics.penalty(state, player_ref, rng)
            }
            _ => return,
        };

        debug!("{} played the ball towards [{}, {}]", state.player(player_ref).name, target.x, target.y);
    }
}
