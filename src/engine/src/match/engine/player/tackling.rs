use crate::r#match::engine::field::{is_between, PitchSide};
use crate::r#match::engine::injury::InjuryModel;
use crate::r#match::engine::player::PlayerRef;
use crate::r#match::engine::random::MatchRng;
use crate::r#match::engine::setpieces::SetPieceDispatcher;
use crate::r#match::engine::state::MatchState;

const LOSER_INJURY_ODDS: i32 = 1400;
const WINNER_INJURY_ODDS: i32 = 1500;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TackleKind {
    Tackle,
    Slide,
}

impl TackleKind {
    fn foul_draw_max(&self) -> i32 {
        match self {
            TackleKind::Tackle => 10,
            TackleKind::Slide => 11,
        }
    }

    fn foul_window(&self) -> i32 {
        match self {
            TackleKind::Tackle => 18,
            TackleKind::Slide => 20,
        }
    }

    /// Distance the loser and the ball are knocked back after the challenge.
    pub fn displacement(&self) -> f32 {
        match self {
            TackleKind::Tackle => 1.0,
            TackleKind::Slide => 3.0,
        }
    }

    pub fn is_foul(&self, draw: i32) -> bool {
        draw > 0 && draw < self.foul_window() / 2 - 1
    }

    fn yellow_band(&self) -> (f32, f32) {
        match self {
            TackleKind::Tackle => (75.0, 90.0),
            TackleKind::Slide => (65.0, 90.0),
        }
    }

    fn red_band(&self) -> (f32, f32) {
        match self {
            TackleKind::Tackle => (90.0, 100.0),
            TackleKind::Slide => (85.0, 100.0),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TackleKind::Tackle => "Tackle",
            TackleKind::Slide => "Slide tackle",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TackleOutcome {
    NoHolder,
    Foul,
    Won,
    Lost,
}

pub struct TackleResolver;

impl TackleResolver {
    /// Resolves a challenge by `tackler` on whoever of the other team holds the ball.
    pub fn resolve(
        state: &mut MatchState,
        tackler: PlayerRef,
        kind: TackleKind,
        rng: &mut dyn MatchRng,
    ) -> TackleOutcome {
        let Some(holder) = state.holder().filter(|h| h.side != tackler.side) else {
            return TackleOutcome::NoHolder;
        };

        let tackler_name = state.player(tackler).name.clone();
        state.log(format!("{} attempted by: {}", kind.label(), tackler_name));
        state.player_mut(tackler).stats.tackles.total += 1;

        let draw = rng.random_int(0, kind.foul_draw_max());

        if kind.is_foul(draw) {
            Self::commit_foul(state, tackler, holder, kind, rng);
            return TackleOutcome::Foul;
        }

        if Self::contest(state, tackler, holder, rng) {
            state.give_ball(tackler);
            state.log(format!("Successful tackle by: {}", tackler_name));
            state.player_mut(tackler).stats.tackles.on += 1;

            InjuryModel::roll(state, holder, LOSER_INJURY_ODDS, rng);
            InjuryModel::roll(state, tackler, WINNER_INJURY_ODDS, rng);

            Self::displace(state, tackler, holder, kind.displacement());

            TackleOutcome::Won
        } else {
            state.log(format!("Failed tackle by: {}", tackler_name));
            state.player_mut(tackler).stats.tackles.off += 1;

            InjuryModel::roll(state, tackler, LOSER_INJURY_ODDS, rng);
            InjuryModel::roll(state, holder, WINNER_INJURY_ODDS, rng);

            Self::displace(state, holder, tackler, kind.displacement());

            TackleOutcome::Lost
        }
    }

    /// True when the tackler out-scores the holder.
    pub fn contest(
        state: &MatchState,
        tackler: PlayerRef,
        holder: PlayerRef,
        rng: &mut dyn MatchRng,
    ) -> bool {
        let attacker = &state.player(tackler).skill;
        let defender = &state.player(holder).skill;

        let tackler_score =
            (attacker.tackling + attacker.strength) / 2.0 + rng.random_int(-5, 5) as f32;
        let holder_score =
            (defender.agility + defender.strength) / 2.0 + rng.random_int(-5, 5) as f32;

        tackler_score > holder_score
    }

    fn commit_foul(
        state: &mut MatchState,
        tackler: PlayerRef,
        holder: PlayerRef,
        kind: TackleKind,
        rng: &mut dyn MatchRng,
    ) {
        let holder_name = state.player(holder).name.clone();
        state.log(format!("Foul against: {}", holder_name));

        state.player_mut(tackler).stats.tackles.fouls += 1;
        state.team_mut(tackler.side).statistics.fouls += 1;

        let intensity = rng.random_int(1, 99) as f32;
        let (yellow_low, yellow_high) = kind.yellow_band();
        let (red_low, red_high) = kind.red_band();

        let player = state.player_mut(tackler);
        let name = player.name.clone();

        if is_between(intensity, yellow_low, yellow_high) {
            if player.book() {
                state.log(format!("Second yellow card, {} is sent off", name));
            } else {
                state.log(format!("Yellow card for {}", name));
            }
        } else if is_between(intensity, red_low, red_high) {
            player.dismiss();
            state.log(format!("Red card for {}", name));
        }

        SetPieceDispatcher::award_set_piece(state, holder.side, rng);
    }

    /// Knocks the loser and the ball back towards the loser's goal and pushes the winner upfield.
    fn displace(state: &mut MatchState, winner: PlayerRef, loser: PlayerRef, increment: f32) {
        let height = state.pitch.height;

        let loser_side = {
            let player = state.player(loser);
            PitchSide::from_origin_y(player.origin_pos.y, height)
        };

        let back = -loser_side.forward() * increment;

        let player = state.player_mut(loser);
        if player.on_pitch() {
            player.current_pos.y = (player.current_pos.y + back).clamp(0.0, height);
        }

        state.ball.position.y = (state.ball.position.y + back).clamp(0.0, height);

        let winner_side = {
            let player = state.player(winner);
            PitchSide::from_origin_y(player.origin_pos.y, height)
        };

        let player = state.player_mut(winner);
        if player.on_pitch() {
            player.current_pos.y =
                (player.current_pos.y + winner_side.forward() * increment).clamp(0.0, height);
        }
    }
}
