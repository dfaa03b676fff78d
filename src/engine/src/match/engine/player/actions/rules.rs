use crate::r#match::engine::field::PitchSide;
use crate::r#match::engine::player::actions::ActionContext;

/// One weight per entry of `WEIGHTED_ACTIONS`.
pub type ActionWeights = [u8; 11];

pub const NO_WEIGHTS: ActionWeights = [0; 11];

pub enum RuleOutcome {
    Weights(ActionWeights),
    Table(&'static [ActionRule]),
}

pub struct ActionRule {
    pub name: &'static str,
    pub applies: fn(&ActionContext) -> bool,
    pub outcome: RuleOutcome,
}

const fn weights(
    name: &'static str,
    applies: fn(&ActionContext) -> bool,
    weights: ActionWeights,
) -> ActionRule {
    ActionRule {
        name,
        applies,
        outcome: RuleOutcome::Weights(weights),
    }
}

const fn table(
    name: &'static str,
    applies: fn(&ActionContext) -> bool,
    rules: &'static [ActionRule],
) -> ActionRule {
    ActionRule {
        name,
        applies,
        outcome: RuleOutcome::Table(rules),
    }
}

fn always(_: &ActionContext) -> bool {
    true
}

/// First matching rule wins; a table outcome descends into its own list.
pub fn evaluate(rules: &[ActionRule], ctx: &ActionContext) -> Option<(&'static str, ActionWeights)> {
    let rule = rules.iter().find(|rule| (rule.applies)(ctx))?;

    match &rule.outcome {
        RuleOutcome::Weights(weights) => Some((rule.name, *weights)),
        RuleOutcome::Table(nested) => evaluate(nested, ctx),
    }
}

pub static ACTION_RULES: [ActionRule; 3] = [
    table("without ball", |c| !c.has_ball, &NO_BALL_RULES),
    table("bottom team with ball", |c| c.side() == PitchSide::Bottom, &BOTTOM_WITH_BALL_RULES),
    table("top team with ball", always, &TOP_WITH_BALL_RULES),
];

pub static NO_BALL_RULES: [ActionRule; 6] = [
    weights("goalkeeper", |c| c.is_goalkeeper(), [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0]),
    table("ball within 20", |c| c.ball_within(20.0), &NO_BALL_CLOSE_RULES),
    table("ball within 40", |c| c.ball_within(40.0), &NO_BALL_NEAR_RULES),
    weights("loose ball within 80", |c| c.ball_within(80.0) && c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0]),
    weights("held ball within 80", |c| c.ball_within(80.0), [0, 0, 0, 0, 0, 40, 0, 30, 30, 0, 0]),
    weights("ball far away", always, [0, 0, 0, 0, 0, 10, 0, 50, 30, 0, 0]),
];

static NO_BALL_CLOSE_RULES: [ActionRule; 6] = [
    weights("own box loose ball", |c| c.side() == PitchSide::Top && c.in_own_box() && c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 20, 80, 0, 0]),
    weights("own box held ball", |c| c.side() == PitchSide::Top && c.in_own_box(), [0, 0, 0, 0, 40, 0, 20, 10, 30, 0, 0]),
    weights("bottom own box loose ball", |c| c.in_own_box() && c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 20, 80, 0, 0]),
    weights("bottom own box held ball", |c| c.in_own_box(), [0, 0, 0, 0, 50, 0, 10, 20, 20, 0, 0]),
    weights("loose ball", |c| c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 20, 80, 0, 0]),
    weights("held ball", always, [0, 0, 0, 0, 70, 10, 20, 0, 0, 0, 0]),
];

static NO_BALL_NEAR_RULES: [ActionRule; 4] = [
    weights("own box loose ball", |c| c.in_own_box() && c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 20, 80, 0, 0]),
    weights("own box held ball", |c| c.in_own_box(), [0, 0, 0, 0, 40, 0, 20, 10, 30, 0, 0]),
    weights("loose ball", |c| c.ball_loose, [0, 0, 0, 0, 0, 0, 0, 20, 80, 0, 0]),
    weights("held ball", always, [0, 0, 0, 0, 50, 0, 50, 0, 0, 0, 0]),
];

pub static TOP_WITH_BALL_RULES: [ActionRule; 11] = [
    weights("pressed goalkeeper", |c| c.is_goalkeeper() && c.opposition_near(10.0, 25.0), [0, 0, 10, 0, 0, 0, 0, 10, 0, 40, 40]),
    weights("goalkeeper", |c| c.is_goalkeeper(), [0, 0, 50, 0, 0, 0, 0, 10, 0, 20, 20]),
    weights("corner flag", |c| c.field.on_bottom_corner(&c.current), [0, 0, 20, 80, 0, 0, 0, 0, 0, 0, 0]),
    table("opposition box", |c| c.field.in_bottom_box(&c.current), &TOP_IN_BOX_RULES),
    weights("attacking third pressed", |c| top_attacking_third(c) && c.opposition_near(10.0, 10.0), [30, 20, 20, 10, 0, 0, 0, 20, 0, 0, 0]),
    weights("attacking third", top_attacking_third, [70, 10, 10, 0, 0, 0, 0, 10, 0, 0, 0]),
    table("middle third", |c| c.y_between(c.field.height / 3.0, c.field.height - c.field.height / 3.0), &TOP_MIDDLE_RULES),
    weights("pressed", |c| c.opposition_near(10.0, 10.0), [0, 0, 0, 0, 0, 0, 0, 10, 0, 70, 20]),
    weights("midfielder", |c| c.is_midfielder(), [0, 0, 30, 0, 0, 0, 0, 30, 40, 0, 0]),
    weights("striker", |c| c.is_striker(), [0, 0, 0, 0, 0, 0, 0, 50, 50, 0, 0]),
    weights("defender", always, [0, 0, 40, 0, 0, 0, 0, 30, 0, 20, 10]),
];

fn top_attacking_third(c: &ActionContext) -> bool {
    let h = c.field.height;
    c.y_between(h - h / 3.0, h - h / 6.0 + 5.0)
}

static TOP_MIDDLE_RULES: [ActionRule; 5] = [
    weights("pressed", |c| c.opposition_near(10.0, 10.0), [0, 20, 30, 20, 0, 0, 20, 0, 0, 0, 10]),
    weights("shooter", |c| c.shooting > 85.0, [10, 10, 30, 0, 0, 0, 50, 0, 0, 0, 0]),
    weights("midfielder", |c| c.is_midfielder(), [0, 10, 10, 10, 0, 0, 0, 30, 40, 0, 0]),
    weights("striker", |c| c.is_striker(), [0, 0, 0, 0, 0, 0, 0, 50, 50, 0, 0]),
    weights("defender", always, [0, 0, 10, 0, 0, 0, 0, 60, 20, 0, 10]),
];

fn top_half_range(c: &ActionContext) -> bool {
    c.y_between(c.field.height - c.shooting / 2.0, c.field.height)
}

fn top_shot_range(c: &ActionContext) -> bool {
    c.y_between(c.field.height - c.shooting, c.field.height)
}

static TOP_IN_BOX_RULES: [ActionRule; 4] = [
    table("close to goal", |c| c.field.in_bottom_box_close(&c.current), &TOP_BOX_CLOSE_RULES),
    weights("shot range", top_shot_range, [50, 0, 20, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("pressed", |c| c.opposition_near(6.0, 6.0), [10, 0, 70, 0, 0, 0, 0, 20, 0, 0, 0]),
    weights("open", always, [70, 0, 20, 0, 0, 0, 0, 10, 0, 0, 0]),
];

static TOP_BOX_CLOSE_RULES: [ActionRule; 5] = [
    table("pressed", |c| c.opposition_near(6.0, 6.0), &TOP_BOX_CLOSE_PRESSED_RULES),
    table("teammate in space", |c| c.teammate_space(-4.0, 10.0), &TOP_BOX_CLOSE_SPACE_RULES),
    weights("half range", top_half_range, [100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", top_shot_range, [60, 0, 0, 0, 0, 0, 0, 40, 0, 0, 0]),
    weights("out of range", always, [30, 0, 0, 0, 0, 0, 0, 40, 30, 0, 0]),
];

static TOP_BOX_CLOSE_PRESSED_RULES: [ActionRule; 5] = [
    table("blocked", |c| c.opposition_below(), &TOP_BOX_CLOSE_BLOCKED_RULES),
    table("teammate in space", |c| c.teammate_space(-4.0, 10.0), &TOP_BOX_CLOSE_SPACE_RULES),
    weights("half range", top_half_range, [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", top_shot_range, [70, 0, 0, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 0, 0, 0, 0, 0, 50, 30, 0, 0]),
];

static TOP_BOX_CLOSE_BLOCKED_RULES: [ActionRule; 4] = [
    weights("teammate close", |c| c.teammate_space(-10.0, 10.0), [20, 0, 70, 0, 0, 0, 0, 10, 0, 0, 0]),
    weights("half range", top_half_range, [100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", top_shot_range, [70, 0, 0, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 0, 0, 0, 0, 0, 40, 20, 0, 0]),
];

static TOP_BOX_CLOSE_SPACE_RULES: [ActionRule; 3] = [
    weights("half range", top_half_range, [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", top_shot_range, [50, 0, 20, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 30, 0, 0, 0, 0, 30, 20, 0, 0]),
];

pub static BOTTOM_WITH_BALL_RULES: [ActionRule; 11] = [
    weights("pressed goalkeeper", |c| c.is_goalkeeper() && c.opposition_near(10.0, 25.0), [0, 0, 10, 0, 0, 0, 0, 10, 0, 40, 40]),
    weights("goalkeeper", |c| c.is_goalkeeper(), [0, 0, 50, 0, 0, 0, 0, 10, 0, 20, 20]),
    weights("corner flag", |c| c.field.on_top_corner(&c.current), [0, 0, 20, 80, 0, 0, 0, 0, 0, 0, 0]),
    table("opposition box", |c| c.field.in_top_box(&c.current), &BOTTOM_IN_BOX_RULES),
    weights("attacking third pressed", |c| bottom_attacking_third(c) && c.opposition_near(10.0, 10.0), [30, 20, 20, 10, 0, 0, 0, 20, 0, 0, 0]),
    weights("attacking third", bottom_attacking_third, [70, 10, 10, 0, 0, 0, 0, 10, 0, 0, 0]),
    table("middle third", |c| c.y_between(c.field.height / 3.0, 2.0 * (c.field.height / 3.0)), &BOTTOM_MIDDLE_RULES),
    weights("pressed", |c| c.opposition_near(10.0, 10.0), [0, 0, 0, 0, 0, 0, 0, 10, 0, 70, 20]),
    weights("midfielder", |c| c.is_midfielder(), [0, 0, 30, 0, 0, 0, 0, 30, 40, 0, 0]),
    weights("striker", |c| c.is_striker(), [0, 0, 0, 0, 0, 0, 0, 50, 50, 0, 0]),
    weights("defender", always, [0, 0, 30, 0, 0, 0, 0, 50, 0, 10, 10]),
];

fn bottom_attacking_third(c: &ActionContext) -> bool {
    let h = c.field.height;
    c.y_between(h / 6.0 - 5.0, h / 3.0)
}

static BOTTOM_MIDDLE_RULES: [ActionRule; 5] = [
    weights("pressed", |c| c.opposition_near(10.0, 10.0), [0, 20, 30, 20, 0, 0, 0, 20, 0, 0, 10]),
    weights("shooter", |c| c.shooting > 85.0, [10, 10, 30, 0, 0, 0, 0, 50, 0, 0, 0]),
    weights("midfielder", |c| c.is_midfielder(), [0, 10, 10, 10, 0, 0, 0, 30, 40, 0, 0]),
    weights("striker", |c| c.is_striker(), [0, 0, 0, 0, 0, 0, 0, 50, 50, 0, 0]),
    weights("defender", always, [0, 0, 10, 0, 0, 0, 0, 60, 20, 0, 10]),
];

fn bottom_half_range(c: &ActionContext) -> bool {
    c.y_between(0.0, c.shooting / 2.0)
}

fn bottom_shot_range(c: &ActionContext) -> bool {
    c.y_between(0.0, c.shooting)
}

static BOTTOM_IN_BOX_RULES: [ActionRule; 4] = [
    table("close to goal", |c| c.field.in_top_box_close(&c.current), &BOTTOM_BOX_CLOSE_RULES),
    weights("shot range", bottom_shot_range, [50, 0, 20, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("blocked", |c| c.opposition_ahead(), [20, 0, 0, 0, 0, 0, 0, 80, 0, 0, 0]),
    weights("open", always, [50, 0, 20, 20, 0, 0, 0, 10, 0, 0, 0]),
];

static BOTTOM_BOX_CLOSE_RULES: [ActionRule; 5] = [
    table("pressed", |c| c.opposition_near(20.0, 20.0), &BOTTOM_BOX_CLOSE_PRESSED_RULES),
    table("teammate in space", |c| c.teammate_space(-4.0, 10.0), &BOTTOM_BOX_CLOSE_SPACE_RULES),
    weights("half range", bottom_half_range, [100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", bottom_shot_range, [60, 0, 0, 0, 0, 0, 0, 40, 0, 0, 0]),
    weights("out of range", always, [30, 0, 0, 0, 0, 0, 0, 40, 30, 0, 0]),
];

static BOTTOM_BOX_CLOSE_PRESSED_RULES: [ActionRule; 5] = [
    table("blocked", |c| c.opposition_ahead(), &BOTTOM_BOX_CLOSE_BLOCKED_RULES),
    table("teammate in space", |c| c.teammate_space(-4.0, 10.0), &BOTTOM_BOX_CLOSE_SPACE_RULES),
    weights("half range", bottom_half_range, [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", bottom_shot_range, [70, 0, 0, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 0, 0, 0, 0, 0, 50, 30, 0, 0]),
];

static BOTTOM_BOX_CLOSE_BLOCKED_RULES: [ActionRule; 4] = [
    weights("teammate close", |c| c.teammate_space(-10.0, 10.0), [20, 0, 70, 0, 0, 0, 0, 10, 0, 0, 0]),
    weights("half range", bottom_half_range, [100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", bottom_shot_range, [70, 0, 0, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 0, 0, 0, 0, 0, 40, 20, 0, 0]),
];

static BOTTOM_BOX_CLOSE_SPACE_RULES: [ActionRule; 3] = [
    weights("half range", bottom_half_range, [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]),
    weights("shot range", bottom_shot_range, [50, 0, 20, 0, 0, 0, 0, 30, 0, 0, 0]),
    weights("out of range", always, [20, 0, 30, 0, 0, 0, 0, 30, 20, 0, 0]),
];
