//! The fixed step ladder and root offset arithmetic.
//!
//! Every palette resolves colors on the same ordered ladder of 24 rungs,
//! step 200 (darkest) through step 2500 (lightest). "Root" is the reference
//! rung for a polarity: the lightest rung in light mode, the darkest in dark
//! mode. Offsets count rungs away from the root toward the opposite end, so
//! the same offset number lands on different concrete rungs depending on the
//! active polarity.

/// Ladder rungs in darkest-to-lightest order.
pub const STEP_LADDER: [u16; 24] = [
    200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400, 1500, 1600, 1700, 1800,
    1900, 2000, 2100, 2200, 2300, 2400, 2500,
];

/// Largest root offset any generated layer uses.
pub const ROOT_OFFSET_MAX: i32 = 5;

pub fn darkest_step() -> u16 {
    STEP_LADDER[0]
}

pub fn lightest_step() -> u16 {
    STEP_LADDER[STEP_LADDER.len() - 1]
}

/// Position of a step on the ladder, if it is a ladder rung at all.
pub fn ladder_index(step: u16) -> Option<usize> {
    STEP_LADDER.iter().position(|rung| *rung == step)
}

/// The reference rung for a polarity.
pub fn root_step(is_light: bool) -> u16 {
    if is_light {
        lightest_step()
    } else {
        darkest_step()
    }
}

/// Offset direction: offsets walk down-ladder from the light root and
/// up-ladder from the dark root.
pub fn direction(is_light: bool) -> i32 {
    if is_light { -1 } else { 1 }
}

fn root_index(is_light: bool) -> usize {
    if is_light { STEP_LADDER.len() - 1 } else { 0 }
}

/// The rung `n` offset steps away from `root` for the given polarity,
/// clamped to the ladder bounds. A `root` that is not a ladder rung falls
/// back to the polarity's root rung.
pub fn offset_step(root: u16, n: i32, is_light: bool) -> u16 {
    let base = ladder_index(root).unwrap_or_else(|| root_index(is_light));
    let raw = base as i64 + i64::from(n) * i64::from(direction(is_light));
    let clamped = raw.clamp(0, STEP_LADDER.len() as i64 - 1);
    STEP_LADDER[clamped as usize]
}

/// Debug rendering of an offset: `root`, `root+N`, `root-N`.
pub fn offset_label(n: i32) -> String {
    root_label_with("root", n)
}

/// Name-path rendering of an offset: `Root`, `Root+N`, `Root-N`.
pub fn root_segment(n: i32) -> String {
    root_label_with("Root", n)
}

fn root_label_with(base: &str, n: i32) -> String {
    match n {
        0 => base.to_string(),
        n if n > 0 => format!("{}+{}", base, n),
        n => format!("{}-{}", base, -n),
    }
}
