use crate::foundation::core::Millis;

/// A bloom along the bottom of the scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Flower {
    /// Horizontal position, percent of viewport width.
    pub left: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Sway animation offset in seconds (negative starts mid-cycle).
    pub delay: f64,
}

const fn flower(left: f64, scale: f64, delay: f64) -> Flower {
    Flower { left, scale, delay }
}

/// Flowers shown from the start, one per wide anchor.
pub const INITIAL_FLOWERS: [Flower; 4] = [
    flower(28.0, 1.02, 0.0),
    flower(44.0, 1.15, 0.35),
    flower(60.0, 0.94, -0.16),
    flower(74.0, 0.88, 0.22),
];

/// Flowers that join the bed once the greeting is accepted.
pub const EXTRA_FLOWERS: [Flower; 3] = [
    flower(30.0, 0.9, 0.0),
    flower(50.0, 1.02, 0.1),
    flower(66.0, 1.12, 0.2),
];

/// Delay between acceptance and the extra flowers appearing.
pub const EXTRA_FLOWER_DELAY_MS: u64 = 80;

/// Flower bed at `at`, given when (if ever) the greeting was accepted.
pub fn flowers_at(accepted_at: Option<Millis>, at: Millis) -> Vec<Flower> {
    let mut bed = INITIAL_FLOWERS.to_vec();
    if accepted_at.is_some_and(|t0| at >= t0.after(EXTRA_FLOWER_DELAY_MS)) {
        bed.extend_from_slice(&EXTRA_FLOWERS);
    }
    bed
}

#[cfg(test)]
#[path = "../../tests/unit/scene/flowers.rs"]
mod tests;
