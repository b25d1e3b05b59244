use crate::{config::model::DeviceProfile, foundation::core::Span, spawn::rng::SpawnRng};

/// Anchor chosen for one spawn tick, with the band its particles are clamped into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Anchor {
    /// Base horizontal position before jitter.
    pub base: f64,
    /// Clamp band for the tick's device class.
    pub band: Span,
}

impl Anchor {
    /// Offset `base` by `offset` and clamp into the band.
    pub fn place(&self, offset: f64) -> f64 {
        self.band.clamp(self.base + offset)
    }
}

/// Pick one of `profile`'s anchors uniformly and pair it with the profile's clamp band.
pub fn choose_anchor<R: SpawnRng + ?Sized>(
    rng: &mut R,
    profile: &DeviceProfile,
    bounds: Span,
) -> Anchor {
    let band = profile.clamp_band(bounds);
    let idx = rng.pick(profile.anchors.len());
    // Validated profiles are never empty; fall back to the band centre regardless.
    let base = profile
        .anchors
        .get(idx)
        .copied()
        .unwrap_or((band.min + band.max) / 2.0);
    Anchor { base, band }
}

/// Jitter around `anchor` by up to `jitter` either way, then clamp.
pub fn jittered<R: SpawnRng + ?Sized>(rng: &mut R, anchor: Anchor, jitter: f64) -> f64 {
    anchor.place(rng.uniform(-jitter, jitter))
}
