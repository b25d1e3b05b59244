use crate::{
    config::model::FieldConfig,
    device::class::DeviceClass,
    foundation::core::Span,
    particle::model::{Heart, Ring},
    spawn::placement::{Anchor, choose_anchor, jittered},
    spawn::rng::SpawnRng,
};

/// Everything one spawn tick produces.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickSpawn {
    /// Anchor shared by the heart and the optional ring.
    pub anchor: Anchor,
    /// The heart spawned every tick.
    pub heart: Heart,
    /// The ring spawned with probability `ring_probability`.
    pub ring: Option<Ring>,
}

fn sample<R: SpawnRng + ?Sized>(rng: &mut R, span: Span) -> f64 {
    rng.uniform(span.min, span.max)
}

/// Sample one tick's particles for `class`.
///
/// Draw order is fixed (anchor, heart jitter, heart attributes, ring roll, ring jitter,
/// ring attributes) so a seeded generator reproduces the same field.
pub fn sample_tick<R: SpawnRng + ?Sized>(
    rng: &mut R,
    cfg: &FieldConfig,
    class: DeviceClass,
) -> TickSpawn {
    let profile = cfg.profile(class);
    let anchor = choose_anchor(rng, profile, cfg.band);

    let heart = Heart {
        left: jittered(rng, anchor, profile.heart_jitter),
        size: sample(rng, cfg.heart.size),
        duration: sample(rng, cfg.heart.duration),
        opacity: sample(rng, cfg.heart.opacity),
        rotate: sample(rng, cfg.heart.rotate),
    };

    let ring = if rng.chance(cfg.ring_probability) {
        Some(Ring {
            left: jittered(rng, anchor, profile.ring_jitter),
            bottom: sample(rng, cfg.ring.bottom),
            duration: sample(rng, cfg.ring.duration),
            scale: sample(rng, cfg.ring.scale),
        })
    } else {
        None
    };

    TickSpawn {
        anchor,
        heart,
        ring,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spawn/generator.rs"]
mod tests;
