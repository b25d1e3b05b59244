//! heartfield is a deterministic particle lifecycle engine for animated greeting scenes.
//!
//! A [`ParticleField`] periodically spawns hearts (and, by chance, rings) around a small set of
//! anchor positions and removes each one a fixed lifetime after it was created. Spawn geometry
//! adapts to the viewport's [`DeviceClass`].
//!
//! # Driving model
//!
//! Nothing here reads a wall clock or a window. Time arrives through explicit calls:
//!
//! 1. **Start**: [`ParticleField::start`] arms the periodic tick.
//! 2. **Advance**: [`ParticleField::advance_to`] runs every tick and expiry due by then, in order.
//! 3. **Resize**: [`ParticleField::classify`] reclassifies the viewport and restarts the tick.
//! 4. **Render**: read [`ParticleField::active`] or a [`SceneFrame`] each pass.
//!
//! Randomness is injected through [`SpawnRng`]; [`SeededRng`] makes runs reproducible.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod device;
mod field;
mod foundation;
mod particle;
mod reveal;
mod scene;
mod spawn;
mod timer;

pub use config::model::{DeviceProfile, DeviceProfiles, FieldConfig, HeartRanges, RingRanges};
pub use device::class::{Breakpoints, DeviceClass};
pub use field::manager::{FieldEvent, ParticleField, TickOutcome};
pub use foundation::core::{Millis, Span};
pub use foundation::error::{HeartfieldError, HeartfieldResult};
pub use particle::model::{Heart, Particle, ParticleId, ParticleKind, Ring, Shape};
pub use reveal::typed::{DEFAULT_CHAR_INTERVAL_MS, DEFAULT_MESSAGE, TypedReveal};
pub use scene::flowers::{
    EXTRA_FLOWER_DELAY_MS, EXTRA_FLOWERS, Flower, INITIAL_FLOWERS, flowers_at,
};
pub use scene::model::{Scene, SceneFrame};
pub use spawn::generator::{TickSpawn, sample_tick};
pub use spawn::placement::{Anchor, choose_anchor, jittered};
pub use spawn::rng::{SeededRng, SpawnRng};
pub use timer::queue::{Fired, TimerId, TimerQueue};
