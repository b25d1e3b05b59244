use crate::{
    device::class::DeviceClass,
    field::manager::ParticleField,
    foundation::core::Millis,
    particle::model::Particle,
    reveal::typed::TypedReveal,
    scene::flowers::{Flower, flowers_at},
    spawn::rng::{SeededRng, SpawnRng},
};

/// What a render pass draws at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Snapshot instant.
    pub at: Millis,
    /// Device class the field is spawning for.
    pub device: DeviceClass,
    /// Active hearts in spawn order.
    pub hearts: Vec<Particle>,
    /// Active rings in spawn order.
    pub rings: Vec<Particle>,
    /// Flower bed, including the extra blooms once acceptance has settled.
    pub flowers: Vec<Flower>,
    /// Whether the greeting has been accepted.
    pub accepted: bool,
    /// Revealed message prefix, once accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typed: Option<String>,
}

/// Greeting scene: the particle field plus the typed reveal unlocked by acceptance.
pub struct Scene<R = SeededRng> {
    field: ParticleField<R>,
    reveal: TypedReveal,
    accepted_at: Option<Millis>,
}

impl<R: SpawnRng> Scene<R> {
    /// Wrap a field and the reveal to play on acceptance.
    pub fn new(field: ParticleField<R>, reveal: TypedReveal) -> Self {
        Self {
            field,
            reveal,
            accepted_at: None,
        }
    }

    /// Underlying particle field.
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// Mutable access to the particle field.
    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }

    /// Reveal played after acceptance.
    pub fn reveal(&self) -> &TypedReveal {
        &self.reveal
    }

    /// Acceptance instant, if accepted.
    pub fn accepted_at(&self) -> Option<Millis> {
        self.accepted_at
    }

    /// Mount the scene: start spawning.
    pub fn start(&mut self, now: Millis) {
        self.field.start(now);
    }

    /// Tear the scene down: stop spawning. Active particles still expire.
    pub fn stop(&mut self) {
        self.field.stop();
    }

    /// Viewport resize event.
    pub fn resize(&mut self, viewport_width: u32, now: Millis) -> DeviceClass {
        self.field.classify(viewport_width, now)
    }

    /// Accept the greeting. Returns `false` if it was already accepted.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn accept(&mut self, now: Millis) -> bool {
        if self.accepted_at.is_some() {
            return false;
        }
        self.field.advance_to(now);
        self.accepted_at = Some(now);
        tracing::info!(reveal_ms = self.reveal.completes_after(), "greeting accepted");
        true
    }

    /// Advance the clock, running every due timer.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        self.field.advance_to(now)
    }

    /// Advance to `now` and snapshot the result.
    pub fn render(&mut self, now: Millis) -> SceneFrame {
        self.advance_to(now);
        self.snapshot()
    }

    /// Snapshot at the field's current instant without advancing.
    pub fn snapshot(&self) -> SceneFrame {
        let at = self.field.now();
        let typed = self
            .accepted_at
            .map(|t0| self.reveal.visible_at(at.since(t0)).to_owned());
        SceneFrame {
            at,
            device: self.field.device(),
            hearts: self.field.hearts().copied().collect(),
            rings: self.field.rings().copied().collect(),
            flowers: flowers_at(self.accepted_at, at),
            accepted: self.accepted_at.is_some(),
            typed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
