use crate::{
    config::model::FieldConfig,
    device::class::DeviceClass,
    foundation::core::Millis,
    foundation::error::HeartfieldResult,
    particle::model::{Particle, ParticleId, ParticleKind, Shape},
    spawn::generator::sample_tick,
    spawn::rng::{SeededRng, SpawnRng},
    timer::queue::{TimerId, TimerQueue},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum FieldTimer {
    Tick,
    Expire(ParticleId),
}

/// Lifecycle transition recorded by a [`ParticleField`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
    /// A particle entered the active collection.
    Spawned {
        /// The new particle.
        particle: Particle,
    },
    /// A particle left the active collection.
    Removed {
        /// Removed particle.
        id: ParticleId,
        /// Removal instant.
        at: Millis,
    },
    /// The viewport moved to another device class.
    Reclassified {
        /// Previous class.
        from: DeviceClass,
        /// New class.
        to: DeviceClass,
        /// Instant of the resize event.
        at: Millis,
    },
}

/// Identifiers spawned by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Heart spawned by the tick.
    pub heart: ParticleId,
    /// Ring spawned alongside, if the ring roll succeeded.
    pub ring: Option<ParticleId>,
}

/// Periodic spawn-and-expire loop for hearts and rings.
///
/// Owns the active collection and every timer handle; all time flows in through
/// [`ParticleField::advance_to`] and the explicit event methods, so the field is independent
/// of any windowing or timer API.
///
/// Every spawned particle is scheduled for removal at `born_at + lifetime` when it is
/// created. Expiry timers are never cancelled; stopping the field only cancels the periodic
/// tick, so the active collection drains naturally.
pub struct ParticleField<R = SeededRng> {
    cfg: FieldConfig,
    rng: R,
    device: DeviceClass,
    timers: TimerQueue<FieldTimer>,
    tick_timer: Option<TimerId>,
    next_seq: u64,
    active: Vec<Particle>,
    events: Vec<FieldEvent>,
    now: Millis,
}

impl ParticleField<SeededRng> {
    /// Build a field with the default ChaCha-backed generator.
    pub fn with_seed(cfg: FieldConfig, seed: u64) -> HeartfieldResult<Self> {
        Self::new(cfg, SeededRng::new(seed))
    }
}

impl<R: SpawnRng> ParticleField<R> {
    /// Build a stopped field classified as [`DeviceClass::Desktop`].
    pub fn new(cfg: FieldConfig, rng: R) -> HeartfieldResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            rng,
            device: DeviceClass::Desktop,
            timers: TimerQueue::new(),
            tick_timer: None,
            next_seq: 1,
            active: Vec::new(),
            events: Vec::new(),
            now: Millis::ZERO,
        })
    }

    /// Configuration the field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// Current device class.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Latest instant the field has been advanced to.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Whether the periodic tick is scheduled.
    pub fn is_running(&self) -> bool {
        self.tick_timer.is_some_and(|id| self.timers.is_scheduled(id))
    }

    /// Active particles in spawn order.
    pub fn active(&self) -> &[Particle] {
        &self.active
    }

    /// Active hearts in spawn order.
    pub fn hearts(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.active
            .iter()
            .filter(|p| p.id.kind == ParticleKind::Heart)
    }

    /// Active rings in spawn order.
    pub fn rings(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.active
            .iter()
            .filter(|p| p.id.kind == ParticleKind::Ring)
    }

    /// Look up an active particle.
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.active.iter().find(|p| p.id == id)
    }

    /// Number of active particles.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no particle is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Earliest pending timer (tick or expiry).
    pub fn next_due(&mut self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Take every event recorded since the previous call.
    pub fn drain_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start ticking: the first tick fires one period after `now`. No-op while running.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn start(&mut self, now: Millis) {
        self.observe(now);
        if self.is_running() {
            return;
        }
        self.arm_tick(now);
        tracing::info!(device = %self.device, period_ms = self.cfg.tick_period_ms, "particle field started");
    }

    /// Cancel the periodic tick. Pending expiries still run on later advances.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn stop(&mut self) {
        if let Some(id) = self.tick_timer.take() {
            self.timers.cancel(id);
            tracing::info!(active = self.active.len(), "particle field stopped");
        }
    }

    /// Handle a viewport resize.
    ///
    /// When the width maps to a different device class the periodic tick is restarted from
    /// `now`, so the new geometry applies from the next tick on. Active particles keep their
    /// positions.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn classify(&mut self, viewport_width: u32, now: Millis) -> DeviceClass {
        self.observe(now);
        let next = self.cfg.breakpoints.classify(viewport_width);
        if next == self.device {
            return next;
        }

        let from = std::mem::replace(&mut self.device, next);
        tracing::debug!(%from, to = %next, viewport_width, "device reclassified");
        self.events.push(FieldEvent::Reclassified {
            from,
            to: next,
            at: now,
        });

        let running = self.is_running();
        if let Some(id) = self.tick_timer.take() {
            self.timers.cancel(id);
            if running {
                self.arm_tick(now);
            }
        }
        next
    }

    /// Run every timer due at or before `now`, in order. Returns how many fired.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn advance_to(&mut self, now: Millis) -> usize {
        let mut fired = 0;
        while let Some(f) = self.timers.pop_due(now) {
            fired += 1;
            self.observe(f.due);
            match f.event {
                FieldTimer::Tick => {
                    self.tick(f.due);
                }
                FieldTimer::Expire(id) => {
                    self.remove_at(id, f.due);
                }
            }
        }
        self.observe(now);
        fired
    }

    /// Spawn one tick's particles at `now` and schedule their removal.
    ///
    /// Returns `None` without spawning when a lifetime starting at `now` would end past the
    /// end of the clock, since such a particle could never expire.
    pub fn tick(&mut self, now: Millis) -> Option<TickOutcome> {
        self.observe(now);
        let longest = self.cfg.heart_lifetime_ms.max(self.cfg.ring_lifetime_ms);
        if now.checked_after(longest).is_none() {
            tracing::warn!(%now, "tick skipped: particle lifetime overflows the clock");
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;

        let spawn = sample_tick(&mut self.rng, &self.cfg, self.device);

        let heart = ParticleId::heart(seq);
        self.insert(
            heart,
            now,
            self.cfg.heart_lifetime_ms,
            Shape::Heart(spawn.heart),
        );

        let ring = spawn.ring.map(|r| {
            let id = ParticleId::ring(seq);
            self.insert(id, now, self.cfg.ring_lifetime_ms, Shape::Ring(r));
            id
        });

        Some(TickOutcome { heart, ring })
    }

    /// Remove a particle now. Removing an absent identifier is a no-op returning `false`.
    pub fn remove(&mut self, id: ParticleId) -> bool {
        self.remove_at(id, self.now)
    }

    fn insert(&mut self, id: ParticleId, now: Millis, lifetime_ms: u64, shape: Shape) {
        let particle = Particle {
            id,
            born_at: now,
            expires_at: now.after(lifetime_ms),
            shape,
        };
        self.timers
            .schedule_once(particle.expires_at, FieldTimer::Expire(id));
        tracing::debug!(%id, left = particle.left(), expires_at = %particle.expires_at, "spawned");
        self.active.push(particle);
        self.events.push(FieldEvent::Spawned { particle });
    }

    fn remove_at(&mut self, id: ParticleId, at: Millis) -> bool {
        let Some(idx) = self.active.iter().position(|p| p.id == id) else {
            return false;
        };
        self.active.remove(idx);
        tracing::debug!(%id, %at, "expired");
        self.events.push(FieldEvent::Removed { id, at });
        true
    }

    fn arm_tick(&mut self, now: Millis) {
        let period = self.cfg.tick_period_ms;
        self.tick_timer = Some(
            self.timers
                .schedule_every(now.after(period), period, FieldTimer::Tick),
        );
    }

    fn observe(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/manager.rs"]
mod tests;
