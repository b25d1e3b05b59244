use crate::foundation::core::Millis;

/// Which kind of particle an identifier refers to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    /// A floating heart.
    Heart,
    /// A pulsing ring.
    Ring,
}

/// Identity of a particle.
///
/// `seq` is the spawn tick's counter; a ring shares `seq` with the heart spawned in the
/// same tick and is told apart by `kind`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ParticleId {
    /// Particle kind.
    pub kind: ParticleKind,
    /// Monotonic tick counter, starting at 1.
    pub seq: u64,
}

impl ParticleId {
    /// Heart identifier for tick `seq`.
    pub fn heart(seq: u64) -> Self {
        Self {
            kind: ParticleKind::Heart,
            seq,
        }
    }

    /// Ring identifier for tick `seq`.
    pub fn ring(seq: u64) -> Self {
        Self {
            kind: ParticleKind::Ring,
            seq,
        }
    }
}

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParticleKind::Heart => write!(f, "h{}", self.seq),
            ParticleKind::Ring => write!(f, "r{}", self.seq),
        }
    }
}

/// Randomized heart attributes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Heart {
    /// Horizontal position, percent of viewport width.
    pub left: f64,
    /// Edge length in CSS pixels.
    pub size: f64,
    /// Float animation duration in seconds.
    pub duration: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotate: f64,
}

/// Randomized ring attributes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    /// Horizontal position, percent of viewport width.
    pub left: f64,
    /// Vertical offset from the bottom edge, percent of viewport height.
    pub bottom: f64,
    /// Pulse animation duration in seconds.
    pub duration: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

/// Kind-specific payload of a [`Particle`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Heart attributes.
    Heart(Heart),
    /// Ring attributes.
    Ring(Ring),
}

/// An active particle. Immutable once spawned.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Identity.
    pub id: ParticleId,
    /// Tick instant that spawned it.
    pub born_at: Millis,
    /// Instant its removal is scheduled for.
    pub expires_at: Millis,
    /// Attributes.
    pub shape: Shape,
}

impl Particle {
    /// Horizontal position, percent of viewport width.
    pub fn left(&self) -> f64 {
        match self.shape {
            Shape::Heart(h) => h.left,
            Shape::Ring(r) => r.left,
        }
    }

    /// Configured lifetime in milliseconds.
    pub fn lifetime_ms(&self) -> u64 {
        self.expires_at.since(self.born_at)
    }

    /// Heart attributes, if this is a heart.
    pub fn as_heart(&self) -> Option<&Heart> {
        match &self.shape {
            Shape::Heart(h) => Some(h),
            Shape::Ring(_) => None,
        }
    }

    /// Ring attributes, if this is a ring.
    pub fn as_ring(&self) -> Option<&Ring> {
        match &self.shape {
            Shape::Ring(r) => Some(r),
            Shape::Heart(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particle/model.rs"]
mod tests;
