use crate::foundation::error::{HeartfieldError, HeartfieldResult};

/// A point on the virtual clock, in milliseconds since the scene epoch.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// The scene epoch.
    pub const ZERO: Self = Self(0);

    /// `self + delta_ms`, saturating at `u64::MAX`.
    pub fn after(self, delta_ms: u64) -> Self {
        Self(self.0.saturating_add(delta_ms))
    }

    /// `self + delta_ms`, or `None` past the end of the clock.
    pub fn checked_after(self, delta_ms: u64) -> Option<Self> {
        self.0.checked_add(delta_ms).map(Self)
    }

    /// Milliseconds elapsed from `earlier` to `self`; zero if `earlier` is later.
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Time as fractional seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Closed interval `[min, max]` used for uniform sampling and clamping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Inclusive lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Span {
    /// Build a span symmetric around zero: `[-half_width, half_width]`.
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    /// Whether `v` lies within the span, bounds included.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Clamp `v` into the span. Callers must hold a validated span.
    pub fn clamp(self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    pub(crate) fn validate(self, what: &str) -> HeartfieldResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(HeartfieldError::validation(format!(
                "{what} bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(HeartfieldError::validation(format!(
                "{what} min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
