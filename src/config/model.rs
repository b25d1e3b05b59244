use std::path::Path;

use crate::{
    device::class::{Breakpoints, DeviceClass},
    foundation::core::Span,
    foundation::error::{HeartfieldError, HeartfieldResult},
};

/// Spawn geometry used while the viewport is in one device class.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    /// Horizontal anchor positions (percent of viewport width) used as jitter bases.
    pub anchors: Vec<f64>,
    /// Half-width of the uniform jitter added to a heart's anchor.
    pub heart_jitter: f64,
    /// Half-width of the uniform jitter added to a ring's anchor.
    pub ring_jitter: f64,
    /// Slack added outside the outermost anchors before clamping.
    pub margin: f64,
}

impl DeviceProfile {
    /// Anchor set shared by tablets and desktops.
    pub const WIDE_ANCHORS: [f64; 4] = [28.0, 44.0, 60.0, 74.0];
    /// Anchor set for phones.
    pub const PHONE_ANCHORS: [f64; 4] = [32.0, 44.0, 56.0, 68.0];

    /// Clamp band for this profile: the anchor extent widened by `margin`, then
    /// intersected with `bounds`.
    ///
    /// An empty anchor set yields `bounds` unchanged.
    pub fn clamp_band(&self, bounds: Span) -> Span {
        let lo = self.anchors.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self.anchors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return bounds;
        }
        Span {
            min: bounds.min.max(lo - self.margin),
            max: bounds.max.min(hi + self.margin),
        }
    }

    fn validate(&self, class: DeviceClass, bounds: Span) -> HeartfieldResult<()> {
        if self.anchors.is_empty() {
            return Err(HeartfieldError::validation(format!(
                "{class} profile must have at least one anchor"
            )));
        }
        if self.anchors.iter().any(|a| !a.is_finite()) {
            return Err(HeartfieldError::validation(format!(
                "{class} profile anchors must be finite"
            )));
        }
        for (name, v) in [
            ("heart_jitter", self.heart_jitter),
            ("ring_jitter", self.ring_jitter),
            ("margin", self.margin),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(HeartfieldError::validation(format!(
                    "{class} profile {name} must be finite and >= 0"
                )));
            }
        }
        let band = self.clamp_band(bounds);
        if band.min > band.max {
            return Err(HeartfieldError::validation(format!(
                "{class} profile clamp band is empty ([{}, {}])",
                band.min, band.max
            )));
        }
        Ok(())
    }
}

/// One [`DeviceProfile`] per [`DeviceClass`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceProfiles {
    /// Phone geometry.
    pub phone: DeviceProfile,
    /// Tablet geometry.
    pub tablet: DeviceProfile,
    /// Desktop geometry.
    pub desktop: DeviceProfile,
}

impl Default for DeviceProfiles {
    fn default() -> Self {
        Self {
            phone: DeviceProfile {
                anchors: DeviceProfile::PHONE_ANCHORS.to_vec(),
                heart_jitter: 3.0,
                ring_jitter: 6.0,
                margin: 2.0,
            },
            tablet: DeviceProfile {
                anchors: DeviceProfile::WIDE_ANCHORS.to_vec(),
                heart_jitter: 4.0,
                ring_jitter: 8.0,
                margin: 3.0,
            },
            desktop: DeviceProfile {
                anchors: DeviceProfile::WIDE_ANCHORS.to_vec(),
                heart_jitter: 5.0,
                ring_jitter: 10.0,
                margin: 4.0,
            },
        }
    }
}

impl DeviceProfiles {
    /// Profile for `class`.
    pub fn get(&self, class: DeviceClass) -> &DeviceProfile {
        match class {
            DeviceClass::Phone => &self.phone,
            DeviceClass::Tablet => &self.tablet,
            DeviceClass::Desktop => &self.desktop,
        }
    }
}

/// Sampling ranges for heart attributes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeartRanges {
    /// Edge length in CSS pixels.
    pub size: Span,
    /// Float animation duration in seconds.
    pub duration: Span,
    /// Opacity in `[0, 1]`.
    pub opacity: Span,
    /// Rotation in degrees.
    pub rotate: Span,
}

impl Default for HeartRanges {
    fn default() -> Self {
        Self {
            size: Span {
                min: 10.0,
                max: 28.0,
            },
            duration: Span { min: 3.5, max: 6.5 },
            opacity: Span { min: 0.6, max: 1.0 },
            rotate: Span::symmetric(30.0),
        }
    }
}

/// Sampling ranges for ring attributes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RingRanges {
    /// Vertical offset from the bottom edge, percent of viewport height.
    pub bottom: Span,
    /// Pulse animation duration in seconds.
    pub duration: Span,
    /// Uniform scale factor.
    pub scale: Span,
}

impl Default for RingRanges {
    fn default() -> Self {
        Self {
            bottom: Span {
                min: 12.0,
                max: 38.0,
            },
            duration: Span { min: 3.2, max: 5.8 },
            scale: Span { min: 0.7, max: 1.4 },
        }
    }
}

/// Every tunable of the particle field.
///
/// Deserialization fills omitted fields from [`FieldConfig::default`], so a JSON file only
/// needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Interval between spawn ticks.
    pub tick_period_ms: u64,
    /// Probability that a tick also spawns a ring.
    pub ring_probability: f64,
    /// Time a heart stays active.
    pub heart_lifetime_ms: u64,
    /// Time a ring stays active.
    pub ring_lifetime_ms: u64,
    /// Viewport classification thresholds.
    pub breakpoints: Breakpoints,
    /// Outer horizontal bounds every position is clamped into (percent of width).
    pub band: Span,
    /// Per-device spawn geometry.
    pub profiles: DeviceProfiles,
    /// Heart attribute ranges.
    pub heart: HeartRanges,
    /// Ring attribute ranges.
    pub ring: RingRanges,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 320,
            ring_probability: 0.26,
            heart_lifetime_ms: 9000,
            ring_lifetime_ms: 7200,
            breakpoints: Breakpoints::default(),
            band: Span {
                min: 20.0,
                max: 80.0,
            },
            profiles: DeviceProfiles::default(),
            heart: HeartRanges::default(),
            ring: RingRanges::default(),
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(s: &str) -> HeartfieldResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> HeartfieldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            HeartfieldError::config(format!("read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Profile for `class`.
    pub fn profile(&self, class: DeviceClass) -> &DeviceProfile {
        self.profiles.get(class)
    }

    /// Clamp band for `class`.
    pub fn clamp_band(&self, class: DeviceClass) -> Span {
        self.profile(class).clamp_band(self.band)
    }

    /// Check every invariant the field relies on.
    pub fn validate(&self) -> HeartfieldResult<()> {
        if self.tick_period_ms == 0 {
            return Err(HeartfieldError::validation("tick_period_ms must be > 0"));
        }
        if self.heart_lifetime_ms == 0 || self.ring_lifetime_ms == 0 {
            return Err(HeartfieldError::validation("particle lifetimes must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.ring_probability) {
            return Err(HeartfieldError::validation(
                "ring_probability must be within [0, 1]",
            ));
        }
        if self.breakpoints.phone_max > self.breakpoints.tablet_max {
            return Err(HeartfieldError::validation(
                "breakpoints.phone_max must be <= breakpoints.tablet_max",
            ));
        }

        self.band.validate("band")?;
        if self.band.min < 0.0 || self.band.max > 100.0 {
            return Err(HeartfieldError::validation("band must lie within [0, 100]"));
        }

        for class in DeviceClass::ALL {
            self.profile(class).validate(class, self.band)?;
        }

        self.heart.size.validate("heart.size")?;
        self.heart.duration.validate("heart.duration")?;
        self.heart.opacity.validate("heart.opacity")?;
        self.heart.rotate.validate("heart.rotate")?;
        self.ring.bottom.validate("ring.bottom")?;
        self.ring.duration.validate("ring.duration")?;
        self.ring.scale.validate("ring.scale")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
