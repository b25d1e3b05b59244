/// Coarse viewport-size category controlling spawn geometry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Narrow viewports (`width <= phone_max`).
    Phone,
    /// Medium viewports (`phone_max < width <= tablet_max`).
    Tablet,
    /// Everything wider.
    Desktop,
}

impl DeviceClass {
    /// All classes, narrowest first.
    pub const ALL: [DeviceClass; 3] = [Self::Phone, Self::Tablet, Self::Desktop];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive viewport-width upper bounds (CSS pixels) for the narrower classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widest viewport still classified as a phone.
    pub phone_max: u32,
    /// Widest viewport still classified as a tablet.
    pub tablet_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            phone_max: 420,
            tablet_max: 900,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    pub fn classify(&self, viewport_width: u32) -> DeviceClass {
        if viewport_width <= self.phone_max {
            DeviceClass::Phone
        } else if viewport_width <= self.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/class.rs"]
mod tests;
