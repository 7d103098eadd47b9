use serde::{Deserialize, Serialize};

/// A fixed habitat zone whose baseline conditions anchor the local blend an
/// organism actually experiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    AbyssalPlains,
    VolcanicOases,
    TwilightZone,
}

impl RegionKind {
    pub const ALL: [RegionKind; 3] = [
        RegionKind::AbyssalPlains,
        RegionKind::VolcanicOases,
        RegionKind::TwilightZone,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RegionKind::AbyssalPlains => "Abyssal Plains",
            RegionKind::VolcanicOases => "Volcanic Oases",
            RegionKind::TwilightZone => "Twilight Zone",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            RegionKind::AbyssalPlains => "Vast underwater deserts with bioluminescent creatures",
            RegionKind::VolcanicOases => "Hotspots of life around underwater volcanoes and vents",
            RegionKind::TwilightZone => "Mysterious realm where light fades into darkness",
        }
    }

    /// Baseline temperature in °C.
    #[must_use]
    pub fn base_temperature(&self) -> f64 {
        match self {
            RegionKind::AbyssalPlains => 2.0,
            RegionKind::VolcanicOases => 350.0,
            RegionKind::TwilightZone => 10.0,
        }
    }

    /// Baseline pressure in atm.
    #[must_use]
    pub fn base_pressure(&self) -> f64 {
        match self {
            RegionKind::AbyssalPlains => 400.0,
            RegionKind::VolcanicOases => 250.0,
            RegionKind::TwilightZone => 100.0,
        }
    }

    /// Baseline light in lumens/m². Display only; the deep-sea formulas do
    /// not read it.
    #[must_use]
    pub fn base_light(&self) -> f64 {
        match self {
            RegionKind::AbyssalPlains => 0.0,
            RegionKind::VolcanicOases => 0.0,
            RegionKind::TwilightZone => 0.1,
        }
    }

    /// Baseline acidity.
    #[must_use]
    pub fn base_ph(&self) -> f64 {
        match self {
            RegionKind::AbyssalPlains => 7.5,
            RegionKind::VolcanicOases => 2.8,
            RegionKind::TwilightZone => 7.8,
        }
    }
}
