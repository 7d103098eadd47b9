use super::conditions::MineralKind;
use serde::{Deserialize, Serialize};

/// A chemosynthetic energy-extraction strategy.
///
/// The set is closed: every organism's pathway mix assigns a percentage to
/// each variant, and the static impact tables below are resolved per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathwayKind {
    Hydrogenic,
    Methanogenic,
    DarkOxygen,
}

/// Signed sensitivity of each mineral concentration to a pathway's activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MineralImpacts {
    pub sulfur: f64,
    pub iron: f64,
    pub carbonates: f64,
    pub manganese: f64,
}

impl MineralImpacts {
    #[must_use]
    pub fn get(&self, kind: MineralKind) -> f64 {
        match kind {
            MineralKind::Sulfur => self.sulfur,
            MineralKind::Iron => self.iron,
            MineralKind::Carbonates => self.carbonates,
            MineralKind::Manganese => self.manganese,
        }
    }
}

/// Signed sensitivity coefficients mapping a pathway's energetic activity to
/// the planetary conditions it perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub temperature: f64,
    pub pressure: f64,
    pub ph: f64,
    pub minerals: MineralImpacts,
}

impl PathwayKind {
    pub const ALL: [PathwayKind; 3] = [
        PathwayKind::Hydrogenic,
        PathwayKind::Methanogenic,
        PathwayKind::DarkOxygen,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PathwayKind::Hydrogenic => "Hydrogenic",
            PathwayKind::Methanogenic => "Methanogenic",
            PathwayKind::DarkOxygen => "Dark Oxygen",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PathwayKind::Hydrogenic => "Uses hydrogen as an electron donor",
            PathwayKind::Methanogenic => "Utilizes methane in low-oxygen environments",
            PathwayKind::DarkOxygen => "Oxidizes sulfur compounds for energy",
        }
    }

    /// Display color used by the dashboard collaborator.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            PathwayKind::Hydrogenic => "#FF6B6B",
            PathwayKind::Methanogenic => "#45B7D1",
            PathwayKind::DarkOxygen => "#4ECDC4",
        }
    }

    /// Reaction stoichiometry, display only.
    #[must_use]
    pub fn reaction(&self) -> &'static str {
        match self {
            PathwayKind::Hydrogenic => "4H2 + CO2 → CH4 + 2H2O",
            PathwayKind::Methanogenic => "CH4 + 2O2 → CO2 + 2H2O",
            PathwayKind::DarkOxygen => "H2S + 2O2 → H2SO4",
        }
    }

    #[must_use]
    pub fn impact(&self) -> EnvironmentalImpact {
        match self {
            PathwayKind::Hydrogenic => EnvironmentalImpact {
                temperature: 0.01,
                pressure: 0.005,
                ph: -0.002,
                minerals: MineralImpacts {
                    sulfur: 0.01,
                    iron: -0.005,
                    carbonates: 0.0,
                    manganese: 0.0,
                },
            },
            PathwayKind::Methanogenic => EnvironmentalImpact {
                temperature: -0.005,
                pressure: -0.002,
                ph: 0.005,
                minerals: MineralImpacts {
                    sulfur: 0.0,
                    iron: 0.01,
                    carbonates: 0.01,
                    manganese: 0.0,
                },
            },
            PathwayKind::DarkOxygen => EnvironmentalImpact {
                temperature: 0.005,
                pressure: 0.01,
                ph: -0.02,
                minerals: MineralImpacts {
                    sulfur: -0.01,
                    iron: 0.0,
                    carbonates: 0.0,
                    manganese: 0.005,
                },
            },
        }
    }

    /// The mineral pair whose availability lowers this pathway's activation
    /// energy.
    #[must_use]
    pub fn relevant_minerals(&self) -> (MineralKind, MineralKind) {
        match self {
            PathwayKind::Hydrogenic => (MineralKind::Sulfur, MineralKind::Iron),
            PathwayKind::Methanogenic => (MineralKind::Carbonates, MineralKind::Iron),
            PathwayKind::DarkOxygen => (MineralKind::Sulfur, MineralKind::Manganese),
        }
    }

    #[must_use]
    fn index(&self) -> usize {
        *self as usize
    }
}

/// An organism's pathway-percentage mixture.
///
/// Invariant: entries are non-negative and sum to 100 after creation and
/// after every mutation (enforced by [`PathwayMix::renormalize`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathwayMix([f64; PathwayKind::COUNT]);

impl PathwayMix {
    #[must_use]
    pub fn new(hydrogenic: f64, methanogenic: f64, dark_oxygen: f64) -> Self {
        Self([hydrogenic, methanogenic, dark_oxygen])
    }

    /// An even split across all pathways.
    #[must_use]
    pub fn equal_split() -> Self {
        Self([100.0 / PathwayKind::COUNT as f64; PathwayKind::COUNT])
    }

    #[must_use]
    pub fn get(&self, kind: PathwayKind) -> f64 {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: PathwayKind, percentage: f64) {
        self.0[kind.index()] = percentage;
    }

    /// Fraction in [0, 1] of the organism's activity routed through `kind`.
    #[must_use]
    pub fn share(&self, kind: PathwayKind) -> f64 {
        self.get(kind) / 100.0
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathwayKind, f64)> + '_ {
        PathwayKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    /// Rescales entries so non-negative parts sum to 100 and negative parts
    /// floor at zero. Falls back to an equal split when nothing positive
    /// remains.
    pub fn renormalize(&mut self) {
        let total: f64 = self.0.iter().map(|v| v.max(0.0)).sum();
        if total == 0.0 {
            *self = Self::equal_split();
            return;
        }
        for v in &mut self.0 {
            *v = (*v / total * 100.0).max(0.0);
        }
    }
}
