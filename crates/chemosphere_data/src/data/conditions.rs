use serde::{Deserialize, Serialize};

/// Hard ceiling for any organism's population count.
pub const MAX_POPULATION: u32 = 1000;
/// Population floor; organisms decay toward it but are never removed.
pub const MIN_POPULATION: u32 = 0;

/// Dissolved mineral species tracked in the planetary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MineralKind {
    Sulfur,
    Iron,
    Carbonates,
    Manganese,
}

impl MineralKind {
    pub const ALL: [MineralKind; 4] = [
        MineralKind::Sulfur,
        MineralKind::Iron,
        MineralKind::Carbonates,
        MineralKind::Manganese,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MineralKind::Sulfur => "sulfur",
            MineralKind::Iron => "iron",
            MineralKind::Carbonates => "carbonates",
            MineralKind::Manganese => "manganese",
        }
    }
}

/// Mineral concentrations in ppm, each bounded to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minerals {
    pub sulfur: f64,
    pub iron: f64,
    pub carbonates: f64,
    pub manganese: f64,
}

impl Minerals {
    pub const RANGE: (f64, f64) = (0.0, 100.0);

    /// All concentrations at zero; used where mineral availability must be
    /// excluded from a computation.
    pub const ZERO: Minerals = Minerals {
        sulfur: 0.0,
        iron: 0.0,
        carbonates: 0.0,
        manganese: 0.0,
    };

    #[must_use]
    pub fn get(&self, kind: MineralKind) -> f64 {
        match kind {
            MineralKind::Sulfur => self.sulfur,
            MineralKind::Iron => self.iron,
            MineralKind::Carbonates => self.carbonates,
            MineralKind::Manganese => self.manganese,
        }
    }

    pub fn get_mut(&mut self, kind: MineralKind) -> &mut f64 {
        match kind {
            MineralKind::Sulfur => &mut self.sulfur,
            MineralKind::Iron => &mut self.iron,
            MineralKind::Carbonates => &mut self.carbonates,
            MineralKind::Manganese => &mut self.manganese,
        }
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        (self.sulfur + self.iron + self.carbonates + self.manganese) / MineralKind::ALL.len() as f64
    }
}

impl Default for Minerals {
    fn default() -> Self {
        Self {
            sulfur: 50.0,
            iron: 50.0,
            carbonates: 50.0,
            manganese: 50.0,
        }
    }
}

/// Addressable field of [`PlanetaryConditions`], used for manual overrides
/// and per-contribution clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionField {
    Temperature,
    Pressure,
    Ph,
    DissolvedOxygen,
    Mineral(MineralKind),
}

impl ConditionField {
    /// Declared inclusive bounds for this field.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            ConditionField::Temperature => PlanetaryConditions::TEMPERATURE_RANGE,
            ConditionField::Pressure => PlanetaryConditions::PRESSURE_RANGE,
            ConditionField::Ph => PlanetaryConditions::PH_RANGE,
            ConditionField::DissolvedOxygen => PlanetaryConditions::DISSOLVED_OXYGEN_RANGE,
            ConditionField::Mineral(_) => Minerals::RANGE,
        }
    }
}

/// The shared planetary state read by every organism's energy computation
/// and rewritten once per tick by the feedback engine.
///
/// There is no hidden global: callers thread a value in and receive a new
/// value out. Every field stays inside its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryConditions {
    /// Global water temperature in °C.
    pub temperature: f64,
    /// Ambient pressure in atm.
    pub pressure: f64,
    /// Ocean acidity.
    pub ph: f64,
    /// Dissolved oxygen in mg/L.
    pub dissolved_oxygen: f64,
    /// Dissolved mineral concentrations in ppm.
    pub minerals: Minerals,
}

impl PlanetaryConditions {
    pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 120.0);
    pub const PRESSURE_RANGE: (f64, f64) = (50.0, 500.0);
    pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
    pub const DISSOLVED_OXYGEN_RANGE: (f64, f64) = (0.0, 12.0);

    #[must_use]
    pub fn get(&self, field: ConditionField) -> f64 {
        match field {
            ConditionField::Temperature => self.temperature,
            ConditionField::Pressure => self.pressure,
            ConditionField::Ph => self.ph,
            ConditionField::DissolvedOxygen => self.dissolved_oxygen,
            ConditionField::Mineral(kind) => self.minerals.get(kind),
        }
    }

    /// Writes `value` into `field`, silently clamping to the declared range.
    pub fn set_clamped(&mut self, field: ConditionField, value: f64) {
        let (min, max) = field.range();
        let clamped = value.clamp(min, max);
        match field {
            ConditionField::Temperature => self.temperature = clamped,
            ConditionField::Pressure => self.pressure = clamped,
            ConditionField::Ph => self.ph = clamped,
            ConditionField::DissolvedOxygen => self.dissolved_oxygen = clamped,
            ConditionField::Mineral(kind) => *self.minerals.get_mut(kind) = clamped,
        }
    }

    /// Adds a signed contribution to `field`, clamping to the declared range.
    pub fn nudge_clamped(&mut self, field: ConditionField, delta: f64) {
        self.set_clamped(field, self.get(field) + delta);
    }

    /// True when every field lies inside its declared range.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        let scalar_fields = [
            ConditionField::Temperature,
            ConditionField::Pressure,
            ConditionField::Ph,
            ConditionField::DissolvedOxygen,
        ];
        let scalars_ok = scalar_fields.iter().all(|&f| {
            let (min, max) = f.range();
            let v = self.get(f);
            v >= min && v <= max
        });
        let minerals_ok = MineralKind::ALL.iter().all(|&kind| {
            let v = self.minerals.get(kind);
            v >= Minerals::RANGE.0 && v <= Minerals::RANGE.1
        });
        scalars_ok && minerals_ok
    }
}

impl Default for PlanetaryConditions {
    /// The fixed starting conditions of the simulation.
    fn default() -> Self {
        Self {
            temperature: 50.0,
            pressure: 250.0,
            ph: 7.0,
            dissolved_oxygen: 2.0,
            minerals: Minerals::default(),
        }
    }
}
