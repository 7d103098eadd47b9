//! # Chemosphere Core
//!
//! The simulation engine for Chemosphere - a chemosynthetic ecosystem
//! population-dynamics simulation.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Thermodynamic pathway efficiency modeling
//! - Organism bioenergetics
//! - Habitability scoring against regional baselines
//! - Generational population dynamics with mutation and speciation
//! - Planetary-condition feedback with damping and bounded drift
//! - Metrics aggregation and structured logging
//!
//! ## Architecture
//!
//! Every engine call is an explicit state-in, state-out function: a tick is
//! given a consistent snapshot of (organisms, populations, conditions) and
//! returns a new consistent snapshot. All randomness flows through an
//! injected seedable RNG for reproducible runs.
//!
//! ## Example
//!
//! ```
//! use chemosphere_core::config::SimConfig;
//! use chemosphere_core::{feedback, lifecycle, population};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = SimConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let (organisms, populations, conditions) = lifecycle::initial_state(&mut rng);
//!
//! let outcome = population::step(&organisms, &populations, &conditions, &config, &mut rng);
//! let next = feedback::update_conditions(
//!     &outcome.organisms,
//!     &outcome.populations,
//!     &conditions,
//!     1,
//!     &config.feedback,
//! );
//! assert!(next.in_bounds());
//! ```

/// Strongly-typed configuration loaded from `config.toml`
pub mod config;
/// Organism bioenergetics: pathway mix × efficiency × base energy
pub mod energy;
/// Environment feedback engine: population activity → condition deltas
pub mod feedback;
/// Fitness scoring of conditions against region and species tolerances
pub mod habitability;
/// In-memory generation history and live-event feed
pub mod history;
/// Seed data construction and speciation organism creation
pub mod lifecycle;
/// Aggregate ecosystem metrics and structured logging
pub mod metrics;
/// The generational step: growth, trophic coupling, mutation
pub mod population;
/// Thermodynamic-style pathway efficiency model
pub mod pathway;

pub use config::SimConfig;
pub use energy::organism_energy;
pub use habitability::habitability;
pub use metrics::{init_logging, total_ecosystem_energy};
pub use pathway::pathway_efficiency;
pub use population::StepOutcome;
