//! Single-product inventory control simulator framed as an RL environment.
//!
//! A day is simulated by picking an order (manual or heuristic), drawing a
//! noisy demand with a weekend bump, and booking revenue against ordering,
//! holding and stockout costs.

pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use io::random::{RandomSource, RngSource, ScriptedDraws};
pub use model::state::{DayOutcome, DayRecord, SimulationState};
pub use model::summary::RunSummary;
pub use simulation::config::{ConfigError, SimulationConfig};
pub use simulation::engine::{advance_n_days, advance_one_day, reset, step_day, Simulation};
pub use simulation::env::InventoryEnv;
pub use strategy::implementations::{select_order, Policy};
pub use strategy::traits::OrderPolicy;
