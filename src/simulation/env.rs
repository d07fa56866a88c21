// src/simulation/env.rs

//! Reinforcement-learning framing of the simulation.
//!
//! State is what a learner would see (inventory, day of week, recent
//! demand), the action is an order quantity, and the reward is the day's
//! profit. No learner lives here; this is only the environment side.

use crate::io::random::RandomSource;
use crate::model::calendar::Weekday;
use crate::model::state::{DayRecord, SimulationState};
use crate::simulation::config::{ConfigError, SimulationConfig};
use crate::simulation::engine::{next_record, reset};
use crate::strategy::implementations::ManualPolicy;
use serde::Serialize;

/// Days of demand carried in an observation.
pub const DEMAND_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub inventory: u64,
    pub day: usize,
    pub weekday: Weekday,
    pub is_weekend: bool,
    /// Up to `DEMAND_WINDOW` most recent demands, oldest first.
    pub recent_demand: Vec<u32>,
}

impl Observation {
    fn from_state(state: &SimulationState) -> Self {
        let weekday = Weekday::from_day(state.day);
        Self {
            inventory: state.inventory,
            day: state.day,
            weekday,
            is_weekend: weekday.is_weekend(),
            recent_demand: state
                .recent(DEMAND_WINDOW)
                .iter()
                .map(|r| r.demand)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    /// True once the episode horizon is reached.
    pub done: bool,
    pub record: DayRecord,
}

#[derive(Debug)]
pub struct InventoryEnv<R> {
    config: SimulationConfig,
    rng: R,
    state: SimulationState,
    horizon: Option<usize>,
}

impl<R: RandomSource> InventoryEnv<R> {
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            state: SimulationState::new(),
            horizon: None,
        })
    }

    /// Ends episodes after `days` steps.
    pub fn with_horizon(mut self, days: usize) -> Self {
        self.horizon = Some(days);
        self
    }

    pub fn reset(&mut self) -> Observation {
        self.state = reset();
        Observation::from_state(&self.state)
    }

    pub fn observe(&self) -> Observation {
        Observation::from_state(&self.state)
    }

    /// Places `order` units, simulates the day and reports its profit as reward.
    pub fn step(&mut self, order: u32) -> StepResult {
        let policy = ManualPolicy::new(order);
        let record = next_record(&self.state, &self.config, &policy, &mut self.rng);
        let state = std::mem::take(&mut self.state);
        self.state = state.commit(record.clone());

        let done = self.horizon.is_some_and(|h| self.state.day >= h);

        StepResult {
            observation: Observation::from_state(&self.state),
            reward: record.profit,
            done,
            record,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
