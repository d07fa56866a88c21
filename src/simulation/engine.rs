// src/simulation/engine.rs

use crate::io::demand::generate_demand;
use crate::io::random::RandomSource;
use crate::model::calendar::day_name;
use crate::model::state::{DayOutcome, DayRecord, SimulationState};
use crate::model::summary::RunSummary;
use crate::simulation::config::{ConfigError, SimulationConfig};
use crate::strategy::traits::OrderPolicy;
use log::{debug, info};

/// Simulates one day of trading.
///
/// The order arrives immediately, demand is drawn, sales are capped by
/// the stock available, and the day's profit is
/// `revenue - ordering - holding - stockout`.
///
/// Stock is `u64` and each order is at most `u32::MAX`, so
/// `start + order - sales = end` holds exactly.
pub fn step_day<R: RandomSource + ?Sized>(
    current_inventory: u64,
    order_qty: u32,
    day: usize,
    config: &SimulationConfig,
    rng: &mut R,
) -> DayOutcome {
    let available = current_inventory + u64::from(order_qty);
    let demand = generate_demand(day, config, rng);

    // Stock beyond u32::MAX always covers any demand.
    let (sales, stockout) = match u32::try_from(available) {
        Ok(on_hand) => (demand.min(on_hand), demand.saturating_sub(on_hand)),
        Err(_) => (demand, 0),
    };
    let end_inventory = available - u64::from(sales);

    let revenue = f64::from(sales) * config.selling_price;
    let ordering_cost = f64::from(order_qty) * config.order_cost;
    let holding_cost = end_inventory as f64 * config.holding_cost;
    let stockout_cost = f64::from(stockout) * config.stockout_penalty;

    let profit = revenue - ordering_cost - holding_cost - stockout_cost;

    DayOutcome {
        demand,
        sales,
        stockout,
        end_inventory,
        profit,
        revenue,
        ordering_cost,
        holding_cost,
        stockout_cost,
    }
}

/// Picks the order, simulates the day and builds its log row.
pub(crate) fn next_record<P, R>(
    state: &SimulationState,
    config: &SimulationConfig,
    policy: &P,
    rng: &mut R,
) -> DayRecord
where
    P: OrderPolicy + ?Sized,
    R: RandomSource + ?Sized,
{
    let order = policy.calculate_order(state.inventory, state.day);
    let outcome = step_day(state.inventory, order, state.day, config, rng);
    let record = DayRecord::new(state.day, state.inventory, order, &outcome, state.total_profit);

    debug!(
        "Day {} ({}): start {}, order {}, demand {}, sales {}, stockout {}, end {}, profit {:.2}",
        record.day,
        record.day_name,
        record.start_inventory,
        record.order,
        record.demand,
        record.sales,
        record.stockout,
        record.end_inventory,
        record.profit
    );
    record
}

/// Advances the state by one day and returns the next state.
///
/// Exactly one record is appended and exactly one random draw is taken.
pub fn advance_one_day<P, R>(
    state: SimulationState,
    config: &SimulationConfig,
    policy: &P,
    rng: &mut R,
) -> SimulationState
where
    P: OrderPolicy + ?Sized,
    R: RandomSource + ?Sized,
{
    let record = next_record(&state, config, policy, rng);
    state.commit(record)
}

/// Applies [`advance_one_day`] `days` times in order.
pub fn advance_n_days<P, R>(
    state: SimulationState,
    config: &SimulationConfig,
    policy: &P,
    rng: &mut R,
    days: usize,
) -> SimulationState
where
    P: OrderPolicy + ?Sized,
    R: RandomSource + ?Sized,
{
    (0..days).fold(state, |state, _| advance_one_day(state, config, policy, &mut *rng))
}

/// Fresh state, independent of any configuration.
pub fn reset() -> SimulationState {
    SimulationState::new()
}

/// Number of days advanced by a batch run when no count is given.
pub const DEFAULT_BATCH_DAYS: usize = 7;

/// Owns the state, configuration, policy and random stream for one
/// interactive session.
#[derive(Debug)]
pub struct Simulation<P, R> {
    config: SimulationConfig,
    policy: P,
    rng: R,
    state: SimulationState,
}

impl<P: OrderPolicy, R: RandomSource> Simulation<P, R> {
    pub fn new(config: SimulationConfig, policy: P, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            policy,
            rng,
            state: SimulationState::new(),
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Replaces the configuration between steps. The state is kept.
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_policy(&mut self, policy: P) {
        self.policy = policy;
    }

    /// Simulates one day and returns its log row.
    pub fn step(&mut self) -> DayRecord {
        let record = next_record(&self.state, &self.config, &self.policy, &mut self.rng);
        let state = std::mem::take(&mut self.state);
        self.state = state.commit(record.clone());
        record
    }

    pub fn run(&mut self, days: usize) -> &SimulationState {
        for _ in 0..days {
            self.step();
        }
        info!(
            "Ran {} days: now day {} ({}), inventory {}, total profit {:.2}",
            days,
            self.state.day,
            day_name(self.state.day),
            self.state.inventory,
            self.state.total_profit
        );
        &self.state
    }

    /// Discards the history and goes back to day 0 with 20 units.
    pub fn reset(&mut self) {
        self.state = reset();
        info!("Simulation reset");
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from_history(self.state.history())
    }
}
