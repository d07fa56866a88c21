// src/model/state.rs

use crate::model::calendar::day_name;
use serde::Serialize;

/// Inventory on hand at day 0 and after every reset.
pub const INITIAL_INVENTORY: u64 = 20;

/// Full result of one day-step. Every intermediate quantity is kept so
/// reports can be rebuilt without re-running the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayOutcome {
    pub demand: u32,
    pub sales: u32,
    pub stockout: u32,
    pub end_inventory: u64,
    pub profit: f64,
    pub revenue: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub stockout_cost: f64,
}

/// One row of the simulation log. Serialize so it can go straight to CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub day_name: &'static str,
    pub start_inventory: u64,
    pub order: u32,
    pub demand: u32,
    pub sales: u32,
    pub stockout: u32,
    pub end_inventory: u64,
    pub profit: f64,
    pub total_profit: f64,
    pub revenue: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub stockout_cost: f64,
}

impl DayRecord {
    /// Builds the log row for `day` from the state the day started with.
    pub fn new(
        day: usize,
        start_inventory: u64,
        order: u32,
        outcome: &DayOutcome,
        previous_total: f64,
    ) -> Self {
        Self {
            day,
            day_name: day_name(day),
            start_inventory,
            order,
            demand: outcome.demand,
            sales: outcome.sales,
            stockout: outcome.stockout,
            end_inventory: outcome.end_inventory,
            profit: outcome.profit,
            total_profit: previous_total + outcome.profit,
            revenue: outcome.revenue,
            ordering_cost: outcome.ordering_cost,
            holding_cost: outcome.holding_cost,
            stockout_cost: outcome.stockout_cost,
        }
    }
}

/// The mutable side of the simulation. Transitions consume a state and
/// hand back the next one; nothing else holds a reference to it.
///
/// Stock is counted in `u64` so a `u32` order is always added without
/// losing units.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub day: usize,
    pub inventory: u64,
    pub total_profit: f64,
    history: Vec<DayRecord>,
}

impl SimulationState {
    /// Fresh state: day 0, 20 units on hand, no profit, empty log.
    pub fn new() -> Self {
        Self {
            day: 0,
            inventory: INITIAL_INVENTORY,
            total_profit: 0.0,
            history: Vec::new(),
        }
    }

    /// State positioned at an arbitrary day and stock level, with no history.
    pub fn at(day: usize, inventory: u64) -> Self {
        Self {
            day,
            inventory,
            ..Self::new()
        }
    }

    /// Chronological, append-only log.
    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }

    pub fn last_record(&self) -> Option<&DayRecord> {
        self.history.last()
    }

    /// The last `n` records, oldest first (chart window).
    pub fn recent(&self, n: usize) -> &[DayRecord] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// The last `n` records, newest first (table window). The stored
    /// history itself stays chronological.
    pub fn recent_reversed(&self, n: usize) -> impl Iterator<Item = &DayRecord> {
        self.recent(n).iter().rev()
    }

    /// Applies a finished day and moves the clock forward.
    pub(crate) fn commit(mut self, record: DayRecord) -> Self {
        self.day += 1;
        self.inventory = record.end_inventory;
        self.total_profit = record.total_profit;
        self.history.push(record);
        self
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(end_inventory: u64, profit: f64) -> DayOutcome {
        DayOutcome {
            demand: 10,
            sales: 10,
            stockout: 0,
            end_inventory,
            profit,
            revenue: profit,
            ordering_cost: 0.0,
            holding_cost: 0.0,
            stockout_cost: 0.0,
        }
    }

    fn state_with_days(days: usize) -> SimulationState {
        let mut state = SimulationState::new();
        for _ in 0..days {
            let record = DayRecord::new(
                state.day,
                state.inventory,
                0,
                &outcome(5, 1.0),
                state.total_profit,
            );
            state = state.commit(record);
        }
        state
    }

    #[test]
    fn new_state_starts_at_baseline() {
        let state = SimulationState::new();
        assert_eq!(state.day, 0);
        assert_eq!(state.inventory, 20);
        assert_eq!(state.total_profit, 0.0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn commit_advances_day_and_carries_totals() {
        let state = state_with_days(3);
        assert_eq!(state.day, 3);
        assert_eq!(state.inventory, 5);
        assert_eq!(state.total_profit, 3.0);
        assert_eq!(state.last_record().map(|r| r.total_profit), Some(3.0));
        assert_eq!(state.history()[0].start_inventory, 20);
        assert_eq!(state.history()[1].start_inventory, 5);
    }

    #[test]
    fn recent_windows_clamp_to_history_length() {
        let state = state_with_days(4);
        assert_eq!(state.recent(10).len(), 4);
        let days: Vec<usize> = state.recent(2).iter().map(|r| r.day).collect();
        assert_eq!(days, vec![2, 3]);
        let reversed: Vec<usize> = state.recent_reversed(3).map(|r| r.day).collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }
}
