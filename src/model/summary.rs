// src/model/summary.rs

use crate::model::state::DayRecord;
use serde::Serialize;

/// Aggregate view over a simulation log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub days: usize,
    pub total_demand: u64,
    pub total_sales: u64,
    pub total_stockout: u64,
    pub total_ordered: u64,
    pub stockout_days: usize,
    /// Share of demand served from stock. 1.0 when nothing was demanded.
    pub fill_rate: f64,
    pub average_end_inventory: f64,
    pub revenue: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub stockout_cost: f64,
    pub total_profit: f64,
}

impl RunSummary {
    pub fn from_history(history: &[DayRecord]) -> Self {
        let mut summary = RunSummary {
            days: history.len(),
            ..Default::default()
        };
        let mut inventory_sum = 0u128;

        for record in history {
            summary.total_demand += u64::from(record.demand);
            summary.total_sales += u64::from(record.sales);
            summary.total_stockout += u64::from(record.stockout);
            summary.total_ordered += u64::from(record.order);
            if record.stockout > 0 {
                summary.stockout_days += 1;
            }
            inventory_sum += u128::from(record.end_inventory);
            summary.revenue += record.revenue;
            summary.ordering_cost += record.ordering_cost;
            summary.holding_cost += record.holding_cost;
            summary.stockout_cost += record.stockout_cost;
        }

        summary.fill_rate = if summary.total_demand == 0 {
            1.0
        } else {
            summary.total_sales as f64 / summary.total_demand as f64
        };
        if summary.days > 0 {
            summary.average_end_inventory = inventory_sum as f64 / summary.days as f64;
        }
        // Running total on the last row, so it matches the state exactly.
        summary.total_profit = history.last().map_or(0.0, |r| r.total_profit);
        summary
    }

    /// Cost components in reporting order.
    pub fn cost_breakdown(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Ordering", self.ordering_cost),
            ("Holding", self.holding_cost),
            ("Stockout", self.stockout_cost),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::DayOutcome;

    fn record(day: usize, demand: u32, sales: u32, end_inventory: u64, prev: f64) -> DayRecord {
        let stockout = demand - sales;
        let outcome = DayOutcome {
            demand,
            sales,
            stockout,
            end_inventory,
            profit: sales as f64 * 10.0 - stockout as f64 * 15.0,
            revenue: sales as f64 * 10.0,
            ordering_cost: 0.0,
            holding_cost: 0.0,
            stockout_cost: stockout as f64 * 15.0,
        };
        DayRecord::new(day, u64::from(sales) + end_inventory, 0, &outcome, prev)
    }

    #[test]
    fn empty_history_is_neutral() {
        let summary = RunSummary::from_history(&[]);
        assert_eq!(summary.days, 0);
        assert_eq!(summary.fill_rate, 1.0);
        assert_eq!(summary.total_profit, 0.0);
    }

    #[test]
    fn totals_and_fill_rate() {
        let first = record(0, 10, 10, 6, 0.0);
        let second = record(1, 10, 6, 0, first.total_profit);
        let summary = RunSummary::from_history(&[first, second]);

        assert_eq!(summary.days, 2);
        assert_eq!(summary.total_demand, 20);
        assert_eq!(summary.total_sales, 16);
        assert_eq!(summary.total_stockout, 4);
        assert_eq!(summary.stockout_days, 1);
        assert_eq!(summary.fill_rate, 0.8);
        assert_eq!(summary.average_end_inventory, 3.0);
        assert_eq!(summary.total_profit, 100.0 + 60.0 - 60.0);
        assert_eq!(summary.cost_breakdown()[2], ("Stockout", 60.0));
    }
}
