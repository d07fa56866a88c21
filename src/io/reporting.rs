// src/io/reporting.rs

use crate::model::calendar::day_name;
use crate::model::state::{DayRecord, SimulationState};
use crate::model::summary::RunSummary;
use log::info;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// Rows shown in the recent-history table.
pub const TABLE_WINDOW: usize = 10;
/// Rows kept for the inventory/demand chart series.
pub const CHART_WINDOW: usize = 30;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the simulation history to a CSV file, one row per day.
///
/// # Arguments
/// * `file_path` - Destination (e.g. "results/run_1.csv").
/// * `data` - Chronological history from the simulation state.
pub fn write_history_csv<P: AsRef<Path>>(
    file_path: P,
    data: &[DayRecord],
) -> Result<(), ReportError> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!("Exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}

/// `$` then the amount to two decimals, so losses read `$-225.00`.
fn money(value: f64) -> String {
    // + 0.0 turns -0.0 into 0.0
    format!("${:.2}", value + 0.0)
}

/// Snapshot of the current day, inventory and running profit.
pub fn render_state(state: &SimulationState) -> String {
    format!(
        "Day {} ({}) | Inventory: {} units | Total Profit: {}",
        state.day,
        day_name(state.day),
        state.inventory,
        money(state.total_profit)
    )
}

/// Plain-text table of the last `rows` days, newest first.
pub fn render_history_table(state: &SimulationState, rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>9} {:>6} {:>7} {:>6} {:>9} {:>8} {:>10} {:>11}",
        "Day", "Start Inv", "Order", "Demand", "Sales", "Stockout", "End Inv", "Profit", "Total"
    );

    for h in state.recent_reversed(rows) {
        let stockout = if h.stockout > 0 {
            h.stockout.to_string()
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<10} {:>9} {:>6} {:>7} {:>6} {:>9} {:>8} {:>10} {:>11}",
            format!("{} ({})", h.day, h.day_name),
            h.start_inventory,
            h.order,
            h.demand,
            h.sales,
            stockout,
            h.end_inventory,
            money(h.profit),
            money(h.total_profit)
        );
    }
    out
}

/// One point of the inventory/demand/order chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Day name followed by the day index, e.g. `Sat5`.
    pub label: String,
    pub inventory: u64,
    pub demand: u32,
    pub order: u32,
}

/// Chart series over the last `CHART_WINDOW` days, oldest first.
pub fn chart_series(state: &SimulationState) -> Vec<ChartPoint> {
    state
        .recent(CHART_WINDOW)
        .iter()
        .map(|h| ChartPoint {
            label: format!("{}{}", h.day_name, h.day),
            inventory: h.end_inventory,
            demand: h.demand,
            order: h.order,
        })
        .collect()
}

/// The chart series as plain-text columns.
pub fn render_chart(state: &SimulationState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>10} {:>7} {:>6}", "Day", "Inventory", "Demand", "Order");
    for point in chart_series(state) {
        let _ = writeln!(
            out,
            "{:<8} {:>10} {:>7} {:>6}",
            point.label, point.inventory, point.demand, point.order
        );
    }
    out
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Days simulated:      {}", summary.days);
    let _ = writeln!(out, "Total demand:        {}", summary.total_demand);
    let _ = writeln!(out, "Total sales:         {}", summary.total_sales);
    let _ = writeln!(
        out,
        "Total stockout:      {} ({} days)",
        summary.total_stockout, summary.stockout_days
    );
    let _ = writeln!(out, "Fill rate:           {:.1}%", summary.fill_rate * 100.0);
    let _ = writeln!(out, "Avg end inventory:   {:.2}", summary.average_end_inventory);
    let _ = writeln!(out, "Revenue:             {}", money(summary.revenue));
    for (component, cost) in summary.cost_breakdown() {
        let _ = writeln!(out, "{:<21}{}", format!("{} cost:", component), money(cost));
    }
    let _ = writeln!(out, "Total profit:        {}", money(summary.total_profit));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::random::ScriptedDraws;
    use crate::simulation::config::SimulationConfig;
    use crate::simulation::engine::advance_n_days;
    use crate::strategy::implementations::Policy;

    fn run(days: usize) -> SimulationState {
        let config = SimulationConfig {
            demand_variability: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = ScriptedDraws::neutral();
        advance_n_days(SimulationState::new(), &config, &Policy::Manual(0), &mut rng, days)
    }

    #[test]
    fn money_puts_symbol_before_sign() {
        assert_eq!(money(95.0), "$95.00");
        assert_eq!(money(-225.0), "$-225.00");
        assert_eq!(money(-0.0), "$0.00");
    }

    #[test]
    fn table_lists_newest_first_and_marks_empty_stockout() {
        let state = run(3);
        let table = render_history_table(&state, TABLE_WINDOW);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("2 (Wed)"));
        assert!(lines[3].starts_with("0 (Mon)"));
        // day 0: 20 on hand, demand 10, no stockout
        assert!(lines[3].contains(" - "));
    }

    #[test]
    fn chart_series_is_capped() {
        let state = run(40);
        let series = chart_series(&state);
        assert_eq!(series.len(), CHART_WINDOW);
        assert_eq!(series[0].label, "Thu10");

        let chart = render_chart(&state);
        assert_eq!(chart.lines().count(), CHART_WINDOW + 1);
        assert!(chart.lines().last().unwrap().starts_with("Thu39"));
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let state = run(2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        write_history_csv(&path, state.history()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("day,day_name,start_inventory,order,demand"));
        assert_eq!(lines.count(), 2);
    }
}
