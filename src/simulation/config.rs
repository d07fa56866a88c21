// src/simulation/config.rs

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Demand and cost parameters. Read-only while a day is being simulated.
///
/// Missing keys take their defaults; unknown keys are a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub base_demand: f64,
    /// Half-width of the uniform noise band around the mean.
    pub demand_variability: f64,
    pub weekend_multiplier: f64,
    pub selling_price: f64,
    pub order_cost: f64,
    /// Per unit of ending inventory, per day.
    pub holding_cost: f64,
    pub stockout_penalty: f64,
    /// Upper bound offered to whoever picks manual orders. Not enforced.
    pub max_inventory: u32,
    /// Accepted but unused: orders always arrive the day they are placed.
    pub lead_time: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_demand: 10.0,
            demand_variability: 3.0,
            weekend_multiplier: 1.5,
            selling_price: 10.0,
            order_cost: 5.0,
            holding_cost: 0.5,
            stockout_penalty: 15.0,
            max_inventory: 50,
            lead_time: 0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Rejects negative or non-finite numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_demand", self.base_demand),
            ("demand_variability", self.demand_variability),
            ("weekend_multiplier", self.weekend_multiplier),
            ("selling_price", self.selling_price),
            ("order_cost", self.order_cost),
            ("holding_cost", self.holding_cost),
            ("stockout_penalty", self.stockout_penalty),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.lead_time > 0 {
            warn!(
                "lead_time = {} is ignored; orders arrive the same day",
                self.lead_time
            );
        }
        Ok(())
    }

    /// Whether a manual order goes past the advisory `max_inventory` bound.
    pub fn exceeds_max_inventory(&self, order: u32) -> bool {
        order > self.max_inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "base_demand": 12.5, "lead_time": 2 }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.base_demand, 12.5);
        assert_eq!(config.lead_time, 2);
        assert_eq!(config.stockout_penalty, 15.0);
        assert_eq!(config.max_inventory, 50);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "holding_cost": -0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative { field: "holding_cost", .. }
        ));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let config = SimulationConfig {
            weekend_multiplier: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "weekend_multiplier" })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json_str("{ base_demand: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "baseDemand": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("baseDemand"));

        let misspelled = SimulationConfig::from_json_str(r#"{ "stockout_penalti": 99 }"#);
        assert!(matches!(misspelled, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn max_inventory_is_only_advisory() {
        let config = SimulationConfig::default();
        assert!(config.exceeds_max_inventory(51));
        assert!(!config.exceeds_max_inventory(50));
    }
}
