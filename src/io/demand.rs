// src/io/demand.rs

use crate::io::random::RandomSource;
use crate::model::calendar::is_weekend;
use crate::simulation::config::SimulationConfig;

/// Expected demand for `day` before noise is applied.
///
/// Weekend days scale the base demand by `weekend_multiplier`.
pub fn mean_demand(day: usize, config: &SimulationConfig) -> f64 {
    let multiplier = if is_weekend(day) {
        config.weekend_multiplier
    } else {
        1.0
    };
    config.base_demand * multiplier
}

/// Draws the customer demand for `day`.
///
/// Noise is uniform over `[-variability, +variability)`, built from one
/// unit draw as `(u - 0.5) * 2 * variability`. The sum is rounded to the
/// nearest integer and negative values are clamped to 0.
///
/// Always consumes exactly one draw, even when variability is zero.
pub fn generate_demand<R: RandomSource + ?Sized>(
    day: usize,
    config: &SimulationConfig,
    rng: &mut R,
) -> u32 {
    let noise = (rng.next_unit() - 0.5) * 2.0 * config.demand_variability;
    let val = (mean_demand(day, config) + noise).round();

    if val <= 0.0 {
        0
    } else {
        val as u32
    }
}
