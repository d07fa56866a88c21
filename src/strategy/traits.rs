// src/strategy/traits.rs

use std::fmt::Debug;

/// Decides how many units to order at the start of a day.
///
/// Implementations must be pure: the same inventory and day always give
/// the same order, and they never draw from the random source.
pub trait OrderPolicy: Debug + Send + Sync {
    /// # Arguments
    /// * `inventory` - Units on hand at the start of the day.
    /// * `day` - Absolute day index (day 0 is a Monday).
    fn calculate_order(&self, inventory: u64, day: usize) -> u32;
}
