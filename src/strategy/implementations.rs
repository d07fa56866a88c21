// src/strategy/implementations.rs

use crate::model::calendar::is_weekend;
use crate::strategy::traits::OrderPolicy;

// =========================================================================
// 1. Manual Policy
// =========================================================================

/// Orders a fixed, externally chosen quantity every day.
///
/// No check against `max_inventory` happens here; that bound belongs to
/// whoever picks the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualPolicy {
    quantity: u32,
}

impl ManualPolicy {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }
}

impl OrderPolicy for ManualPolicy {
    fn calculate_order(&self, _inventory: u64, _day: usize) -> u32 {
        self.quantity
    }
}

// =========================================================================
// 2. Simple Heuristic (Order-Up-To with weekend bump)
// =========================================================================

/// Order-up-to policy with one day of lookahead.
///
/// Target is `weekend_target` when tomorrow is a weekend day and
/// `weekday_target` otherwise. Formula: Order = max(0, Target - Inventory)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleHeuristic {
    weekday_target: u32,
    weekend_target: u32,
}

impl SimpleHeuristic {
    pub const WEEKDAY_TARGET: u32 = 20;
    pub const WEEKEND_TARGET: u32 = 25;

    pub fn new() -> Self {
        Self::with_targets(Self::WEEKDAY_TARGET, Self::WEEKEND_TARGET)
    }

    pub fn with_targets(weekday_target: u32, weekend_target: u32) -> Self {
        Self {
            weekday_target,
            weekend_target,
        }
    }

    pub fn target_for(&self, day: usize) -> u32 {
        if is_weekend(day + 1) {
            self.weekend_target
        } else {
            self.weekday_target
        }
    }
}

impl Default for SimpleHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderPolicy for SimpleHeuristic {
    fn calculate_order(&self, inventory: u64, day: usize) -> u32 {
        // Overstocked means no order.
        let target = self.target_for(day);
        u32::try_from(inventory).map_or(0, |on_hand| target.saturating_sub(on_hand))
    }
}

// =========================================================================
// 3. Policy selection
// =========================================================================

/// The two policies a user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Order this many units every day.
    Manual(u32),
    /// Built-in order-up-to heuristic (20, or 25 before a weekend day).
    Heuristic,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Manual(10)
    }
}

impl OrderPolicy for Policy {
    fn calculate_order(&self, inventory: u64, day: usize) -> u32 {
        match *self {
            Policy::Manual(quantity) => ManualPolicy::new(quantity).calculate_order(inventory, day),
            Policy::Heuristic => SimpleHeuristic::new().calculate_order(inventory, day),
        }
    }
}

/// Order quantity for the given policy, inventory and day.
pub fn select_order(policy: &Policy, inventory: u64, day: usize) -> u32 {
    policy.calculate_order(inventory, day)
}
