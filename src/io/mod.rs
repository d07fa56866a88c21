pub mod demand;
pub mod random;
pub mod reporting;
