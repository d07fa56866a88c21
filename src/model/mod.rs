pub mod calendar;
pub mod state;
pub mod summary;
