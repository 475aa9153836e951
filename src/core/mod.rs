//! Core calculations and configuration

pub mod calculators;
pub mod chart;
pub mod config;
pub mod format;
pub mod log;

// Re-export main types for cleaner imports
pub use calculators::{CalculationResult, Instrument, InterestType};
pub use chart::{ChartSpec, build_chart};
