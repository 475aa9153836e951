//! Command line presentation of the calculators

pub mod inputs;
pub mod report;
pub mod setup;
pub mod ui;
