//! Display and output helpers for the CLI driver

pub mod display;

pub use display::{ColorOutput, GridRenderer};
