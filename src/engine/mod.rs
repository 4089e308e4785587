//! Simulation engine: transition rules and the timer-driven runner

pub mod rules;
pub mod runner;

pub use rules::{LifeRules, StepEngine};
pub use runner::Simulation;
