// src/automaton/mod.rs
//! Automaton core
//!
//! Cell state, the B3/S23 transition rule, and the double-buffered toroidal
//! grid that advances one generation per call to [`Grid::step`].

pub mod cell;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use cell::Cell;
pub use grid::{Grid, StepSummary};
pub use patterns::LifePattern;
