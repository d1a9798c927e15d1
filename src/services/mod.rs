//! Core services for path handling, traversal, size computation and the calculator

pub mod calculator;
pub mod path;
pub mod size;
pub mod traverse;
