//! Per-frame evaluation of a composition.

pub mod evaluator;
