//! Symbol tables shared by the models and the engine.

pub mod symbols;
