// translit/src/commands/mod.rs
//! Command implementations for the translit binary.

pub mod batch;
