// translit/src/lib.rs
//! # translit CLI
//!
//! Command-line front end for the `translit-core` transliteration engine.
//! The binary transliterates its arguments as one line, or standard input
//! line by line when no arguments are given.

pub mod cli;
pub mod commands;
pub mod logger;
