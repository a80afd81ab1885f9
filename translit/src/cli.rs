// translit/src/cli.rs
//! Command-line interface definition for the translit binary.
//!
//! License: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use translit_core::Direction;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "translit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert text between Cyrillic and Latin orthography",
    long_about = "Translit applies an ordered table of substitution rules to convert text \
between Cyrillic and Latin orthography. Text passed as arguments is transliterated as a \
single line; without arguments, standard input is transliterated line by line."
)]
pub struct Cli {
    /// Which direction to transliterate.
    #[arg(long, short = 'd', value_enum, default_value = "cyr2lat", help = "Select the transliteration direction.")]
    pub direction: DirectionChoice,

    /// Path to a custom rule payload for the selected direction.
    #[arg(long = "rules", short = 'r', value_name = "FILE", env = "TRANSLIT_RULES", help = "Load the selected direction's rule table from a custom payload file.")]
    pub rules: Option<PathBuf>,

    /// Suppress informational log messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, help = "Enable debug logging.")]
    pub debug: bool,

    /// Text to transliterate; reads standard input when absent.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// CLI-facing direction names, matching the rule payload binding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionChoice {
    #[value(name = "cyr2lat")]
    Cyr2Lat,
    #[value(name = "lat2cyr")]
    Lat2Cyr,
}

impl From<DirectionChoice> for Direction {
    fn from(choice: DirectionChoice) -> Self {
        match choice {
            DirectionChoice::Cyr2Lat => Direction::Cyr2Lat,
            DirectionChoice::Lat2Cyr => Direction::Lat2Cyr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_defaults_to_cyr2lat() {
        let cli = Cli::parse_from(["translit"]);
        assert_eq!(cli.direction, DirectionChoice::Cyr2Lat);
        assert!(cli.text.is_empty());
    }

    #[test]
    fn positional_text_is_collected() {
        let cli = Cli::parse_from(["translit", "-d", "lat2cyr", "qara", "baba"]);
        assert_eq!(cli.direction, DirectionChoice::Lat2Cyr);
        assert_eq!(cli.text, vec!["qara", "baba"]);
    }
}
