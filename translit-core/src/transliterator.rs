//! transliterator.rs - Session object holding both directions' tables.
//!
//! This is the surface interactive hosts call: one operation,
//! `transliterate(text, direction)`. The object is immutable once built and
//! safe to share read-only across threads; its lifetime is the caller's
//! session (process lifetime for the batch CLI, page session for a UI
//! host).
//!
//! License: MIT OR Apache-2.0

use std::sync::Arc;

use crate::compiler::{compile, CompiledRules};
use crate::errors::LoadError;
use crate::loader::load_table;
use crate::rules::Direction;

/// The Cyrillic -> Latin rule payload shipped with the crate.
pub const DEFAULT_CYR2LAT_PAYLOAD: &str = include_str!("../config/cyr2lat.js");

/// The Latin -> Cyrillic rule payload shipped with the crate.
pub const DEFAULT_LAT2CYR_PAYLOAD: &str = include_str!("../config/lat2cyr.js");

/// Both directions' compiled tables behind one call surface.
#[derive(Debug, Clone)]
pub struct Transliterator {
    cyr2lat: Arc<CompiledRules>,
    lat2cyr: Arc<CompiledRules>,
}

impl Transliterator {
    /// Builds a transliterator from already-compiled tables, e.g. ones
    /// obtained through a [`crate::cache::TableCache`].
    pub fn new(cyr2lat: Arc<CompiledRules>, lat2cyr: Arc<CompiledRules>) -> Self {
        Self { cyr2lat, lat2cyr }
    }

    /// Loads and compiles both directions from raw payloads. Each payload
    /// must bind its direction's table name (`cyr2lat` / `lat2cyr`).
    pub fn from_payloads(cyr2lat_payload: &str, lat2cyr_payload: &str) -> Result<Self, LoadError> {
        let cyr2lat = load_table(cyr2lat_payload, Direction::Cyr2Lat.binding_name())?;
        let lat2cyr = load_table(lat2cyr_payload, Direction::Lat2Cyr.binding_name())?;
        Ok(Self {
            cyr2lat: Arc::new(compile(&cyr2lat)),
            lat2cyr: Arc::new(compile(&lat2cyr)),
        })
    }

    /// Builds a transliterator from the embedded Crimean Tatar tables.
    pub fn with_default_tables() -> Result<Self, LoadError> {
        Self::from_payloads(DEFAULT_CYR2LAT_PAYLOAD, DEFAULT_LAT2CYR_PAYLOAD)
    }

    /// The compiled table for one direction.
    pub fn table(&self, direction: Direction) -> &Arc<CompiledRules> {
        match direction {
            Direction::Cyr2Lat => &self.cyr2lat,
            Direction::Lat2Cyr => &self.lat2cyr,
        }
    }

    /// Applies the selected direction's table to `text`.
    pub fn transliterate(&self, text: &str, direction: Direction) -> String {
        self.table(direction).apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_load() {
        let translit = Transliterator::with_default_tables().unwrap();
        assert!(!translit.table(Direction::Cyr2Lat).rules.is_empty());
        assert!(!translit.table(Direction::Lat2Cyr).rules.is_empty());
    }

    #[test]
    fn cyr2lat_handles_digraphs_and_singles() {
        let translit = Transliterator::with_default_tables().unwrap();
        assert_eq!(translit.transliterate("баба", Direction::Cyr2Lat), "baba");
        assert_eq!(translit.transliterate("къара", Direction::Cyr2Lat), "qara");
        assert_eq!(
            translit.transliterate("Меракълы", Direction::Cyr2Lat),
            "Meraqlı"
        );
    }

    #[test]
    fn word_initial_e_is_softened() {
        let translit = Transliterator::with_default_tables().unwrap();
        assert_eq!(translit.transliterate("ели", Direction::Cyr2Lat), "yeli");
        assert_eq!(translit.transliterate("кел", Direction::Cyr2Lat), "kel");
    }

    #[test]
    fn lat2cyr_direction_selects_the_other_table() {
        let translit = Transliterator::with_default_tables().unwrap();
        assert_eq!(translit.transliterate("qara", Direction::Lat2Cyr), "къара");
        assert_eq!(translit.transliterate("baba", Direction::Lat2Cyr), "баба");
    }

    #[test]
    fn directions_are_not_assumed_to_round_trip() {
        // The tables are heuristics; щ expands to "şç" and comes back as
        // two separate letters. Documenting the non-property, not
        // asserting an inverse.
        let translit = Transliterator::with_default_tables().unwrap();
        let forward = translit.transliterate("борщ", Direction::Cyr2Lat);
        let back = translit.transliterate(&forward, Direction::Lat2Cyr);
        assert_eq!(forward, "borşç");
        assert_ne!(back, "борщ");
    }

    #[test]
    fn empty_input_is_identity_for_both_directions() {
        let translit = Transliterator::with_default_tables().unwrap();
        assert_eq!(translit.transliterate("", Direction::Cyr2Lat), "");
        assert_eq!(translit.transliterate("", Direction::Lat2Cyr), "");
    }
}
