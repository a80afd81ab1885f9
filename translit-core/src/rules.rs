//! Rule-table data model for `translit-core`.
//!
//! This module defines the core data structures for substitution rules as
//! they come out of the loader, before compilation. Order is semantically
//! significant everywhere: rule *i* is applied to the output of rule *i-1*,
//! not to the original input.
//!
//! License: MIT OR Apache-2.0

use std::fmt;

/// The pattern half of a substitution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A literal substring, matched verbatim.
    Literal(String),
    /// A regex pattern carried by the payload as a JS regex literal.
    Regex {
        /// The regex source text, without delimiters.
        source: String,
        /// `g` flag: replace every non-overlapping occurrence instead of
        /// only the first.
        global: bool,
        /// `i` flag.
        ignore_case: bool,
    },
}

impl Pattern {
    /// Whether this pattern carries the global-match flag. Literal patterns
    /// are always first-match only.
    pub fn is_global(&self) -> bool {
        matches!(self, Pattern::Regex { global: true, .. })
    }
}

/// A single substitution rule: an ordered (pattern, replacement) pair.
///
/// For regex patterns the replacement may reference capture groups as `$n`;
/// for literal patterns the replacement is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub replacement: String,
}

/// One slot in a rule table.
///
/// Entries that were not structured as a two-element (pattern, replacement)
/// pair, or whose halves had the wrong type, are kept as `Invalid` so that
/// table indices line up with the payload. Invalid entries are skipped at
/// compile time and never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEntry {
    Valid(Rule),
    Invalid,
}

/// An ordered sequence of rule entries for one transliteration direction.
///
/// An empty table is legal and denotes the identity transform. Tables are
/// never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    pub entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// Number of entries, including invalid ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of structurally valid rules.
    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, RuleEntry::Valid(_)))
            .count()
    }
}

/// Which of the two rule tables to apply. The engine itself is
/// table-agnostic; direction only selects a table and names the global
/// binding the payload is expected to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Cyr2Lat,
    Lat2Cyr,
}

impl Direction {
    /// The global variable name the payload for this direction must bind.
    /// These match the names the original UI glue passes around.
    pub fn binding_name(&self) -> &'static str {
        match self {
            Direction::Cyr2Lat => "cyr2lat",
            Direction::Lat2Cyr => "lat2cyr",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding_name())
    }
}
