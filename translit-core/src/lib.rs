// translit-core/src/lib.rs
//! # translit-core
//!
//! `translit-core` is the rule-based transliteration engine behind the
//! `translit` tool: it converts text between Cyrillic and Latin orthography
//! by applying an ordered table of substitution rules. Rule tables arrive
//! as externally maintained, code-shaped payloads; the loader evaluates
//! them inside a capability-restricted QuickJS sandbox and shape-validates
//! everything it reads back out.
//!
//! The library is pure computation: no I/O happens inside the engine, and
//! a transliteration call is a pure function of its input and the table.
//!
//! ## Modules
//!
//! * `rules`: the rule-table data model (`Rule`, `RuleTable`, `Direction`).
//! * `loader`: sandboxed payload evaluation and table extraction.
//! * `compiler`: compiles a loaded table into applicable rules.
//! * `engine`: applies compiled rules through the padded working buffer.
//! * `cache`: caller-owned memoization of compiled tables.
//! * `transliterator`: the two-direction session object.
//! * `errors`: the `LoadError` taxonomy.
//!
//! ## Usage
//!
//! ```rust
//! use translit_core::{Direction, Transliterator};
//!
//! let translit = Transliterator::with_default_tables()?;
//! assert_eq!(translit.transliterate("къара", Direction::Cyr2Lat), "qara");
//! # Ok::<(), translit_core::LoadError>(())
//! ```
//!
//! ## Error handling
//!
//! Loader failures are typed ([`LoadError`]) and always propagate to the
//! caller. Individual malformed rule entries are not errors: they are
//! skipped silently, since rule tables are third-party-maintained data
//! prone to stray malformed entries. The engine itself has no error path.
//!
//! Note that the two directions are not inverses of one another; the rule
//! tables are linguistic heuristics, and nothing here assumes
//! invertibility.
//!
//! License: MIT OR Apache-2.0

pub mod cache;
pub mod compiler;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod rules;
pub mod transliterator;

pub use cache::TableCache;
pub use compiler::{compile, CompiledRule, CompiledRules};
pub use errors::LoadError;
pub use loader::load_table;
pub use rules::{Direction, Pattern, Rule, RuleEntry, RuleTable};
pub use transliterator::{
    Transliterator, DEFAULT_CYR2LAT_PAYLOAD, DEFAULT_LAT2CYR_PAYLOAD,
};
