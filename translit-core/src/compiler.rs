//! compiler.rs - Turns a loaded rule table into compiled, applicable rules.
//!
//! Compilation happens once per table; the engine then applies the compiled
//! form on every call. Invalid entries are dropped here, along with any
//! regex pattern the `regex` crate cannot compile (e.g. lookaround carried
//! over from a JS-flavored rule). Rule tables are third-party-maintained
//! data prone to stray malformed entries, so a bad entry is never fatal and
//! the application hot path carries no skip branches.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::rules::{Pattern, RuleEntry, RuleTable};

/// Upper bound for a compiled pattern, same order of magnitude a single
/// letter-mapping rule could never reach.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled substitution rule, ready for application.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled pattern. Literal rules are compiled through
    /// `regex::escape`, so one code path applies every rule.
    pub regex: Regex,
    /// Replacement text. `$n` capture references are expanded for regex
    /// rules only.
    pub replacement: String,
    /// Replace every non-overlapping occurrence instead of only the first.
    pub global: bool,
    /// The rule came from a literal pattern; its replacement is inserted
    /// verbatim, with no `$` expansion.
    pub literal: bool,
}

/// All compiled rules for one direction, in table order.
#[derive(Debug, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

/// Compiles every valid entry of `table`, in order. Entries that are
/// structurally invalid or fail regex compilation are skipped; only their
/// index is logged, never their contents.
pub fn compile(table: &RuleTable) -> CompiledRules {
    let mut rules = Vec::with_capacity(table.valid_count());

    for (index, entry) in table.entries.iter().enumerate() {
        let rule = match entry {
            RuleEntry::Valid(rule) => rule,
            RuleEntry::Invalid => continue,
        };

        let global = rule.pattern.is_global();
        let (source, ignore_case, literal) = match &rule.pattern {
            Pattern::Literal(text) => (regex::escape(text), false, true),
            Pattern::Regex {
                source, ignore_case, ..
            } => (source.clone(), *ignore_case, false),
        };

        match RegexBuilder::new(&source)
            .case_insensitive(ignore_case)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => rules.push(CompiledRule {
                regex,
                replacement: rule.replacement.clone(),
                global,
                literal,
            }),
            Err(_) => {
                debug!("Entry {} failed to compile; it will be skipped.", index);
            }
        }
    }

    debug!("Compiled {} of {} entries.", rules.len(), table.len());
    CompiledRules { rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn literal(pattern: &str, replacement: &str) -> RuleEntry {
        RuleEntry::Valid(Rule {
            pattern: Pattern::Literal(pattern.into()),
            replacement: replacement.into(),
        })
    }

    #[test]
    fn compiles_valid_entries_in_order() {
        let table = RuleTable {
            entries: vec![
                literal("jo", "yo"),
                RuleEntry::Invalid,
                RuleEntry::Valid(Rule {
                    pattern: Pattern::Regex {
                        source: "j".into(),
                        global: true,
                        ignore_case: false,
                    },
                    replacement: "y".into(),
                }),
            ],
        };
        let compiled = compile(&table);
        assert_eq!(compiled.rules.len(), 2);
        assert!(compiled.rules[0].literal);
        assert!(!compiled.rules[0].global);
        assert!(compiled.rules[1].global);
    }

    #[test]
    fn global_flag_follows_the_pattern() {
        let table = RuleTable {
            entries: vec![
                RuleEntry::Valid(Rule {
                    pattern: Pattern::Regex {
                        source: " y".into(),
                        global: false,
                        ignore_case: false,
                    },
                    replacement: " Y".into(),
                }),
                RuleEntry::Valid(Rule {
                    pattern: Pattern::Regex {
                        source: "j".into(),
                        global: true,
                        ignore_case: false,
                    },
                    replacement: "y".into(),
                }),
            ],
        };
        let compiled = compile(&table);
        assert!(!compiled.rules[0].global);
        assert!(compiled.rules[1].global);
    }

    #[test]
    fn literal_patterns_are_escaped() {
        let table = RuleTable {
            entries: vec![literal("a.b", "x")],
        };
        let compiled = compile(&table);
        assert!(compiled.rules[0].regex.is_match("a.b"));
        assert!(!compiled.rules[0].regex.is_match("acb"));
    }

    #[test]
    fn uncompilable_regex_is_skipped() {
        // Lookahead is valid JS regex but not supported by the regex crate.
        let table = RuleTable {
            entries: vec![
                RuleEntry::Valid(Rule {
                    pattern: Pattern::Regex {
                        source: "a(?=b)".into(),
                        global: true,
                        ignore_case: false,
                    },
                    replacement: "x".into(),
                }),
                literal("a", "b"),
            ],
        };
        let compiled = compile(&table);
        assert_eq!(compiled.rules.len(), 1);
        assert!(compiled.rules[0].literal);
    }

    #[test]
    fn case_insensitive_flag_is_honored() {
        let table = RuleTable {
            entries: vec![RuleEntry::Valid(Rule {
                pattern: Pattern::Regex {
                    source: "ja".into(),
                    global: true,
                    ignore_case: true,
                },
                replacement: "ya".into(),
            })],
        };
        let compiled = compile(&table);
        assert!(compiled.rules[0].regex.is_match("JA"));
    }
}
