//! engine.rs - Applies a compiled rule table to a string.
//!
//! The transform is a pure function of (input, table): each call owns its
//! own working buffer, no state is carried between calls, and the table is
//! never written to. Word-boundary anchoring works through padding: the
//! buffer is bracketed with one space on each side before rule application,
//! so a rule can anchor to "start/end of word" with a literal leading or
//! trailing space in its pattern, and exactly one character is stripped
//! from each end afterwards.
//!
//! License: MIT OR Apache-2.0

use regex::NoExpand;

use crate::compiler::{CompiledRule, CompiledRules};

/// The working string for one transliteration call, bracketed with one
/// boundary space per side. Created fresh per call, discarded after.
struct PaddedBuffer(String);

impl PaddedBuffer {
    fn wrap(input: &str) -> Self {
        let mut buffer = String::with_capacity(input.len() + 2);
        buffer.push(' ');
        buffer.push_str(input);
        buffer.push(' ');
        PaddedBuffer(buffer)
    }

    /// Applies one rule: every non-overlapping occurrence when the rule is
    /// global, otherwise only the first occurrence scanning left to right.
    /// Literal rules substitute their replacement verbatim; regex rules
    /// expand `$n` capture references.
    fn substitute(&mut self, rule: &CompiledRule) {
        let next = if rule.literal {
            let replacement = NoExpand(rule.replacement.as_str());
            if rule.global {
                rule.regex.replace_all(&self.0, replacement)
            } else {
                rule.regex.replace(&self.0, replacement)
            }
        } else {
            let replacement = rule.replacement.as_str();
            if rule.global {
                rule.regex.replace_all(&self.0, replacement)
            } else {
                rule.regex.replace(&self.0, replacement)
            }
        }
        .into_owned();
        self.0 = next;
    }

    /// Strips exactly one leading and one trailing character. A rule may
    /// have rewritten the boundary spaces themselves, so whatever single
    /// code point sits at each end is removed. If the rules collapsed the
    /// buffer below two characters, the output is empty.
    fn into_output(self) -> String {
        let buffer = self.0;
        let Some(first) = buffer.chars().next() else {
            return String::new();
        };
        let Some(last) = buffer.chars().next_back() else {
            return String::new();
        };
        let start = first.len_utf8();
        let end = buffer.len() - last.len_utf8();
        if end <= start {
            return String::new();
        }
        buffer[start..end].to_string()
    }
}

impl CompiledRules {
    /// Transliterates `input` by applying every rule in table order. Rule
    /// *i* operates on the output of rule *i-1*. Empty input short-circuits
    /// to empty output with no padding and no rule application.
    pub fn apply(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        let mut buffer = PaddedBuffer::wrap(input);
        for rule in &self.rules {
            buffer.substitute(rule);
        }
        buffer.into_output()
    }
}
