// translit/src/commands/batch.rs
//! Batch runner: drives the engine over external input line by line.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{Read, Write};

use translit_core::CompiledRules;

/// Runs one batch invocation against an already-loaded table.
///
/// With `text` arguments present, their space-joined concatenation is
/// transliterated as a single line. Otherwise `input` is read to EOF and
/// each line is transliterated independently, in order; a trailing newline
/// does not produce a spurious empty output line. Lines share nothing, so
/// no state leaks between them.
pub fn run_batch(
    table: &CompiledRules,
    text: &[String],
    mut input: impl Read,
    mut output: impl Write,
) -> Result<()> {
    if !text.is_empty() {
        let joined = text.join(" ");
        debug!("Transliterating {} argument(s) as one line.", text.len());
        writeln!(output, "{}", table.apply(&joined))?;
        return Ok(());
    }

    let mut content = String::new();
    input
        .read_to_string(&mut content)
        .context("Failed to read standard input")?;
    if content.is_empty() {
        return Ok(());
    }

    let mut lines: Vec<&str> = content.split('\n').collect();
    if content.ends_with('\n') {
        lines.pop();
    }
    info!("Transliterating {} line(s) from standard input.", lines.len());

    for line in lines {
        writeln!(output, "{}", table.apply(line))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use translit_core::{compile, load_table};

    fn scenario_table() -> CompiledRules {
        let payload = r#"var cyr2lat = [["jo", "yo"], [/j/g, "y"], [/ y/, " Y"]];"#;
        compile(&load_table(payload, "cyr2lat").unwrap())
    }

    fn run_to_string(table: &CompiledRules, text: &[String], stdin: &str) -> String {
        let mut out = Vec::new();
        run_batch(table, text, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn arguments_are_joined_with_single_spaces() {
        let table = scenario_table();
        let out = run_to_string(&table, &["jo".into(), "jaguar".into()], "");
        assert_eq!(out, "Yo yaguar\n");
    }

    #[test]
    fn lines_are_independent() {
        let table = scenario_table();
        let out = run_to_string(&table, &[], "jo jaguar\njo jaguar");
        assert_eq!(out, "Yo yaguar\nYo yaguar\n");
    }

    #[test]
    fn trailing_newline_adds_no_empty_line() {
        let table = scenario_table();
        let out = run_to_string(&table, &[], "jo jaguar\n");
        assert_eq!(out, "Yo yaguar\n");
    }

    #[test]
    fn interior_empty_lines_are_preserved() {
        let table = scenario_table();
        let out = run_to_string(&table, &[], "jo\n\njo\n");
        assert_eq!(out, "Yo\n\nYo\n");
    }

    #[test]
    fn empty_input_produces_no_output() {
        let table = scenario_table();
        let out = run_to_string(&table, &[], "");
        assert_eq!(out, "");
    }
}
