//! loader.rs - Extracts a rule table from an untrusted script payload.
//!
//! Rule tables are supplied as externally maintained, code-shaped data: a
//! script that, when evaluated, binds an array of `[pattern, replacement]`
//! pairs to a well-known global name. The payload is evaluated inside a
//! QuickJS context stripped down to the script evaluator and the RegExp
//! machinery, so it cannot reach the filesystem, the network, timers, or
//! any host global. Everything read back out is
//! treated as untrusted data and shape-validated before use.
//!
//! The loader performs no caching; callers decide table lifetime (see
//! [`crate::cache::TableCache`]).
//!
//! License: MIT OR Apache-2.0

use log::debug;
use rquickjs::context::intrinsic;
use rquickjs::{CatchResultExt, Context, Object, Runtime, Value};

use crate::errors::LoadError;
use crate::rules::{Pattern, Rule, RuleEntry, RuleTable};

/// Memory ceiling for payload evaluation. Real rule tables are a few
/// kilobytes; a payload that needs more than this is not a rule table.
const SANDBOX_MEMORY_LIMIT: usize = 16 * 1024 * 1024;

/// Evaluates `payload` in a fresh sandbox and returns the rule table bound
/// under `binding`.
///
/// A byte-order marker at the start of the payload is stripped before
/// evaluation. Structurally malformed entries are kept as
/// [`RuleEntry::Invalid`] rather than failing the load; only a missing or
/// non-array binding ([`LoadError::InvalidShape`]) or a throwing payload
/// ([`LoadError::EvaluationFailed`]) is fatal.
pub fn load_table(payload: &str, binding: &str) -> Result<RuleTable, LoadError> {
    let source = payload.strip_prefix('\u{feff}').unwrap_or(payload);
    debug!(
        "Evaluating rule payload for binding '{}' ({} bytes).",
        binding,
        source.len()
    );

    let runtime = Runtime::new().map_err(|e| LoadError::Sandbox(e.to_string()))?;
    runtime.set_memory_limit(SANDBOX_MEMORY_LIMIT);

    // Only the script evaluator and RegExp support are exposed inside the
    // context: no Date, no JSON, no timers, and no binding that resolves
    // outward into the host.
    let context = Context::custom::<(
        intrinsic::Eval,
        intrinsic::RegExpCompiler,
        intrinsic::RegExp,
    )>(&runtime)
    .map_err(|e| LoadError::Sandbox(e.to_string()))?;

    context.with(|ctx| {
        ctx.eval::<(), _>(source)
            .catch(&ctx)
            .map_err(|e| LoadError::EvaluationFailed(e.to_string()))?;

        // A binding the payload never populated reads back as undefined,
        // which `Option` turns into an explicit `None`.
        let value: Option<Value> = ctx
            .globals()
            .get(binding)
            .map_err(|e| LoadError::EvaluationFailed(e.to_string()))?;

        let table = value
            .and_then(Value::into_array)
            .ok_or_else(|| LoadError::InvalidShape(binding.to_string()))?;

        let mut entries = Vec::with_capacity(table.len());
        for index in 0..table.len() {
            let entry = match table.get::<Value>(index) {
                Ok(element) => convert_entry(&element),
                Err(_) => RuleEntry::Invalid,
            };
            if matches!(entry, RuleEntry::Invalid) {
                debug!("Entry {} in '{}' is malformed; it will be skipped.", index, binding);
            }
            entries.push(entry);
        }

        let loaded = RuleTable { entries };
        debug!(
            "Loaded {} entries ({} valid) for binding '{}'.",
            loaded.len(),
            loaded.valid_count(),
            binding
        );
        Ok(loaded)
    })
}

/// Converts one table element into a rule entry. Anything that is not a
/// two-element `[pattern, replacement]` pair with a string or RegExp
/// pattern and a string replacement comes back as `Invalid`.
fn convert_entry<'js>(element: &Value<'js>) -> RuleEntry {
    let Some(pair) = element.as_array() else {
        return RuleEntry::Invalid;
    };
    if pair.len() != 2 {
        return RuleEntry::Invalid;
    }
    let Ok(pattern_value) = pair.get::<Value>(0) else {
        return RuleEntry::Invalid;
    };
    let Ok(replacement) = pair.get::<String>(1) else {
        return RuleEntry::Invalid;
    };

    let pattern = if let Some(literal) = pattern_value.as_string() {
        match literal.to_string() {
            Ok(text) => Pattern::Literal(text),
            Err(_) => return RuleEntry::Invalid,
        }
    } else if let Some(object) = pattern_value.as_object() {
        match regex_pattern(object) {
            Some(pattern) => pattern,
            None => return RuleEntry::Invalid,
        }
    } else {
        return RuleEntry::Invalid;
    };

    RuleEntry::Valid(Rule { pattern, replacement })
}

/// Reads a RegExp object through its `source`/`global`/`ignoreCase`
/// properties. Flags other than `g` and `i` are ignored.
fn regex_pattern<'js>(object: &Object<'js>) -> Option<Pattern> {
    let source = object.get::<_, Option<String>>("source").ok().flatten()?;
    let global = object
        .get::<_, Option<bool>>("global")
        .ok()
        .flatten()
        .unwrap_or(false);
    let ignore_case = object
        .get::<_, Option<bool>>("ignoreCase")
        .ok()
        .flatten()
        .unwrap_or(false);
    Some(Pattern::Regex {
        source,
        global,
        ignore_case,
    })
}
