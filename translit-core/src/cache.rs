//! cache.rs - Caller-owned memoization of compiled rule tables.
//!
//! Loading runs a sandboxed evaluation and compilation runs the regex
//! builder, so a host that transliterates repeatedly wants to do both once
//! per payload. The cache is an explicitly owned object rather than a
//! process-wide global: the batch CLI keeps one for the process lifetime,
//! an interactive host keeps one per session. Cached tables are handed out
//! as `Arc`s and are safe to share read-only across threads.
//!
//! License: MIT OR Apache-2.0

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;

use crate::compiler::{compile, CompiledRules};
use crate::errors::LoadError;
use crate::loader::load_table;

/// Memoizes `payload x binding name -> compiled table`.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<u64, Arc<CompiledRules>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled table for `payload`, loading and compiling it
    /// on first sight. Loader errors are never cached; a failed payload is
    /// re-evaluated on the next call.
    pub fn get_or_load(
        &mut self,
        payload: &str,
        binding: &str,
    ) -> Result<Arc<CompiledRules>, LoadError> {
        let key = cache_key(payload, binding);
        if let Some(table) = self.entries.get(&key) {
            debug!("Serving compiled table from cache for '{}'.", binding);
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(compile(&load_table(payload, binding)?));
        self.entries.insert(key, Arc::clone(&table));
        debug!(
            "Compiled and cached table for '{}' ({} rules).",
            binding,
            table.rules.len()
        );
        Ok(table)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cache_key(payload: &str, binding: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    payload.hash(&mut hasher);
    binding.hash(&mut hasher);
    hasher.finish()
}
