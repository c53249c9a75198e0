//! Process-wide symbol table.
//!
//! Mirrors a runtime atom table: names are registered once and live for the
//! life of the process. Decoding never registers — [`is_interned`] is a pure
//! lookup — so a stream of unknown symbol frames cannot exhaust memory.

use std::collections::HashSet;
use std::sync::{OnceLock, RwLock};

fn table() -> &'static RwLock<HashSet<String>> {
    static TABLE: OnceLock<RwLock<HashSet<String>>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(HashSet::new()))
}

/// Registers `name` in the process-wide symbol table. Idempotent.
pub fn intern(name: &str) {
    let mut t = table().write().unwrap_or_else(|e| e.into_inner());
    if !t.contains(name) {
        t.insert(name.to_string());
    }
}

/// Returns `true` if `name` has been interned in this process.
#[must_use]
pub fn is_interned(name: &str) -> bool {
    table()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .contains(name)
}
