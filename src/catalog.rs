//! Built-in query definitions embedded in the binary
//!
//! Lets users pass `--query engagements-cursor` instead of a file path.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in query YAML definitions
pub static BUILTIN_QUERIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Full engagement listings
    m.insert(
        "engagements-offset",
        include_str!("../queries/engagements-offset.yaml"),
    );
    m.insert(
        "engagements-cursor",
        include_str!("../queries/engagements-cursor.yaml"),
    );

    // Minimal selections for probing
    m.insert(
        "engagements-offset-probe",
        include_str!("../queries/engagements-offset-probe.yaml"),
    );
    m.insert(
        "engagements-cursor-probe",
        include_str!("../queries/engagements-cursor-probe.yaml"),
    );

    m
});

/// Get a built-in query by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_QUERIES.get(name).copied()
}

/// Check if a name is a built-in query
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_QUERIES.contains_key(name)
}

/// List all built-in query names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_QUERIES.keys().copied().collect();
    names.sort_unstable();
    names
}
