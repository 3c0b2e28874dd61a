//! YAML parser for query definitions
//!
//! Parses and validates query definition files.
//! Supports both built-in definitions (by name) and custom YAML files (by path).

use crate::catalog;
use crate::error::{Error, Result};
use crate::loader::types::QueryDefinition;
use crate::types::is_scalar;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a query definition from a name or file path
///
/// Built-in names (e.g. `engagements-cursor`) are checked first, then the
/// input is read as a path.
///
/// # Examples
///
/// ```ignore
/// let def = load_definition("engagements-offset")?;
/// let def = load_definition("./queries/my-query.yaml")?;
/// ```
pub fn load_definition(name_or_path: impl AsRef<Path>) -> Result<QueryDefinition> {
    let path = name_or_path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = catalog::get_builtin(&path_str) {
            return load_definition_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!(
                "Query '{}' not found. Built-in queries: {}. Or provide a path to a YAML file.",
                path.display(),
                catalog::list_builtin().join(", ")
            ))
        } else {
            Error::config(format!(
                "Failed to read query file '{}': {e}",
                path.display()
            ))
        }
    })?;
    load_definition_from_str(&content)
}

/// Load a query definition from a YAML string
pub fn load_definition_from_str(yaml: &str) -> Result<QueryDefinition> {
    let def: QueryDefinition = serde_yaml::from_str(yaml)?;

    validate_definition(&def)?;
    Ok(def)
}

/// Validate a query definition
fn validate_definition(def: &QueryDefinition) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::config("Query name cannot be empty"));
    }

    if def.query.trim().is_empty() {
        return Err(Error::config(format!(
            "Query '{}' has no query text",
            def.name
        )));
    }

    if def.page_size == 0 {
        return Err(Error::invalid_value("page_size", "must be at least 1"));
    }

    for (name, value) in &def.variables {
        if !is_scalar(value) {
            return Err(Error::invalid_value(
                format!("variables.{name}"),
                "only scalar values are supported",
            ));
        }
    }

    let layout = &def.layout;
    for (field, value) in [
        ("layout.root", &layout.root),
        ("layout.profile", &layout.profile),
        ("layout.collection", &layout.collection),
    ] {
        if value.is_empty() {
            return Err(Error::invalid_value(field, "cannot be empty"));
        }
    }

    let params = def.pagination.params();
    let distinct: HashSet<_> = params.iter().collect();
    if params.iter().any(|p| p.is_empty()) || distinct.len() != params.len() {
        return Err(Error::config(format!(
            "Query '{}' needs two distinct, non-empty {} variable names",
            def.name,
            def.strategy()
        )));
    }

    for param in params {
        if !declares_variable(&def.query, param) {
            return Err(Error::config(format!(
                "Query '{}' does not declare ${param} used by {} pagination",
                def.name,
                def.strategy()
            )));
        }
    }

    Ok(())
}

/// Whether `$name` appears in the query as a whole variable reference
fn declares_variable(query: &str, name: &str) -> bool {
    let needle = format!("${name}");
    query.match_indices(&needle).any(|(start, _)| {
        !matches!(
            query[start + needle.len()..].chars().next(),
            Some(c) if c.is_alphanumeric() || c == '_'
        )
    })
}
