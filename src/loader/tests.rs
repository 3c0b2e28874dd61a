//! Tests for YAML loader module

use super::*;
use crate::error::Error;
use crate::pagination::{Paginator, StopCondition};
use crate::types::{Strategy, VariableMap};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;

const OFFSET_QUERY: &str = "query Q($clientId: String!, $skip: Int!, $take: Int!) { clients { clientId } }";

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_definition() {
    let yaml = r#"
name: minimal
pagination:
  type: offset
query: "query Q($skip: Int!, $take: Int!) { clients { clientId } }"
"#;

    let def = load_definition_from_str(yaml).unwrap();
    assert_eq!(def.name, "minimal");
    assert_eq!(def.page_size, 500);
    assert!(def.description.is_none());
    assert!(def.variables.is_empty());
    assert_eq!(def.layout, crate::response::ResponseLayout::default());
    assert_eq!(
        def.pagination,
        PaginationDefinition::Offset {
            skip_param: "skip".into(),
            take_param: "take".into(),
            stop: StopCondition::ShortPage,
        }
    );
}

#[test]
fn test_load_cursor_definition() {
    let yaml = r#"
name: members
description: Team members
page_size: 50
variables:
  org: acme
  active: true
layout:
  root: orgs
  profile: teams
  collection: members
pagination:
  type: cursor
  first_param: limit
  after_param: cursor
query: |
  query Members($org: String!, $limit: Int!, $cursor: String) {
    orgs(name: $org) { teams { members(first: $limit, after: $cursor) { totalCount } } }
  }
"#;

    let def = load_definition_from_str(yaml).unwrap();
    assert_eq!(def.description.as_deref(), Some("Team members"));
    assert_eq!(def.page_size, 50);
    assert_eq!(def.strategy(), Strategy::Cursor);
    assert_eq!(def.variables.get("active"), Some(&json!(true)));
    assert_eq!(def.layout.root, "orgs");
    assert_eq!(def.pagination.params(), ["limit", "cursor"]);
}

#[test]
fn test_load_field_stop_condition() {
    let yaml = format!(
        r#"
name: flagged
pagination:
  type: offset
  stop:
    type: field
    path: data.meta.lastPage
    value: true
query: "{OFFSET_QUERY}"
"#
    );

    let def = load_definition_from_str(&yaml).unwrap();
    match def.pagination {
        PaginationDefinition::Offset { stop, .. } => {
            assert_eq!(stop, StopCondition::field("data.meta.lastPage", true));
        }
        other => panic!("expected offset, got {other:?}"),
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejects_empty_name() {
    let yaml = format!("name: ''\npagination:\n  type: offset\nquery: \"{OFFSET_QUERY}\"\n");
    assert!(load_definition_from_str(&yaml).is_err());
}

#[test]
fn test_rejects_empty_query() {
    let yaml = "name: x\npagination:\n  type: offset\nquery: '  '\n";
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("no query text"));
}

#[test]
fn test_rejects_zero_page_size() {
    let yaml = format!("name: x\npage_size: 0\npagination:\n  type: offset\nquery: \"{OFFSET_QUERY}\"\n");
    let err = load_definition_from_str(&yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "page_size"));
}

#[test]
fn test_rejects_structured_variables() {
    let yaml = format!(
        "name: x\nvariables:\n  ids: [1, 2]\npagination:\n  type: offset\nquery: \"{OFFSET_QUERY}\"\n"
    );
    let err = load_definition_from_str(&yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "variables.ids"));
}

#[test]
fn test_rejects_undeclared_paging_variable() {
    let yaml = r#"
name: x
pagination:
  type: cursor
query: "query Q($first: Int!) { clients { clientId } }"
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("$after"));
}

#[test]
fn test_variable_prefix_is_not_a_declaration() {
    let yaml = r#"
name: x
pagination:
  type: offset
query: "query Q($skipped: Int!, $take: Int!) { clients { clientId } }"
"#;
    assert!(load_definition_from_str(yaml).is_err());
}

#[test]
fn test_rejects_duplicate_params() {
    let yaml = r#"
name: x
pagination:
  type: offset
  skip_param: n
  take_param: n
query: "query Q($n: Int!) { clients { clientId } }"
"#;
    assert!(load_definition_from_str(yaml).is_err());
}

#[test]
fn test_rejects_unknown_strategy() {
    let yaml = format!("name: x\npagination:\n  type: page_number\nquery: \"{OFFSET_QUERY}\"\n");
    let err = load_definition_from_str(&yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_rejects_empty_layout_field() {
    let yaml = format!(
        "name: x\nlayout:\n  collection: ''\npagination:\n  type: offset\nquery: \"{OFFSET_QUERY}\"\n"
    );
    let err = load_definition_from_str(&yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "layout.collection"));
}

// ============================================================================
// Name / Path Resolution Tests
// ============================================================================

#[test]
fn test_load_builtin_by_name() {
    let def = load_definition("engagements-offset").unwrap();
    assert_eq!(def.strategy(), Strategy::Offset);
    assert_eq!(def.page_size, 500);
    assert_eq!(def.variables.get("clientId"), Some(&json!("0008005369")));
    assert!(def.query.contains("clientFiscalYear"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "name: from-file\npagination:\n  type: offset\nquery: \"{OFFSET_QUERY}\""
    )
    .unwrap();

    let def = load_definition(file.path()).unwrap();
    assert_eq!(def.name, "from-file");
}

#[test]
fn test_missing_file_lists_builtins() {
    let err = load_definition("no-such-query").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("no-such-query"));
    assert!(message.contains("engagements-cursor"));
}

// ============================================================================
// Building Tests
// ============================================================================

#[test]
fn test_build_offset_paginator() {
    let def = load_definition("engagements-offset").unwrap();
    let paginator = def.build_paginator(None).unwrap();
    assert_eq!(paginator.strategy(), Strategy::Offset);
    assert_eq!(paginator.page_size(), 500);

    let paginator = def.build_paginator(Some(25)).unwrap();
    assert_eq!(paginator.page_size(), 25);
}

#[test]
fn test_build_paginator_rejects_zero_override() {
    let def = load_definition("engagements-cursor").unwrap();
    assert!(def.build_paginator(Some(0)).is_err());
}

#[test]
fn test_paged_query_overrides_variables() {
    let def = load_definition("engagements-cursor").unwrap();
    let mut overrides = VariableMap::new();
    overrides.insert("fiscalYear".into(), json!("2024"));

    let query = def.paged_query(&overrides);
    assert_eq!(query.variables.get("fiscalYear"), Some(&json!("2024")));
    assert_eq!(query.variables.get("clientId"), Some(&json!("0008005369")));
    assert_eq!(query.query, def.query);
    assert_eq!(query.layout, def.layout);
}
