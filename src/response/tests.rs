//! Tests for response module

use super::*;
use crate::error::Error;
use crate::pagination::Page;
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_page(engagements: serde_json::Value) -> serde_json::Value {
    json!({
        "data": {
            "clients": [{
                "clientFiscalYear": "2025",
                "parentClientId": null,
                "clientId": "0008005369",
                "clientName": "Acme Holdings",
                "clientProfiles": [{
                    "clientProfileId": 42,
                    "clientAuditYear": "2025",
                    "engagements": engagements
                }]
            }]
        }
    })
}

fn envelope_of(name: &str) -> Envelope {
    let mut entity = crate::types::JsonObject::new();
    entity.insert("clientName".into(), json!(name));
    Envelope {
        entity,
        profile: None,
    }
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_layout_default() {
    let layout = ResponseLayout::default();
    assert_eq!(layout.root, "clients");
    assert_eq!(layout.profile, "clientProfiles");
    assert_eq!(layout.collection, "engagements");
}

#[test]
fn test_locate_splits_envelope_and_collection() {
    let body = client_page(json!([{"engagementNumber": "E1"}]));
    let located = ResponseLayout::default().locate(&body).unwrap().unwrap();

    assert_eq!(located.collection, Some(&json!([{"engagementNumber": "E1"}])));
    assert_eq!(
        serde_json::to_value(&located.envelope.entity).unwrap(),
        json!({
            "clientFiscalYear": "2025",
            "parentClientId": null,
            "clientId": "0008005369",
            "clientName": "Acme Holdings"
        })
    );
    assert_eq!(
        serde_json::to_value(located.envelope.profile.as_ref().unwrap()).unwrap(),
        json!({"clientProfileId": 42, "clientAuditYear": "2025"})
    );
}

#[test]
fn test_locate_no_match() {
    let layout = ResponseLayout::default();
    assert!(layout.locate(&json!({"data": {"clients": []}})).unwrap().is_none());
    assert!(layout.locate(&json!({"data": {"clients": null}})).unwrap().is_none());
    assert!(layout.locate(&json!({"data": {}})).unwrap().is_none());
    assert!(layout.locate(&json!({})).unwrap().is_none());
}

#[test]
fn test_locate_without_profiles() {
    let body = json!({"data": {"clients": [{"clientId": "1", "clientProfiles": []}]}});
    let located = ResponseLayout::default().locate(&body).unwrap().unwrap();

    assert!(located.collection.is_none());
    assert!(located.envelope.profile.is_none());
    assert_eq!(located.envelope.entity.get("clientId"), Some(&json!("1")));
}

#[test]
fn test_locate_rejects_wrong_shapes() {
    let layout = ResponseLayout::default();

    let err = layout
        .locate(&json!({"data": {"clients": {"clientId": "1"}}}))
        .unwrap_err();
    assert!(matches!(err, Error::Decode { ref kind, .. } if kind == "response"));

    assert!(layout.locate(&json!({"data": {"clients": ["x"]}})).is_err());
    assert!(layout
        .locate(&json!({"data": {"clients": [{"clientProfiles": 3}]}}))
        .is_err());
}

#[test]
fn test_custom_layout() {
    let layout = ResponseLayout::new("orgs", "teams", "members");
    let body = json!({"data": {"orgs": [{"id": "o", "teams": [{"id": "t", "members": [1, 2]}]}]}});
    let located = layout.locate(&body).unwrap().unwrap();
    assert_eq!(located.collection, Some(&json!([1, 2])));
    assert_eq!(layout.collection_pointer(), "/data/orgs/0/teams/0/members");
}

#[test]
fn test_collection_pointer_escapes() {
    let layout = ResponseLayout::new("a/b", "c~d", "e");
    assert_eq!(layout.collection_pointer(), "/data/a~1b/0/c~0d/0/e");
}

// ============================================================================
// Accumulator Tests
// ============================================================================

#[test]
fn test_accumulator_preserves_order_and_duplicates() {
    let mut acc = ResultAccumulator::new();
    acc.absorb(Page {
        items: vec![json!("A"), json!("B")],
        ..Page::default()
    });
    acc.absorb(Page {
        items: vec![json!("B"), json!("C")],
        ..Page::default()
    });

    assert_eq!(acc.items(), &[json!("A"), json!("B"), json!("B"), json!("C")]);
    assert_eq!(acc.len(), 4);
}

#[test]
fn test_accumulator_envelope_set_once() {
    let mut acc = ResultAccumulator::new();
    assert!(acc.envelope().is_none());

    acc.absorb(Page {
        envelope: Some(envelope_of("first")),
        ..Page::default()
    });
    acc.absorb(Page {
        envelope: Some(envelope_of("second")),
        ..Page::default()
    });

    assert_eq!(acc.envelope(), Some(&envelope_of("first")));
    assert!(acc.is_empty());
}

#[test]
fn test_accumulator_envelope_from_first_page_that_has_one() {
    let mut acc = ResultAccumulator::new();
    acc.absorb(Page::default());
    acc.absorb(Page {
        envelope: Some(envelope_of("late")),
        ..Page::default()
    });
    assert_eq!(acc.envelope(), Some(&envelope_of("late")));
}

// ============================================================================
// Reassembler Tests
// ============================================================================

#[test]
fn test_reassemble_matches_page_shape() {
    let layout = ResponseLayout::default();
    let first = client_page(json!([{"n": 1}]));
    let located = layout.locate(&first).unwrap().unwrap();

    let mut acc = ResultAccumulator::new();
    acc.absorb(Page {
        items: vec![json!({"n": 1})],
        envelope: Some(located.envelope),
        ..Page::default()
    });
    acc.absorb(Page {
        items: vec![json!({"n": 2}), json!({"n": 3})],
        ..Page::default()
    });

    let response = reassemble(acc, &layout).unwrap();

    assert_eq!(
        response.body(),
        &client_page(json!([{"n": 1}, {"n": 2}, {"n": 3}]))
    );
    assert_eq!(response.item_count(), 3);
    assert_eq!(response.items()[2], json!({"n": 3}));
}

#[test]
fn test_reassemble_preserves_field_order() {
    let layout = ResponseLayout::default();
    let first = client_page(json!([]));
    let located = layout.locate(&first).unwrap().unwrap();
    let mut acc = ResultAccumulator::new();
    acc.absorb(Page {
        envelope: Some(located.envelope),
        ..Page::default()
    });

    let response = reassemble(acc, &layout).unwrap();
    let keys: Vec<_> = response.body()["data"]["clients"][0]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(
        keys,
        vec![
            "clientFiscalYear",
            "parentClientId",
            "clientId",
            "clientName",
            "clientProfiles"
        ]
    );
}

#[test]
fn test_reassemble_without_profile() {
    let layout = ResponseLayout::default();
    let mut acc = ResultAccumulator::new();
    acc.absorb(Page {
        envelope: Some(envelope_of("Solo")),
        ..Page::default()
    });

    let response = reassemble(acc, &layout).unwrap();
    assert_eq!(
        response.into_body(),
        json!({"data": {"clients": [{
            "clientName": "Solo",
            "clientProfiles": [{"engagements": []}]
        }]}})
    );
}

#[test]
fn test_reassemble_without_envelope_is_empty_result() {
    let err = reassemble(ResultAccumulator::new(), &ResponseLayout::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyResult { ref root } if root == "clients"));
}

#[test]
fn test_reassembled_serializes_as_body() {
    let mut acc = ResultAccumulator::new();
    acc.absorb(Page {
        items: vec![json!(1)],
        envelope: Some(envelope_of("X")),
        ..Page::default()
    });
    let response = reassemble(acc, &ResponseLayout::default()).unwrap();
    assert_eq!(serde_json::to_value(&response).unwrap(), response.body().clone());
}
