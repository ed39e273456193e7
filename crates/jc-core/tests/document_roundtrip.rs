//! Integration tests: decode → encode → re-decode round-trip.
//!
//! Verifies that no data is invented or lost when converting `.canvas`
//! JSON → `Canvas` → JSON, and that document order survives.

use jc_core::{
    Canvas, CanvasError, CanvasId, Color, EdgeEnd, Node, NodeKind, Side, decode_document,
    encode_document, from_json_str, to_json_string,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

// ─── Helpers ─────────────────────────────────────────────────────────────

/// Decode, re-encode, and compare against the original document value;
/// then decode the re-encoded form and compare the canvases.
fn assert_roundtrip_preserves(input: &str) -> Canvas {
    let canvas = from_json_str(input).expect("fixture should decode");
    let encoded = encode_document(&canvas);

    let original: Value = serde_json::from_str(input).expect("fixture should be valid JSON");
    assert_eq!(
        encoded, original,
        "re-encoded document differs from the original"
    );

    let reparsed = decode_document(&encoded).expect("re-encoded document should decode");
    assert_eq!(reparsed, canvas, "canvas changed across a round-trip");
    canvas
}

fn node_ids(canvas: &Canvas) -> Vec<&str> {
    canvas.nodes().iter().map(|n| n.id.as_str()).collect()
}

// ─── Fixture-based tests ─────────────────────────────────────────────────

#[test]
fn roundtrip_basic_fixture() {
    let canvas = assert_roundtrip_preserves(include_str!("fixtures/basic.canvas"));
    assert_eq!(node_ids(&canvas), ["title", "info"]);

    let edge = canvas.get_edge(CanvasId::intern("edge1")).expect("edge1");
    assert_eq!(edge.from_side, Some(Side::Right));
    assert_eq!(edge.to_side, Some(Side::Left));
    assert_eq!(edge.label.as_deref(), Some("Connection"));
    // Nothing in the document set the ends, so the defaults were written
    assert_eq!(edge.from_end, EdgeEnd::None);
    assert_eq!(edge.to_end, EdgeEnd::Arrow);
}

#[test]
fn roundtrip_all_kinds_fixture() {
    let canvas = assert_roundtrip_preserves(include_str!("fixtures/all_kinds.canvas"));
    assert_eq!(node_ids(&canvas), ["overview", "abstract", "paper", "dataset"]);

    let paper = canvas.get_node(CanvasId::intern("paper")).expect("paper");
    match &paper.kind {
        NodeKind::File { file, subpath } => {
            assert_eq!(file, "papers/draft.md");
            assert_eq!(subpath.as_deref(), Some("#results"));
        }
        other => panic!("expected a file node, got {other:?}"),
    }

    // Reversed arrow: explicit ends override both defaults
    let uses = canvas.get_edge(CanvasId::intern("uses")).expect("uses");
    assert_eq!(uses.from_end, EdgeEnd::Arrow);
    assert_eq!(uses.to_end, EdgeEnd::None);
}

// ─── Programmatic round-trips ────────────────────────────────────────────

#[test]
fn built_canvas_survives_text_roundtrip() {
    let mut canvas = Canvas::new();
    canvas
        .add_node(
            Node::new(
                CanvasId::intern("note"),
                -120,
                40,
                250,
                60,
                NodeKind::Text {
                    text: "hello".into(),
                },
            )
            .unwrap()
            .with_color(Color::Preset(5)),
        )
        .unwrap();
    canvas
        .add_node(
            Node::new(
                CanvasId::intern("board"),
                -200,
                -200,
                800,
                600,
                NodeKind::Group {
                    label: Some("everything".into()),
                    background: None,
                    background_style: None,
                },
            )
            .unwrap(),
        )
        .unwrap();

    let text = to_json_string(&canvas);
    let decoded = from_json_str(&text).expect("printed canvas should decode");
    assert_eq!(decoded, canvas);
}

#[test]
fn empty_canvas_roundtrips_through_empty_object() {
    let text = to_json_string(&Canvas::new());
    assert_eq!(text.trim(), "{}");
    let decoded = from_json_str(&text).unwrap();
    assert!(decoded.nodes().is_empty());
    assert!(decoded.edges().is_empty());
}

// ─── Failure reporting across the text surface ───────────────────────────

#[test]
fn first_failure_is_reported_as_text() {
    let doc = r#"{
        "nodes": [
            { "id": "a", "type": "text", "x": 0, "y": 0, "width": 10, "height": 10, "text": "" },
            { "id": "a", "type": "link", "x": 0, "y": 0, "width": 10, "height": 10, "url": "https://example.org" }
        ]
    }"#;
    let err = from_json_str(doc).unwrap_err();
    assert_eq!(err, CanvasError::DuplicateId(CanvasId::intern("a")));
    assert_eq!(err.to_string(), "duplicate id: a");
}

#[test]
fn decode_failure_yields_no_canvas_even_with_valid_prefix() {
    // The first node is fine; the second is malformed. Atomicity means
    // the caller never sees a partial canvas.
    let doc = r#"{
        "nodes": [
            { "id": "ok", "type": "text", "x": 0, "y": 0, "width": 10, "height": 10, "text": "" },
            { "id": "bad", "type": "widget", "x": 0, "y": 0, "width": 10, "height": 10 }
        ]
    }"#;
    assert!(matches!(
        from_json_str(doc),
        Err(CanvasError::Validation(_))
    ));
}

#[test]
fn cascade_removal_then_roundtrip() {
    let mut canvas = assert_roundtrip_preserves(include_str!("fixtures/all_kinds.canvas"));
    canvas.remove_node(CanvasId::intern("paper"));

    // Both edges touched "paper" and must be gone
    assert!(canvas.edges().is_empty());

    let reparsed = from_json_str(&to_json_string(&canvas)).unwrap();
    assert_eq!(reparsed, canvas);
    assert_eq!(node_ids(&reparsed), ["overview", "abstract", "dataset"]);
}
