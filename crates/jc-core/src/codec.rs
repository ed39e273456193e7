//! Bidirectional JSON codec: `Canvas` ⇄ the `.canvas` document format.
//!
//! The wire shape is `{ "nodes": [...], "edges": [...] }` with camelCase
//! keys. Presence matters: an optional field is an absent key, never a
//! `null`, and an empty collection omits its key entirely. Decoding runs
//! the same aggregate validation as bulk construction, in one atomic
//! pass; a failed decode yields no canvas at all.

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::id::CanvasId;
use crate::model::{BackgroundStyle, Color, Edge, EdgeEnd, Node, NodeKind, Side};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Wire records ────────────────────────────────────────────────────────

/// Wire form of a node. One flat record covers all four kinds; which
/// payload fields must be present depends on the `type` tag, checked
/// during conversion rather than by serde. Declaration order fixes the
/// emitted key order: id, tag, geometry, color, payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: CanvasId,
    #[serde(rename = "type")]
    kind: String,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_style: Option<String>,
}

/// Wire form of an edge. `from_end`/`to_end` are `Option` only to accept
/// documents that omit them; the encoder always writes both.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeRecord {
    id: CanvasId,
    from_node: CanvasId,
    to_node: CanvasId,
    from_end: Option<String>,
    to_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// The top-level document. An empty collection drops its key on encode;
/// an absent key decodes as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CanvasDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<NodeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    edges: Vec<EdgeRecord>,
}

// ─── Encode ──────────────────────────────────────────────────────────────

fn node_to_record(node: &Node) -> NodeRecord {
    let mut rec = NodeRecord {
        id: node.id,
        kind: node.type_name().to_string(),
        x: node.x,
        y: node.y,
        width: node.width,
        height: node.height,
        color: node.color.as_ref().map(ToString::to_string),
        text: None,
        file: None,
        subpath: None,
        url: None,
        label: None,
        background: None,
        background_style: None,
    };
    match &node.kind {
        NodeKind::Text { text } => rec.text = Some(text.clone()),
        NodeKind::File { file, subpath } => {
            rec.file = Some(file.clone());
            rec.subpath = subpath.clone();
        }
        NodeKind::Link { url } => rec.url = Some(url.clone()),
        NodeKind::Group {
            label,
            background,
            background_style,
        } => {
            rec.label = label.clone();
            rec.background = background.clone();
            rec.background_style = background_style.map(|s| s.as_str().to_string());
        }
    }
    rec
}

fn edge_to_record(edge: &Edge) -> EdgeRecord {
    EdgeRecord {
        id: edge.id,
        from_node: edge.from_node,
        to_node: edge.to_node,
        from_end: Some(edge.from_end.as_str().to_string()),
        to_end: Some(edge.to_end.as_str().to_string()),
        from_side: edge.from_side.map(|s| s.as_str().to_string()),
        to_side: edge.to_side.map(|s| s.as_str().to_string()),
        color: edge.color.as_ref().map(ToString::to_string),
        label: edge.label.clone(),
    }
}

fn document_records(canvas: &Canvas) -> CanvasDocument {
    CanvasDocument {
        nodes: canvas.nodes().iter().map(node_to_record).collect(),
        edges: canvas.edges().iter().map(edge_to_record).collect(),
    }
}

/// Encode a canvas as a JSON value in the document format.
#[must_use]
pub fn encode_document(canvas: &Canvas) -> Value {
    // Record serialization has no fallible fields
    serde_json::to_value(document_records(canvas)).expect("document records always serialize")
}

/// Encode a canvas as pretty-printed JSON text, the on-disk `.canvas`
/// shape the outer tooling persists verbatim.
#[must_use]
pub fn to_json_string(canvas: &Canvas) -> String {
    serde_json::to_string_pretty(&document_records(canvas))
        .expect("document records always serialize")
}

// ─── Decode ──────────────────────────────────────────────────────────────

fn missing_field(id: CanvasId, key: &str) -> CanvasError {
    CanvasError::validation(format!("node {id} is missing required field `{key}`"))
}

fn bad_color(s: &str) -> String {
    format!("color must be #RRGGBB or a preset 1-6, got {s:?}")
}

fn node_from_record(rec: NodeRecord) -> Result<Node> {
    let color = rec
        .color
        .as_deref()
        .map(|s| Color::parse(s).ok_or_else(|| CanvasError::invalid_node(bad_color(s))))
        .transpose()?;

    let kind = match rec.kind.as_str() {
        "text" => NodeKind::Text {
            text: rec.text.ok_or_else(|| missing_field(rec.id, "text"))?,
        },
        "file" => NodeKind::File {
            file: rec.file.ok_or_else(|| missing_field(rec.id, "file"))?,
            subpath: rec.subpath,
        },
        "link" => NodeKind::Link {
            url: rec.url.ok_or_else(|| missing_field(rec.id, "url"))?,
        },
        "group" => {
            let background_style = rec
                .background_style
                .as_deref()
                .map(|s| {
                    BackgroundStyle::parse(s).ok_or_else(|| {
                        CanvasError::invalid_node(format!(
                            "background style must be cover, ratio or repeat, got {s:?}"
                        ))
                    })
                })
                .transpose()?;
            NodeKind::Group {
                label: rec.label,
                background: rec.background,
                background_style,
            }
        }
        other => {
            return Err(CanvasError::validation(format!(
                "unknown node type: {other:?}"
            )));
        }
    };

    let mut node = Node::new(rec.id, rec.x, rec.y, rec.width, rec.height, kind)?;
    node.color = color;
    Ok(node)
}

fn parse_edge_side(value: Option<&str>) -> Result<Option<Side>> {
    value
        .map(|s| {
            Side::parse(s).ok_or_else(|| {
                CanvasError::invalid_edge(format!(
                    "side must be top, right, bottom or left, got {s:?}"
                ))
            })
        })
        .transpose()
}

fn parse_edge_end(value: Option<&str>, default: EdgeEnd) -> Result<EdgeEnd> {
    match value {
        None => Ok(default),
        Some(s) => EdgeEnd::parse(s)
            .ok_or_else(|| CanvasError::invalid_edge(format!("end must be none or arrow, got {s:?}"))),
    }
}

fn edge_from_record(rec: EdgeRecord) -> Result<Edge> {
    let mut edge = Edge::new(rec.id, rec.from_node, rec.to_node);
    edge.from_side = parse_edge_side(rec.from_side.as_deref())?;
    edge.to_side = parse_edge_side(rec.to_side.as_deref())?;
    edge.from_end = parse_edge_end(rec.from_end.as_deref(), EdgeEnd::None)?;
    edge.to_end = parse_edge_end(rec.to_end.as_deref(), EdgeEnd::Arrow)?;
    edge.color = rec
        .color
        .as_deref()
        .map(|s| Color::parse(s).ok_or_else(|| CanvasError::invalid_edge(bad_color(s))))
        .transpose()?;
    edge.label = rec.label;
    Ok(edge)
}

/// Decode a JSON value into a validated canvas.
///
/// Dispatches each node entry on its `type` tag, re-parses every token
/// field, then hands the complete graph to [`Canvas::with_content`] so
/// the aggregate invariants run once over the decoded document.
///
/// # Errors
/// `Validation` for structural problems (wrong shape, unknown type,
/// missing required field), `InvalidNode`/`InvalidEdge` for malformed
/// tokens, `DuplicateId`/`Reference` from aggregate validation.
pub fn decode_document(value: &Value) -> Result<Canvas> {
    let doc = CanvasDocument::deserialize(value)
        .map_err(|e| CanvasError::validation(e.to_string()))?;
    let nodes = doc
        .nodes
        .into_iter()
        .map(node_from_record)
        .collect::<Result<Vec<_>>>()?;
    let edges = doc
        .edges
        .into_iter()
        .map(edge_from_record)
        .collect::<Result<Vec<_>>>()?;
    Canvas::with_content(nodes, edges)
}

/// Decode a JSON string into a validated canvas.
///
/// This is the decode-and-validate entry point the outer request layer
/// calls: the first failure comes back as a typed error whose `Display`
/// form is the user-facing report.
///
/// # Errors
/// `Validation` if the text is not valid JSON; otherwise as
/// [`decode_document`].
pub fn from_json_str(input: &str) -> Result<Canvas> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| CanvasError::validation(e.to_string()))?;
    decode_document(&value)
}
