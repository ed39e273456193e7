//! Core data model for JSON Canvas documents.
//!
//! A canvas is a flat graph of positioned rectangles (nodes) joined by
//! directed connectors (edges). Nodes come in four kinds (text, file,
//! link, group) sharing one geometry+color record with a kind-specific
//! payload. Field vocabularies (colors, sides, edge ends, background
//! styles) are real types, so a malformed token can only exist at the
//! string boundary, never in memory.

use crate::error::{CanvasError, Result};
use crate::id::CanvasId;
use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────

/// A canvas color: an explicit `#RRGGBB` hex value, or one of six preset
/// tokens `"1"`..`"6"` whose actual color is theme-defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// `#RRGGBB`, exactly 7 characters, stored as written.
    Hex(String),
    /// Preset slot, 1 through 6.
    Preset(u8),
}

impl Color {
    /// Parse a color string: `#RRGGBB` or a preset token `1`..`6`.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(digits) = s.strip_prefix('#') {
            if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Some(Color::Hex(s.to_string()));
            }
            return None;
        }
        match s {
            "1" | "2" | "3" | "4" | "5" | "6" => Some(Color::Preset(s.as_bytes()[0] - b'0')),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(s) => f.write_str(s),
            Color::Preset(n) => write!(f, "{n}"),
        }
    }
}

// ─── Token vocabularies ──────────────────────────────────────────────────

/// Side of a node rectangle an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }
}

/// Endpoint shape drawn at one end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeEnd {
    #[default]
    None,
    Arrow,
}

impl EdgeEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeEnd::None => "none",
            EdgeEnd::Arrow => "arrow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(EdgeEnd::None),
            "arrow" => Some(EdgeEnd::Arrow),
            _ => None,
        }
    }
}

/// How a group's background image is fitted to its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// Fill the whole group, cropping as needed.
    Cover,
    /// Fit inside the group, preserving aspect ratio.
    Ratio,
    /// Tile at original size.
    Repeat,
}

impl BackgroundStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundStyle::Cover => "cover",
            BackgroundStyle::Ratio => "ratio",
            BackgroundStyle::Repeat => "repeat",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cover" => Some(BackgroundStyle::Cover),
            "ratio" => Some(BackgroundStyle::Ratio),
            "repeat" => Some(BackgroundStyle::Repeat),
            _ => None,
        }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// Kind-specific payload of a canvas node. The discriminant doubles as
/// the serialized `type` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Markdown text content.
    Text { text: String },

    /// A file somewhere in the vault or workspace. `subpath` optionally
    /// narrows the target to a heading or block and must start with `#`.
    File {
        file: String,
        subpath: Option<String>,
    },

    /// An external URL.
    Link { url: String },

    /// A visual container. Groups carry no member list; containment is
    /// purely spatial, so removing a group never touches other nodes.
    Group {
        label: Option<String>,
        background: Option<String>,
        background_style: Option<BackgroundStyle>,
    },
}

/// A positioned rectangle on the canvas.
///
/// `width`/`height` accept any integer, matching the wire format's
/// permissiveness; zero or negative extents are the renderer's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique within the canvas, across nodes *and* edges.
    pub id: CanvasId,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub color: Option<Color>,
    pub kind: NodeKind,
}

impl Node {
    /// Build a node, rejecting kind payloads the format forbids.
    ///
    /// # Errors
    /// `InvalidNode` if a `File` subpath does not start with `#`.
    pub fn new(id: CanvasId, x: i64, y: i64, width: i64, height: i64, kind: NodeKind) -> Result<Self> {
        if let NodeKind::File {
            subpath: Some(subpath),
            ..
        } = &kind
        {
            if !subpath.starts_with('#') {
                return Err(CanvasError::invalid_node(format!(
                    "subpath must start with '#', got {subpath:?}"
                )));
            }
        }
        Ok(Self {
            id,
            x,
            y,
            width,
            height,
            color: None,
            kind,
        })
    }

    /// Attach a color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The serialized `type` tag for this node's kind.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Text { .. } => "text",
            NodeKind::File { .. } => "file",
            NodeKind::Link { .. } => "link",
            NodeKind::Group { .. } => "group",
        }
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────

/// A directed connector between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Unique within the canvas, across nodes *and* edges.
    pub id: CanvasId,
    pub from_node: CanvasId,
    pub to_node: CanvasId,
    pub from_side: Option<Side>,
    pub to_side: Option<Side>,
    /// Endpoint shape at the source. Defaults to `EdgeEnd::None`.
    pub from_end: EdgeEnd,
    /// Endpoint shape at the target. Defaults to `EdgeEnd::Arrow`: an
    /// edge is arrow-terminated in the forward direction unless the
    /// document says otherwise. The asymmetry with `from_end` is part of
    /// the format.
    pub to_end: EdgeEnd,
    pub color: Option<Color>,
    pub label: Option<String>,
}

impl Edge {
    /// Build an edge with default ends; the remaining fields are plain
    /// data and set directly.
    pub fn new(id: CanvasId, from_node: CanvasId, to_node: CanvasId) -> Self {
        Self {
            id,
            from_node,
            to_node,
            from_side: None,
            to_side: None,
            from_end: EdgeEnd::None,
            to_end: EdgeEnd::Arrow,
            color: None,
            label: None,
        }
    }
}
