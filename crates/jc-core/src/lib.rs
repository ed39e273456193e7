//! JC (JSON Canvas) core — in-memory model, validation, and JSON codec
//! for the JSON Canvas document format.
//!
//! A canvas is a graph of visual nodes (text, file, link, group) joined
//! by directed edges, persisted as JSON. This crate owns the part with
//! real invariants: unique ids across one combined node+edge namespace,
//! resolvable edge endpoints, constrained field vocabularies, and a
//! presence-exact bidirectional JSON mapping. Transport, persistence and
//! rendering live with the caller; the engine does no I/O.

pub mod canvas;
pub mod codec;
pub mod error;
pub mod id;
pub mod model;

pub use canvas::Canvas;
pub use codec::{decode_document, encode_document, from_json_str, to_json_string};
pub use error::{CanvasError, Result};
pub use id::CanvasId;
pub use model::*;
