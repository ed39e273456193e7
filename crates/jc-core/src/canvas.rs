//! The canvas aggregate: owns the node and edge collections and keeps
//! them consistent.
//!
//! Invariants, enforced at construction and after every mutation:
//! 1. node ids are pairwise distinct;
//! 2. edge ids are pairwise distinct and disjoint from node ids (one
//!    combined namespace);
//! 3. every edge endpoint resolves to a node.
//!
//! Insertion order is significant (it defines z-order) and survives
//! encode/decode round-trips. A `Canvas` is a plain owned value with no
//! interior mutability; callers that share one across tasks must
//! serialize access themselves.

use crate::error::{CanvasError, Result};
use crate::id::CanvasId;
use crate::model::{Edge, Node};
use std::collections::HashSet;

/// A JSON Canvas document held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Canvas {
    /// An empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a canvas from complete node and edge sequences, validating
    /// the whole graph once. Fails atomically: on error no canvas exists.
    ///
    /// Ids are checked first (nodes, then edges, against the combined
    /// namespace), then every edge endpoint is resolved in input order.
    ///
    /// # Errors
    /// `DuplicateId` on the first id collision, `Reference` on the first
    /// unresolved endpoint.
    pub fn with_content(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let canvas = Self { nodes, edges };
        canvas.check_unique_ids()?;
        canvas.check_edge_references()?;
        log::debug!(
            "built canvas: {} nodes, {} edges",
            canvas.nodes.len(),
            canvas.edges.len()
        );
        Ok(canvas)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.nodes.len() + self.edges.len());
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(CanvasError::DuplicateId(node.id));
            }
        }
        for edge in &self.edges {
            if !seen.insert(edge.id) {
                return Err(CanvasError::DuplicateId(edge.id));
            }
        }
        Ok(())
    }

    fn check_edge_references(&self) -> Result<()> {
        let node_ids: HashSet<CanvasId> = self.nodes.iter().map(|n| n.id).collect();
        for edge in &self.edges {
            for endpoint in [edge.from_node, edge.to_node] {
                if !node_ids.contains(&endpoint) {
                    return Err(CanvasError::Reference {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether any node or edge already uses `id`.
    fn contains_id(&self, id: CanvasId) -> bool {
        self.nodes.iter().any(|n| n.id == id) || self.edges.iter().any(|e| e.id == id)
    }

    /// Append a node, validating only the new id against the combined
    /// namespace. On error the canvas is unchanged.
    ///
    /// # Errors
    /// `DuplicateId` if the id is already taken by a node or an edge.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.contains_id(node.id) {
            return Err(CanvasError::DuplicateId(node.id));
        }
        log::debug!("add node {} ({})", node.id, node.type_name());
        self.nodes.push(node);
        Ok(())
    }

    /// Append an edge, validating its id and both endpoints. On error the
    /// canvas is unchanged.
    ///
    /// # Errors
    /// `DuplicateId` if the id is already taken, `Reference` if either
    /// endpoint names a node that is not on the canvas.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if self.contains_id(edge.id) {
            return Err(CanvasError::DuplicateId(edge.id));
        }
        for endpoint in [edge.from_node, edge.to_node] {
            if self.get_node(endpoint).is_none() {
                return Err(CanvasError::Reference {
                    edge: edge.id,
                    node: endpoint,
                });
            }
        }
        log::debug!("add edge {} ({} -> {})", edge.id, edge.from_node, edge.to_node);
        self.edges.push(edge);
        Ok(())
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: CanvasId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an edge by id.
    pub fn get_edge(&self, id: CanvasId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Remove a node and every edge touching it, returning the node if it
    /// was present. The cascade is mandatory: a dangling edge must never
    /// survive a node removal.
    pub fn remove_node(&mut self, id: CanvasId) -> Option<Node> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(pos);
        let before = self.edges.len();
        self.edges
            .retain(|e| e.from_node != id && e.to_node != id);
        log::debug!(
            "removed node {} and {} connected edge(s)",
            id,
            before - self.edges.len()
        );
        Some(node)
    }

    /// Remove an edge, returning it if it was present.
    pub fn remove_edge(&mut self, id: CanvasId) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(pos))
    }

    /// Nodes in z-order (insertion order).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
