//! Relationship graph for a single tree.
//!
//! [`build_graph`] turns the member list of one tree into positioned nodes
//! and inferred edges. It is pure: the same list in the same order always
//! yields the same graph, edge ids included, so a renderer can redraw
//! idempotently.
//!
//! Edges are inferred in two passes over the list:
//!
//! 1. every child is linked to the *first* parent in list order (one edge per
//!    child, even when several parents are present);
//! 2. spouses are paired in list order, two at a time; a trailing odd spouse
//!    gets no edge.
//!
//! Both rules are known modelling gaps (a child cannot show two parents, a
//! blended family cannot show three spouses). They are kept as-is so the
//! output stays compatible with existing trees.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::{assign_positions, Position};
use crate::member::MemberProfile;
use crate::relation::RelationCategory;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Inferred parent → child link.
    ParentChild,
    /// Inferred spousal link. Undirected in meaning; source is the first of
    /// the pair.
    Spouse,
    /// Drawn by the viewer on the displayed graph. Never inferred.
    Manual,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParentChild => "parent_child",
            Self::Spouse => "spouse",
            Self::Manual => "manual",
        }
    }
}

/// One node per member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub category: RelationCategory,
    pub position: Position,
    pub data: MemberProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub fn new(source: &str, target: &str, kind: EdgeKind) -> Self {
        Self {
            id: edge_id(kind, source, target),
            source: source.to_string(),
            target: target.to_string(),
            kind,
        }
    }
}

/// Deterministic edge id built from the kind and both endpoints.
///
/// Member ids are opaque and may contain `-`, so the source is prefixed with
/// its byte length: `e-{kind}-{len}:{source}-{target}`. Distinct
/// `(kind, source, target)` triples never share an id.
pub fn edge_id(kind: EdgeKind, source: &str, target: &str) -> String {
    format!("e-{}-{}:{source}-{target}", kind.as_str(), source.len())
}

/// Positioned nodes and edges, ready for a rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build the graph for one tree's members, in the order given.
///
/// Member ids are assumed unique within the list.
pub fn build_graph(members: &[MemberProfile]) -> FamilyGraph {
    let nodes: Vec<GraphNode> = members
        .iter()
        .zip(assign_positions(members.len()))
        .map(|(member, position)| GraphNode {
            id: member.id.clone(),
            category: member.category(),
            position,
            data: member.clone(),
        })
        .collect();

    let mut edges = Vec::new();
    link_children(&nodes, &mut edges);
    pair_spouses(&nodes, &mut edges);

    FamilyGraph { nodes, edges }
}

fn link_children(nodes: &[GraphNode], edges: &mut Vec<GraphEdge>) {
    let Some(parent) = nodes
        .iter()
        .find(|n| n.category == RelationCategory::Parent)
    else {
        return;
    };

    edges.extend(
        nodes
            .iter()
            .filter(|n| n.category == RelationCategory::Child)
            .map(|child| GraphEdge::new(&parent.id, &child.id, EdgeKind::ParentChild)),
    );
}

fn pair_spouses(nodes: &[GraphNode], edges: &mut Vec<GraphEdge>) {
    let spouses: Vec<&GraphNode> = nodes
        .iter()
        .filter(|n| n.category == RelationCategory::Spouse)
        .collect();

    edges.extend(
        spouses
            .chunks_exact(2)
            .map(|pair| GraphEdge::new(&pair[0].id, &pair[1].id, EdgeKind::Spouse)),
    );
}

// ---------------------------------------------------------------------------
// Viewer interaction
// ---------------------------------------------------------------------------

impl FamilyGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by member id (node selection).
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Add a viewer-drawn edge to this graph value.
    ///
    /// The edge lives only in this value; rebuilding from the member list
    /// drops it.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&GraphEdge, CoreError> {
        if source == target {
            return Err(CoreError::Validation(
                "A member cannot be connected to itself".into(),
            ));
        }
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(CoreError::NodeNotFound(id.to_string()));
            }
        }

        let edge = GraphEdge::new(source, target, EdgeKind::Manual);
        if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(CoreError::Conflict(format!(
                "Edge {} already exists",
                edge.id
            )));
        }

        let index = self.edges.len();
        self.edges.push(edge);
        Ok(&self.edges[index])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
