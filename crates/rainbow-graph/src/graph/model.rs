use serde::{Deserialize, Serialize};

use rainbow_core::model::RelationshipStatus;

/// Kind of entity a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Agent,
    Human,
}

/// A node in the relationship network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub category: NodeCategory,
    pub x: f64,
    pub y: f64,
    /// Number of relationships touching this node; only sizes the marker.
    #[serde(default)]
    pub relation_count: u32,
}

/// A relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// 0-10
    pub strength: f64,
    #[serde(default)]
    pub status: RelationshipStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
}

/// Drawing area the layout is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents are finite and non-negative.
    pub fn is_usable(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|e| e.is_finite() && *e >= 0.0)
    }
}

/// The full relationship network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl RelationshipGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Extract a subgraph centered on a node, up to a given depth.
    pub fn subgraph(&self, center_id: &str, depth: usize) -> RelationshipGraph {
        use std::collections::{HashSet, VecDeque};

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((center_id.to_string(), 0));
        visited.insert(center_id.to_string());

        while let Some((current, d)) = queue.pop_front() {
            if d >= depth {
                continue;
            }
            for edge in &self.edges {
                let neighbor = if edge.source == current {
                    &edge.target
                } else if edge.target == current {
                    &edge.source
                } else {
                    continue;
                };
                if visited.insert(neighbor.clone()) {
                    queue.push_back((neighbor.clone(), d + 1));
                }
            }
        }

        RelationshipGraph {
            nodes: self
                .nodes
                .iter()
                .filter(|n| visited.contains(&n.id))
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|e| visited.contains(&e.source) && visited.contains(&e.target))
                .cloned()
                .collect(),
        }
    }

    /// Render as DOT format for Graphviz, pinning nodes at their layout
    /// positions (use `neato -n`).
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph relationships {\n  node [style=filled];\n");

        for node in &self.nodes {
            let (shape, color) = match node.category {
                NodeCategory::Agent => ("circle", "#6e45e2"),
                NodeCategory::Human => ("ellipse", "#88d3ce"),
            };
            dot.push_str(&format!(
                "  \"{}\" [shape={} fillcolor=\"{}\" pos=\"{:.1},{:.1}!\" width={:.2}];\n",
                node.id,
                shape,
                color,
                node.x,
                node.y,
                marker_size(node.relation_count)
            ));
        }

        for edge in &self.edges {
            dot.push_str(&format!(
                "  \"{}\" -- \"{}\" [color=\"{}\" penwidth={:.1}];\n",
                edge.source,
                edge.target,
                status_color(edge.status),
                1.0 + edge.strength / 5.0
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

/// Marker diameter in inches; grows with the number of relationships.
fn marker_size(relation_count: u32) -> f64 {
    0.3 + 0.05 * f64::from(relation_count.min(10))
}

pub fn status_color(status: RelationshipStatus) -> &'static str {
    match status {
        RelationshipStatus::Active => "#4caf50",
        RelationshipStatus::Cooling => "#ff9800",
        RelationshipStatus::Silent => "#9e9e9e",
        RelationshipStatus::Broken => "#f44336",
    }
}
