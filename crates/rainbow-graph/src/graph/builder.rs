use std::collections::HashMap;
use std::io::Read;

use rand::Rng;
use rainbow_core::model::RelationshipRecord;

use super::model::*;
use crate::error::GraphError;

/// Parse a relationship list snapshot (a JSON array of records).
pub fn load_relationships<R: Read>(reader: R) -> Result<Vec<RelationshipRecord>, GraphError> {
    let records: Vec<RelationshipRecord> = serde_json::from_reader(reader)?;
    tracing::debug!("Loaded {} relationship records", records.len());
    Ok(records)
}

/// Build the network from a relationship list.
///
/// Sources become agent nodes and targets human nodes, in order of first
/// appearance. Every node starts at a uniformly random point of the viewport
/// and counts the relationships touching it.
pub fn build_graph<R: Rng + ?Sized>(
    records: &[RelationshipRecord],
    rng: &mut R,
    viewport: Viewport,
    default_strength: f64,
) -> RelationshipGraph {
    let mut graph = RelationshipGraph::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.source_id.is_empty() || record.target_id.is_empty() {
            tracing::warn!(
                "Skipping relationship {:?} with an empty endpoint",
                record.relationship_id
            );
            continue;
        }

        for (id, category) in [
            (&record.source_id, NodeCategory::Agent),
            (&record.target_id, NodeCategory::Human),
        ] {
            let i = *index.entry(id.clone()).or_insert_with(|| {
                graph.nodes.push(GraphNode {
                    id: id.clone(),
                    category,
                    x: random_coordinate(rng, viewport.width),
                    y: random_coordinate(rng, viewport.height),
                    relation_count: 0,
                });
                graph.nodes.len() - 1
            });
            graph.nodes[i].relation_count += 1;
        }

        graph.edges.push(GraphEdge {
            source: record.source_id.clone(),
            target: record.target_id.clone(),
            strength: record.edge_strength(default_strength),
            status: record.status,
            relationship_id: record.relationship_id.clone(),
        });
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Built relationship graph"
    );
    graph
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
