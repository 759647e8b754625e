use std::collections::HashMap;

use rainbow_core::LayoutConfig;
use serde::{Deserialize, Serialize};

use super::force::{self, ForceModel, Link};
use crate::graph::{GraphEdge, GraphNode, RelationshipGraph, Viewport};

/// Position of one node, as published to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Every node position after a given tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub tick: u64,
    pub positions: Vec<NodePosition>,
}

/// Continuously adjusts node positions of a small relationship network.
///
/// Edges are resolved to node indices once, at construction; an edge naming
/// a node that does not exist is dropped. After every tick each node lies
/// within `margin` of the viewport edges (or on the centre line of an axis
/// narrower than twice the margin).
#[derive(Debug, Clone)]
pub struct ForceLayoutSimulator {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    links: Vec<Link>,
    velocity: Vec<[f64; 2]>,
    viewport: Viewport,
    margin: f64,
    model: ForceModel,
    ticks: u64,
}

impl ForceLayoutSimulator {
    pub fn new(graph: RelationshipGraph, config: &LayoutConfig) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut nodes = Vec::with_capacity(graph.nodes.len());
        for node in graph.nodes {
            if index.contains_key(&node.id) {
                tracing::warn!("Dropping duplicate node {}", node.id);
                continue;
            }
            index.insert(node.id.clone(), nodes.len());
            nodes.push(node);
        }

        let mut edges = Vec::with_capacity(graph.edges.len());
        let mut links = Vec::with_capacity(graph.edges.len());
        for edge in graph.edges {
            match (index.get(&edge.source), index.get(&edge.target)) {
                (Some(&source), Some(&target)) => {
                    links.push(Link {
                        source,
                        target,
                        strength: edge.strength,
                    });
                    edges.push(edge);
                }
                _ => {
                    tracing::warn!(
                        "Dropping edge {} -> {}: endpoint not in graph",
                        edge.source,
                        edge.target
                    );
                }
            }
        }

        let mut viewport = Viewport::new(config.width, config.height);
        if !viewport.is_usable() {
            let fallback = LayoutConfig::default();
            tracing::warn!(
                "Viewport {}x{} is not usable, falling back to {}x{}",
                config.width,
                config.height,
                fallback.width,
                fallback.height
            );
            viewport = Viewport::new(fallback.width, fallback.height);
        }
        let margin = if config.margin.is_finite() {
            config.margin.max(0.0)
        } else {
            0.0
        };

        let velocity = vec![[0.0; 2]; nodes.len()];
        let mut sim = Self {
            nodes,
            edges,
            links,
            velocity,
            viewport,
            margin,
            model: config.model.into(),
            ticks: 0,
        };
        sim.clamp_all();
        sim
    }

    pub fn with_model(mut self, model: ForceModel) -> Self {
        self.model = model;
        self
    }

    /// Advance the layout by one step.
    pub fn tick(&mut self) {
        match &self.model {
            ForceModel::Attraction => force::apply_attraction(&mut self.nodes, &self.links),
            ForceModel::Spring(params) => {
                force::apply_spring(&mut self.nodes, &mut self.velocity, &self.links, params)
            }
        }
        self.clamp_all();
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "Layout tick");
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Change the viewport and pull every node back inside it. A viewport
    /// with a non-finite or negative extent is ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_usable() {
            tracing::warn!(
                "Ignoring resize to {}x{}",
                viewport.width,
                viewport.height
            );
            return;
        }
        self.viewport = viewport;
        self.clamp_all();
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges that survived resolution.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn model(&self) -> ForceModel {
        self.model
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn positions(&self) -> Vec<NodePosition> {
        self.nodes
            .iter()
            .map(|n| NodePosition {
                id: n.id.clone(),
                x: n.x,
                y: n.y,
            })
            .collect()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            tick: self.ticks,
            positions: self.positions(),
        }
    }

    /// The graph at its current layout, without dropped edges.
    pub fn into_graph(self) -> RelationshipGraph {
        RelationshipGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn clamp_all(&mut self) {
        let (lo_x, hi_x) = bounds(self.viewport.width, self.margin);
        let (lo_y, hi_y) = bounds(self.viewport.height, self.margin);
        for (node, v) in self.nodes.iter_mut().zip(self.velocity.iter_mut()) {
            let x = node.x.clamp(lo_x, hi_x);
            let y = node.y.clamp(lo_y, hi_y);
            if x != node.x {
                v[0] = 0.0;
            }
            if y != node.y {
                v[1] = 0.0;
            }
            node.x = x;
            node.y = y;
        }
    }
}

fn bounds(extent: f64, margin: f64) -> (f64, f64) {
    if extent - margin < margin {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (margin, extent - margin)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rainbow_core::model::RelationshipStatus;

    use super::*;
    use crate::graph::NodeCategory;
    use crate::layout::force::SpringParams;

    fn config(width: f64, height: f64) -> LayoutConfig {
        LayoutConfig {
            width,
            height,
            ..LayoutConfig::default()
        }
    }

    fn node(id: &str, x: f64, y: f64) -> GraphNode {
        GraphNode {
            id: id.into(),
            category: NodeCategory::Agent,
            x,
            y,
            relation_count: 0,
        }
    }

    fn edge(source: &str, target: &str, strength: f64) -> GraphEdge {
        GraphEdge {
            source: source.into(),
            target: target.into(),
            strength,
            status: RelationshipStatus::Active,
            relationship_id: None,
        }
    }

    fn random_graph(rng: &mut StdRng, n: usize, m: usize, vp: Viewport) -> RelationshipGraph {
        let nodes: Vec<GraphNode> = (0..n)
            .map(|i| {
                node(
                    &format!("n{i}"),
                    rng.gen_range(-200.0..vp.width + 200.0),
                    rng.gen_range(-200.0..vp.height + 200.0),
                )
            })
            .collect();
        let edges = (0..m)
            .map(|_| {
                edge(
                    &format!("n{}", rng.gen_range(0..n)),
                    &format!("n{}", rng.gen_range(0..n)),
                    rng.gen_range(0.0..=10.0),
                )
            })
            .collect();
        RelationshipGraph { nodes, edges }
    }

    fn assert_inside(sim: &ForceLayoutSimulator, margin: f64) {
        let vp = sim.viewport();
        for n in sim.nodes() {
            assert!(n.x >= margin && n.x <= vp.width - margin, "x={} out of bounds", n.x);
            assert!(n.y >= margin && n.y <= vp.height - margin, "y={} out of bounds", n.y);
        }
    }

    #[test]
    fn test_positions_stay_inside_margin() {
        let mut rng = StdRng::seed_from_u64(21);
        for model in [
            ForceModel::Attraction,
            ForceModel::Spring(SpringParams::default()),
        ] {
            let graph = random_graph(&mut rng, 40, 80, Viewport::new(800.0, 600.0));
            let mut sim = ForceLayoutSimulator::new(graph, &config(800.0, 600.0)).with_model(model);
            assert_inside(&sim, 50.0);
            for _ in 0..300 {
                sim.tick();
                assert_inside(&sim, 50.0);
            }
            assert_eq!(sim.tick_count(), 300);
        }
    }

    #[test]
    fn test_single_tick_matches_attraction_rule() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 100.0, 100.0), node("b", 100.0, 300.0)],
            edges: vec![edge("a", "b", 5.0)],
        };
        let mut sim = ForceLayoutSimulator::new(graph, &config(800.0, 600.0));
        sim.tick();
        let p = sim.positions();
        assert!((p[0].y - 100.5).abs() < 1e-9);
        assert!((p[1].y - 299.5).abs() < 1e-9);
        assert_eq!(p[0].x, 100.0);
    }

    #[test]
    fn test_clamp_applies_after_edges() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 60.0, 300.0), node("b", 700.0, 300.0)],
            edges: vec![edge("a", "b", 10.0)],
        };
        let mut sim = ForceLayoutSimulator::new(graph, &config(800.0, 600.0));
        sim.resize(Viewport::new(500.0, 600.0));
        // b was pulled back to 450 by the resize; one tick then moves both by 1.
        sim.tick();
        let p = sim.positions();
        assert!((p[0].x - 61.0).abs() < 1e-9);
        assert!((p[1].x - 449.0).abs() < 1e-9);
    }

    #[test]
    fn test_unusable_resize_is_ignored() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 100.0, 100.0), node("b", 700.0, 500.0)],
            edges: vec![edge("a", "b", 5.0)],
        };
        let mut sim = ForceLayoutSimulator::new(graph, &config(800.0, 600.0));
        for vp in [
            Viewport::new(f64::NAN, 600.0),
            Viewport::new(800.0, f64::INFINITY),
            Viewport::new(-1.0, 600.0),
        ] {
            sim.resize(vp);
            assert_eq!(sim.viewport(), Viewport::new(800.0, 600.0));
        }
        sim.run(20);
        assert_inside(&sim, 50.0);
    }

    #[test]
    fn test_unusable_config_viewport_falls_back() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 5000.0, -20.0)],
            edges: vec![],
        };
        let cfg = LayoutConfig {
            margin: f64::NAN,
            ..config(f64::INFINITY, 600.0)
        };
        let sim = ForceLayoutSimulator::new(graph, &cfg);
        assert_eq!(sim.viewport(), Viewport::new(800.0, 600.0));
        let p = &sim.positions()[0];
        assert_eq!((p.x, p.y), (800.0, 0.0));
    }

    #[test]
    fn test_dangling_edge_is_dropped_without_effect() {
        let mut rng = StdRng::seed_from_u64(8);
        let graph = random_graph(&mut rng, 12, 20, Viewport::new(800.0, 600.0));

        let mut with_dangling = graph.clone();
        with_dangling.edges.insert(3, edge("n0", "ghost", 10.0));
        with_dangling.edges.push(edge("phantom", "n5", 10.0));

        let mut clean = ForceLayoutSimulator::new(graph, &config(800.0, 600.0));
        let mut dirty = ForceLayoutSimulator::new(with_dangling, &config(800.0, 600.0));
        assert_eq!(dirty.edges().len(), clean.edges().len());

        clean.run(150);
        dirty.run(150);
        assert_eq!(clean.positions(), dirty.positions());
    }

    #[test]
    fn test_narrow_viewport_pins_to_centre() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 10.0, 10.0), node("b", 70.0, 500.0)],
            edges: vec![edge("a", "b", 5.0)],
        };
        let mut sim = ForceLayoutSimulator::new(graph, &config(80.0, 600.0));
        sim.run(10);
        for n in sim.nodes() {
            assert_eq!(n.x, 40.0);
            assert!(n.y >= 50.0 && n.y <= 550.0);
        }
    }

    #[test]
    fn test_spring_model_settles() {
        let graph = RelationshipGraph {
            nodes: vec![
                node("a", 200.0, 300.0),
                node("b", 420.0, 300.0),
                node("c", 600.0, 300.0),
            ],
            edges: vec![edge("a", "b", 8.0), edge("b", "c", 8.0)],
        };
        let cfg = LayoutConfig {
            model: rainbow_core::LayoutModel::Spring,
            ..config(800.0, 600.0)
        };
        let mut sim = ForceLayoutSimulator::new(graph, &cfg);
        sim.run(1500);

        let before = sim.positions();
        sim.tick();
        let after = sim.positions();
        for (b, a) in before.iter().zip(&after) {
            let moved = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            assert!(moved < 1e-3, "{} still moving by {moved}", a.id);
        }
    }

    #[test]
    fn test_snapshot_and_into_graph() {
        let graph = RelationshipGraph {
            nodes: vec![node("a", 100.0, 100.0), node("b", 300.0, 100.0)],
            edges: vec![edge("a", "b", 5.0), edge("a", "missing", 5.0)],
        };
        let mut sim = ForceLayoutSimulator::new(graph, &config(800.0, 600.0));
        sim.run(3);
        let snap = sim.snapshot();
        assert_eq!(snap.tick, 3);
        assert_eq!(snap.positions.len(), 2);

        let g = sim.into_graph();
        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.nodes[0].x, snap.positions[0].x);
    }
}
