use rainbow_core::model::relationship::MAX_STRENGTH;
use rainbow_core::LayoutModel;

use crate::graph::GraphNode;

/// Force model applied on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceModel {
    /// Each edge pulls both endpoints together by `strength / 10` pixels per
    /// tick. There is no repulsion or damping, so the layout keeps drifting.
    Attraction,
    /// Damped spring-repulsion layout that settles.
    Spring(SpringParams),
}

impl From<LayoutModel> for ForceModel {
    fn from(model: LayoutModel) -> Self {
        match model {
            LayoutModel::Attraction => ForceModel::Attraction,
            LayoutModel::Spring => ForceModel::Spring(SpringParams::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Edge length at which a full-strength spring exerts no force.
    pub rest_length: f64,
    /// Spring constant at strength 10.
    pub stiffness: f64,
    /// Pairwise repulsion numerator (inverse square law).
    pub repulsion: f64,
    /// Fraction of velocity kept between ticks.
    pub damping: f64,
    /// Largest distance a node may move in one tick.
    pub max_step: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            rest_length: 120.0,
            stiffness: 0.02,
            repulsion: 2000.0,
            damping: 0.85,
            max_step: 10.0,
        }
    }
}

/// An edge resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub source: usize,
    pub target: usize,
    pub strength: f64,
}

/// Move both endpoints of every link toward each other, in link order.
pub(crate) fn apply_attraction(nodes: &mut [GraphNode], links: &[Link]) {
    for link in links {
        let dx = nodes[link.target].x - nodes[link.source].x;
        let dy = nodes[link.target].y - nodes[link.source].y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > 0.0 {
            let strength = link.strength / MAX_STRENGTH;
            let fx = dx * strength / distance;
            let fy = dy * strength / distance;
            nodes[link.source].x += fx;
            nodes[link.source].y += fy;
            nodes[link.target].x -= fx;
            nodes[link.target].y -= fy;
        }
    }
}

pub(crate) fn apply_spring(
    nodes: &mut [GraphNode],
    velocity: &mut [[f64; 2]],
    links: &[Link],
    params: &SpringParams,
) {
    let n = nodes.len();
    let mut force = vec![[0.0f64; 2]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let mut dx = nodes[j].x - nodes[i].x;
            let mut dy = nodes[j].y - nodes[i].y;
            let mut d2 = dx * dx + dy * dy;
            if d2 < 1e-6 {
                // Coincident nodes: push apart along a direction fixed by the pair.
                let angle = (i * 7 + j * 13) as f64;
                dx = angle.cos();
                dy = angle.sin();
                d2 = 1.0;
            }
            let d = d2.sqrt();
            let f = params.repulsion / d2;
            let (fx, fy) = (dx / d * f, dy / d * f);
            force[i][0] -= fx;
            force[i][1] -= fy;
            force[j][0] += fx;
            force[j][1] += fy;
        }
    }

    for link in links {
        let dx = nodes[link.target].x - nodes[link.source].x;
        let dy = nodes[link.target].y - nodes[link.source].y;
        let d = (dx * dx + dy * dy).sqrt();
        if d > 0.0 {
            let f = params.stiffness * (link.strength / MAX_STRENGTH) * (d - params.rest_length);
            let (fx, fy) = (dx / d * f, dy / d * f);
            force[link.source][0] += fx;
            force[link.source][1] += fy;
            force[link.target][0] -= fx;
            force[link.target][1] -= fy;
        }
    }

    for ((node, v), f) in nodes.iter_mut().zip(velocity.iter_mut()).zip(&force) {
        v[0] = (v[0] + f[0]) * params.damping;
        v[1] = (v[1] + f[1]) * params.damping;
        let speed = (v[0] * v[0] + v[1] * v[1]).sqrt();
        if speed > params.max_step {
            let scale = params.max_step / speed;
            v[0] *= scale;
            v[1] *= scale;
        }
        node.x += v[0];
        node.y += v[1];
    }
}
