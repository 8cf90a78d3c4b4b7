//! Layered learning graph for the path visualization.
//!
//! Layers: owned skills → phase 1 → phase 2 → phase 3 → target job.
//! Adjacent layers are connected completely (every node to every node), and
//! the last non-empty phase connects to the target. The density is part of the
//! rendering contract; do not reduce it to a spanning structure.

use serde::{Deserialize, Serialize};

use crate::matching::types::WeightedRequirement;

const BASE_NODE_SIZE: f64 = 60.0;
const WEIGHT_SIZE_FACTOR: f64 = 5.0;
const TARGET_NODE_SIZE: f64 = 80.0;

const OWNED_COLOR: &str = "#10b981";
const PHASE_COLORS: [&str; 3] = ["#2563eb", "#f59e0b", "#ef4444"];
const TARGET_COLOR: &str = "#8b5cf6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Owned,
    Phase1,
    Phase2,
    Phase3,
    Target,
}

impl NodeCategory {
    /// Position in the legend, 0 (owned) to 4 (target).
    pub fn index(&self) -> u8 {
        match self {
            NodeCategory::Owned => 0,
            NodeCategory::Phase1 => 1,
            NodeCategory::Phase2 => 2,
            NodeCategory::Phase3 => 3,
            NodeCategory::Target => 4,
        }
    }

    fn phase(number: usize) -> Self {
        match number {
            1 => NodeCategory::Phase1,
            2 => NodeCategory::Phase2,
            _ => NodeCategory::Phase3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub category: NodeCategory,
    /// Numeric legend position, see `NodeCategory::index`.
    pub category_index: u8,
    pub symbol_size: f64,
    pub color: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub width: f64,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Builds the graph. `phases` holds the three phase skill lists in order.
pub fn build_path_graph(
    owned: &[String],
    phases: [&[String]; 3],
    requirements: &WeightedRequirement,
    target_job: &str,
) -> PathGraph {
    let mut graph = PathGraph::default();

    for skill in owned {
        let weight = requirements.weight_of(skill).unwrap_or_default();
        graph.nodes.push(GraphNode {
            name: skill.clone(),
            category: NodeCategory::Owned,
            category_index: NodeCategory::Owned.index(),
            symbol_size: node_size(weight),
            color: OWNED_COLOR.to_string(),
            tooltip: format!("Owned skill: {skill}\nWeight: {weight}"),
        });
    }

    for (i, skills) in phases.iter().enumerate() {
        let number = i + 1;
        for skill in skills.iter() {
            let weight = requirements.weight_of(skill).unwrap_or_default();
            graph.nodes.push(GraphNode {
                name: skill.clone(),
                category: NodeCategory::phase(number),
                category_index: NodeCategory::phase(number).index(),
                symbol_size: node_size(weight),
                color: PHASE_COLORS[i].to_string(),
                tooltip: format!("Phase {number} skill: {skill}\nWeight: {weight}"),
            });
        }
    }

    graph.nodes.push(GraphNode {
        name: target_job.to_string(),
        category: NodeCategory::Target,
        category_index: NodeCategory::Target.index(),
        symbol_size: TARGET_NODE_SIZE,
        color: TARGET_COLOR.to_string(),
        tooltip: format!("Target job: {target_job}"),
    });

    let [phase1, phase2, phase3] = phases;
    connect(&mut graph.links, owned, phase1, 2.0, None);
    connect(&mut graph.links, phase1, phase2, 1.5, None);
    connect(&mut graph.links, phase2, phase3, 1.0, None);

    let final_phase = last_non_empty(phases);
    let target = [target_job.to_string()];
    connect(
        &mut graph.links,
        final_phase,
        &target,
        3.0,
        Some(PHASE_COLORS[0]),
    );

    graph
}

/// Phase 3 if non-empty, else phase 2 if non-empty, else phase 1.
pub fn last_non_empty(phases: [&[String]; 3]) -> &[String] {
    let [phase1, phase2, phase3] = phases;
    if !phase3.is_empty() {
        phase3
    } else if !phase2.is_empty() {
        phase2
    } else {
        phase1
    }
}

fn node_size(weight: f64) -> f64 {
    BASE_NODE_SIZE + weight * WEIGHT_SIZE_FACTOR
}

fn connect(
    links: &mut Vec<GraphLink>,
    from: &[String],
    to: &[String],
    width: f64,
    color: Option<&str>,
) {
    for source in from {
        for target in to {
            links.push(GraphLink {
                source: source.clone(),
                target: target.clone(),
                width,
                color: color.map(str::to_string),
            });
        }
    }
}
