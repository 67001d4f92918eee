//! Column layout used when no external layout engine is plugged in.
//!
//! Stages come from longest-path ranking over the strongly-connected-component
//! condensation, so cyclic input still gets a finite number of columns. Node
//! heights are proportional to `max(inflow, outflow)` with one scale shared by
//! all stages; each stage is stacked top to bottom in node order and centered.
//! There is no crossing reduction pass.

use petgraph::algo::{condensation, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::error::LayoutError;
use crate::syntax::types::FlowGraph;

use super::LayoutAdapter;
use super::types::{LaidOutLink, LaidOutNode, LayoutOutput, LayoutRequest};

/// Non-iterative stage layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageLayout;

impl LayoutAdapter for StageLayout {
    fn layout(&self, req: &LayoutRequest<'_>) -> Result<LayoutOutput, LayoutError> {
        if !(req.width > 0.0 && req.height > 0.0) {
            return Err(LayoutError::EmptyArea {
                width: req.width,
                height: req.height,
            });
        }
        let g = req.graph;
        if g.is_empty() {
            return Ok(LayoutOutput::default());
        }
        g.check_indices().map_err(LayoutError::InvalidGraph)?;
        debug!(
            iterations = req.iterations,
            "stage layout runs a single pass; iterations unused"
        );

        let n = g.node_count();
        let mut inflow = vec![0.0_f64; n];
        let mut outflow = vec![0.0_f64; n];
        for l in &g.links {
            outflow[l.source] += l.value;
            inflow[l.target] += l.value;
        }
        let values: Vec<f64> = (0..n).map(|i| inflow[i].max(outflow[i])).collect();

        let stages = assign_stages(g, req.left_justify_origins, req.right_justify_endpoints);
        let max_stage = stages.iter().copied().max().unwrap_or(0);

        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); max_stage + 1];
        for (i, &s) in stages.iter().enumerate() {
            columns[s].push(i);
        }

        // One vertical scale for every column, set by the heaviest one.
        let node_area = req.height * req.height_factor;
        let ky = columns
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| {
                let total: f64 = c.iter().map(|&i| values[i]).sum();
                if total > 0.0 { node_area / total } else { f64::INFINITY }
            })
            .fold(f64::INFINITY, f64::min);
        let ky = if ky.is_finite() { ky } else { 0.0 };

        let span = (req.width - req.node_width).max(0.0);
        let mut nodes: Vec<LaidOutNode> = g
            .nodes
            .iter()
            .map(|fnode| {
                let i = fnode.index;
                let mut node = LaidOutNode::new(i, fnode.name.clone(), values[i]);
                node.stage = stages[i];
                node.x = if max_stage == 0 {
                    0.0
                } else {
                    stages[i] as f64 * span / max_stage as f64
                };
                node.dx = req.node_width;
                node.dy = values[i] * ky;
                node
            })
            .collect();

        for column in columns.iter().filter(|c| !c.is_empty()) {
            let heights: f64 = column.iter().map(|&i| nodes[i].dy).sum();
            let gaps = column.len() - 1;
            let gap = if gaps > 0 {
                (req.height - heights).max(0.0) * req.spacing_factor / gaps as f64
            } else {
                0.0
            };
            let mut y = (req.height - heights - gap * gaps as f64) / 2.0;
            for &i in column {
                nodes[i].y = y;
                y += nodes[i].dy + gap;
            }
        }

        let mut links: Vec<LaidOutLink> = g
            .links
            .iter()
            .map(|l| {
                let mut link = LaidOutLink::new(l.index, l.source, l.target, l.value);
                link.dy = l.value * ky;
                link
            })
            .collect();
        stack_link_offsets(&nodes, &mut links);

        debug!(nodes = nodes.len(), stages = max_stage + 1, ky, "stage layout done");
        Ok(LayoutOutput { nodes, links })
    }
}

/// Longest-path stage per node, then origin/endpoint justification.
fn assign_stages(g: &FlowGraph, left_justify_origins: bool, right_justify_endpoints: bool) -> Vec<usize> {
    let n = g.node_count();
    let mut dg: DiGraph<usize, ()> = DiGraph::with_capacity(n, g.link_count());
    let ids: Vec<NodeIndex> = (0..n).map(|i| dg.add_node(i)).collect();
    let mut has_in = vec![false; n];
    let mut has_out = vec![false; n];
    for l in &g.links {
        dg.add_edge(ids[l.source], ids[l.target], ());
        if !l.is_self_loop() {
            has_out[l.source] = true;
            has_in[l.target] = true;
        }
    }

    let condensed = condensation(dg, true);
    let order: Vec<NodeIndex> =
        toposort(&condensed, None).unwrap_or_else(|_| condensed.node_indices().collect());
    let mut rank = vec![0usize; condensed.node_count()];
    for c in &order {
        for succ in condensed.neighbors(*c) {
            rank[succ.index()] = rank[succ.index()].max(rank[c.index()] + 1);
        }
    }
    let mut stages = vec![0usize; n];
    for c in condensed.node_indices() {
        for &member in &condensed[c] {
            stages[member] = rank[c.index()];
        }
    }

    if !left_justify_origins {
        // Pull each origin right, next to its nearest target.
        for i in 0..n {
            if has_in[i] || !has_out[i] {
                continue;
            }
            let nearest = g
                .links
                .iter()
                .filter(|l| l.source == i && !l.is_self_loop())
                .map(|l| stages[l.target])
                .min();
            if let Some(t) = nearest {
                stages[i] = stages[i].max(t.saturating_sub(1));
            }
        }
    }

    let max_stage = stages.iter().copied().max().unwrap_or(0);
    if right_justify_endpoints {
        for i in 0..n {
            if has_in[i] && !has_out[i] {
                stages[i] = max_stage;
            }
        }
    }

    let min_stage = stages.iter().copied().min().unwrap_or(0);
    for s in &mut stages {
        *s -= min_stage;
    }
    stages
}

/// Stack each node's outgoing links by target y and incoming links by
/// source y, so bands leave and enter without crossing at the node.
fn stack_link_offsets(nodes: &[LaidOutNode], links: &mut [LaidOutLink]) {
    let n = nodes.len();
    let mut out_by_node: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_by_node: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (pos, l) in links.iter().enumerate() {
        out_by_node[l.source].push(pos);
        in_by_node[l.target].push(pos);
    }

    for group in &mut out_by_node {
        group.sort_by(|&a, &b| {
            nodes[links[a].target]
                .y
                .total_cmp(&nodes[links[b].target].y)
                .then(links[a].index.cmp(&links[b].index))
        });
        let mut offset = 0.0;
        for &pos in group.iter() {
            links[pos].sy = offset;
            offset += links[pos].dy;
        }
    }
    for group in &mut in_by_node {
        group.sort_by(|&a, &b| {
            nodes[links[a].source]
                .y
                .total_cmp(&nodes[links[b].source].y)
                .then(links[a].index.cmp(&links[b].index))
        });
        let mut offset = 0.0;
        for &pos in group.iter() {
            links[pos].ty = offset;
            offset += links[pos].dy;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_stages.rs"]
mod tests;
