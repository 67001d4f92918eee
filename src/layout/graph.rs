//! RenderedGraph: the drawable part of a layout result.
//!
//! Drops shadow nodes and links, and links whose endpoints are not drawn,
//! then indexes what is left for the coloring and labeling passes. Nodes are
//! addressed by *slot* (position in the index-sorted node list) and links by
//! their position in `links`.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use super::types::{LaidOutLink, LaidOutNode, LayoutOutput};

pub struct RenderedGraph {
    /// Drawn nodes, sorted by node index.
    pub nodes: Vec<LaidOutNode>,
    /// Drawn links, in adapter order.
    pub links: Vec<LaidOutLink>,
    slot_of: HashMap<usize, usize>,
    /// (source slot, target slot) per link.
    ends: Vec<(usize, usize)>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl RenderedGraph {
    pub fn from_layout(output: LayoutOutput) -> Self {
        let total_nodes = output.nodes.len();
        let mut nodes: Vec<LaidOutNode> =
            output.nodes.into_iter().filter(|n| !n.is_shadow).collect();
        nodes.sort_by_key(|n| n.index);

        let slot_of: HashMap<usize, usize> = nodes
            .iter()
            .enumerate()
            .map(|(slot, n)| (n.index, slot))
            .collect();

        let mut links = Vec::new();
        let mut ends = Vec::new();
        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming = vec![Vec::new(); nodes.len()];
        let mut shadows = 0usize;
        let mut dangling = 0usize;

        for link in output.links {
            if link.is_shadow {
                shadows += 1;
                continue;
            }
            let (Some(&s), Some(&t)) = (slot_of.get(&link.source), slot_of.get(&link.target))
            else {
                dangling += 1;
                continue;
            };
            let pos = links.len();
            outgoing[s].push(pos);
            incoming[t].push(pos);
            ends.push((s, t));
            links.push(link);
        }

        if dangling > 0 {
            warn!(dangling, "dropped links whose endpoints are not drawn");
        }
        debug!(
            nodes = nodes.len(),
            shadow_nodes = total_nodes - nodes.len(),
            links = links.len(),
            shadow_links = shadows,
            "filtered layout output"
        );

        Self {
            nodes,
            links,
            slot_of,
            ends,
            outgoing,
            incoming,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Slot of the node with the given node index.
    pub fn slot(&self, index: usize) -> Option<usize> {
        self.slot_of.get(&index).copied()
    }

    pub fn node(&self, index: usize) -> Option<&LaidOutNode> {
        self.slot(index).map(|s| &self.nodes[s])
    }

    /// Outgoing link positions of the node at `slot`, in link order.
    pub fn outgoing(&self, slot: usize) -> &[usize] {
        &self.outgoing[slot]
    }

    /// Incoming link positions of the node at `slot`, in link order.
    pub fn incoming(&self, slot: usize) -> &[usize] {
        &self.incoming[slot]
    }

    pub fn in_degree(&self, slot: usize) -> usize {
        self.incoming[slot].len()
    }

    pub fn out_degree(&self, slot: usize) -> usize {
        self.outgoing[slot].len()
    }

    /// (source slot, target slot) of the link at `pos`.
    pub fn ends(&self, pos: usize) -> (usize, usize) {
        self.ends[pos]
    }

    /// Slots of nodes without incoming links, in node order.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&s| self.incoming[s].is_empty())
            .collect()
    }

    /// Smallest and largest node x, or `None` for an empty graph.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.nodes.iter().fold(None, |acc, n| match acc {
            None => Some((n.x, n.x)),
            Some((lo, hi)) => Some((lo.min(n.x), hi.max(n.x))),
        })
    }

    /// Number of nodes in the most crowded stage (at least 1).
    pub fn densest_stage(&self) -> usize {
        let mut per_stage: BTreeMap<usize, usize> = BTreeMap::new();
        for n in &self.nodes {
            *per_stage.entry(n.stage).or_default() += 1;
        }
        per_stage.values().copied().max().unwrap_or(1)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
