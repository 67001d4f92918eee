//! Color propagation over the drawn flow graph.
//!
//! Roots (nodes with no incoming drawn links) draw palette colors in node
//! order. A breadth-first walk from all roots then hands colors downstream:
//! a node's first outgoing link keeps the node's color, each further link
//! draws a fresh one, and a target takes the color of the first link that
//! reaches it. Whatever the walk never reaches uses the palette's last entry.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::Palette;
use crate::layout::graph::RenderedGraph;

/// Per-node and per-link colors, by node slot and link position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    nodes: Vec<Option<String>>,
    links: Vec<Option<String>>,
    fallback: String,
}

impl ColorAssignment {
    /// Color of the node at `slot`.
    pub fn node(&self, slot: usize) -> &str {
        self.nodes
            .get(slot)
            .and_then(|c| c.as_deref())
            .unwrap_or(&self.fallback)
    }

    /// Color of the link at `pos`.
    pub fn link(&self, pos: usize) -> &str {
        self.links
            .get(pos)
            .and_then(|c| c.as_deref())
            .unwrap_or(&self.fallback)
    }

    /// True if the traversal assigned this node a color.
    pub fn is_node_reached(&self, slot: usize) -> bool {
        matches!(self.nodes.get(slot), Some(Some(_)))
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Round-robin draws from a palette.
struct ColorSource<'p> {
    palette: &'p Palette,
    drawn: usize,
}

impl<'p> ColorSource<'p> {
    fn new(palette: &'p Palette) -> Self {
        Self { palette, drawn: 0 }
    }

    fn next_color(&mut self) -> String {
        let c = self.palette.color(self.drawn);
        self.drawn += 1;
        c.to_string()
    }
}

/// Assign colors to every drawn node and link.
pub fn propagate(graph: &RenderedGraph, palette: &Palette) -> ColorAssignment {
    let mut source = ColorSource::new(palette);
    let mut nodes: Vec<Option<String>> = vec![None; graph.node_count()];
    let mut links: Vec<Option<String>> = vec![None; graph.link_count()];

    let roots = graph.roots();
    for &root in &roots {
        if nodes[root].is_none() {
            nodes[root] = Some(source.next_color());
        }
    }

    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    let mut visited = vec![false; graph.node_count()];

    while let Some(slot) = queue.pop_front() {
        if visited[slot] {
            continue;
        }
        visited[slot] = true;

        let base = match &nodes[slot] {
            Some(c) => c.clone(),
            None => {
                let c = source.next_color();
                nodes[slot] = Some(c.clone());
                c
            }
        };

        let outgoing = graph.outgoing(slot);
        let split = outgoing.len() > 1;
        for (branch, &pos) in outgoing.iter().enumerate() {
            let color = if branch > 0 && split {
                source.next_color()
            } else {
                base.clone()
            };
            let (_, target) = graph.ends(pos);
            if nodes[target].is_none() {
                nodes[target] = Some(color.clone());
            }
            links[pos] = Some(color);
            queue.push_back(target);
        }
    }

    let unreached = visited.iter().filter(|v| !**v).count();
    debug!(
        roots = roots.len(),
        drawn = source.drawn,
        unreached,
        "propagated colors"
    );

    ColorAssignment {
        nodes,
        links,
        fallback: palette.fallback().to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_color.rs"]
mod tests;
