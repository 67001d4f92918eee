/// Flow graph records produced by the text parser.
///
/// Nodes are kept in their final order (earliest source row, then name) and
/// carry a dense `index`; links refer to nodes by that index.

// ─── FlowNode ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    /// Display name, unique within a graph.
    pub name: String,
    /// Earliest accepted flow row this node appears on.
    pub source_row: usize,
    /// Dense position in the sorted node list.
    pub index: usize,
}

impl FlowNode {
    pub fn new(name: impl Into<String>, source_row: usize, index: usize) -> Self {
        Self {
            name: name.into(),
            source_row,
            index,
        }
    }
}

// ─── FlowLink ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FlowLink {
    /// Index of the source node.
    pub source: usize,
    /// Index of the target node.
    pub target: usize,
    /// Flow magnitude, always > 0.
    pub value: f64,
    pub source_row: usize,
    /// Encounter order among accepted links.
    pub index: usize,
}

impl FlowLink {
    pub fn new(source: usize, target: usize, value: f64, source_row: usize, index: usize) -> Self {
        Self {
            source,
            target,
            value,
            source_row,
            index,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ─── FlowGraph ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
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

    /// Look a node up by name.
    pub fn node(&self, name: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Check that every node sits at its own `index` and every link points at
    /// an existing node. Returns a description of the first violation.
    pub fn check_indices(&self) -> Result<(), String> {
        if let Some((pos, node)) = self.nodes.iter().enumerate().find(|(pos, n)| n.index != *pos) {
            return Err(format!(
                "node '{}' at position {} has index {}",
                node.name, pos, node.index
            ));
        }
        let n = self.nodes.len();
        if let Some(link) = self.links.iter().find(|l| l.source >= n || l.target >= n) {
            return Err(format!(
                "link {} ({} -> {}) references a missing node ({} nodes)",
                link.index, link.source, link.target, n
            ));
        }
        Ok(())
    }

    /// Name of the node at `index`, if it exists.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|n| n.name.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
