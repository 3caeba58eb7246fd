//! Node activation state for the model architecture diagram.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type NodeId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArchitectureNode {
    pub id: NodeId,
    pub label: &'static str,
    /// Position inside the diagram, in percent of its width/height.
    pub x_pct: u8,
    pub y_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArchitectureEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub dashed: bool,
}

pub const ARCHITECTURE_NODES: [ArchitectureNode; 4] = [
    ArchitectureNode { id: 0, label: "Input", x_pct: 20, y_pct: 50 },
    ArchitectureNode { id: 1, label: "Attention", x_pct: 50, y_pct: 20 },
    ArchitectureNode { id: 2, label: "Feed Fwd", x_pct: 50, y_pct: 80 },
    ArchitectureNode { id: 3, label: "Output", x_pct: 80, y_pct: 50 },
];

pub const ARCHITECTURE_EDGES: [ArchitectureEdge; 5] = [
    ArchitectureEdge { from: 0, to: 1, dashed: false },
    ArchitectureEdge { from: 0, to: 2, dashed: false },
    ArchitectureEdge { from: 1, to: 3, dashed: false },
    ArchitectureEdge { from: 2, to: 3, dashed: false },
    ArchitectureEdge { from: 1, to: 2, dashed: true },
];

pub fn node(id: NodeId) -> Option<&'static ArchitectureNode> {
    ARCHITECTURE_NODES.iter().find(|n| n.id == id)
}

/// Set of currently active node ids. Order is irrelevant; only membership is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToggleSet {
    active: BTreeSet<NodeId>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` if absent, remove it if present. Returns whether it is now active.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.active.remove(&id) {
            false
        } else {
            self.active.insert(id);
            true
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.active.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.active.iter().copied()
    }

    pub fn caption(&self) -> String {
        if self.is_empty() {
            "Model idle.".to_string()
        } else {
            format!("Processing tokens in {} layers.", self.len())
        }
    }
}
