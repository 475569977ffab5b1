use crate::{
    animation::scale::{AdvanceResult, Motion},
    config::RedrawPolicy,
    render::surface::Surface,
    sequence::node::{Node, NodeLayout, Step, Sweep},
};

/// Serializable view of one node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NodeSnapshot {
    pub index: usize,
    pub scale: f64,
    pub committed: f64,
    pub motion: Motion,
}

/// Ordered chain of nodes plus the current position and sweep direction.
///
/// Each interaction animates the current node through one full segment.
/// When it completes the cursor moves one node along the sweep; at either
/// end of the chain the sweep reverses instead and the cursor stays, so the
/// boundary node animates again (in the other direction) on the next
/// interaction.
#[derive(Clone, Debug)]
pub struct Sequence {
    nodes: Vec<Node>,
    current: usize,
    sweep: Sweep,
}

impl Sequence {
    /// Build a chain of `count` nodes. A zero count is bumped to one node.
    pub fn new(count: usize) -> Self {
        let nodes = (0..count.max(1)).map(Node::new).collect();
        Self {
            nodes,
            current: 0,
            sweep: Sweep::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// Whether the current node has a segment in flight.
    pub fn is_animating(&self) -> bool {
        self.current().state().is_animating()
    }

    /// Start a segment on the current node. Returns `false` (and does
    /// nothing) while one is already in flight.
    pub fn begin_interaction(&mut self) -> bool {
        let index = self.current;
        let started = self.nodes[index].start_advancing();
        if started {
            tracing::debug!(
                node = index,
                motion = ?self.nodes[index].state().motion(),
                "segment started"
            );
        }
        started
    }

    /// Advance the current node by one step, moving the cursor when its
    /// segment completes.
    pub fn advance_once(&mut self) -> AdvanceResult {
        let index = self.current;
        let result = self.nodes[index].advance();
        if !result.is_complete() {
            return result;
        }

        match self.nodes[index].step(self.sweep, self.nodes.len()) {
            Step::Moved(next) => {
                tracing::debug!(from = index, to = next, "segment complete, cursor moved");
                self.current = next;
            }
            Step::Boundary => {
                self.sweep = self.sweep.reversed();
                tracing::debug!(
                    node = index,
                    sweep = ?self.sweep,
                    "segment complete, sweep reversed"
                );
            }
        }
        result
    }

    /// Draw nodes per `policy`.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &NodeLayout,
        policy: RedrawPolicy,
    ) {
        match policy {
            RedrawPolicy::AllNodes => {
                for node in &self.nodes {
                    node.draw(surface, layout);
                }
            }
            RedrawPolicy::CurrentOnly => self.current().draw(surface, layout),
        }
    }

    pub fn node_snapshots(&self) -> Vec<NodeSnapshot> {
        self.nodes
            .iter()
            .map(|n| NodeSnapshot {
                index: n.index(),
                scale: n.state().scale(),
                committed: n.state().committed(),
                motion: n.state().motion(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/controller.rs"]
mod tests;
