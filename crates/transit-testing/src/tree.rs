//! In-memory host tree

use transit_core::{HostError, NodeId, StyleSnapshot, VisualTree};
use transit_graphics::{Bounds, Size};

#[derive(Clone, Debug)]
struct NodeData {
    children: Vec<NodeId>,
    style: StyleSnapshot,
    bounds: Bounds,
    offset: Size,
    visible: bool,
    identity: Option<String>,
}

/// Slot-vector visual tree for headless tests and demos.
///
/// Nodes live in stable slots; removal clears the slot recursively. The
/// authored style doubles as the computed style, and `offset_size` defaults
/// to the node's bounds size unless a test overrides it to simulate an
/// ancestor transform. `set_detached(true)` makes insertion fail the way an
/// unavailable host document would.
#[derive(Default)]
pub struct MemoryTree {
    nodes: Vec<Option<NodeData>>,
    attached: Vec<NodeId>,
    detached: bool,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node occupying `bounds`, visible, with an offset
    /// size equal to its bounds size.
    pub fn spawn(&mut self, bounds: Bounds) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(NodeData {
            children: Vec::new(),
            style: StyleSnapshot::new(),
            bounds,
            offset: bounds.size(),
            visible: true,
            identity: None,
        }));
        id
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Some(node)) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn set_identity(&mut self, id: NodeId, identity: impl Into<String>) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.identity = Some(identity.into());
        }
    }

    pub fn set_bounds(&mut self, id: NodeId, bounds: Bounds) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.bounds = bounds;
        }
    }

    /// Overrides the intrinsic size, simulating an ancestor transform that
    /// makes rendered bounds differ from layout size.
    pub fn set_offset_size(&mut self, id: NodeId, offset: Size) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.offset = offset;
        }
    }

    pub fn put_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.style.set(property, value);
        }
    }

    /// Simulates host availability; a detached tree rejects insertion.
    pub fn set_detached(&mut self, detached: bool) {
        self.detached = detached;
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.attached.contains(&id)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id), Some(Some(node)) if node.visible)
    }

    pub fn identity(&self, id: NodeId) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|slot| slot.as_ref())
            .and_then(|node| node.identity.as_deref())
    }

    pub fn style_value(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|slot| slot.as_ref())
            .and_then(|node| node.style.get(property))
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Renders the subtree under `root` as an indented listing.
    pub fn dump_tree(&self, root: NodeId) -> String {
        let mut output = String::new();
        self.dump_node(&mut output, root, 0);
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        if let Some(Some(node)) = self.nodes.get(id) {
            let visibility = if node.visible { "visible" } else { "hidden" };
            output.push_str(&format!(
                "{indent}[{id}] {} {:?} ({visibility})\n",
                node.identity.as_deref().unwrap_or("-"),
                node.bounds,
            ));
            for &child in &node.children {
                self.dump_node(output, child, depth + 1);
            }
        } else {
            output.push_str(&format!("{indent}[{id}] (missing)\n"));
        }
    }

    fn get(&self, id: NodeId) -> Result<&NodeData, HostError> {
        self.nodes
            .get(id)
            .and_then(|slot| slot.as_ref())
            .ok_or(HostError::Missing { id })
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut NodeData, HostError> {
        self.nodes
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .ok_or(HostError::Missing { id })
    }

    fn clone_node(&mut self, id: NodeId) -> Result<NodeId, HostError> {
        let mut data = self.get(id)?.clone();
        let children = std::mem::take(&mut data.children);
        let clone = self.nodes.len();
        self.nodes.push(Some(data));
        for child in children {
            let child_clone = self.clone_node(child)?;
            self.get_mut(clone)?.children.push(child_clone);
        }
        Ok(clone)
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if let Some(Some(node)) = self.nodes.get(id) {
            for &child in &node.children {
                out.push(child);
                self.collect_descendants(child, out);
            }
        }
    }
}

impl VisualTree for MemoryTree {
    fn clone_subtree(&mut self, node: NodeId) -> Result<NodeId, HostError> {
        self.clone_node(node)
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(node, &mut out);
        out
    }

    fn computed_style(&self, node: NodeId) -> Result<StyleSnapshot, HostError> {
        Ok(self.get(node)?.style.clone())
    }

    fn bounds(&self, node: NodeId) -> Result<Bounds, HostError> {
        Ok(self.get(node)?.bounds)
    }

    fn offset_size(&self, node: NodeId) -> Result<Size, HostError> {
        Ok(self.get(node)?.offset)
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), HostError> {
        self.get_mut(node)?.style.set(property, value);
        Ok(())
    }

    fn strip_identity(&mut self, node: NodeId) -> Result<(), HostError> {
        self.get_mut(node)?.identity = None;
        Ok(())
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), HostError> {
        self.get_mut(node)?.visible = visible;
        Ok(())
    }

    fn insert(&mut self, node: NodeId) -> Result<(), HostError> {
        if self.detached {
            return Err(HostError::Detached);
        }
        self.get(node)?;
        if !self.attached.contains(&node) {
            self.attached.push(node);
        }
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), HostError> {
        let children = self.get(node)?.children.clone();
        for child in children {
            // Already-removed children are fine; the slot sweep below is
            // what matters.
            let _ = self.remove(child);
        }
        self.attached.retain(|&attached| attached != node);
        self.nodes[node].take();
        Ok(())
    }
}
