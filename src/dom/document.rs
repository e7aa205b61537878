//! Arena-backed document with attribute-anchor lookup.

use super::node::{Element, NodeId};

/// Page document rooted at a `body` element.
///
/// Nodes are never freed: clearing an element only detaches its children, so
/// a stale [`NodeId`] keeps resolving to a detached node instead of panicking.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    /// Append `element` as the last child of `parent` and return its handle
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// First element in document order carrying attribute `attr`
    pub fn query(&self, attr: &str) -> Option<NodeId> {
        self.query_within(self.body(), attr)
    }

    /// First descendant of `scope` (excluding `scope` itself) carrying `attr`
    pub fn query_within(&self, scope: NodeId, attr: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.get(id)?;
            if node.has_attr(attr) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children()).unwrap_or(&[])
    }

    /// True when `node` is `ancestor` or lies somewhere beneath it
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Own text followed by the text of every descendant, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.get(current) {
                out.push_str(&node.text);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Replace everything inside `id` with a single run of text
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        self.clear_children(id);
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text = text.into();
        }
    }

    pub fn clear_children(&mut self, id: NodeId) {
        let detached = match self.nodes.get_mut(id.0) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in detached {
            if let Some(node) = self.nodes.get_mut(child.0) {
                node.parent = None;
            }
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|node| node.attr(name))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attrs.insert(name.to_string(), value.into());
        }
    }

    /// Current value of a form control; empty when unset
    pub fn value(&self, id: NodeId) -> &str {
        self.attr(id, "value").unwrap_or("")
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        self.set_attr(id, "value", value);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
