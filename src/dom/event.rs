//! User activity delivered to the widgets.

use super::NodeId;

/// An event dispatched at a target element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click or keyboard activation
    Click(NodeId),
    /// The value of a form control changed
    Input(NodeId),
}

impl Event {
    pub fn target(&self) -> NodeId {
        match self {
            Event::Click(target) | Event::Input(target) => *target,
        }
    }
}
