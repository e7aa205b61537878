//! In-memory page model.
//!
//! Widgets never talk to a real browser. They bind to a [`Document`] made of
//! plain elements, find their anchors by `data-*` attribute, and write text or
//! attributes back. The host feeds user activity in as [`Event`]s.

pub mod document;
pub mod event;
pub mod node;

pub use document::Document;
pub use event::Event;
pub use node::{Element, NodeId};
