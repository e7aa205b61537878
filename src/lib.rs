//! Book a Space booking page widgets.
//!
//! Three independent behaviours for a venue listing page: an image gallery,
//! a seven-day availability strip and a live quote calculator. Each reads a
//! JSON payload embedded next to its anchors in the page and does nothing if
//! those anchors are absent.

pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod page;
pub mod payload;
pub mod preview;
pub mod pricing;
pub mod venue;
pub mod widgets;

pub use dom::{Document, Element, Event, NodeId};
pub use error::{Result, WidgetError};
pub use page::{BookingPage, BookingPageBuilder};
