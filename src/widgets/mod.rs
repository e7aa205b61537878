//! The three independent booking page widgets.
//!
//! Each one binds to its own anchors, reads its own payload and owns its own
//! state. None of them knows the others exist.

pub mod availability;
pub mod gallery;
pub mod quote;

pub use availability::{AvailabilityMap, AvailabilityWidget, DayChip};
pub use gallery::{Carousel, GalleryWidget};
pub use quote::{QuoteDisplay, QuoteTargets, QuoteWidget};
