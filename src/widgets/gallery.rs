//! Image gallery carousel.

use tracing::trace;

use crate::dom::{Document, Event, NodeId};
use crate::error::{Result, WidgetError};
use crate::payload::read_payload;

pub const GALLERY_ROOT: &str = "data-gallery";
pub const GALLERY_IMG: &str = "data-gallery-img";
pub const GALLERY_IMAGES: &str = "data-gallery-images";
pub const GALLERY_PREV: &str = "data-gallery-prev";
pub const GALLERY_NEXT: &str = "data-gallery-next";

/// Fixed list of items with a cursor that wraps in both directions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Move the cursor by `delta`, wrapping modulo the length.
    ///
    /// An empty carousel has nowhere to go and stays put.
    pub fn advance(&mut self, delta: isize) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as isize;
        self.index = (self.index as isize + delta.rem_euclid(len)).rem_euclid(len) as usize;
        self.current()
    }

    pub fn forward(&mut self) -> Option<&T> {
        self.advance(1)
    }

    pub fn back(&mut self) -> Option<&T> {
        self.advance(-1)
    }
}

/// Carousel bound to the `[data-gallery]` anchors
#[derive(Debug, Clone)]
pub struct GalleryWidget {
    img: NodeId,
    prev: NodeId,
    next: NodeId,
    carousel: Carousel<String>,
}

impl GalleryWidget {
    /// Bind to the gallery anchors. The server already rendered the first
    /// image, so nothing is written until the visitor navigates.
    pub fn mount(doc: &Document) -> Result<Self> {
        let root = doc
            .query(GALLERY_ROOT)
            .ok_or(WidgetError::MissingAnchor(GALLERY_ROOT))?;
        let find = |attr: &'static str| {
            doc.query_within(root, attr)
                .ok_or(WidgetError::MissingAnchor(attr))
        };

        let img = find(GALLERY_IMG)?;
        let images_el = find(GALLERY_IMAGES)?;
        let prev = find(GALLERY_PREV)?;
        let next = find(GALLERY_NEXT)?;

        let images: Vec<String> = read_payload(doc, images_el);

        Ok(Self {
            img,
            prev,
            next,
            carousel: Carousel::new(images),
        })
    }

    pub fn carousel(&self) -> &Carousel<String> {
        &self.carousel
    }

    pub fn image_node(&self) -> NodeId {
        self.img
    }

    pub fn prev_button(&self) -> NodeId {
        self.prev
    }

    pub fn next_button(&self) -> NodeId {
        self.next
    }

    /// React to clicks on either navigation control. Returns whether the
    /// event belonged to this widget.
    pub fn handle(&mut self, doc: &mut Document, event: Event) -> bool {
        let Event::Click(target) = event else {
            return false;
        };

        let delta = if doc.is_inclusive_ancestor(self.prev, target) {
            -1
        } else if doc.is_inclusive_ancestor(self.next, target) {
            1
        } else {
            return false;
        };

        if let Some(src) = self.carousel.advance(delta).cloned() {
            trace!("Gallery moved to image {}", self.carousel.index());
            doc.set_attr(self.img, "src", src);
        }
        true
    }
}
