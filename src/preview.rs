//! HTML preview of a booking page after the widgets have run.
//!
//! Everything here is read back out of the [`Document`], so the preview
//! shows what a visitor would see rather than the widgets' internal state.

use askama::Template;

use crate::dom::Document;
use crate::error::Result;
use crate::page::BookingPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub src: String,
    /// One-based position of the image on screen
    pub position: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub class_name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub hours: u32,
    pub base: String,
    pub fee: String,
    pub total: String,
    pub deposit: String,
}

/// Preview template
#[derive(Debug, Template)]
#[template(path = "preview.html")]
pub struct PagePreview {
    pub venue_name: String,
    pub gallery: Option<GalleryView>,
    pub chips: Vec<ChipView>,
    pub quote: Option<QuoteView>,
}

impl PagePreview {
    pub fn capture(doc: &Document, page: &BookingPage, venue_name: &str) -> Self {
        let gallery = page.gallery().map(|g| GalleryView {
            src: doc.attr(g.image_node(), "src").unwrap_or_default().to_string(),
            position: g.carousel().index() + 1,
            count: g.carousel().len(),
        });

        let chips = page
            .availability()
            .map(|a| {
                doc.children(a.container())
                    .iter()
                    .map(|&chip| ChipView {
                        class_name: doc.attr(chip, "class").unwrap_or_default().to_string(),
                        label: doc.text_content(chip),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let quote = page.quote().map(|q| {
            let targets = q.targets();
            QuoteView {
                hours: crate::pricing::effective_hours(&q.input(doc).hours_raw, q.config().min_hours),
                base: doc.text_content(targets.base),
                fee: doc.text_content(targets.fee),
                total: doc.text_content(targets.total),
                deposit: doc.text_content(targets.deposit),
            }
        });

        Self {
            venue_name: venue_name.to_string(),
            gallery,
            chips,
            quote,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Event;
    use crate::venue::VenueFixture;
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_capture_sample_venue() {
        let venue = VenueFixture::sample();
        let mut doc = venue.to_document("");
        let mut page = BookingPage::init(&mut doc, monday());

        let next = page.gallery().unwrap().next_button();
        page.dispatch(&mut doc, Event::Click(next));

        let preview = PagePreview::capture(&doc, &page, &venue.name);
        let gallery = preview.gallery.as_ref().unwrap();
        assert_eq!(gallery.position, 2);
        assert_eq!(gallery.count, 2);
        assert_eq!(gallery.src, venue.images[1]);

        assert_eq!(preview.chips.len(), 7);
        // Sunday has no slots in the sample venue
        assert_eq!(preview.chips[6].label, "Sun");
        assert_eq!(preview.chips[6].class_name, "avail-chip");
        assert_eq!(preview.chips[0].class_name, "avail-chip avail-chip--ok");

        // 3 h minimum at £120: base 360, fee 21.6 -> 22, deposit 72
        let quote = preview.quote.as_ref().unwrap();
        assert_eq!(quote.hours, 3);
        assert_eq!(quote.base, "£360");
        assert_eq!(quote.fee, "£22");
        assert_eq!(quote.total, "£382");
        assert_eq!(quote.deposit, "£72 (based on 20% of base)");
    }

    #[test]
    fn test_render_html() {
        let venue = VenueFixture::sample();
        let mut doc = venue.to_document("10");
        let page = BookingPage::init(&mut doc, monday());
        let html = PagePreview::capture(&doc, &page, &venue.name).to_html().unwrap();

        assert!(html.contains("<h1>Example Venue 2</h1>"));
        assert!(html.contains("Image 1 of 2"));
        assert!(html.contains("<dd>£1,200</dd>"));
        assert!(html.contains("<dd>£1,272</dd>"));
        assert_eq!(html.matches("<span class=").count(), 7);
    }

    #[test]
    fn test_render_empty_page() {
        let mut doc = Document::new();
        let page = BookingPage::init(&mut doc, monday());
        let preview = PagePreview::capture(&doc, &page, "Nowhere");
        assert!(preview.gallery.is_none());
        assert!(preview.chips.is_empty());
        assert!(preview.quote.is_none());

        let html = preview.to_html().unwrap();
        assert!(html.contains("Nowhere"));
        assert!(!html.contains("<dl"));
    }
}
