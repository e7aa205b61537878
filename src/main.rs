//! bookaspace-preview: run the booking page widgets against a venue and
//! print the resulting page as HTML.

use anyhow::Context;
use chrono::Local;

use bookaspace_web::config::PreviewConfig;
use bookaspace_web::logging::init_logging;
use bookaspace_web::preview::PagePreview;
use bookaspace_web::venue::VenueFixture;
use bookaspace_web::{BookingPage, Event};

fn main() -> anyhow::Result<()> {
    let config = PreviewConfig::load();
    init_logging(config.verbose);

    let venue = match &config.venue {
        Some(path) => VenueFixture::load(path)
            .with_context(|| format!("Failed to load venue fixture {}", path.display()))?,
        None => VenueFixture::sample(),
    };
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::info!("Previewing {:?} from {}", venue.name, today);

    let mut doc = venue.to_document(&config.initial_hours);
    let mut page = BookingPage::init(&mut doc, today);

    if let Some(input) = page.quote().map(|q| q.hours_input()) {
        for hours in &config.hours {
            doc.set_value(input, hours.as_str());
            page.dispatch(&mut doc, Event::Input(input));
        }
    } else if !config.hours.is_empty() {
        tracing::warn!("No quote form on this page, ignoring --hours");
    }

    if let Some((prev, next)) = page.gallery().map(|g| (g.prev_button(), g.next_button())) {
        for _ in 0..config.next {
            page.dispatch(&mut doc, Event::Click(next));
        }
        for _ in 0..config.prev {
            page.dispatch(&mut doc, Event::Click(prev));
        }
    }

    let html = PagePreview::capture(&doc, &page, &venue.name)
        .to_html()
        .context("Failed to render preview")?;
    println!("{}", html);
    Ok(())
}
