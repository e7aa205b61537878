//! Venue fixtures for the preview binary.

use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::dom::Document;
use crate::error::Result;
use crate::page::BookingPageBuilder;

/// The parts of a venue listing the booking page embeds.
///
/// Pricing keys stay loosely typed here; [`PricingConfig`] does its own
/// defaulting once the widget reads the payload back.
///
/// [`PricingConfig`]: crate::pricing::PricingConfig
#[derive(Debug, Clone, Deserialize)]
pub struct VenueFixture {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub availability: Map<String, Value>,
    #[serde(flatten)]
    pub pricing: Map<String, Value>,
}

impl VenueFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// A London hall: £120/h, three hour minimum, 6% service fee, 20% deposit
    pub fn sample() -> Self {
        let hours = |start: &str, end: &str| json!([{"start": start, "end": end}]);
        let availability = [
            ("mon", hours("09:00", "21:00")),
            ("tue", hours("09:00", "21:00")),
            ("wed", hours("09:00", "21:00")),
            ("thu", hours("09:00", "21:00")),
            ("fri", hours("09:00", "22:00")),
            ("sat", hours("10:00", "23:00")),
            ("sun", json!([])),
        ];
        let pricing = [
            ("price_per_hour", json!(120)),
            ("min_hours", json!(3)),
            ("service_fee_rate", json!(0.06)),
            ("deposit_pct", json!(20)),
        ];

        Self {
            name: "Example Venue 2".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=1400&q=60".to_string(),
                "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=1400&q=60".to_string(),
            ],
            availability: availability
                .into_iter()
                .map(|(day, slots)| (day.to_string(), slots))
                .collect(),
            pricing: pricing
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }

    /// Booking page for this venue with `initial_hours` in the hours field
    pub fn to_document(&self, initial_hours: &str) -> Document {
        BookingPageBuilder::new()
            .gallery(self.images.as_slice())
            .availability(&self.availability)
            .quote(&self.pricing, initial_hours)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_venue() {
        let venue = VenueFixture::sample();
        assert_eq!(venue.name, "Example Venue 2");
        assert_eq!(venue.images.len(), 2);
        assert_eq!(venue.availability.len(), 7);
        assert!(venue.pricing.contains_key("price_per_hour"));
        assert!(!venue.pricing.contains_key("images"));
    }

    #[test]
    fn test_sample_matches_fixture_file_shape() {
        let file: VenueFixture = serde_json::from_value(json!({
            "name": "Example Venue 2",
            "price_per_hour": 120,
            "min_hours": 3,
            "service_fee_rate": 0.06,
            "deposit_pct": 20,
            "availability": {"sun": [], "sat": [{"start": "10:00", "end": "23:00"}]}
        }))
        .unwrap();
        let sample = VenueFixture::sample();
        assert_eq!(sample.pricing, file.pricing);
        assert_eq!(sample.availability.get("sun"), file.availability.get("sun"));
        assert_eq!(sample.availability.get("sat"), file.availability.get("sat"));
    }

    #[test]
    fn test_pricing_keys_feed_config() {
        let venue = VenueFixture::sample();
        let cfg: PricingConfig = serde_json::from_value(Value::Object(venue.pricing)).unwrap();
        assert_eq!(cfg, PricingConfig::new(dec!(120), 3, dec!(0.06), dec!(20)));
    }

    #[test]
    fn test_sparse_fixture() {
        let venue: VenueFixture = serde_json::from_str(r#"{"price_per_hour": 65}"#).unwrap();
        assert!(venue.name.is_empty());
        assert!(venue.images.is_empty());
        assert!(venue.availability.is_empty());
        assert_eq!(venue.pricing.get("price_per_hour"), Some(&json!(65)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = VenueFixture::load(Path::new("/nonexistent/venue.json")).unwrap_err();
        assert!(matches!(err, crate::error::WidgetError::Io(_)));
    }
}
