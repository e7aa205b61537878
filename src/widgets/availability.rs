//! Seven-day availability strip.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::dom::{Document, Element, NodeId};
use crate::error::{Result, WidgetError};
use crate::payload::read_payload;

pub const AVAILABILITY_CONTAINER: &str = "data-availability";
pub const AVAILABILITY_JSON: &str = "data-availability-json";

/// Number of days shown, starting today
pub const DAYS_SHOWN: usize = 7;

const WEEKDAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

pub const CHIP_CLASS: &str = "avail-chip";
pub const CHIP_OK_CLASS: &str = "avail-chip avail-chip--ok";

/// Weekday key (`sun`..`sat`) to the slots open on that day.
///
/// Slots are opaque; only whether a day has any matters here. A key holding
/// anything other than an array counts as having no slots.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct AvailabilityMap {
    days: BTreeMap<String, Vec<Value>>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, slots: Vec<Value>) {
        self.days.insert(key.into(), slots);
    }

    pub fn slots(&self, key: &str) -> &[Value] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_available(&self, key: &str) -> bool {
        !self.slots(key).is_empty()
    }
}

impl From<BTreeMap<String, Value>> for AvailabilityMap {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let days = raw
            .into_iter()
            .map(|(key, value)| {
                let slots = match value {
                    Value::Array(slots) => slots,
                    _ => Vec::new(),
                };
                (key, slots)
            })
            .collect();
        Self { days }
    }
}

pub fn weekday_key(weekday: Weekday) -> &'static str {
    WEEKDAY_KEYS[weekday.num_days_from_sunday() as usize]
}

/// One day in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayChip {
    pub date: NaiveDate,
    pub key: &'static str,
    /// Short weekday name, e.g. `Mon`
    pub label: String,
    pub available: bool,
}

impl DayChip {
    pub fn class_name(&self) -> &'static str {
        if self.available {
            CHIP_OK_CLASS
        } else {
            CHIP_CLASS
        }
    }
}

/// The next [`DAYS_SHOWN`] days from `today`, each flagged against `map`
pub fn upcoming_week(today: NaiveDate, map: &AvailabilityMap) -> Vec<DayChip> {
    today
        .iter_days()
        .take(DAYS_SHOWN)
        .map(|date| {
            let key = weekday_key(date.weekday());
            DayChip {
                date,
                key,
                label: date.format("%a").to_string(),
                available: map.is_available(key),
            }
        })
        .collect()
}

/// Replace the container's contents with one `span` per chip
pub fn render_strip(doc: &mut Document, container: NodeId, chips: &[DayChip]) {
    doc.clear_children(container);
    for chip in chips {
        let span = Element::new("span")
            .with_attr("class", chip.class_name())
            .with_text(chip.label.clone());
        doc.append(container, span);
    }
}

/// Strip bound to `[data-availability]`
#[derive(Debug, Clone)]
pub struct AvailabilityWidget {
    container: NodeId,
    availability: AvailabilityMap,
}

impl AvailabilityWidget {
    /// Bind and render once for `today`
    pub fn mount(doc: &mut Document, today: NaiveDate) -> Result<Self> {
        let container = doc
            .query(AVAILABILITY_CONTAINER)
            .ok_or(WidgetError::MissingAnchor(AVAILABILITY_CONTAINER))?;
        let data_el = doc
            .query(AVAILABILITY_JSON)
            .ok_or(WidgetError::MissingAnchor(AVAILABILITY_JSON))?;

        let widget = Self {
            container,
            availability: read_payload(doc, data_el),
        };
        widget.render(doc, today);
        Ok(widget)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn availability(&self) -> &AvailabilityMap {
        &self.availability
    }

    pub fn render(&self, doc: &mut Document, today: NaiveDate) -> Vec<DayChip> {
        let chips = upcoming_week(today, &self.availability);
        trace!("Rendering availability from {}", today);
        render_strip(doc, self.container, &chips);
        chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn monday() -> NaiveDate {
        // 2026-10-19 is a Monday
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_weekday_keys() {
        assert_eq!(weekday_key(Weekday::Sun), "sun");
        assert_eq!(weekday_key(Weekday::Mon), "mon");
        assert_eq!(weekday_key(Weekday::Sat), "sat");
    }

    #[test]
    fn test_map_treats_non_arrays_as_empty() {
        let map: AvailabilityMap =
            serde_json::from_value(json!({"mon": [], "tue": ["slotA"], "wed": null, "thu": "x"}))
                .unwrap();
        assert!(!map.is_available("mon"));
        assert!(map.is_available("tue"));
        assert!(!map.is_available("wed"));
        assert!(!map.is_available("thu"));
        assert!(!map.is_available("fri"));
        assert_eq!(map.slots("tue"), &[json!("slotA")]);
    }

    #[test]
    fn test_upcoming_week_scenario() {
        let map: AvailabilityMap =
            serde_json::from_value(json!({"mon": [], "tue": ["slotA"]})).unwrap();
        let chips = upcoming_week(monday(), &map);

        assert_eq!(chips.len(), DAYS_SHOWN);
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        let flags: Vec<bool> = chips.iter().map(|c| c.available).collect();
        assert_eq!(flags, [false, true, false, false, false, false, false]);
    }

    #[test]
    fn test_empty_map_gives_seven_unavailable_days() {
        let chips = upcoming_week(monday(), &AvailabilityMap::new());
        assert_eq!(chips.len(), 7);
        assert!(chips.iter().all(|c| !c.available));
        assert!(chips.iter().all(|c| c.class_name() == CHIP_CLASS));
    }

    #[test]
    fn test_week_crosses_month_end() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 29).unwrap();
        let mut map = AvailabilityMap::new();
        map.insert("fri", vec![json!({"start": "09:00", "end": "22:00"})]);
        let chips = upcoming_week(today, &map);
        assert_eq!(chips.last().unwrap().date, NaiveDate::from_ymd_opt(2027, 1, 4).unwrap());
        // 2027-01-01 is a Friday
        let friday = chips.iter().find(|c| c.key == "fri").unwrap();
        assert_eq!(friday.date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert!(friday.available);
        assert_eq!(friday.class_name(), CHIP_OK_CLASS);
    }

    fn strip_doc(payload: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.append(body, Element::anchor("div", AVAILABILITY_CONTAINER));
        doc.append(container, Element::new("span").with_text("Loading…"));
        doc.append(body, Element::anchor("script", AVAILABILITY_JSON).with_text(payload));
        (doc, container)
    }

    #[test]
    fn test_mount_renders_chips() {
        let (mut doc, container) = strip_doc(r#"{"tue": ["slotA"]}"#);
        AvailabilityWidget::mount(&mut doc, monday()).unwrap();

        let children = doc.children(container).to_vec();
        assert_eq!(children.len(), 7);
        assert_eq!(doc.text_content(children[0]), "Mon");
        assert_eq!(doc.attr(children[0], "class"), Some(CHIP_CLASS));
        assert_eq!(doc.attr(children[1], "class"), Some(CHIP_OK_CLASS));
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        let (mut doc, container) = strip_doc(r#"{"sat": [1]}"#);
        let widget = AvailabilityWidget::mount(&mut doc, monday()).unwrap();
        let first = doc.text_content(container);
        widget.render(&mut doc, monday());
        assert_eq!(doc.children(container).len(), 7);
        assert_eq!(doc.text_content(container), first);
        assert_eq!(first, "MonTueWedThuFriSatSun");
    }

    #[test]
    fn test_malformed_payload_renders_all_unavailable() {
        let (mut doc, container) = strip_doc("{mon:");
        let widget = AvailabilityWidget::mount(&mut doc, monday()).unwrap();
        assert_eq!(widget.availability(), &AvailabilityMap::new());
        let children = doc.children(container).to_vec();
        assert_eq!(children.len(), 7);
        assert!(children.iter().all(|&c| doc.attr(c, "class") == Some(CHIP_CLASS)));
    }

    #[test]
    fn test_missing_payload_anchor_fails_mount() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append(body, Element::anchor("div", AVAILABILITY_CONTAINER));
        let err = AvailabilityWidget::mount(&mut doc, monday()).unwrap_err();
        assert!(matches!(err, WidgetError::MissingAnchor(AVAILABILITY_JSON)));
    }
}
