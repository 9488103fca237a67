use std::fmt::Write as _;

use tracing::debug;

use crate::models::AnnotatedEvent;
use crate::service::catalog::{parse_features, StructureError};

/// Parse a catalog body and tag every event with `label`, keeping feature order.
pub fn parse(body: &str, label: &str) -> Result<Vec<AnnotatedEvent>, StructureError> {
    let events = parse_features(body)?;
    debug!("Parsed {} events from catalog body", events.len());
    Ok(events
        .into_iter()
        .map(|event| AnnotatedEvent::new(label, event))
        .collect())
}

/// Render the whole report, or the no-results sentence when `events` is empty.
pub fn render(events: &[AnnotatedEvent], days: u64) -> String {
    if events.is_empty() {
        return format!("No earthquakes were recorded in the past {days} days.\n");
    }

    let mut out = String::new();
    for event in events {
        out.push_str(&render_block(event));
        out.push('\n');
    }
    out
}

/// Four-line block for one event, each line newline-terminated.
pub fn render_block(event: &AnnotatedEvent) -> String {
    let mut block = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(block, "Country: {}", event.label);
    let _ = writeln!(block, "Place: {}", event.place);
    let _ = writeln!(block, "Magnitude: {}", format_magnitude(event.magnitude));
    let _ = writeln!(block, "Date and Time: {}", event.occurred_at);
    block
}

/// Magnitudes always carry a fractional part (`5.0`, not `5`).
fn format_magnitude(mag: f64) -> String {
    format!("{mag:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(place: &str, mag: f64) -> AnnotatedEvent {
        AnnotatedEvent {
            label: "Chile".into(),
            place: place.into(),
            magnitude: mag,
            occurred_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn empty_report_is_one_sentence() {
        assert_eq!(
            render(&[], 7),
            "No earthquakes were recorded in the past 7 days.\n"
        );
    }

    #[test]
    fn block_lines_in_order() {
        let body = r#"{"features":[{"properties":{"place":"10km N of Nowhere","mag":4.5,"time":"2024-01-01T00:00:00Z"}}]}"#;
        let events = parse(body, "Chile").unwrap();
        assert_eq!(
            render(&events, 7),
            "Country: Chile\n\
             Place: 10km N of Nowhere\n\
             Magnitude: 4.5\n\
             Date and Time: 2024-01-01T00:00:00Z\n\
             \n"
        );
    }

    #[test]
    fn whole_magnitudes_keep_a_decimal() {
        assert!(render_block(&event("A", 5.0)).contains("Magnitude: 5.0\n"));
        assert!(render_block(&event("A", -0.3)).contains("Magnitude: -0.3\n"));
    }

    #[test]
    fn order_follows_features() {
        let body = r#"{"features":[
            {"properties":{"place":"C","mag":1.0,"time":"3"}},
            {"properties":{"place":"A","mag":6.1,"time":"1"}},
            {"properties":{"place":"B","mag":2.2,"time":"2"}}
        ]}"#;
        let places: Vec<_> = parse(body, "Peru")
            .unwrap()
            .into_iter()
            .map(|e| e.place)
            .collect();
        assert_eq!(places, ["C", "A", "B"]);
    }

    #[test]
    fn every_row_gets_the_label() {
        let body = r#"{"features":[
            {"properties":{"place":"A","mag":1.0,"time":"1"}},
            {"properties":{"place":"B","mag":2.0,"time":"2"}}
        ]}"#;
        let events = parse(body, "Japan").unwrap();
        assert!(events.iter().all(|e| e.label == "Japan"));

        let report = render(&events, 1);
        assert_eq!(report.matches("Country: Japan\n").count(), 2);
        assert!(report.ends_with("Date and Time: 2\n\n"));
    }

    #[test]
    fn null_magnitude_does_not_drop_other_events() {
        let body = r#"{"features":[
            {"properties":{"place":"A","mag":3.3,"time":"1"}},
            {"properties":{"place":"B","mag":null,"time":"2"}}
        ]}"#;
        let events = parse(body, "Chile").unwrap();
        assert_eq!(events.len(), 2);
        assert!(render(&events, 2).ends_with("Place: B\nMagnitude: 0.0\nDate and Time: 2\n\n"));
    }

    #[test]
    fn structure_errors_pass_through() {
        assert_eq!(
            parse(r#"{"type":"FeatureCollection"}"#, "Chile"),
            Err(StructureError::Missing("features".into()))
        );
    }
}
