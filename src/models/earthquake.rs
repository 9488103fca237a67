use serde::{Deserialize, Serialize};

/// One catalog feature reduced to the fields the report shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    pub place: String,
    pub magnitude: f64,
    /// Timestamp as the catalog sent it (ISO text or epoch millis).
    pub occurred_at: String,
}

/// A report row: a catalog event tagged with the user's country label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    pub label: String,
    pub place: String,
    pub magnitude: f64,
    pub occurred_at: String,
}

impl AnnotatedEvent {
    pub fn new(label: &str, event: SeismicEvent) -> Self {
        Self {
            label: label.to_string(),
            place: event.place,
            magnitude: event.magnitude,
            occurred_at: event.occurred_at,
        }
    }
}
