pub mod earthquake;
pub mod query;

pub use earthquake::{AnnotatedEvent, SeismicEvent};
pub use query::QueryWindow;
