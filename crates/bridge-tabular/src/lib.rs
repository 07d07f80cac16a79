pub mod enrich;
pub mod error;
pub mod flatten;
pub mod record_set;

pub use enrich::{enrich_scores, validate_movement, SessionKeys};
pub use error::{EnrichError, SchemaError, UnsupportedMovement};
pub use flatten::{flatten, FlatRecord};
pub use record_set::RecordSet;
