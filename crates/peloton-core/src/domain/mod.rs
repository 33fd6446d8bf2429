//! Domain model: competitors, qualities and the event catalog.

mod competitor;
mod event;
mod points_table;
mod quality;

pub use competitor::{Competitor, CompetitorId};
pub use event::{Event, EventCatalog, EventCode};
pub use points_table::{points_for_position, FINISHING_POINTS};
pub use quality::{Quality, QualityRatings, UnknownQuality, MAX_QUALITY};
