//! HTML template rendering for parked domains.

mod parked;

pub use parked::{ParkedTemplate, parked_page};
