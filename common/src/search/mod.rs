//! Filter and sort state for the results view and the pure projection that
//! derives the displayed list from it.

pub mod criteria;
pub mod projection;

pub use criteria::{FilterCriteria, PriceRange, SortOrder};
pub use projection::project;
