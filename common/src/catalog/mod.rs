//! Static catalog backing every search.
//!
//! Nothing here is scraped or scored: the original product, the match offers
//! and the exchange rates are fixtures rendered as-is.

pub mod fixtures;
pub mod types;
