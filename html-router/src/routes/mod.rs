pub mod index;
pub mod search;
