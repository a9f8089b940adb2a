pub mod pagination;
pub mod results_query;
