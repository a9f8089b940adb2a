pub mod config;
pub mod product_url;
pub mod template_engine;
