pub mod crypto_match;
pub mod currency;
pub mod original_product;
pub mod rates;
