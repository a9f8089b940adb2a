use std::collections::BTreeMap;

use super::types::{
    crypto_match::{CryptoMatch, Merchant},
    currency::Currency,
    original_product::OriginalProduct,
    rates::CryptoRates,
};
use crate::utils::product_url::ProductUrl;

const PRODUCT_IMAGE: &str = "/assets/images/laptop.svg";
const ORIGINAL_PRICE: u32 = 1999;
const DEMO_DESCRIPTION: &str = "14-inch MacBook Pro with M3 chip, 8GB RAM, 512GB SSD";

/// Id of the match the JSON endpoint returns.
pub const FEATURED_MATCH_ID: u32 = 1;

/// Product card for a search. Without a URL the demo product is shown.
pub fn original_product(url: Option<&ProductUrl>) -> OriginalProduct {
    match url {
        Some(url) => OriginalProduct {
            title: format!("Product from {}", url.hostname()),
            price: ORIGINAL_PRICE,
            image: PRODUCT_IMAGE.to_string(),
            source: url.hostname().to_string(),
            description: None,
        },
        None => OriginalProduct {
            title: "Apple MacBook Pro 14-inch M3 Chip".to_string(),
            price: ORIGINAL_PRICE,
            image: PRODUCT_IMAGE.to_string(),
            source: "apple.com".to_string(),
            description: Some(DEMO_DESCRIPTION.to_string()),
        },
    }
}

/// Same card with the description the results page shows alongside it.
pub fn described_product(url: Option<&ProductUrl>) -> OriginalProduct {
    let mut product = original_product(url);
    product.description = Some(DEMO_DESCRIPTION.to_string());
    product
}

pub fn matches() -> Vec<CryptoMatch> {
    vec![
        offer(
            1,
            r#"MacBook Pro 14" M3 - 8GB/512GB"#,
            1899,
            (0.0285, 0.542),
            merchant("Newegg", "newegg", 4.5, &[Currency::Btc, Currency::Eth, Currency::Ltc]),
            98,
            "Free shipping",
            100,
            &["Same model", "Authorized dealer", "1-year warranty"],
        ),
        offer(
            2,
            "Apple MacBook Pro 14-inch with M3 Chip",
            1949,
            (0.0293, 0.556),
            merchant("Overstock", "overstock", 4.3, &[Currency::Btc]),
            95,
            "Free shipping over $45",
            50,
            &["Exact match", "Crypto pioneer", "Extended warranty available"],
        ),
        offer(
            3,
            r#"MacBook Pro 14" M3 Chip - Space Gray"#,
            1999,
            (0.0301, 0.571),
            merchant(
                "BitPay Store",
                "bitpay",
                4.7,
                &[Currency::Btc, Currency::Eth, Currency::Bch, Currency::Ltc],
            ),
            100,
            "Express shipping available",
            0,
            &["Perfect match", "Multiple crypto options", "Instant payment"],
        ),
    ]
}

/// Matches included in the JSON endpoint payload.
pub fn featured_matches() -> Vec<CryptoMatch> {
    matches()
        .into_iter()
        .filter(|m| m.id == FEATURED_MATCH_ID)
        .collect()
}

pub fn rates() -> CryptoRates {
    CryptoRates::new([
        (Currency::Btc, 66_500),
        (Currency::Eth, 3_500),
        (Currency::Ltc, 95),
        (Currency::Bch, 420),
    ])
}

fn merchant(name: &str, slug: &str, rating: f64, cryptos: &[Currency]) -> Merchant {
    Merchant {
        name: name.to_string(),
        logo: format!("/assets/logos/{slug}.svg"),
        rating,
        cryptos: cryptos.to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
fn offer(
    id: u32,
    title: &str,
    price: u32,
    (btc, eth): (f64, f64),
    merchant: Merchant,
    similarity: u8,
    shipping: &str,
    savings: u32,
    features: &[&str],
) -> CryptoMatch {
    CryptoMatch {
        id,
        title: title.to_string(),
        price,
        crypto_price: BTreeMap::from([(Currency::Btc, btc), (Currency::Eth, eth)]),
        image: PRODUCT_IMAGE.to_string(),
        merchant,
        similarity,
        in_stock: true,
        shipping: shipping.to_string(),
        savings,
        features: features.iter().map(ToString::to_string).collect(),
    }
}
