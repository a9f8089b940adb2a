use std::collections::BTreeMap;

use serde::Serialize;

use super::currency::Currency;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub name: String,
    pub logo: String,
    pub rating: f64,
    pub cryptos: Vec<Currency>,
}

impl Merchant {
    pub fn accepts_any(&self, currencies: &[Currency]) -> bool {
        self.cryptos.iter().any(|accepted| currencies.contains(accepted))
    }
}

/// One alternative offer for the searched product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoMatch {
    pub id: u32,
    pub title: String,
    pub price: u32,
    pub crypto_price: BTreeMap<Currency, f64>,
    pub image: String,
    pub merchant: Merchant,
    /// Percentage in `0..=100`.
    pub similarity: u8,
    pub in_stock: bool,
    pub shipping: String,
    pub savings: u32,
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merchant(cryptos: Vec<Currency>) -> Merchant {
        Merchant {
            name: "Test".into(),
            logo: String::new(),
            rating: 4.0,
            cryptos,
        }
    }

    #[test]
    fn accepts_any_requires_overlap() {
        let m = merchant(vec![Currency::Btc, Currency::Ltc]);
        assert!(m.accepts_any(&[Currency::Eth, Currency::Ltc]));
        assert!(!m.accepts_any(&[Currency::Eth, Currency::Bch]));
        assert!(!m.accepts_any(&[]));
    }
}
