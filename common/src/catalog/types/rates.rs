use std::collections::BTreeMap;

use serde::Serialize;

use super::currency::Currency;

/// USD price of one unit of each currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CryptoRates(BTreeMap<Currency, u64>);

impl CryptoRates {
    pub fn new(rates: impl IntoIterator<Item = (Currency, u64)>) -> Self {
        Self(rates.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, u64)> + '_ {
        self.0.iter().map(|(currency, rate)| (*currency, *rate))
    }
}
