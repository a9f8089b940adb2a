use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::catalog::types::{crypto_match::CryptoMatch, currency::Currency};

/// Inclusive whole-dollar bounds, always kept inside the slider domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub const FLOOR: u32 = 0;
    pub const CEILING: u32 = 3000;
    pub const STEP: u32 = 50;

    /// Clamps both bounds to the slider domain and swaps an inverted pair.
    pub fn new(min: u32, max: u32) -> Self {
        let min = min.clamp(Self::FLOOR, Self::CEILING);
        let max = max.clamp(Self::FLOOR, Self::CEILING);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, 2000)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    /// A match passes when its merchant accepts any of these.
    pub currencies: Vec<Currency>,
    pub in_stock_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: PriceRange::default(),
            currencies: vec![Currency::Btc, Currency::Eth],
            in_stock_only: false,
        }
    }
}

impl FilterCriteria {
    pub fn admits(&self, candidate: &CryptoMatch) -> bool {
        self.price_range.contains(candidate.price)
            && candidate.merchant.accepts_any(&self.currencies)
            && (!self.in_stock_only || candidate.in_stock)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[default]
    Similarity,
    PriceLow,
    PriceHigh,
    Savings,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Similarity, Self::PriceLow, Self::PriceHigh, Self::Savings];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Savings => "savings",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Similarity => "Best match",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Savings => "Best savings",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order '{s}'"))
    }
}
