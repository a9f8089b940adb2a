use std::cmp::Ordering;

use crate::catalog::types::crypto_match::CryptoMatch;

use super::criteria::{FilterCriteria, SortOrder};

/// `sort(filter(matches, criteria), order)`.
///
/// Ties are broken by ascending id so the output is fully determined by the
/// inputs.
pub fn project(
    matches: &[CryptoMatch],
    criteria: &FilterCriteria,
    order: SortOrder,
) -> Vec<CryptoMatch> {
    let mut displayed: Vec<CryptoMatch> = matches
        .iter()
        .filter(|candidate| criteria.admits(candidate))
        .cloned()
        .collect();
    displayed.sort_by(|a, b| compare(a, b, order).then_with(|| a.id.cmp(&b.id)));
    displayed
}

fn compare(a: &CryptoMatch, b: &CryptoMatch, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Similarity => b.similarity.cmp(&a.similarity),
        SortOrder::PriceLow => a.price.cmp(&b.price),
        SortOrder::PriceHigh => b.price.cmp(&a.price),
        SortOrder::Savings => b.savings.cmp(&a.savings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{fixtures, types::currency::Currency},
        search::criteria::PriceRange,
    };

    fn ids(matches: &[CryptoMatch]) -> Vec<u32> {
        matches.iter().map(|m| m.id).collect()
    }

    #[test]
    fn default_state_shows_every_fixture() {
        let all = fixtures::matches();
        let displayed = project(&all, &FilterCriteria::default(), SortOrder::default());

        assert_eq!(displayed.len(), all.len());
        assert_eq!(ids(&displayed), vec![3, 1, 2]);
    }

    #[test]
    fn each_sort_order_orders_by_its_key() {
        let all = fixtures::matches();
        let criteria = FilterCriteria::default();

        assert_eq!(ids(&project(&all, &criteria, SortOrder::PriceLow)), vec![1, 2, 3]);
        assert_eq!(ids(&project(&all, &criteria, SortOrder::PriceHigh)), vec![3, 2, 1]);
        assert_eq!(ids(&project(&all, &criteria, SortOrder::Savings)), vec![1, 2, 3]);
    }

    #[test]
    fn price_range_excludes_out_of_range_offers() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(1900, 1950),
            ..FilterCriteria::default()
        };
        let displayed = project(&fixtures::matches(), &criteria, SortOrder::PriceLow);
        assert_eq!(ids(&displayed), vec![2]);
    }

    #[test]
    fn currency_filter_keeps_merchants_accepting_any_selected() {
        let criteria = FilterCriteria {
            currencies: vec![Currency::Bch],
            ..FilterCriteria::default()
        };
        let displayed = project(&fixtures::matches(), &criteria, SortOrder::Similarity);
        assert_eq!(ids(&displayed), vec![3]);

        let criteria = FilterCriteria {
            currencies: vec![Currency::Ltc],
            ..FilterCriteria::default()
        };
        let displayed = project(&fixtures::matches(), &criteria, SortOrder::PriceLow);
        assert_eq!(ids(&displayed), vec![1, 3]);
    }

    #[test]
    fn empty_currency_selection_admits_nothing() {
        let criteria = FilterCriteria {
            currencies: Vec::new(),
            ..FilterCriteria::default()
        };
        assert!(project(&fixtures::matches(), &criteria, SortOrder::Similarity).is_empty());
    }

    #[test]
    fn in_stock_filter_drops_unavailable_offers() {
        let mut all = fixtures::matches();
        if let Some(first) = all.first_mut() {
            first.in_stock = false;
        }
        let criteria = FilterCriteria {
            in_stock_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&project(&all, &criteria, SortOrder::PriceLow)), vec![2, 3]);
    }

    #[test]
    fn ties_break_by_id() {
        let mut all = fixtures::matches();
        for candidate in &mut all {
            candidate.similarity = 90;
        }
        let displayed = project(&all, &FilterCriteria::default(), SortOrder::Similarity);
        assert_eq!(ids(&displayed), vec![1, 2, 3]);
    }
}
