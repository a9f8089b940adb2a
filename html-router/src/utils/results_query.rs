use common::{
    catalog::types::currency::Currency,
    error::AppError,
    search::{FilterCriteria, PriceRange, SortOrder},
    utils::product_url::ProductUrl,
};
use url::form_urlencoded;

/// Query string state of the results view.
///
/// Parsed by hand because `crypto` repeats once per selected currency.
/// Malformed numbers and unknown codes fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsQuery {
    /// Raw, percent-decoded search input.
    pub url: Option<String>,
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    pub page: usize,
}

impl ResultsQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let defaults = FilterCriteria::default();
        let mut url = None;
        let mut min_price = None;
        let mut max_price = None;
        let mut currencies: Vec<Currency> = Vec::new();
        let mut filters_submitted = false;
        let mut in_stock_only = false;
        let mut sort = SortOrder::default();
        let mut page = 1;

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "url" if !value.is_empty() => url = Some(value.into_owned()),
                "min_price" => min_price = parse_price(&value).or(min_price),
                "max_price" => max_price = parse_price(&value).or(max_price),
                "crypto" => {
                    if let Ok(currency) = value.parse::<Currency>() {
                        if !currencies.contains(&currency) {
                            currencies.push(currency);
                        }
                    }
                }
                "filters" => filters_submitted = true,
                "in_stock" => in_stock_only = matches!(value.as_ref(), "on" | "true" | "1"),
                "sort" => sort = value.parse().unwrap_or_default(),
                "page" => page = value.parse::<usize>().unwrap_or(1).max(1),
                _ => {}
            }
        }

        // Before the filter form is first submitted nothing is unchecked yet
        if !filters_submitted && currencies.is_empty() {
            currencies = defaults.currencies;
        }

        Self {
            url,
            criteria: FilterCriteria {
                price_range: PriceRange::new(
                    min_price.unwrap_or(defaults.price_range.min()),
                    max_price.unwrap_or(defaults.price_range.max()),
                ),
                currencies,
                in_stock_only,
            },
            sort,
            page,
        }
    }

    /// `Ok(None)` when no URL was given; an unparseable one is an error.
    pub fn product_url(&self) -> Result<Option<ProductUrl>, AppError> {
        self.url.as_deref().map(ProductUrl::parse).transpose()
    }

    /// Encodes the search and filter state, without the page number.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(url) = &self.url {
            serializer.append_pair("url", url);
        }
        serializer
            .append_pair("min_price", &self.criteria.price_range.min().to_string())
            .append_pair("max_price", &self.criteria.price_range.max().to_string());
        for currency in &self.criteria.currencies {
            serializer.append_pair("crypto", currency.code());
        }
        if self.criteria.in_stock_only {
            serializer.append_pair("in_stock", "on");
        }
        serializer
            .append_pair("sort", self.sort.as_str())
            .append_pair("filters", "1");
        serializer.finish()
    }

    pub fn page_query_string(&self, page: usize) -> String {
        format!("{}&page={page}", self.to_query_string())
    }
}

/// Out-of-range amounts saturate so `PriceRange` can clamp them.
fn parse_price(value: &str) -> Option<u32> {
    value
        .parse::<u64>()
        .ok()
        .map(|amount| u32::try_from(amount).unwrap_or(u32::MAX))
}

/// Location the search form redirects to: the raw input as `url`.
pub fn results_location(input: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", input)
        .finish();
    format!("/search?{query}")
}
