use axum::{
    extract::{RawQuery, State},
    response::IntoResponse,
    Form,
};
use common::{
    catalog::{
        fixtures,
        types::{crypto_match::CryptoMatch, currency::Currency, original_product::OriginalProduct},
    },
    search::{project, PriceRange, SortOrder},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    html_state::HtmlState,
    middlewares::response_middleware::{HtmlError, TemplateResponse},
    utils::{
        pagination::{page_of, Page},
        results_query::{results_location, ResultsQuery},
    },
};

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    url: String,
}

/// Accepts any non-empty text; it is only parsed as a URL on the results page.
pub async fn submit_search(
    State(state): State<HtmlState>,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    if form.url.is_empty() {
        return TemplateResponse::redirect("/");
    }

    // Simulated analysis time before navigating
    tokio::time::sleep(state.config.simulated_latency()).await;

    info!(input_bytes = form.url.len(), "Search submitted");
    TemplateResponse::redirect(results_location(&form.url))
}

#[derive(Serialize)]
pub struct SearchPageData {
    hostname: Option<String>,
    results_query: String,
    latency_ms: u64,
}

/// Loading shell; htmx swaps in `/search/results` after the simulated delay.
pub async fn search_page(
    State(state): State<HtmlState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, HtmlError> {
    let query = ResultsQuery::parse(raw.as_deref());
    let product_url = query.product_url()?;

    Ok(TemplateResponse::new_template(
        "search/base.html",
        SearchPageData {
            hostname: product_url.map(|url| url.hostname().to_string()),
            results_query: query.to_query_string(),
            latency_ms: state.config.simulated_latency_ms,
        },
    ))
}

#[derive(Serialize)]
struct RateRow {
    code: &'static str,
    usd: u64,
}

#[derive(Serialize)]
struct CurrencyOption {
    code: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct SortOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct PriceSlider {
    min: u32,
    max: u32,
    floor: u32,
    ceiling: u32,
    step: u32,
}

#[derive(Serialize)]
struct ResultsData {
    url: Option<String>,
    original_product: OriginalProduct,
    rates: Vec<RateRow>,
    currency_options: Vec<CurrencyOption>,
    sort_options: Vec<SortOption>,
    price: PriceSlider,
    in_stock_only: bool,
    page: Page<CryptoMatch>,
    next_page_query: Option<String>,
}

#[derive(Serialize)]
struct MatchPageData {
    page: Page<CryptoMatch>,
    next_page_query: Option<String>,
}

/// Results fragment. The list is always derived from the query's filter and
/// sort state; page 2+ returns only the next batch of cards.
pub async fn search_results(
    State(state): State<HtmlState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, HtmlError> {
    let query = ResultsQuery::parse(raw.as_deref());
    let product_url = query.product_url()?;

    let displayed = project(&fixtures::matches(), &query.criteria, query.sort);
    let page = page_of(displayed, query.page, state.config.results_per_page);
    let next_page_query = page.next_page.map(|next| query.page_query_string(next));

    debug!(
        sort = %query.sort,
        page = page.current_page,
        total = page.total_items,
        "Projected search results"
    );

    if query.page > 1 {
        return Ok(TemplateResponse::new_partial(
            "search/results.html",
            "match_page",
            MatchPageData {
                page,
                next_page_query,
            },
        ));
    }

    let rates = fixtures::rates()
        .iter()
        .map(|(currency, usd)| RateRow {
            code: currency.code(),
            usd,
        })
        .collect();

    let currency_options = Currency::ALL
        .into_iter()
        .map(|currency| CurrencyOption {
            code: currency.code(),
            selected: query.criteria.currencies.contains(&currency),
        })
        .collect();

    let sort_options = SortOrder::ALL
        .into_iter()
        .map(|order| SortOption {
            value: order.as_str(),
            label: order.label(),
            selected: order == query.sort,
        })
        .collect();

    Ok(TemplateResponse::new_partial(
        "search/results.html",
        "results_section",
        ResultsData {
            original_product: fixtures::described_product(product_url.as_ref()),
            url: query.url,
            rates,
            currency_options,
            sort_options,
            price: PriceSlider {
                min: query.criteria.price_range.min(),
                max: query.criteria.price_range.max(),
                floor: PriceRange::FLOOR,
                ceiling: PriceRange::CEILING,
                step: PriceRange::STEP,
            },
            in_stock_only: query.criteria.in_stock_only,
            page,
            next_page_query,
        },
    ))
}
