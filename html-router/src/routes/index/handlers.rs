use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

use crate::{html_state::HtmlState, middlewares::response_middleware::TemplateResponse};

/// Product kinds tiled behind the landing hero.
const SHOWCASE: [&str; 12] = [
    "Watch",
    "Sneakers",
    "Headphones",
    "Laptop",
    "Handbag",
    "Chair",
    "Smart device",
    "Sunglasses",
    "Coffee machine",
    "Earbuds",
    "Keyboard",
    "Smartphone",
];

const NAV_ITEMS: [&str; 4] = ["Discover", "Markets", "Wallets", "About"];

const FEATURE_PILLS: [&str; 3] = ["Secure Payments", "Instant Matching", "Best Prices"];

#[derive(Serialize)]
struct ShowcaseTile {
    label: &'static str,
    delay_ms: usize,
}

#[derive(Serialize)]
pub struct IndexPageData {
    showcase: Vec<ShowcaseTile>,
    nav_items: &'static [&'static str],
    feature_pills: &'static [&'static str],
    latency_ms: u64,
}

pub async fn index_handler(State(state): State<HtmlState>) -> impl IntoResponse {
    let showcase = SHOWCASE
        .iter()
        .enumerate()
        .map(|(i, label)| ShowcaseTile {
            label,
            delay_ms: i * 100,
        })
        .collect();

    TemplateResponse::new_template(
        "index/base.html",
        IndexPageData {
            showcase,
            nav_items: &NAV_ITEMS,
            feature_pills: &FEATURE_PILLS,
            latency_ms: state.config.simulated_latency_ms,
        },
    )
}
