mod handlers;

use axum::{extract::FromRef, routing::get, Router};
use handlers::{search_page, search_results, submit_search};

use crate::html_state::HtmlState;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    Router::new()
        .route("/search", get(search_page).post(submit_search))
        .route("/search/results", get(search_results))
}
