use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use axum_htmx::{HxRequest, HX_REDIRECT, HX_TRIGGER};
use common::{
    error::AppError,
    utils::template_engine::{ProvidesTemplateEngine, Value},
};
use minijinja::{context, value::ValueKind};
use serde::Serialize;
use serde_json::json;
use tracing::error;

pub trait ProvidesSiteName {
    fn site_name(&self) -> &str;
}

#[derive(Clone, Debug)]
pub enum TemplateKind {
    Full(String),
    Partial(String, String),
    Error(StatusCode),
    Redirect(String),
}

/// Handler output rendered by [`with_template_response`].
#[derive(Clone)]
pub struct TemplateResponse {
    template_kind: TemplateKind,
    context: Value,
}

impl TemplateResponse {
    pub fn new_template<T: Serialize>(name: impl Into<String>, context: T) -> Self {
        Self {
            template_kind: TemplateKind::Full(name.into()),
            context: Value::from_serialize(&context),
        }
    }

    pub fn new_partial<T: Serialize>(
        template: impl Into<String>,
        block: impl Into<String>,
        context: T,
    ) -> Self {
        Self {
            template_kind: TemplateKind::Partial(template.into(), block.into()),
            context: Value::from_serialize(&context),
        }
    }

    pub fn error(status: StatusCode, title: &str, description: &str) -> Self {
        let ctx = context! {
            status_code => status.as_u16(),
            title => title,
            description => description
        };
        Self {
            template_kind: TemplateKind::Error(status),
            context: ctx,
        }
    }

    pub fn not_found() -> Self {
        Self::error(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            "The page you're looking for doesn't exist.",
        )
    }

    pub fn server_error() -> Self {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Something went wrong on our end.",
        )
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Self {
            template_kind: TemplateKind::Redirect(path.into()),
            context: Value::from_serialize(()),
        }
    }
}

impl IntoResponse for TemplateResponse {
    fn into_response(self) -> Response {
        Extension(self).into_response()
    }
}

#[derive(Serialize)]
struct ContextWrapper<'a> {
    site_name: &'a str,
    #[serde(flatten)]
    context: HashMap<String, Value>,
}

// Headers to forward from the handler response
const HTMX_HEADERS_TO_FORWARD: &[&str] = &["HX-Push", "HX-Trigger", "HX-Redirect"];

pub async fn with_template_response<S>(
    State(state): State<S>,
    HxRequest(is_htmx): HxRequest,
    req: Request,
    next: Next,
) -> Response
where
    S: ProvidesTemplateEngine + ProvidesSiteName + Clone + Send + Sync + 'static,
{
    let response = next.run(req).await;

    let Some(template_response) = response.extensions().get::<TemplateResponse>().cloned() else {
        return response;
    };

    let template_engine = state.template_engine();

    let context_map = match context_to_map(&template_response.context) {
        Ok(map) => map,
        Err(kind) => {
            error!(
                "Template context must be a map or unit, got kind={:?} for template_kind={:?}",
                kind, template_response.template_kind
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response();
        }
    };

    let context = Value::from_serialize(&ContextWrapper {
        site_name: state.site_name(),
        context: context_map,
    });

    match &template_response.template_kind {
        TemplateKind::Full(name) => match template_engine.render(name, &context) {
            Ok(html) => {
                let mut final_response = Html(html).into_response();
                forward_headers(response.headers(), final_response.headers_mut());
                final_response
            }
            Err(e) => {
                error!("Failed to render template '{}': {:?}", name, e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
            }
        },
        TemplateKind::Partial(template, block) => {
            match template_engine.render_block(template, block, &context) {
                Ok(html) => {
                    let mut final_response = Html(html).into_response();
                    forward_headers(response.headers(), final_response.headers_mut());
                    final_response
                }
                Err(e) => {
                    error!("Failed to render block '{}/{}': {:?}", template, block, e);
                    (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
                }
            }
        }
        TemplateKind::Error(status) => {
            if is_htmx {
                // HTMX request: 204 + HX-Trigger so the page shows a toast
                (StatusCode::NO_CONTENT, [(HX_TRIGGER, toast_trigger(&template_response.context))], "")
                    .into_response()
            } else {
                match template_engine.render("errors/error.html", &context) {
                    Ok(html) => (*status, Html(html)).into_response(),
                    Err(e) => {
                        error!("Critical: Failed to render 'errors/error.html': {:?}", e);
                        (*status, Html(fallback_error())).into_response()
                    }
                }
            }
        }
        TemplateKind::Redirect(path) => {
            if is_htmx {
                (StatusCode::OK, [(HX_REDIRECT, path.as_str())], "").into_response()
            } else {
                Redirect::to(path).into_response()
            }
        }
    }
}

fn context_to_map(value: &Value) -> Result<HashMap<String, Value>, ValueKind> {
    match value.kind() {
        ValueKind::Map => {
            let mut map = HashMap::new();
            if let Ok(keys) = value.try_iter() {
                for key in keys {
                    if let Ok(val) = value.get_item(&key) {
                        map.insert(key.to_string(), val);
                    }
                }
            }
            Ok(map)
        }
        ValueKind::None | ValueKind::Undefined => Ok(HashMap::new()),
        other => Err(other),
    }
}

fn forward_headers(from: &HeaderMap, to: &mut HeaderMap) {
    for &header_name in HTMX_HEADERS_TO_FORWARD {
        if let Ok(name) = HeaderName::from_bytes(header_name.as_bytes()) {
            if let Some(value) = from.get(&name) {
                to.insert(name.clone(), value.clone());
            }
        }
    }
}

fn toast_trigger(context: &Value) -> String {
    let attr = |name: &str, fallback: &str| {
        context
            .get_attr(name)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_else(|| fallback.to_string())
    };
    let payload = json!({
        "toast": {
            "title": attr("title", "Error"),
            "description": attr("description", "An error occurred."),
            "type": "error"
        }
    });
    serde_json::to_string(&payload).unwrap_or_else(|e| {
        error!("Failed to serialize HX-Trigger payload: {}", e);
        r#"{"toast":{"title":"Error","description":"An unexpected error occurred.","type":"error"}}"#
            .to_string()
    })
}

/// Handler failure rendered as a themed error page.
#[derive(Debug)]
pub struct HtmlError(AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::InvalidUrl { .. } => TemplateResponse::bad_request(
                "That doesn't look like a product link. Paste a full URL such as https://www.apple.com/macbook-pro.",
            )
            .into_response(),
            err => {
                error!("Internal error: {:?}", err);
                TemplateResponse::server_error().into_response()
            }
        }
    }
}

fn fallback_error() -> String {
    r#"
    <html>
        <body>
            <div class="container">
                <h1>Error</h1>
                <p>Sorry, something went wrong displaying this page.</p>
            </div>
        </body>
    </html>
    "#
    .to_string()
}
