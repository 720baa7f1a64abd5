use std::{ops::RangeInclusive, sync::Arc};

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::{error::AppResult, models::RecommendationResponse};

use super::RecommendationClient;

/// Range enforced by the page; the service itself accepts any integer
pub const USER_ID_RANGE: RangeInclusive<i64> = 1..=10_000;

#[derive(Clone)]
pub struct PageState {
    pub client: Arc<RecommendationClient>,
    pub default_backend_url: String,
}

impl PageState {
    pub fn new(client: RecommendationClient, default_backend_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            default_backend_url: default_backend_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    pub backend_url: String,
    pub user_id: String,
}

#[derive(Template)]
#[template(path = "demo.html")]
pub struct DemoTemplate {
    pub backend_url: String,
    pub user_id: String,
    pub min_user_id: i64,
    pub max_user_id: i64,
    pub result: Option<RecommendationResponse>,
    pub error: Option<String>,
}

impl DemoTemplate {
    fn new(backend_url: String, user_id: String) -> Self {
        Self {
            backend_url,
            user_id,
            min_user_id: *USER_ID_RANGE.start(),
            max_user_id: *USER_ID_RANGE.end(),
            result: None,
            error: None,
        }
    }

    fn render_html(&self) -> AppResult<Html<String>> {
        Ok(Html(self.render()?))
    }
}

/// Creates the demo page router
pub fn create_page_router(state: PageState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<PageState>) -> AppResult<Html<String>> {
    DemoTemplate::new(state.default_backend_url.clone(), "1".to_string()).render_html()
}

/// Handles one button press: at most one backend call, rendered inline
async fn submit(
    State(state): State<PageState>,
    Form(form): Form<RecommendForm>,
) -> AppResult<Html<String>> {
    let mut page = DemoTemplate::new(form.backend_url.trim().to_string(), form.user_id.clone());

    match parse_user_id(&form.user_id) {
        Ok(user_id) => match state.client.recommend(&page.backend_url, user_id).await {
            Ok(response) => page.result = Some(response),
            Err(e) => page.error = Some(e.to_string()),
        },
        Err(message) => page.error = Some(message),
    }

    page.render_html()
}

pub fn parse_user_id(raw: &str) -> Result<i64, String> {
    let user_id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("User id must be a whole number, got {:?}", raw.trim()))?;

    if !USER_ID_RANGE.contains(&user_id) {
        return Err(format!(
            "User id must be between {} and {}",
            USER_ID_RANGE.start(),
            USER_ID_RANGE.end()
        ));
    }

    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_bounds() {
        assert_eq!(parse_user_id("1"), Ok(1));
        assert_eq!(parse_user_id(" 10000 "), Ok(10_000));
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("10001").is_err());
        assert!(parse_user_id("-4").is_err());
    }

    #[test]
    fn test_parse_user_id_rejects_non_numbers() {
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("4.5").is_err());
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn test_template_renders_numbered_recommendations() {
        let mut page = DemoTemplate::new("backend".to_string(), "42".to_string());
        page.result = Some(RecommendationResponse {
            user_id: 42,
            recommendations: vec!["item_42_A".to_string(), "item_42_B".to_string()],
            latency_ms: 0.12,
        });

        let html = page.render().unwrap();
        assert!(html.contains("1. item_42_A"));
        assert!(html.contains("2. item_42_B"));
        assert!(html.contains("Latency: 0.12 ms"));
    }
}
