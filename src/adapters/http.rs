use crate::core::categorizer::Categorizer;
use crate::domain::model::CategorizationRequest;
use serde::Serialize;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];

/// Transport-neutral response; the Lambda and axum adapters translate it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl HttpResponse {
    fn with_cors(status: u16, body: String) -> Self {
        let headers = CORS_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn preflight() -> Self {
        Self::with_cors(200, "ok".to_string())
    }

    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => {
                let mut response = Self::with_cors(status, body);
                response
                    .headers
                    .push(("Content-Type".to_string(), "application/json".to_string()));
                response
            }
            Err(e) => {
                tracing::error!("❌ Failed to serialize response body: {}", e);
                Self::with_cors(500, String::new())
            }
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, &ErrorBody { error: message })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Single endpoint: `OPTIONS` preflight, `POST` categorization.
pub async fn handle(categorizer: &Categorizer, method: &str, body: Option<&str>) -> HttpResponse {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return HttpResponse::preflight();
    }
    if !method.eq_ignore_ascii_case("POST") {
        tracing::debug!("Rejecting {} request", method);
        return HttpResponse::error(405, "method not allowed");
    }

    let request: CategorizationRequest = match serde_json::from_str(body.unwrap_or_default()) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Invalid request body: {}", e);
            return HttpResponse::error(400, "invalid JSON body");
        }
    };

    match categorizer.categorize(&request).await {
        Ok(result) => {
            tracing::info!(
                item_name = request.item_name.as_deref().unwrap_or_default(),
                list_type = %request.list_type,
                category = result.category.as_deref().unwrap_or("null"),
                confidence = result.confidence,
                source = ?result.source,
                "categorized item"
            );
            HttpResponse::json(200, &result)
        }
        Err(e) => HttpResponse::error(e.status_code(), &e.user_friendly_message()),
    }
}
