//! API Gateway proxy integration (REST `httpMethod` and HTTP API v2
//! `requestContext.http.method` shapes).

use crate::adapters::http::{handle, HttpResponse};
use crate::core::categorizer::Categorizer;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .map(|http| http.method.as_str())
            })
            .unwrap_or("POST")
    }

    /// Decoded body; `Err` when a base64 body does not decode to UTF-8 text.
    pub fn decoded_body(&self) -> Result<Option<String>, String> {
        match (&self.body, self.is_base64_encoded) {
            (None, _) => Ok(None),
            (Some(body), false) => Ok(Some(body.clone())),
            (Some(body), true) => {
                let bytes = STANDARD.decode(body).map_err(|e| e.to_string())?;
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|e| e.to_string())
            }
        }
    }
}

impl From<HttpResponse> for GatewayResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response.headers.into_iter().collect(),
            body: response.body,
            is_base64_encoded: false,
        }
    }
}

pub async fn handle_event(categorizer: &Categorizer, event: &GatewayEvent) -> GatewayResponse {
    let method = event.method();
    let response = match event.decoded_body() {
        Ok(body) => handle(categorizer, method, body.as_deref()).await,
        Err(e) if method.eq_ignore_ascii_case("POST") => {
            tracing::debug!("Undecodable base64 body: {}", e);
            HttpResponse::error(400, "invalid JSON body")
        }
        Err(_) => handle(categorizer, method, None).await,
    };
    response.into()
}
