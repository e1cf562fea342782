use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS,
    ORIGIN,
};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::Config;

pub const AMP_SOURCE_ORIGIN_HEADER: &str = "amp-access-control-allow-source-origin";

#[derive(Clone)]
pub struct CorsSettings {
    allowed_origins: Vec<String>,
    amp_source_origin: String,
}

impl CorsSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_origins: config
                .origin_urls
                .split(',')
                .map(|origin| origin.trim().to_owned())
                .collect(),
            amp_source_origin: config.amp_source_origin.clone(),
        }
    }

    /// Echo the request origin only on an exact allowlist match, otherwise
    /// the allow-origin header is sent with an empty value.
    pub fn echoed_origin(&self, origin: &str) -> String {
        if self.allowed_origins.iter().any(|allowed| allowed == origin) {
            origin.to_owned()
        } else {
            String::new()
        }
    }
}

/// Attaches the CORS headers to every response, success and error alike.
/// Requests from unlisted origins are still served; they just get no usable
/// allow-origin echo.
pub async fn attach_cors_headers<B>(
    State(settings): State<Arc<CorsSettings>>,
    request: Request<B>,
    next: Next<B>,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned();
    let allowed_origin = settings.echoed_origin(&origin);

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(&allowed_origin).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("AMP-Access-Control-Allow-Source-Origin"),
    );
    headers.insert(
        AMP_SOURCE_ORIGIN_HEADER,
        HeaderValue::from_str(&settings.amp_source_origin)
            .unwrap_or_else(|_| HeaderValue::from_static("")),
    );

    response
}
