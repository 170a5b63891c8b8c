//! # Response Formatting
//!
//! Uniform response envelope shared by every handler.

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Headers sent with every JSON response
pub const JSON_HEADERS: [(&str, &str); 5] = [
    ("content-type", "application/json"),
    ("access-control-allow-headers", "*"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "*"),
    ("accepts", "*/*"),
];

/// Status code, headers and body of a handler result
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: String,
}

impl ApiResponse {
    /// JSON response with the standard permissive headers
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: JSON_HEADERS.to_vec(),
            body: body.to_string(),
        }
    }

    /// 200 with a JSON body
    pub fn ok(body: Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    /// 201 with a JSON body
    pub fn created(body: Value) -> Self {
        Self::json(StatusCode::CREATED, body)
    }

    /// 204 with no headers and an empty body
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(&'static str, &'static str)] {
        &self.headers
    }

    /// Header value by (lowercase) name
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body parsed back as JSON; `None` for an empty or non-JSON body
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_headers() {
        let response = ApiResponse::ok(json!({"id": "m1"}));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(response.header("access-control-allow-methods"), Some("*"));
        assert_eq!(response.header("access-control-allow-headers"), Some("*"));
        assert_eq!(response.json_body().unwrap()["id"], "m1");
    }

    #[test]
    fn test_no_content_is_bare() {
        let response = ApiResponse::no_content();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
        assert!(response.json_body().is_none());
    }

    #[test]
    fn test_into_axum_response() {
        let response = ApiResponse::created(json!({"id": "m1"})).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["accepts"], "*/*");
    }
}
