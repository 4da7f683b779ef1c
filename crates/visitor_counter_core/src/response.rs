use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS_HEADER: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS_HEADER: &str = "Access-Control-Allow-Headers";
pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "*";

/// Response envelope understood by API Gateway proxy integrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(Value::as_str)
    }
}

pub fn cors_headers() -> Value {
    json!({
        ALLOW_ORIGIN_HEADER: ALLOWED_ORIGIN,
        ALLOW_METHODS_HEADER: ALLOWED_METHODS,
        ALLOW_HEADERS_HEADER: ALLOWED_HEADERS,
    })
}

pub fn counter_response(count: u64) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: SUCCESS_STATUS_CODE,
        headers: cors_headers(),
        body: count.to_string(),
    }
}
