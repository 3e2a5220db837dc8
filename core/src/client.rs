//! Stateless HTTP request builder and response parser for the enhancement API.
//!
//! # Design
//! `EnhancementClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The host executes the actual HTTP round trip in between, keeping the core
//! deterministic and free of I/O dependencies. `MemorySystems` wires these
//! pairs to a transport and a presenter for callers that want the one-call
//! façade surface.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    FeedbackInput, FlashPayload, PhaseFilter, TouchPayload, TraceInput, TracePayload, WavePayload,
};

/// Synchronous, stateless client for the enhancement API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The host is responsible for executing the HTTP
/// round trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct EnhancementClient {
    base_url: String,
}

impl EnhancementClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET the current chronobiological phase (system 37).
    pub fn build_phase_filter(&self) -> HttpRequest {
        self.get("/api/system37")
    }

    /// POST the characters to trace as a handwriting animation (system 38).
    pub fn build_handwriting_trace(&self, input: &TraceInput) -> Result<HttpRequest, ApiError> {
        self.post_json("/api/system38", input)
    }

    /// POST the answer outcome driving the peripheral feedback flash (system 39).
    pub fn build_confidence_flash(&self, input: &FeedbackInput) -> Result<HttpRequest, ApiError> {
        self.post_json("/api/system39", input)
    }

    /// GET the delta-wave consolidation parameters (system 40).
    pub fn build_delta_wave(&self) -> HttpRequest {
        self.get("/api/system40")
    }

    /// GET the phantom-touch shadow parameters (system 41).
    pub fn build_phantom_touch(&self) -> HttpRequest {
        self.get("/api/system41")
    }

    pub fn parse_phase_filter(&self, response: HttpResponse) -> Result<PhaseFilter, ApiError> {
        parse_json(response)
    }

    pub fn parse_handwriting_trace(&self, response: HttpResponse) -> Result<TracePayload, ApiError> {
        parse_json(response)
    }

    pub fn parse_confidence_flash(&self, response: HttpResponse) -> Result<FlashPayload, ApiError> {
        parse_json(response)
    }

    pub fn parse_delta_wave(&self, response: HttpResponse) -> Result<WavePayload, ApiError> {
        parse_json(response)
    }

    pub fn parse_phantom_touch(&self, response: HttpResponse) -> Result<TouchPayload, ApiError> {
        parse_json(response)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<T: serde::Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Decode a 200 response body, mapping any other status to `HttpError`.
///
/// The enhancement endpoints define no per-status semantics — anything other
/// than 200 is the single "request failed" class.
fn parse_json<T: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if response.status != 200 {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EnhancementClient {
        EnhancementClient::new("http://localhost:5000")
    }

    #[test]
    fn build_phase_filter_produces_bodyless_get() {
        let req = client().build_phase_filter();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/system37");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_handwriting_trace_produces_json_post() {
        let input = TraceInput {
            characters: "ABC".to_string(),
        };
        let req = client().build_handwriting_trace(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/system38");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"characters":"ABC"}"#));
    }

    #[test]
    fn build_confidence_flash_encodes_exact_body() {
        let req = client()
            .build_confidence_flash(&FeedbackInput { correct: true })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/system39");
        assert_eq!(req.body.as_deref(), Some(r#"{"correct":true}"#));
    }

    #[test]
    fn build_delta_wave_and_phantom_touch_are_bodyless_gets() {
        let wave = client().build_delta_wave();
        assert_eq!(wave.method, HttpMethod::Get);
        assert_eq!(wave.path, "http://localhost:5000/api/system40");
        assert!(wave.body.is_none());

        let touch = client().build_phantom_touch();
        assert_eq!(touch.method, HttpMethod::Get);
        assert_eq!(touch.path, "http://localhost:5000/api/system41");
        assert!(touch.body.is_none());
    }

    #[test]
    fn parse_phase_filter_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"filter":"alpha"}"#.to_string(),
        };
        let phase = client().parse_phase_filter(response).unwrap();
        assert_eq!(phase.filter, "alpha");
    }

    #[test]
    fn parse_phase_filter_non_200_is_http_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_phase_filter(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_handwriting_trace_preserves_payload_verbatim() {
        let body = r#"{"path":"M10,25 Q15,18 20,25","duration_ms":400}"#;
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        };
        let payload = client().parse_handwriting_trace(response).unwrap();
        let expected: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(payload.0, expected);
    }

    #[test]
    fn parse_delta_wave_bad_json_is_deserialization_error() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_delta_wave(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EnhancementClient::new("http://localhost:5000/");
        let req = client.build_phase_filter();
        assert_eq!(req.path, "http://localhost:5000/api/system37");
    }
}
