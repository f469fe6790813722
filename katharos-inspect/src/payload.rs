//! Inference request and response bodies
//!
//! Request:
//! `{"api_key": ..., "inputs": {"image": {"type": "base64", "value": ...}}}`
//!
//! Response: the workflow's first output carries a `boolean` field, `1`
//! (or `true`) when residue was found. Anything else in that field, or no
//! field at all, means clean.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use katharos_core::inspect::InspectionResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::camera::Frame;
use crate::error::InspectError;

#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub api_key: &'a str,
    pub inputs: Inputs,
}

#[derive(Debug, Serialize)]
pub struct Inputs {
    pub image: ImageInput,
}

#[derive(Debug, Serialize)]
pub struct ImageInput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
}

impl<'a> InferenceRequest<'a> {
    pub fn new(api_key: &'a str, frame: &Frame) -> Self {
        Self {
            api_key,
            inputs: Inputs {
                image: ImageInput {
                    kind: "base64",
                    value: STANDARD.encode(frame.as_bytes()),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    #[serde(default)]
    pub outputs: Vec<WorkflowOutput>,
}

#[derive(Debug, Deserialize)]
pub struct WorkflowOutput {
    #[serde(default)]
    pub boolean: Option<Value>,
}

impl WorkflowOutput {
    pub fn is_dirty(&self) -> bool {
        match &self.boolean {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64() == Some(1.0),
            _ => false,
        }
    }
}

/// Decode a 200 response body into a verdict
pub fn parse_verdict(body: &[u8]) -> Result<InspectionResult, InspectError> {
    let response: InferenceResponse = serde_json::from_slice(body)?;
    let first = response.outputs.first().ok_or(InspectError::MissingOutputs)?;
    Ok(InspectionResult {
        is_dirty: first.is_dirty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let frame = Frame(vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let body = serde_json::to_value(InferenceRequest::new("secret", &frame)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "api_key": "secret",
                "inputs": {"image": {"type": "base64", "value": "/9j/2Q=="}}
            })
        );
    }

    #[test]
    fn test_verdicts() {
        let dirty = |body: &str| parse_verdict(body.as_bytes()).unwrap().is_dirty;

        assert!(dirty(r#"{"outputs": [{"boolean": 1}]}"#));
        assert!(dirty(r#"{"outputs": [{"boolean": true}]}"#));
        assert!(!dirty(r#"{"outputs": [{"boolean": 0}]}"#));
        assert!(!dirty(r#"{"outputs": [{"boolean": false}]}"#));
        assert!(!dirty(r#"{"outputs": [{"boolean": 2}]}"#));
        assert!(!dirty(r#"{"outputs": [{"boolean": "1"}]}"#));
        assert!(!dirty(r#"{"outputs": [{}]}"#));
        // Only the first output counts
        assert!(!dirty(r#"{"outputs": [{"boolean": 0}, {"boolean": 1}]}"#));
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(parse_verdict(b"<html>"), Err(InspectError::Decode(_))));
        assert!(matches!(parse_verdict(b"{}"), Err(InspectError::MissingOutputs)));
        assert!(matches!(
            parse_verdict(br#"{"outputs": []}"#),
            Err(InspectError::MissingOutputs)
        ));
        assert!(matches!(
            parse_verdict(br#"{"outputs": "nope"}"#),
            Err(InspectError::Decode(_))
        ));
    }
}
