//! Request and response records for the enhancement endpoints.
//!
//! # Design
//! Each endpoint gets an explicit typed record instead of the untyped object
//! literals the web client uses, so request shapes are checked at compile
//! time. The four `*Payload` newtypes are deliberately opaque: their interior
//! shape belongs to the server and is handed whole to the presentation seam,
//! never inspected by the core. Tagging them per operation keeps a system-38
//! payload from ever reaching the system-40 renderer. The mock-server crate
//! defines its response shapes independently; integration tests catch drift.

use serde::{Deserialize, Serialize};

/// Response of the chronobiological phase endpoint (system 37).
///
/// Only `filter` is meaningful to the client; servers may attach extra
/// fields (tint strength, timestamps) and they are ignored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseFilter {
    pub filter: String,
}

/// Request payload for the handwriting-trace endpoint (system 38).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceInput {
    pub characters: String,
}

/// Request payload for the confidence-flash endpoint (system 39).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackInput {
    pub correct: bool,
}

/// Opaque handwriting-trace payload, passed whole to the animation renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TracePayload(pub serde_json::Value);

/// Opaque confidence-flash payload, passed whole to the feedback renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FlashPayload(pub serde_json::Value);

/// Opaque delta-wave payload, passed whole to the wave-effect starter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WavePayload(pub serde_json::Value);

/// Opaque phantom-touch payload, passed whole to the touch-setup routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TouchPayload(pub serde_json::Value);
