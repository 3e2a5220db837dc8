//! Synchronous API client core for the memory-enhancement systems.
//!
//! # Overview
//! Client side of the spaced-repetition app's enhancement endpoints
//! (`/api/system37` … `/api/system41`) plus the network-free device-motion
//! initializer. Requests are built and responses parsed without touching the
//! network (host-does-IO pattern); `MemorySystems` layers a one-call façade
//! on top for hosts that plug in a `Transport` and a `Presenter`.
//!
//! # Design
//! - `EnhancementClient` is stateless — it holds only `base_url`. Each
//!   endpoint is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Request and response shapes are typed records per endpoint; the four
//!   renderer payloads stay opaque and are passed whole to the presentation
//!   seam.
//! - Rendering routines and the device-motion capability are external
//!   collaborators behind the `Presenter` and `MotionHost` traits.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod facade;
pub mod http;
pub mod motion;
pub mod present;
pub mod types;

pub use client::EnhancementClient;
pub use error::ApiError;
pub use facade::{MemorySystems, Transport};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use motion::{MotionFlash, MotionHost, MotionSample, RhythmEncoder};
pub use present::{phase_body_class, PageState, Presenter};
pub use types::{
    FeedbackInput, FlashPayload, PhaseFilter, TouchPayload, TraceInput, TracePayload, WavePayload,
};
