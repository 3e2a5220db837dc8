//! One-call façade over the enhancement endpoints.
//!
//! # Design
//! `MemorySystems` aggregates the otherwise-unrelated one-shot operations the
//! web client exposes: each method builds the request, hands it to the
//! `Transport`, parses the response, and dispatches exactly one presentation
//! routine. Nothing is returned to the caller beyond `Ok(())` — completion is
//! the only signal, matching the source's fire-and-forget promises. Failures
//! propagate unrecovered: no retries, no timeouts, no fallback rendering, and
//! the presentation routine is never invoked on a failed round trip.

use crate::client::EnhancementClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::motion::{MotionHost, MotionSample, RhythmEncoder};
use crate::present::{phase_body_class, PageState, Presenter};
use crate::types::{FeedbackInput, TraceInput};

/// Executes one HTTP round trip on behalf of the façade.
///
/// Implementations decide blocking behavior, connection reuse, and TLS; the
/// façade only requires that a request either yields a complete response or
/// an error. Non-2xx statuses must be returned as responses, not errors —
/// status interpretation belongs to the core.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Client façade for the memory-enhancement systems.
///
/// Created once at startup and kept for the page lifetime. Owns the page
/// state the phase filter mutates and the rhythm encoder fed by device
/// motion.
#[derive(Debug)]
pub struct MemorySystems<T, P> {
    client: EnhancementClient,
    transport: T,
    presenter: P,
    page: PageState,
    encoder: RhythmEncoder,
}

impl<T: Transport, P: Presenter> MemorySystems<T, P> {
    pub fn new(base_url: &str, transport: T, presenter: P) -> Self {
        Self {
            client: EnhancementClient::new(base_url),
            transport,
            presenter,
            page: PageState::default(),
            encoder: RhythmEncoder::new(),
        }
    }

    /// Current presentation state, for the host to apply to the page.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Tear down the façade, returning the transport and presenter.
    pub fn into_parts(self) -> (T, P) {
        (self.transport, self.presenter)
    }

    /// Fetch the chronobiological phase and set the page body class
    /// (system 37).
    pub fn init_phase_filter(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_phase_filter();
        let response = self.transport.execute(request)?;
        let phase = self.client.parse_phase_filter(response)?;
        self.page.body_class = phase_body_class(&phase);
        Ok(())
    }

    /// Send `text` for handwriting-trace rendering (system 38).
    pub fn init_handwriting_trace(&mut self, text: &str) -> Result<(), ApiError> {
        let input = TraceInput {
            characters: text.to_string(),
        };
        let request = self.client.build_handwriting_trace(&input)?;
        let response = self.transport.execute(request)?;
        let payload = self.client.parse_handwriting_trace(response)?;
        self.presenter.render_handwriting_trace(payload);
        Ok(())
    }

    /// Report an answer outcome and flash the returned feedback symbol
    /// (system 39).
    pub fn trigger_confidence_flash(&mut self, correct: bool) -> Result<(), ApiError> {
        let input = FeedbackInput { correct };
        let request = self.client.build_confidence_flash(&input)?;
        let response = self.transport.execute(request)?;
        let payload = self.client.parse_confidence_flash(response)?;
        self.presenter.show_confidence_flash(payload);
        Ok(())
    }

    /// Fetch delta-wave parameters and start the pulse effect (system 40).
    pub fn init_delta_wave(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_delta_wave();
        let response = self.transport.execute(request)?;
        let payload = self.client.parse_delta_wave(response)?;
        self.presenter.start_delta_wave(payload);
        Ok(())
    }

    /// Fetch phantom-touch parameters and install the shadow behavior
    /// (system 41).
    pub fn init_phantom_touch(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_phantom_touch();
        let response = self.transport.execute(request)?;
        let payload = self.client.parse_phantom_touch(response)?;
        self.presenter.setup_phantom_touch(payload);
        Ok(())
    }

    /// Subscribe to device motion if the platform supports it (system 42).
    ///
    /// No network call. Returns `None` without registering anything when the
    /// capability is absent; otherwise registers exactly one listener and
    /// returns the host's disposable handle. The host delivers samples to
    /// [`handle_device_motion`](Self::handle_device_motion) until the handle
    /// is released.
    pub fn init_motion_encoding<H: MotionHost>(&mut self, host: &mut H) -> Option<H::Handle> {
        if !host.motion_available() {
            return None;
        }
        Some(host.register_motion_listener())
    }

    /// Page-ready hook: runs the phase filter and the motion initializer,
    /// back to back, and nothing else.
    ///
    /// A phase-filter failure does not suppress the motion initializer, and
    /// no ordering holds between their effects. Both outcomes are returned
    /// unrecovered for the host to surface however it likes.
    pub fn on_ready<H: MotionHost>(
        &mut self,
        host: &mut H,
    ) -> (Result<(), ApiError>, Option<H::Handle>) {
        let phase = self.init_phase_filter();
        let handle = self.init_motion_encoding(host);
        (phase, handle)
    }

    /// Deliver one device-motion sample taken at `now_ms`.
    pub fn handle_device_motion(&mut self, now_ms: f64, sample: MotionSample) {
        if let Some(flash) = self.encoder.observe(now_ms, &sample) {
            self.presenter.show_motion_flash(flash);
        }
    }
}
