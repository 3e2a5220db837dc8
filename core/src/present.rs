//! Presentation seam between decoded payloads and visible page effects.
//!
//! # Design
//! The web client mutates global DOM state and calls rendering helpers whose
//! bodies live elsewhere. Here the DOM mutation becomes an explicit
//! `PageState` value owned by the façade and rendered by a pure function, and
//! the rendering helpers become a `Presenter` trait the host implements.
//! The renderers are external collaborators: the core hands each of them the
//! decoded payload whole and specifies nothing about what they draw.

use crate::motion::MotionFlash;
use crate::types::{FlashPayload, TouchPayload, TracePayload, WavePayload};

/// Visible page state owned by the façade.
///
/// `body_class` stands in for `document.body.className`; the host applies it
/// to the real page after any façade call that may have changed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub body_class: String,
}

/// Render the body class for a chronobiological phase.
///
/// `{"filter":"alpha"}` yields `system-37-alpha`.
pub fn phase_body_class(phase: &crate::types::PhaseFilter) -> String {
    format!("system-37-{}", phase.filter)
}

/// Host-implemented rendering routines.
///
/// One method per enhancement effect. Each is invoked at most once per façade
/// operation, only after a fully successful round trip, and receives the
/// decoded payload exactly as the server sent it.
pub trait Presenter {
    /// Animate the handwriting trace described by the payload (system 38).
    fn render_handwriting_trace(&mut self, payload: TracePayload);

    /// Flash the peripheral feedback symbol described by the payload (system 39).
    fn show_confidence_flash(&mut self, payload: FlashPayload);

    /// Start the delta-wave pulse effect described by the payload (system 40).
    fn start_delta_wave(&mut self, payload: WavePayload);

    /// Install the phantom-touch shadow behavior described by the payload (system 41).
    fn setup_phantom_touch(&mut self, payload: TouchPayload);

    /// Flash the motion-synchronized cue emitted by the rhythm encoder (system 42).
    fn show_motion_flash(&mut self, flash: MotionFlash);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhaseFilter;

    #[test]
    fn phase_body_class_prefixes_filter() {
        let phase = PhaseFilter {
            filter: "alpha".to_string(),
        };
        assert_eq!(phase_body_class(&phase), "system-37-alpha");
    }

    #[test]
    fn page_state_defaults_to_empty_class() {
        assert_eq!(PageState::default().body_class, "");
    }
}
