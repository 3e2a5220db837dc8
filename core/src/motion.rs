//! Device-motion capability gating and accelerometer rhythm encoding.
//!
//! # Design
//! The web client conditionally adds a `devicemotion` listener if the
//! platform exposes the capability, then syncs subliminal flashes to natural
//! hand tremor. Here the capability check and registration live behind the
//! `MotionHost` trait, registration returns the host's own disposable handle
//! so tests can tear down deterministically, and the tremor logic is a pure
//! `RhythmEncoder` fed one sample at a time.

/// One accelerometer sample, in m/s² per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionSample {
    /// Total acceleration magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A flash cue synchronized to detected tremor, positioned as viewport
/// fractions in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFlash {
    pub x_frac: f64,
    pub y_frac: f64,
}

/// Platform motion capability, as seen by the façade.
///
/// `register_motion_listener` is called at most once per initialization and
/// only after `motion_available` returns true. The host delivers subsequent
/// samples to `MemorySystems::handle_device_motion` until the returned handle
/// is dropped or otherwise released.
pub trait MotionHost {
    /// Disposable subscription handle owned by the host.
    type Handle;

    /// Whether the platform exposes device-motion events at all.
    fn motion_available(&self) -> bool;

    /// Register exactly one motion listener and return its handle.
    fn register_motion_listener(&mut self) -> Self::Handle;
}

/// Assumed natural hand-tremor frequency, Hz.
const TREMOR_HZ: f64 = 10.0;

/// Minimum interval between emitted flashes, ms.
const COOLDOWN_MS: f64 = 100.0;

/// Acceleration magnitude band treated as tremor rather than deliberate
/// movement or rest, m/s².
const TREMOR_BAND: (f64, f64) = (0.1, 2.0);

/// Fraction of the tremor period during which a flash lands in phase.
const PHASE_WINDOW: (f64, f64) = (0.2, 0.4);

/// Detects hand tremor in accelerometer samples and emits flash cues timed
/// to the tremor phase.
///
/// Stateful only for the flash cooldown; everything else is a pure function
/// of the sample and clock passed in.
#[derive(Debug, Clone, Default)]
pub struct RhythmEncoder {
    last_flash_ms: Option<f64>,
}

impl RhythmEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample taken at `now_ms`; returns a cue when the sample
    /// looks like tremor and the clock sits in the optimal phase window.
    pub fn observe(&mut self, now_ms: f64, sample: &MotionSample) -> Option<MotionFlash> {
        if let Some(last) = self.last_flash_ms {
            if now_ms - last < COOLDOWN_MS {
                return None;
            }
        }

        let magnitude = sample.magnitude();
        if magnitude <= TREMOR_BAND.0 || magnitude >= TREMOR_BAND.1 {
            return None;
        }

        // Flash only in the optimal phase of the assumed 10Hz tremor cycle.
        let period_ms = 1000.0 / TREMOR_HZ;
        let phase = (now_ms % period_ms) / period_ms;
        if phase < PHASE_WINDOW.0 || phase > PHASE_WINDOW.1 {
            return None;
        }

        self.last_flash_ms = Some(now_ms);
        Some(MotionFlash {
            x_frac: (0.3 + sample.x * 0.1).clamp(0.0, 1.0),
            y_frac: (0.3 + sample.y * 0.1).clamp(0.0, 1.0),
        })
    }
}
