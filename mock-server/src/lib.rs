//! Mock implementation of the memory-enhancement endpoints.
//!
//! Stands in for the real spaced-repetition server in integration tests.
//! Response bodies reproduce the constants the production renderers work
//! with: tint phases by time of day, simplified cursive stroke paths, the
//! feedback symbols and colors, and the delta-wave and phantom-touch
//! parameters.

use axum::{routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Deserialize)]
pub struct TraceInput {
    pub characters: String,
}

#[derive(Deserialize)]
pub struct FeedbackInput {
    pub correct: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Phase {
    pub filter: String,
    pub strength: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    pub path: String,
    pub duration_ms: u32,
    pub opacity: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flash {
    pub symbol: String,
    pub color: String,
    pub duration_ms: u32,
    pub opacity: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wave {
    pub pulse_hz: f64,
    pub max_pulses: u32,
    pub resonance_hz: f64,
    pub gain: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Touch {
    pub base_shadow: String,
    pub scale_min: f64,
    pub scale_max: f64,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/system37", get(phase_filter))
        .route("/api/system38", post(handwriting_trace))
        .route("/api/system39", post(confidence_flash))
        .route("/api/system40", get(delta_wave))
        .route("/api/system41", get(phantom_touch))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Tint phase for a given minute since local midnight.
///
/// Windows and strengths follow the production tint schedule: 6:00-9:00
/// bluish (+5), 12:00-16:00 yellowish (+3), 18:00-22:00 reddish (+7),
/// neutral otherwise.
pub fn phase_for_minute(minutes_since_midnight: u32) -> Phase {
    let (filter, strength) = match minutes_since_midnight {
        360..=540 => ("morning", 5),
        720..=960 => ("afternoon", 3),
        1080..=1320 => ("evening", 7),
        _ => ("neutral", 0),
    };
    Phase {
        filter: filter.to_string(),
        strength,
    }
}

/// SVG path tracing the first two characters of `characters` as simplified
/// cursive strokes, 20px per character.
pub fn trace_path(characters: &str) -> String {
    const CHAR_WIDTH: u32 = 20;
    let mut path = String::new();
    for (index, ch) in characters.chars().take(2).enumerate() {
        let x = index as u32 * CHAR_WIDTH + 10;
        let y = 20;
        let stroke = match ch.to_ascii_lowercase() {
            'a' => format!(
                "M{x},{y5} Q{x_5},{y_2} {x10},{y5} M{x3},{y2} L{x7},{y2} ",
                y5 = y + 5,
                x_5 = x + 5,
                y_2 = y - 2,
                x10 = x + 10,
                x3 = x + 3,
                y2 = y + 2,
                x7 = x + 7,
            ),
            'e' => format!(
                "M{x8},{y2} Q{x2},{y2} {x2},{y6} Q{x8},{y6} {x8},{y2} ",
                x8 = x + 8,
                y2 = y + 2,
                x2 = x + 2,
                y6 = y + 6,
            ),
            'i' => format!(
                "M{x5},{y8} L{x5},{y2} M{x5},{y} L{x5},{y} ",
                x5 = x + 5,
                y8 = y + 8,
                y2 = y + 2,
            ),
            'o' => format!(
                "M{x2},{y4} Q{x2},{y} {x8},{y} Q{x8},{y8} {x2},{y8} Q{x2},{y4} {x2},{y4} ",
                x2 = x + 2,
                y4 = y + 4,
                x8 = x + 8,
                y8 = y + 8,
            ),
            'u' => format!(
                "M{x2},{y2} Q{x2},{y8} {x8},{y8} Q{x8},{y2} {x8},{y2} ",
                x2 = x + 2,
                y2 = y + 2,
                y8 = y + 8,
                x8 = x + 8,
            ),
            // Generic cross-stroke for everything else.
            _ => format!(
                "M{x2},{y8} L{x8},{y2} M{x2},{y2} L{x8},{y8} ",
                x2 = x + 2,
                y8 = y + 8,
                x8 = x + 8,
                y2 = y + 2,
            ),
        };
        path.push_str(&stroke);
    }
    path
}

fn current_minute() -> u32 {
    // Seconds since the epoch folded into a local-ish day; the tests that
    // need determinism call phase_for_minute directly.
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ((secs % 86_400) / 60) as u32
}

async fn phase_filter() -> Json<Phase> {
    Json(phase_for_minute(current_minute()))
}

async fn handwriting_trace(Json(input): Json<TraceInput>) -> Json<Trace> {
    Json(Trace {
        path: trace_path(&input.characters),
        duration_ms: 400,
        opacity: 0.028,
    })
}

async fn confidence_flash(Json(input): Json<FeedbackInput>) -> Json<Flash> {
    let (symbol, color) = if input.correct {
        ("✓", "#4caf50")
    } else {
        ("→", "#2196f3")
    };
    Json(Flash {
        symbol: symbol.to_string(),
        color: color.to_string(),
        duration_ms: 11,
        opacity: 0.021,
    })
}

async fn delta_wave() -> Json<Wave> {
    Json(Wave {
        pulse_hz: 2.0,
        max_pulses: 8,
        resonance_hz: 7.83,
        gain: 0.004,
    })
}

async fn phantom_touch() -> Json<Touch> {
    Json(Touch {
        base_shadow: "2px 2px 3px".to_string(),
        scale_min: 0.5,
        scale_max: 2.0,
    })
}
