//! WebAssembly bindings for Chroma Life.
//!
//! Provides a thin wrapper around `Session` for browser front ends. The
//! page owns rendering, pointer input and the animation loop; it calls
//! `tick` from `requestAnimationFrame` and reads cells back for drawing.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    compute::{Coord, GridStats},
    schema::{Rgb, SessionConfig},
    session::{Session, TickOutcome},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn parse_color(color: Option<String>) -> Result<Option<Rgb>, JsValue> {
    color
        .map(|hex| Rgb::from_hex(&hex))
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WebAssembly wrapper for a play session.
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create new session from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing SessionConfig
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSession, JsValue> {
        let config = SessionConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
        let session = Session::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSession { session })
    }

    /// Advance if running, not stable, and the tick interval has elapsed.
    ///
    /// Returns true when a generation was computed.
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        matches!(
            self.session.tick(now_ms.max(0.0) as u64),
            TickOutcome::Advanced(_)
        )
    }

    /// Advance one generation regardless of pause/stability.
    #[wasm_bindgen]
    pub fn step(&mut self) -> Result<JsValue, JsValue> {
        let report = self.session.advance();
        to_js(&report)
    }

    /// Stamp a random catalog pattern anchored at the clicked cell.
    #[wasm_bindgen(js_name = placePattern)]
    pub fn place_pattern(&mut self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let summary = self
            .session
            .place_random_pattern(x as i64, y as i64)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&summary)
    }

    /// Stamp a named pattern; `color` is an optional `#rrggbb` string.
    #[wasm_bindgen(js_name = placeNamedPattern)]
    pub fn place_named_pattern(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        color: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let color = parse_color(color)?;
        let summary = self
            .session
            .place_pattern(name, x as i64, y as i64, color)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&summary)
    }

    /// Place free-drawn cells given as interleaved `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = placeCustom)]
    pub fn place_custom(&mut self, coords: Vec<i32>, color: Option<String>) -> Result<JsValue, JsValue> {
        let color = parse_color(color)?;
        let coords = Coord::from_interleaved(&coords).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let summary = self
            .session
            .place_custom(&coords, color)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&summary)
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Switch to new dimensions (no-op when unchanged).
    #[wasm_bindgen]
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.session.resize(rows, cols);
    }

    /// Session counters as a JS object.
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.status())
    }

    /// Grid statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        to_js(&GridStats::from_grid(self.session.grid()))
    }

    /// Row-major RGBA bytes; dead cells are fully transparent.
    #[wasm_bindgen(js_name = getPixels)]
    pub fn get_pixels(&self) -> Vec<u8> {
        self.session
            .grid()
            .cells()
            .iter()
            .flat_map(|c| {
                if c.alive {
                    [c.color.r, c.color.g, c.color.b, 255]
                } else {
                    [0, 0, 0, 0]
                }
            })
            .collect()
    }

    #[wasm_bindgen(js_name = getRows)]
    pub fn get_rows(&self) -> usize {
        self.session.grid().rows()
    }

    #[wasm_bindgen(js_name = getCols)]
    pub fn get_cols(&self) -> usize {
        self.session.grid().cols()
    }

    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.session.generation()
    }
}

