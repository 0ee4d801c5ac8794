//! WebAssembly bindings for the Hive rules engine.
//!
//! This module exposes the engine to JavaScript through wasm-bindgen.
//! Coordinates go in as `(q, r)` pairs and results come back as JSON.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Board;
#[cfg(feature = "wasm")]
use crate::hex::HexCoord;
#[cfg(feature = "wasm")]
use crate::piece::{Colour, Piece};
#[cfg(feature = "wasm")]
use std::collections::HashSet;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Sorted JSON array of coordinates
#[cfg(feature = "wasm")]
fn coords_json(cells: HashSet<HexCoord>) -> String {
    let mut cells: Vec<HexCoord> = cells.into_iter().collect();
    cells.sort();
    serde_json::to_string(&cells).unwrap_or_else(|_| "[]".to_string())
}

/// WASM-exposed board wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmHive {
    board: Board,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmHive {
    /// Create an empty board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmHive {
        WasmHive {
            board: Board::new(),
        }
    }

    /// Load a board snapshot from JSON
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmHive, JsValue> {
        let board = Board::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid board: {}", e)))?;
        Ok(WasmHive { board })
    }

    /// Get the board snapshot as JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        self.board.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Place a piece given as a two-letter code such as `"wB"`
    pub fn insert(&mut self, q: i32, r: i32, code: &str) -> Result<(), JsValue> {
        let piece = Piece::from_code(code)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown piece code: {}", code)))?;
        self.board.insert(HexCoord::new(q, r), piece);
        Ok(())
    }

    /// Remove the piece at a cell, returning its code if there was one
    pub fn remove(&mut self, q: i32, r: i32) -> Option<String> {
        self.board.remove(HexCoord::new(q, r)).map(|p| p.code())
    }

    /// Pieces that can move without splitting the hive, as JSON
    #[wasm_bindgen(js_name = moveSources)]
    pub fn move_sources(&self) -> String {
        coords_json(self.board.move_sources())
    }

    /// Placement cells for a colour (`"w"` or `"b"`), as JSON
    pub fn places(&self, colour: &str) -> Result<String, JsValue> {
        let colour = colour
            .chars()
            .next()
            .and_then(Colour::from_code)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown colour: {}", colour)))?;
        Ok(coords_json(self.board.places(colour)))
    }

    /// Destinations for the piece at a cell, as JSON
    pub fn moves(&self, q: i32, r: i32) -> String {
        coords_json(self.board.moves_from(HexCoord::new(q, r)))
    }

    /// The perimeter graph, as JSON
    pub fn perimeter(&self) -> String {
        let nodes = self.board.crawl_boundary().to_json_friendly();
        serde_json::to_string(&nodes).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmHive {
    fn default() -> Self {
        Self::new()
    }
}
