//! WASM bindings for dispatch-core
//!
//! Provides a JavaScript-friendly API over the dispatcher.

use wasm_bindgen::prelude::*;

use crate::{Dispatcher, Report};

/// WASM-friendly wrapper around Dispatcher
#[wasm_bindgen]
pub struct WasmDispatcher {
    inner: Dispatcher,
}

#[wasm_bindgen]
impl WasmDispatcher {
    /// Create a dispatcher with empty queue, stack and history
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmDispatcher {
        WasmDispatcher { inner: Dispatcher::new() }
    }

    /// Enqueue initial piece labels. Returns how many fit.
    pub fn seed(&mut self, labels: Vec<String>) -> usize {
        self.inner.seed(labels)
    }

    /// Current contents as `{ queue: [...], stack: [...], history_len }`
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.snapshot_view())?)
    }

    /// Number of undo checkpoints held
    #[wasm_bindgen(js_name = historyLen)]
    pub fn history_len(&self) -> usize {
        self.inner.history().len()
    }

    pub fn play(&mut self) -> Result<JsValue, JsValue> {
        report_value(&self.inner.play())
    }

    pub fn reserve(&mut self) -> Result<JsValue, JsValue> {
        report_value(&self.inner.reserve())
    }

    #[wasm_bindgen(js_name = useReserved)]
    pub fn use_reserved(&mut self) -> Result<JsValue, JsValue> {
        report_value(&self.inner.use_reserved())
    }

    pub fn swap(&mut self) -> Result<JsValue, JsValue> {
        report_value(&self.inner.swap())
    }

    pub fn invert(&mut self) -> Result<JsValue, JsValue> {
        report_value(&self.inner.invert())
    }

    /// Undo the last transformation. Resolves to `{ Ok: {...} }` or
    /// `{ Err: "history_empty" }`.
    pub fn undo(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.undo())?)
    }
}

impl Default for WasmDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn report_value(report: &Report) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(report)?)
}
