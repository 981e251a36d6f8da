//! WASM bindings for the PDF page splitter
//!
//! Upload and selection state live in Rust (`pdfsplit-core`); this crate adds
//! the browser side:
//! - `fetch` calls to the splitter backend
//! - pdf.js thumbnails through `www/js/pdf-bridge.js`
//! - the page grid with one checkbox per page
//! - the download anchor for the extracted PDF
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { SplitterSession } from './pkg/pdfsplit_wasm.js';
//!
//! await init();
//!
//! const session = new SplitterSession(undefined);
//! session.mount(document.getElementById("pages"), document.getElementById("tick"));
//! fileInput.addEventListener("change", (e) => session.handleFileChange(e));
//! form.addEventListener("submit", async (e) => {
//!   e.preventDefault();
//!   await session.submit();
//! });
//! downloadButton.addEventListener("click", () => session.download());
//! ```

pub mod console;
pub mod download;
pub mod http;
pub mod page_grid;
pub mod pdf_renderer;
pub mod session;

use wasm_bindgen::prelude::*;

pub use session::SplitterSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default settings as a plain object, handy as a base for overrides
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&pdfsplit_core::ApiConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
