//! PDF.js integration for rendering page thumbnails

use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

// External JavaScript functions from pdf-bridge.js
#[wasm_bindgen(module = "/www/js/pdf-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPdfJs)]
    fn init_pdf_js_internal(worker_src: &str) -> bool;

    #[wasm_bindgen(js_name = loadDocument, catch)]
    async fn load_document_internal(data: Uint8Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderPage, catch)]
    async fn render_page_internal(
        doc: &JsValue,
        page_num: u32,
        canvas: &HtmlCanvasElement,
        width: u32,
    ) -> Result<JsValue, JsValue>;
}

/// Point pdf.js at its worker script. Returns false when pdf.js is missing.
pub fn init_pdf_js(worker_src: &str) -> bool {
    init_pdf_js_internal(worker_src)
}

/// A document opened by pdf.js
#[derive(Clone)]
pub struct RenderedPdf {
    proxy: JsValue,
    page_count: u32,
}

impl RenderedPdf {
    /// Open PDF bytes and read the page count
    pub async fn load(bytes: &[u8]) -> Result<Self, JsValue> {
        let data = Uint8Array::new_with_length(bytes.len() as u32);
        data.copy_from(bytes);

        let proxy = load_document_internal(data).await?;
        if proxy.is_undefined() || proxy.is_null() {
            return Err(JsValue::from_str("Failed to load PDF document"));
        }

        let page_count = Reflect::get(&proxy, &JsValue::from_str("numPages"))?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("PDF document has no page count"))?
            as u32;

        Ok(Self { proxy, page_count })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Render one page scaled to `width` CSS pixels
    pub async fn render_page(
        &self,
        page_num: u32,
        canvas: &HtmlCanvasElement,
        width: u32,
    ) -> Result<(), JsValue> {
        if page_num < 1 || page_num > self.page_count {
            return Err(JsValue::from_str(&format!(
                "Invalid page number: {} (document has {} pages)",
                page_num, self.page_count
            )));
        }

        render_page_internal(&self.proxy, page_num, canvas, width).await?;
        Ok(())
    }
}
