//! Stateful splitter session
//!
//! Holds the upload and viewer state in Rust and drives the two backend
//! calls. JavaScript forwards form events and reads back flags for the UI.
//!
//! State sits behind `Rc<RefCell<..>>` and is never borrowed across an
//! `await`, so a second click while a request is outstanding reaches the
//! in-flight check instead of a borrow panic.

use crate::console;
use crate::download::save_pdf;
use crate::http;
use crate::page_grid::PageCard;
use crate::pdf_renderer::{init_pdf_js, RenderedPdf};
use pdfsplit_core::{ApiConfig, SplitterError, SplitterState, UploadedDocument};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, File, HtmlCanvasElement, HtmlInputElement};

struct Inner {
    state: SplitterState<File>,
    pdf: Option<RenderedPdf>,
    grid: Option<Element>,
    indicator: Option<Element>,
    cards: Vec<PageCard>,
    last_error: Option<String>,
}

impl Inner {
    fn report(&mut self, context: &str, err: &SplitterError) {
        console::report(context, err);
        self.last_error = Some(err.to_string());
    }

    /// Mirror the selection into the checkboxes and the tick indicator
    fn sync_view(&self) {
        for card in &self.cards {
            card.set_checked(self.state.viewer.is_selected(card.page));
        }
        if let Some(indicator) = &self.indicator {
            let hidden = !self.state.upload.is_uploaded();
            if let Err(e) = indicator.toggle_attribute_with_force("hidden", hidden) {
                console::log(&format!(
                    "Failed to update upload indicator: {}",
                    console::describe(&e)
                ));
            }
        }
    }

    fn clear_grid(&mut self) {
        for card in self.cards.drain(..) {
            card.remove();
        }
    }
}

/// Upload form plus page viewer for one browser tab
#[wasm_bindgen]
pub struct SplitterSession {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl SplitterSession {
    /// Create a session. `config` may be `undefined` for the hosted backend,
    /// or an object overriding any of the `ApiConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SplitterSession, JsValue> {
        let config = parse_config(config)?;
        init_pdf_js(&config.worker_src);

        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                state: SplitterState::new(config),
                pdf: None,
                grid: None,
                indicator: None,
                cards: Vec::new(),
                last_error: None,
            })),
        })
    }

    /// Attach the element the page grid is built into, and optionally the
    /// element shown while an upload has succeeded
    pub fn mount(&self, grid: Element, indicator: Option<Element>) {
        let mut inner = self.inner.borrow_mut();
        inner.grid = Some(grid);
        inner.indicator = indicator;
        inner.sync_view();
    }

    /// Store the picker's file (or clear it when `None`)
    #[wasm_bindgen(js_name = chooseFile)]
    pub fn choose_file(&self, file: Option<File>) {
        let mut inner = self.inner.borrow_mut();
        inner.state.choose_file(file);
        inner.sync_view();
    }

    /// `change` handler for `<input type="file">`
    #[wasm_bindgen(js_name = handleFileChange)]
    pub fn handle_file_change(&self, event: &Event) -> Result<(), JsValue> {
        let input: HtmlInputElement = event
            .target()
            .ok_or("Event has no target")?
            .dyn_into()?;
        let file = input.files().and_then(|files| files.get(0));
        self.choose_file(file);
        Ok(())
    }

    /// Upload the chosen file and load the returned document.
    /// Resolves to false when nothing was uploaded, or when the upload
    /// succeeded but the document could not be opened (`isUploaded` is then
    /// true). The reason is logged and kept in `lastError`.
    pub async fn submit(&self) -> bool {
        let inner = Rc::clone(&self.inner);

        let (file, config) = {
            let mut guard = inner.borrow_mut();
            match guard.state.begin_submit() {
                Ok(file) => (file, guard.state.config.clone()),
                Err(err) => {
                    guard.report("Error uploading file", &err);
                    return false;
                }
            }
        };

        let response = match http::upload_file(&config, &file).await {
            Ok(response) => response,
            Err(err) => {
                let mut guard = inner.borrow_mut();
                guard.state.fail_upload(&err);
                guard.report("Error uploading file", &err);
                return false;
            }
        };

        console::log(&format!("File uploaded successfully: {}", response.filename));
        let document = {
            let mut guard = inner.borrow_mut();
            let document = guard.state.complete_upload(response);
            guard.last_error = None;
            guard.pdf = None;
            guard.clear_grid();
            guard.sync_view();
            document
        };

        match load_document(&inner, &document, config.thumbnail_width).await {
            Ok(()) => true,
            Err(err) => {
                inner.borrow_mut().report("Error loading document", &err);
                false
            }
        }
    }

    /// Request an extraction of the checked pages and save the result.
    /// Resolves to false on an empty selection or a failed request.
    pub async fn download(&self) -> bool {
        let inner = Rc::clone(&self.inner);

        let (request, config) = {
            let mut guard = inner.borrow_mut();
            match guard.state.begin_download() {
                Ok(request) => (request, guard.state.config.clone()),
                Err(err) => {
                    guard.report("Error sending download request", &err);
                    return false;
                }
            }
        };

        let result = match http::extract_pages(&config, &request).await {
            Ok(bytes) => save_pdf(&bytes, &config.download_name)
                .map_err(|e| SplitterError::Download(console::describe(&e))),
            Err(err) => Err(err),
        };

        let mut guard = inner.borrow_mut();
        match result {
            Ok(()) => {
                guard.state.viewer.complete_download();
                guard.last_error = None;
                guard.sync_view();
                true
            }
            Err(err) => {
                guard.state.viewer.fail_download(&err);
                guard.report("Error sending download request", &err);
                false
            }
        }
    }

    /// Render one page of the loaded document into `canvas`
    #[wasm_bindgen(js_name = renderThumbnail)]
    pub async fn render_thumbnail(
        &self,
        page: u32,
        canvas: HtmlCanvasElement,
    ) -> Result<(), JsValue> {
        let (pdf, width) = {
            let inner = self.inner.borrow();
            let pdf = inner.pdf.clone().ok_or("No document loaded")?;
            (pdf, inner.state.config.thumbnail_width)
        };
        pdf.render_page(page, &canvas, width).await
    }

    /// Toggle a page from script; returns whether it is now selected
    #[wasm_bindgen(js_name = togglePage)]
    pub fn toggle_page(&self, page: u32) -> Result<bool, JsValue> {
        let mut inner = self.inner.borrow_mut();
        let selected = inner
            .state
            .viewer
            .toggle(page)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner.sync_view();
        Ok(selected)
    }

    #[wasm_bindgen(js_name = isPageSelected)]
    pub fn is_page_selected(&self, page: u32) -> bool {
        self.inner.borrow().state.viewer.is_selected(page)
    }

    #[wasm_bindgen(js_name = getSelectedPages)]
    pub fn get_selected_pages(&self) -> Vec<u32> {
        self.inner.borrow().state.viewer.selection().to_vec()
    }

    #[wasm_bindgen(js_name = getPageNumbers)]
    pub fn get_page_numbers(&self) -> Vec<u32> {
        self.inner.borrow().state.viewer.page_numbers().collect()
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> Option<u32> {
        self.inner.borrow().state.viewer.page_count()
    }

    #[wasm_bindgen(getter, js_name = isUploaded)]
    pub fn is_uploaded(&self) -> bool {
        self.inner.borrow().state.upload.is_uploaded()
    }

    #[wasm_bindgen(getter, js_name = hasSelectedFile)]
    pub fn has_selected_file(&self) -> bool {
        self.inner.borrow().state.upload.selected_file().is_some()
    }

    #[wasm_bindgen(getter, js_name = isUploading)]
    pub fn is_uploading(&self) -> bool {
        self.inner.borrow().state.upload.is_pending()
    }

    #[wasm_bindgen(getter, js_name = isExtracting)]
    pub fn is_extracting(&self) -> bool {
        self.inner.borrow().state.viewer.is_pending()
    }

    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> Option<String> {
        self.document().map(|d| d.filename)
    }

    #[wasm_bindgen(getter, js_name = pdfBase64)]
    pub fn pdf_base64(&self) -> Option<String> {
        self.document().map(|d| d.pdf_base64)
    }

    #[wasm_bindgen(getter, js_name = dataUrl)]
    pub fn data_url(&self) -> Option<String> {
        self.document().map(|d| d.data_url())
    }

    #[wasm_bindgen(getter, js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.inner.borrow().last_error.clone()
    }

    fn document(&self) -> Option<UploadedDocument> {
        self.inner.borrow().state.viewer.document().cloned()
    }
}

fn parse_config(value: JsValue) -> Result<ApiConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ApiConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
}

/// Open the document with pdf.js, record its page count and build the grid
async fn load_document(
    inner: &Rc<RefCell<Inner>>,
    document: &UploadedDocument,
    thumbnail_width: u32,
) -> Result<(), SplitterError> {
    let bytes = document.decode()?;
    let pdf = RenderedPdf::load(&bytes)
        .await
        .map_err(|e| SplitterError::InvalidDocument(console::describe(&e)))?;

    let mut guard = inner.borrow_mut();
    // A later upload finished first; its load owns the viewer now
    if guard.state.viewer.document() != Some(document) {
        return Ok(());
    }

    guard.state.viewer.set_page_count(pdf.page_count());
    guard.pdf = Some(pdf.clone());

    let Some(grid) = guard.grid.clone() else {
        return Ok(());
    };
    let html = grid
        .owner_document()
        .ok_or_else(|| SplitterError::Render("Grid is not attached to a document".into()))?;

    guard.clear_grid();
    let pages: Vec<u32> = guard.state.viewer.page_numbers().collect();
    for page in pages {
        let mut card = PageCard::create(&html, &grid, page)
            .map_err(|e| SplitterError::Render(console::describe(&e)))?;

        let weak = Rc::downgrade(inner);
        card.on_change(move || on_checkbox_change(&weak, page))
            .map_err(|e| SplitterError::Render(console::describe(&e)))?;

        let canvas = card.canvas.clone();
        let pdf = pdf.clone();
        spawn_local(async move {
            if let Err(e) = pdf.render_page(page, &canvas, thumbnail_width).await {
                console::log(&format!(
                    "Failed to render page {}: {}",
                    page,
                    console::describe(&e)
                ));
            }
        });

        guard.cards.push(card);
    }
    guard.sync_view();
    Ok(())
}

fn on_checkbox_change(inner: &Weak<RefCell<Inner>>, page: u32) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut guard = inner.borrow_mut();
    if let Err(err) = guard.state.viewer.toggle(page) {
        guard.report("Error selecting page", &err);
    }
    guard.sync_view();
}

