//! Thumbnail grid with one checkbox per page
//!
//! ```text
//! div.page-card#page-card-N
//!   label.page-label
//!     input[type=checkbox]#page-checkbox-N
//!     span "Page N"
//!   div.page-thumb
//!     canvas
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement};

/// DOM handles for one page card
pub struct PageCard {
    pub page: u32,
    pub card: Element,
    pub checkbox: HtmlInputElement,
    pub canvas: HtmlCanvasElement,
    /// Keeps the change listener alive for as long as the card exists
    listener: Option<Closure<dyn FnMut()>>,
}

impl PageCard {
    /// Build the card for `page` and append it to `container`
    pub fn create(document: &Document, container: &Element, page: u32) -> Result<Self, JsValue> {
        let card = document.create_element("div")?;
        card.set_id(&card_id(page));
        card.set_class_name("page-card");

        let label = document.create_element("label")?;
        label.set_class_name("page-label");

        let checkbox: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        checkbox.set_type("checkbox");
        checkbox.set_id(&checkbox_id(page));
        checkbox.set_class_name("page-checkbox");

        let caption = document.create_element("span")?;
        caption.set_text_content(Some(&page_label(page)));

        let thumb = document.create_element("div")?;
        thumb.set_class_name("page-thumb");

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;

        label.append_child(&checkbox)?;
        label.append_child(&caption)?;
        thumb.append_child(&canvas)?;
        card.append_child(&label)?;
        card.append_child(&thumb)?;
        container.append_child(&card)?;

        Ok(Self {
            page,
            card,
            checkbox,
            canvas,
            listener: None,
        })
    }

    /// Call `handler` whenever the checkbox changes
    pub fn on_change(&mut self, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(handler);
        self.checkbox
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        self.listener = Some(closure);
        Ok(())
    }

    pub fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
    }

    pub fn remove(&self) {
        self.card.remove();
    }
}

impl Drop for PageCard {
    fn drop(&mut self) {
        if let Some(closure) = self.listener.take() {
            let _ = self
                .checkbox
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    }
}

pub fn card_id(page: u32) -> String {
    format!("page-card-{}", page)
}

pub fn checkbox_id(page: u32) -> String {
    format!("page-checkbox-{}", page)
}

pub fn page_label(page: u32) -> String {
    format!("Page {}", page)
}
