//! DOM Select Binding
//!
//! `SelectControl` over a real `<select>` element via web-sys.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::config::FilterConfig;
use crate::controls::{ChangeHandler, SelectControl};
use crate::error::{FilterError, FilterResult};
use crate::models::CategoryOption;

#[derive(Clone)]
pub struct HtmlSelectControl {
    element: HtmlSelectElement,
}

impl HtmlSelectControl {
    pub fn new(element: HtmlSelectElement) -> Self {
        Self { element }
    }

    /// Find the select named `name`. A missing or non-select element is `None`.
    pub fn find(document: &Document, name: &str) -> Option<Self> {
        document
            .query_selector(&FilterConfig::selector_for(name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(Self::new)
    }
}

/// Read all options of a select element
pub fn read_options(select: &HtmlSelectElement) -> Vec<CategoryOption> {
    (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| CategoryOption {
            id: opt.value(),
            display_path: opt.text(),
            selected: opt.selected(),
            disabled: opt.disabled(),
        })
        .collect()
}

impl SelectControl for HtmlSelectControl {
    fn options(&self) -> Vec<CategoryOption> {
        read_options(&self.element)
    }

    fn replace_options(&self, options: &[CategoryOption]) -> FilterResult<()> {
        self.element.set_inner_html("");
        for option in options {
            let el = HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
                &option.display_path,
                &option.id,
                false,
                option.selected,
            )
            .map_err(|e| FilterError::dom("create option", e))?;
            self.element
                .append_child(&el)
                .map_err(|e| FilterError::dom("append option", e))?;
        }
        Ok(())
    }

    fn set_visible_rows(&self, rows: u32) {
        self.element.set_size(rows);
    }

    fn subscribe_change(&self, handler: ChangeHandler) -> FilterResult<()> {
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            handler();
        });
        self.element
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(|e| FilterError::dom("add change listener", e))?;
        // Listener lives as long as the page
        on_change.forget();
        Ok(())
    }
}

/// Current document, if running in a browser window
pub fn document() -> FilterResult<Document> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(FilterError::MissingDocument)
}
