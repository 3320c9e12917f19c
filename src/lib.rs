//! Category Filter Frontend
//!
//! Keeps the "exclude category" select of a filter form in sync with the
//! "category" select: the exclude list always holds the subcategories of
//! whatever is currently included.
//!
//! - `init_category_filter`: enhance a server-rendered form
//! - `mount_category_filter`: render the form client-side with Leptos
//! - `recent_log_lines`: dump buffered log output

pub mod category_path;
pub mod collation;
pub mod components;
pub mod config;
pub mod controller;
pub mod controls;
pub mod derive;
pub mod dom;
pub mod error;
pub mod models;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::collation::default_collator;
use crate::components::CategoryFilterForm;
use crate::controller::CategoryFilterController;
use crate::dom::HtmlSelectControl;
use crate::error::{FilterError, FilterResult};

pub use crate::config::{FilterConfig, ANY_VALUE};
pub use crate::derive::{derive_exclude_options, derive_exclude_options_for, visible_row_count};
pub use crate::models::{CategoryOption, CategorySelect, ExcludeRendering};

/// Wire the filter selects of the current page with default settings
#[wasm_bindgen]
pub fn init_category_filter() {
    setup(FilterConfig::default(), None);
    install_on_document(FilterConfig::default());
}

/// Same as `init_category_filter`, with a partial config object
#[wasm_bindgen]
pub fn init_category_filter_with(config: JsValue) {
    let (config, config_err) = parse_config(config);
    setup(config.clone(), config_err);
    install_on_document(config);
}

/// Render the include/exclude form into the page body
#[wasm_bindgen]
pub fn mount_category_filter(categories: JsValue, config: JsValue) {
    let (config, config_err) = parse_config(config);
    setup(config.clone(), config_err);

    let categories: CategorySelect = match serde_wasm_bindgen::from_value(categories) {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("invalid category list: {}", e);
            return;
        }
    };
    log::info!("mounting category filter with {} categories", categories.len());
    mount_to_body(move || view! { <CategoryFilterForm categories=categories config=config /> });
}

/// Recently logged lines, oldest first
#[wasm_bindgen]
pub fn recent_log_lines() -> Vec<String> {
    console_logger::recent_lines()
}

fn setup(config: FilterConfig, config_err: Option<FilterError>) {
    console_error_panic_hook::set_once();
    console_logger::init(console_logger::parse_level(&config.log_level));
    if let Some(e) = config_err {
        log::warn!("{}; using defaults", e);
    }
}

/// `undefined`/`null` mean defaults; a bad value falls back to defaults too
fn parse_config(value: JsValue) -> (FilterConfig, Option<FilterError>) {
    if value.is_undefined() || value.is_null() {
        return (FilterConfig::default(), None);
    }
    match serde_wasm_bindgen::from_value::<FilterConfig>(value) {
        Ok(config) => (config.normalized(), None),
        Err(e) => (FilterConfig::default(), Some(FilterError::Config(e.to_string()))),
    }
}

fn install_on_document(config: FilterConfig) {
    match bind_document(config) {
        Ok(true) => {}
        Ok(false) => log::debug!("category filter controls not on this page"),
        Err(e) => log::error!("category filter setup failed: {}", e),
    }
}

fn bind_document(config: FilterConfig) -> FilterResult<bool> {
    let document = dom::document()?;
    let primary = HtmlSelectControl::find(&document, &config.primary_name);
    let secondary = HtmlSelectControl::find(&document, &config.secondary_name);
    let controller = CategoryFilterController::install(primary, secondary, config, default_collator())?;
    // The change listener keeps the controller alive
    Ok(controller.is_some())
}
