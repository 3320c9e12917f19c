//! Display Path Collation
//!
//! Ordering used when listing exclude candidates.

use std::cmp::Ordering;
use std::rc::Rc;

/// Compares two display paths for listing order
pub trait PathCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Deterministic collator: case-insensitive first, exact text as tie-break
#[derive(Debug, Clone, Copy, Default)]
pub struct CaselessCollator;

impl PathCollator for CaselessCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded_a = a.chars().flat_map(char::to_lowercase);
        let folded_b = b.chars().flat_map(char::to_lowercase);
        folded_a.cmp(folded_b).then_with(|| a.cmp(b))
    }
}

/// Browser locale comparison (`String.prototype.localeCompare`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCollator;

impl PathCollator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        js_sys::JsString::from(a)
            .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
            .cmp(&0)
    }
}

/// Collator for the current build target
pub fn default_collator() -> Rc<dyn PathCollator> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(LocaleCollator)
    } else {
        Rc::new(CaselessCollator)
    }
}
