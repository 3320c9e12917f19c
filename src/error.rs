//! Filter Errors
//!
//! Failures of the browser binding layer. The derivation itself never fails.

use wasm_bindgen::JsValue;

/// Common result type for binding operations
pub type FilterResult<T> = Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A DOM call was rejected by the browser
    Dom(String),
    /// Config value could not be deserialized
    Config(String),
    /// No `window.document` available
    MissingDocument,
}

impl FilterError {
    /// Wrap a rejected DOM call, keeping what was attempted
    pub fn dom(context: &str, err: JsValue) -> Self {
        let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        FilterError::Dom(format!("{}: {}", context, detail))
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::Dom(msg) => write!(f, "DOM error: {}", msg),
            FilterError::Config(msg) => write!(f, "Invalid config: {}", msg),
            FilterError::MissingDocument => write!(f, "No document available"),
        }
    }
}

impl std::error::Error for FilterError {}
