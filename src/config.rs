//! Filter Configuration
//!
//! Control names, sentinel value and display limits. Every field has a
//! default, so page code only passes what it overrides.

use serde::{Deserialize, Serialize};

/// Id of the "any category" pseudo-option
pub const ANY_VALUE: &str = "__ANYVALUE__";
/// Name attribute of the include select
pub const PRIMARY_NAME: &str = "filter_category[]";
/// Name attribute of the exclude select
pub const SECONDARY_NAME: &str = "filter_exclude_category[]";
/// Upper bound for the exclude select's visible rows
pub const MAX_VISIBLE_ROWS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub primary_name: String,
    pub secondary_name: String,
    pub any_value: String,
    pub max_visible_rows: u32,
    pub log_level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            primary_name: PRIMARY_NAME.to_string(),
            secondary_name: SECONDARY_NAME.to_string(),
            any_value: ANY_VALUE.to_string(),
            max_visible_rows: MAX_VISIBLE_ROWS,
            log_level: "info".to_string(),
        }
    }
}

impl FilterConfig {
    /// Clamp values that would make the exclude control unusable
    pub fn normalized(mut self) -> Self {
        self.max_visible_rows = self.max_visible_rows.max(1);
        self
    }

    /// CSS selector locating a select by its name attribute
    pub fn selector_for(name: &str) -> String {
        format!("select[name=\"{}\"]", name)
    }
}
