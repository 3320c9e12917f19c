//! Category Models
//!
//! Option data shared by the select controls and the derivation.

use serde::{Deserialize, Serialize};

/// One `<option>` of a category select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub id: String,
    /// Hierarchical label, e.g. "Science / Physics / Optics"
    pub display_path: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, display_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_path: display_path.into(),
            selected: false,
            disabled: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Ordered option list of one control
pub type CategorySelect = Vec<CategoryOption>;

/// Result of one recomputation of the exclude control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeRendering {
    pub options: CategorySelect,
    pub visible_rows: u32,
}

impl ExcludeRendering {
    /// Ids rendered as selected
    pub fn selected_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id.as_str())
            .collect()
    }
}
