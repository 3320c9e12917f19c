//! Category Paths
//!
//! Hierarchy is encoded only in the display text ("Parent / Child").
//! A path lies below another iff it starts with that path followed by
//! the full delimiter, so "Science" never matches "Sciences".

/// Level delimiter inside a display path
pub const PATH_DELIMITER: &str = " / ";

/// A display path prepared for ancestor tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPath<'a> {
    path: &'a str,
    /// `path` + delimiter, the prefix every descendant starts with
    child_prefix: String,
}

impl<'a> CategoryPath<'a> {
    pub fn parse(display_path: &'a str) -> Self {
        Self {
            path: display_path,
            child_prefix: format!("{}{}", display_path, PATH_DELIMITER),
        }
    }

    /// True if `self` lies strictly below `ancestor`
    pub fn is_descendant_of(&self, ancestor: &CategoryPath<'_>) -> bool {
        self.path.starts_with(&ancestor.child_prefix)
    }
}
