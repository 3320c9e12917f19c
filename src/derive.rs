//! Exclude Option Derivation
//!
//! Pure computation of the exclude control's content from the include
//! control's state. No DOM access happens here.

use std::collections::{HashMap, HashSet};

use crate::category_path::CategoryPath;
use crate::collation::PathCollator;
use crate::config::FilterConfig;
use crate::models::{CategoryOption, ExcludeRendering};

/// Ids flagged as selected in an option list
pub fn selected_ids(options: &[CategoryOption]) -> HashSet<&str> {
    options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.id.as_str())
        .collect()
}

/// Visible row count for `option_count` options: at least 1, at most `max_rows`
pub fn visible_row_count(option_count: usize, max_rows: u32) -> u32 {
    let rows = u32::try_from(option_count.max(1)).unwrap_or(u32::MAX);
    rows.min(max_rows.max(1))
}

/// Derive the exclude control from the selection flags of both controls
pub fn derive_exclude_options(
    primary: &[CategoryOption],
    secondary: &[CategoryOption],
    config: &FilterConfig,
    collator: &dyn PathCollator,
) -> ExcludeRendering {
    derive_exclude_options_for(
        primary,
        &selected_ids(primary),
        &selected_ids(secondary),
        config,
        collator,
    )
}

/// Derive the exclude control from explicit id sets
///
/// A candidate is any non-sentinel primary option whose path lies strictly
/// below the path of a selected option. Candidates are unique by id, sorted
/// by display path, and keep their selection if listed in `prior_ids`.
/// Selected ids with no matching primary option match nothing.
pub fn derive_exclude_options_for(
    primary: &[CategoryOption],
    selected: &HashSet<&str>,
    prior_ids: &HashSet<&str>,
    config: &FilterConfig,
    collator: &dyn PathCollator,
) -> ExcludeRendering {
    let any_value = config.any_value.as_str();

    // First occurrence wins for lookups
    let mut by_id: HashMap<&str, &CategoryOption> = HashMap::new();
    for option in primary {
        by_id.entry(option.id.as_str()).or_insert(option);
    }

    let ancestors: Vec<CategoryPath> = selected
        .iter()
        .filter(|id| **id != any_value)
        .filter_map(|id| match by_id.get(id) {
            Some(option) => Some(CategoryPath::parse(&option.display_path)),
            None => {
                log::debug!("selected category {} not found among options", id);
                None
            }
        })
        .collect();

    let mut candidates: Vec<(&str, &str)> = Vec::new();
    if !ancestors.is_empty() {
        let mut seen: HashSet<&str> = HashSet::new();
        for option in primary {
            if option.id == any_value || seen.contains(option.id.as_str()) {
                continue;
            }
            let path = CategoryPath::parse(&option.display_path);
            if ancestors.iter().any(|ancestor| path.is_descendant_of(ancestor)) {
                seen.insert(option.id.as_str());
                candidates.push((option.id.as_str(), option.display_path.as_str()));
            }
        }
    }

    candidates.sort_by(|a, b| collator.compare(a.1, b.1));

    let options: Vec<CategoryOption> = candidates
        .into_iter()
        .map(|(id, display_path)| {
            CategoryOption::new(id, display_path).selected(prior_ids.contains(id))
        })
        .collect();

    log::debug!(
        "derived {} exclude candidates from {} selected categories",
        options.len(),
        ancestors.len()
    );

    ExcludeRendering {
        visible_rows: visible_row_count(options.len(), config.max_visible_rows),
        options,
    }
}
