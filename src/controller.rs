//! Category Filter Controller
//!
//! Keeps the exclude select in sync with the include select.

use std::rc::Rc;

use crate::collation::PathCollator;
use crate::config::FilterConfig;
use crate::controls::SelectControl;
use crate::derive::derive_exclude_options;
use crate::error::FilterResult;
use crate::models::ExcludeRendering;

/// Include (`primary`) and exclude (`secondary`) controls with the
/// settings used to derive one from the other
pub struct CategoryFilterController<P: SelectControl, S: SelectControl> {
    primary: P,
    secondary: S,
    config: Rc<FilterConfig>,
    collator: Rc<dyn PathCollator>,
}

impl<P: SelectControl, S: SelectControl> Clone for CategoryFilterController<P, S> {
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            config: self.config.clone(),
            collator: self.collator.clone(),
        }
    }
}

impl<P: SelectControl, S: SelectControl> CategoryFilterController<P, S> {
    pub fn new(primary: P, secondary: S, config: FilterConfig, collator: Rc<dyn PathCollator>) -> Self {
        Self {
            primary,
            secondary,
            config: Rc::new(config.normalized()),
            collator,
        }
    }

    /// Wire the controller if both controls exist
    ///
    /// Subscribes to changes of the include control only, then renders once.
    /// Returns `Ok(None)` when either control is absent.
    pub fn install(
        primary: Option<P>,
        secondary: Option<S>,
        config: FilterConfig,
        collator: Rc<dyn PathCollator>,
    ) -> FilterResult<Option<Self>> {
        let (primary, secondary) = match (primary, secondary) {
            (Some(p), Some(s)) => (p, s),
            (p, s) => {
                log::debug!(
                    "category filter not installed (include present: {}, exclude present: {})",
                    p.is_some(),
                    s.is_some()
                );
                return Ok(None);
            }
        };

        let controller = Self::new(primary, secondary, config, collator);

        let on_change = controller.clone();
        controller.primary.subscribe_change(Rc::new(move || {
            if let Err(e) = on_change.recompute() {
                log::error!("failed to refresh exclude categories: {}", e);
            }
        }))?;

        controller.recompute()?;
        log::info!(
            "category filter installed on {} / {}",
            controller.config.primary_name,
            controller.config.secondary_name
        );
        Ok(Some(controller))
    }

    /// Derive the exclude options from the current state of both controls
    pub fn derive(&self) -> ExcludeRendering {
        derive_exclude_options(
            &self.primary.options(),
            &self.secondary.options(),
            &self.config,
            self.collator.as_ref(),
        )
    }

    /// Re-render the exclude control
    pub fn recompute(&self) -> FilterResult<ExcludeRendering> {
        let rendering = self.derive();
        self.secondary.replace_options(&rendering.options)?;
        self.secondary.set_visible_rows(rendering.visible_rows);
        Ok(rendering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::CaselessCollator;
    use crate::controls::MemorySelect;
    use crate::models::CategoryOption;

    fn primary_select() -> MemorySelect {
        MemorySelect::new(vec![
            CategoryOption::new("__ANYVALUE__", "Any"),
            CategoryOption::new("c1", "Science"),
            CategoryOption::new("c2", "Science / Physics"),
            CategoryOption::new("c3", "Science / Physics / Optics"),
            CategoryOption::new("c4", "Arts"),
            CategoryOption::new("c5", "Arts / Music"),
        ])
    }

    fn install(primary: &MemorySelect, secondary: &MemorySelect) -> CategoryFilterController<MemorySelect, MemorySelect> {
        CategoryFilterController::install(
            Some(primary.clone()),
            Some(secondary.clone()),
            FilterConfig::default(),
            Rc::new(CaselessCollator),
        )
        .unwrap()
        .expect("both controls present")
    }

    fn exclude_ids(secondary: &MemorySelect) -> Vec<String> {
        secondary.options().into_iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_missing_control_is_noop() {
        let secondary = MemorySelect::new(vec![CategoryOption::new("x", "X")]);
        let installed = CategoryFilterController::<MemorySelect, MemorySelect>::install(
            None,
            Some(secondary.clone()),
            FilterConfig::default(),
            Rc::new(CaselessCollator),
        )
        .unwrap();
        assert!(installed.is_none());
        assert_eq!(exclude_ids(&secondary), vec!["x".to_string()]);

        let primary = primary_select();
        let installed = CategoryFilterController::<MemorySelect, MemorySelect>::install(
            Some(primary.clone()),
            None,
            FilterConfig::default(),
            Rc::new(CaselessCollator),
        )
        .unwrap();
        assert!(installed.is_none());
        assert_eq!(primary.subscriber_count(), 0);
    }

    #[test]
    fn test_install_renders_initial_state() {
        let primary = primary_select();
        primary.set_selected("c4", true);
        let secondary = MemorySelect::default();

        install(&primary, &secondary);

        assert_eq!(exclude_ids(&secondary), vec!["c5".to_string()]);
        assert_eq!(secondary.visible_rows(), 1);
        assert_eq!(primary.subscriber_count(), 1);
        assert_eq!(secondary.subscriber_count(), 0);
    }

    #[test]
    fn test_change_rerenders_and_keeps_exclusions() {
        let primary = primary_select();
        let secondary = MemorySelect::default();
        install(&primary, &secondary);
        assert!(secondary.options().is_empty());
        assert_eq!(secondary.visible_rows(), 1);

        primary.select_only(&["c1"]);
        assert_eq!(exclude_ids(&secondary), vec!["c2".to_string(), "c3".to_string()]);
        assert_eq!(secondary.visible_rows(), 2);

        // user excludes Optics, then narrows the include scope
        secondary.set_selected("c3", true);
        primary.select_only(&["c2"]);
        let options = secondary.options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "c3");
        assert!(options[0].selected);

        // Optics is no longer a candidate and disappears
        primary.select_only(&["c4"]);
        assert_eq!(exclude_ids(&secondary), vec!["c5".to_string()]);
        assert!(secondary.options().iter().all(|o| !o.selected));
    }

    #[test]
    fn test_any_selection_lists_nothing() {
        let primary = primary_select();
        let secondary = MemorySelect::default();
        install(&primary, &secondary);

        primary.select_only(&["__ANYVALUE__"]);
        assert!(secondary.options().is_empty());
        assert_eq!(secondary.visible_rows(), 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let primary = primary_select();
        primary.set_selected("c1", true);
        let secondary = MemorySelect::default();
        let controller = install(&primary, &secondary);
        secondary.set_selected("c2", true);

        let first = controller.recompute().unwrap();
        let second = controller.recompute().unwrap();
        assert_eq!(first, second);
        assert_eq!(secondary.options(), second.options);
    }

    #[test]
    fn test_secondary_change_does_not_recompute() {
        let primary = primary_select();
        let secondary = MemorySelect::default();
        install(&primary, &secondary);
        primary.set_selected("c1", true);

        // exclude changes are not subscribed, so stale content stays
        secondary.fire_change();
        assert!(secondary.options().is_empty());
    }
}
