//! Select Controls
//!
//! Abstract interface over a multi-select control, plus an in-memory
//! implementation for hosts without a DOM.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::FilterResult;
use crate::models::CategoryOption;

/// Change-notification callback
pub type ChangeHandler = Rc<dyn Fn()>;

/// A selection control the filter reads from or renders into
///
/// Handles are cheap to clone and share the underlying control.
pub trait SelectControl: Clone + 'static {
    /// Current options in display order, with selection flags
    fn options(&self) -> Vec<CategoryOption>;

    /// Replace the entire option list
    fn replace_options(&self, options: &[CategoryOption]) -> FilterResult<()>;

    /// Set how many rows the control shows
    fn set_visible_rows(&self, rows: u32);

    /// Call `handler` on every change of the control
    fn subscribe_change(&self, handler: ChangeHandler) -> FilterResult<()>;
}

#[derive(Default)]
struct MemoryState {
    options: RefCell<Vec<CategoryOption>>,
    visible_rows: Cell<u32>,
    handlers: RefCell<Vec<ChangeHandler>>,
}

/// In-memory select control
#[derive(Clone, Default)]
pub struct MemorySelect {
    state: Rc<MemoryState>,
}

impl MemorySelect {
    pub fn new(options: Vec<CategoryOption>) -> Self {
        let select = Self::default();
        *select.state.options.borrow_mut() = options;
        select
    }

    pub fn visible_rows(&self) -> u32 {
        self.state.visible_rows.get()
    }

    /// Set the selection as a user would, then notify subscribers
    pub fn select_only(&self, ids: &[&str]) {
        for option in self.state.options.borrow_mut().iter_mut() {
            option.selected = ids.contains(&option.id.as_str());
        }
        self.fire_change();
    }

    /// Set the selection without notifying subscribers
    pub fn set_selected(&self, id: &str, selected: bool) {
        if let Some(option) = self
            .state
            .options
            .borrow_mut()
            .iter_mut()
            .find(|o| o.id == id)
        {
            option.selected = selected;
        }
    }

    pub fn fire_change(&self) {
        // Clone handlers so one may touch this control again
        let handlers: Vec<ChangeHandler> = self.state.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }
}

impl SelectControl for MemorySelect {
    fn options(&self) -> Vec<CategoryOption> {
        self.state.options.borrow().clone()
    }

    fn replace_options(&self, options: &[CategoryOption]) -> FilterResult<()> {
        *self.state.options.borrow_mut() = options.to_vec();
        Ok(())
    }

    fn set_visible_rows(&self, rows: u32) {
        self.state.visible_rows.set(rows);
    }

    fn subscribe_change(&self, handler: ChangeHandler) -> FilterResult<()> {
        self.state.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
