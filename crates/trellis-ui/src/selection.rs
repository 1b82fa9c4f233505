//! # Selection controller
//!
//! `ListSelectionController` is what a list or table view holds on to. It owns
//! a [`ListSelection`], enforces the view's [`SelectMode`], validates indices
//! against the item count, and tells subscribers exactly which spans changed.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use trellis_core::Span;
//! use trellis_ui::*;
//!
//! let mut ctrl = ListSelectionController::new(SelectMode::Multi).with_item_count(100);
//!
//! let events = Rc::new(RefCell::new(Vec::new()));
//! ctrl.subscribe({
//!     let events = events.clone();
//!     move |e: &SelectionEvent| events.borrow_mut().push(e.clone())
//! });
//!
//! ctrl.add_selected_range(10, 19)?;
//! ctrl.remove_selected_index(15)?;
//! assert_eq!(ctrl.selected_ranges(), &[Span::new(10, 14), Span::new(16, 19)]);
//! assert_eq!(events.borrow().len(), 2);
//!
//! assert!(ctrl.add_selected_range(90, 100).is_err());
//! # Ok::<(), SelectionError>(())
//! ```

use trellis_core::{ListSelection, Span, SpanList};

use crate::error::{Result, SelectionError};
use crate::listeners::{ListenerId, Listeners};

/// How many items a view lets the user select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectMode {
    None,
    #[default]
    Single,
    Multi,
}

/// What changed in a controller's selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Spans became selected and/or deselected.
    Changed { added: SpanList, removed: SpanList },
    /// Items were inserted (`delta > 0`) or removed (`delta < 0`) at `index`
    /// and stored spans moved. `removed` holds selection dropped with the
    /// removed items, in pre-removal indices.
    Shifted {
        index: usize,
        delta: isize,
        removed: SpanList,
    },
    /// Everything was deselected.
    Cleared { removed: SpanList },
}

#[derive(Debug, Default)]
pub struct ListSelectionController {
    mode: SelectMode,
    selection: ListSelection,
    item_count: Option<usize>,
    listeners: Listeners<SelectionEvent>,
}

fn fmt_spans(spans: &[Span]) -> String {
    let parts: Vec<String> = spans.iter().map(Span::to_string).collect();
    format!("[{}]", parts.join(", "))
}

impl ListSelectionController {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Bounds every index passed to this controller by `item_count`.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Switching modes clears the selection.
    pub fn set_mode(&mut self, mode: SelectMode) {
        if mode != self.mode {
            log::debug!("select mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.clear_selection();
        }
    }

    pub fn item_count(&self) -> Option<usize> {
        self.item_count
    }

    /// Updates the item count, deselecting anything past the new end.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = Some(item_count);
        let Some(last) = self.selection.last() else {
            return;
        };
        if last.end >= item_count {
            let removed = self.selection.remove_range(item_count, last.end);
            log::debug!("item count {item_count}: deselected {}", fmt_spans(&removed));
            self.emit(SelectionEvent::Changed {
                added: SpanList::new(),
                removed,
            });
        }
    }

    pub fn selection(&self) -> &ListSelection {
        &self.selection
    }

    pub fn subscribe(&mut self, f: impl Fn(&SelectionEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// The selected index in single mode; the first selected index otherwise.
    pub fn selected_index(&self) -> Option<usize> {
        self.first_selected_index()
    }

    /// Selects exactly `index`, or clears the selection for `None`.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> Result<()> {
        match index {
            Some(index) => self.set_selected_range(Span::single(index)),
            None => {
                self.clear_selection();
                Ok(())
            }
        }
    }

    /// The first selected span, if any.
    pub fn selected_range(&self) -> Option<Span> {
        self.selection.first()
    }

    pub fn set_selected_range(&mut self, range: Span) -> Result<()> {
        self.set_selected_ranges([range])
    }

    pub fn selected_ranges(&self) -> &[Span] {
        self.selection.spans()
    }

    /// Replaces the whole selection.
    ///
    /// In single mode the result must be at most one index.
    pub fn set_selected_ranges(&mut self, ranges: impl IntoIterator<Item = Span>) -> Result<()> {
        self.ensure_selectable()?;

        let mut next = ListSelection::new();
        for range in ranges {
            self.check_bounds(range)?;
            next.add_range(range.start, range.end);
        }
        let multiple = next.len() > 1 || next.first().is_some_and(|s| s.start != s.end);
        if self.mode == SelectMode::Single && multiple {
            return Err(self.reject(SelectionError::MultiSelectRequired {
                operation: "set_selected_ranges",
            }));
        }

        // Diff both ways by merging each side into a copy of the other.
        let mut scratch = self.selection.clone();
        let added: SpanList = next
            .iter()
            .flat_map(|s| scratch.add_range(s.start, s.end))
            .collect();
        let mut scratch = next.clone();
        let removed: SpanList = self
            .selection
            .iter()
            .flat_map(|s| scratch.add_range(s.start, s.end))
            .collect();

        self.selection = next;
        self.changed(added, removed);
        Ok(())
    }

    pub fn first_selected_index(&self) -> Option<usize> {
        self.selection.first().map(|s| s.start)
    }

    pub fn last_selected_index(&self) -> Option<usize> {
        self.selection.last().map(|s| s.end)
    }

    /// Returns true if `index` was not selected before.
    pub fn add_selected_index(&mut self, index: usize) -> Result<bool> {
        Ok(!self.add_selected_range(index, index)?.is_empty())
    }

    pub fn add_selected_range(&mut self, start: usize, end: usize) -> Result<SpanList> {
        self.ensure_multi("add_selected_range")?;
        self.check_bounds(Span::new(start, end))?;

        let added = self.selection.add_range(start, end);
        self.changed(added.clone(), SpanList::new());
        Ok(added)
    }

    /// Returns true if `index` was selected before.
    pub fn remove_selected_index(&mut self, index: usize) -> Result<bool> {
        Ok(!self.remove_selected_range(index, index)?.is_empty())
    }

    pub fn remove_selected_range(&mut self, start: usize, end: usize) -> Result<SpanList> {
        self.ensure_multi("remove_selected_range")?;
        self.check_bounds(Span::new(start, end))?;

        let removed = self.selection.remove_range(start, end);
        self.changed(SpanList::new(), removed.clone());
        Ok(removed)
    }

    /// Returns false if nothing was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let removed: SpanList = self.selection.iter().copied().collect();
        self.selection.clear();
        log::debug!("selection cleared: {}", fmt_spans(&removed));
        self.emit(SelectionEvent::Cleared { removed });
        true
    }

    pub fn is_item_selected(&self, index: usize) -> bool {
        self.selection.contains_index(index)
    }

    /// Call after one item was inserted into the backing list at `index`.
    pub fn items_inserted(&mut self, index: usize) -> Result<()> {
        if let Some(item_count) = self.item_count {
            if index > item_count {
                return Err(self.reject(SelectionError::IndexOutOfBounds { index, item_count }));
            }
            self.item_count = Some(item_count + 1);
        }

        if self.selection.insert_index(index) > 0 {
            log::debug!("item inserted at {index}: {}", self.selection);
            self.emit(SelectionEvent::Shifted {
                index,
                delta: 1,
                removed: SpanList::new(),
            });
        }
        Ok(())
    }

    /// Call after `count` items were removed from the backing list at `index`.
    ///
    /// Returns the selection that went away with the removed items.
    pub fn items_removed(&mut self, index: usize, count: usize) -> Result<SpanList> {
        if count == 0 {
            return Ok(SpanList::new());
        }
        if let Some(item_count) = self.item_count {
            if index.saturating_add(count) > item_count {
                return Err(self.reject(SelectionError::InvalidRemoval {
                    index,
                    count,
                    item_count,
                }));
            }
            self.item_count = Some(item_count - count);
        }

        let affected = self.selection.last().is_some_and(|s| s.end >= index);
        let removed = self.selection.remove_indexes(index, count);
        if affected {
            log::debug!(
                "{count} items removed at {index}: dropped {}, now {}",
                fmt_spans(&removed),
                self.selection
            );
            self.emit(SelectionEvent::Shifted {
                index,
                delta: -(count as isize),
                removed: removed.clone(),
            });
        }
        Ok(removed)
    }

    fn changed(&self, added: SpanList, removed: SpanList) {
        if added.is_empty() && removed.is_empty() {
            return;
        }
        log::debug!(
            "selection +{} -{} => {}",
            fmt_spans(&added),
            fmt_spans(&removed),
            self.selection
        );
        self.emit(SelectionEvent::Changed { added, removed });
    }

    fn emit(&self, event: SelectionEvent) {
        self.listeners.notify(&event);
    }

    fn ensure_selectable(&self) -> Result<()> {
        if self.mode == SelectMode::None {
            return Err(self.reject(SelectionError::SelectionDisabled));
        }
        Ok(())
    }

    fn ensure_multi(&self, operation: &'static str) -> Result<()> {
        match self.mode {
            SelectMode::Multi => Ok(()),
            SelectMode::None => Err(self.reject(SelectionError::SelectionDisabled)),
            SelectMode::Single => Err(self.reject(SelectionError::MultiSelectRequired { operation })),
        }
    }

    fn check_bounds(&self, range: Span) -> Result<()> {
        match self.item_count {
            Some(item_count) if range.max() >= item_count => {
                Err(self.reject(SelectionError::IndexOutOfBounds {
                    index: range.max(),
                    item_count,
                }))
            }
            _ => Ok(()),
        }
    }

    fn reject(&self, err: SelectionError) -> SelectionError {
        log::warn!("selection change rejected: {err}");
        err
    }
}
