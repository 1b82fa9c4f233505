use trellis_core::Span;

use crate::error::Result;
use crate::input::Modifiers;
use crate::selection::{ListSelectionController, SelectMode};

impl ListSelectionController {
    /// Applies a primary-button press on the item at `index`.
    ///
    /// - Multi + shift: selects from the first selected index to `index`
    ///   (or from `index` to the last selected index when pressing above it).
    /// - Multi + ctrl/cmd: toggles `index`.
    /// - Single + ctrl/cmd on the selected item: clears the selection.
    /// - Otherwise: selects exactly `index`.
    pub fn press(&mut self, index: usize, modifiers: Modifiers) -> Result<()> {
        match self.mode() {
            SelectMode::None => Ok(()),
            SelectMode::Multi if modifiers.shift => {
                let range = match (self.first_selected_index(), self.last_selected_index()) {
                    (Some(first), _) if index > first => Span::new(first, index),
                    (_, Some(last)) => Span::new(index, last),
                    _ => Span::single(index),
                };
                self.set_selected_range(range)
            }
            SelectMode::Multi if modifiers.command() => {
                if self.is_item_selected(index) {
                    self.remove_selected_index(index)?;
                } else {
                    self.add_selected_index(index)?;
                }
                Ok(())
            }
            SelectMode::Single if modifiers.command() && self.is_item_selected(index) => {
                self.clear_selection();
                Ok(())
            }
            _ => self.set_selected_index(Some(index)),
        }
    }
}
