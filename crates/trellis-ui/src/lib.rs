//! View-level selection for lists and tables.
//!
//! [`ListSelectionController`] wraps a [`trellis_core::ListSelection`] with
//! what a view needs around it:
//!
//! - a [`SelectMode`] (none, single, multi) that is enforced on every change;
//! - an optional item count that indices are validated against;
//! - listeners notified with the exact spans that changed;
//! - hooks (`items_inserted` / `items_removed`) that keep indices aligned with
//!   the backing data;
//! - [`ListSelectionController::press`], which turns a click with modifiers
//!   into selection changes.
//!
//! Rendering, hit-testing and focus stay with the host framework.

pub mod error;
pub mod gesture;
pub mod input;
pub mod listeners;
pub mod selection;

pub use error::*;
pub use input::*;
pub use listeners::*;
pub use selection::*;
