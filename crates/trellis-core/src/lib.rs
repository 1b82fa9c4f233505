//! # Spans and list selection
//!
//! Trellis keeps the selection of a list or table as a handful of index
//! ranges instead of a flag per row. Two types make up the model:
//!
//! - [`Span`] — a closed range `[start, end]` of item indices.
//! - [`ListSelection`] — sorted, disjoint, non-touching spans.
//!
//! ## Selecting and deselecting
//!
//! Mutators report exactly what changed, so a view only needs to repaint the
//! rows it is told about:
//!
//! ```rust
//! use trellis_core::*;
//!
//! let mut selection = ListSelection::new();
//! assert_eq!(selection.add_range(5, 10).as_slice(), &[Span::new(5, 10)]);
//!
//! // Touching ranges coalesce; only the new part is reported.
//! assert_eq!(selection.add_range(11, 15).as_slice(), &[Span::new(11, 15)]);
//! assert_eq!(selection.spans(), &[Span::new(5, 15)]);
//!
//! // Removing from the middle splits the span.
//! assert_eq!(selection.remove_range(8, 12).as_slice(), &[Span::new(8, 12)]);
//! assert_eq!(selection.spans(), &[Span::new(5, 7), Span::new(13, 15)]);
//! ```
//!
//! ## Keeping up with the data model
//!
//! When items are inserted into or removed from the backing list, the stored
//! indices have to move with them:
//!
//! ```rust
//! use trellis_core::*;
//!
//! let mut selection = ListSelection::new();
//! selection.add_range(5, 15);
//!
//! selection.insert_index(10); // inside the span: it grows
//! assert_eq!(selection.spans(), &[Span::new(5, 16)]);
//!
//! selection.remove_indexes(0, 5); // before the span: it moves down
//! assert_eq!(selection.spans(), &[Span::new(0, 11)]);
//! ```
//!
//! The model holds no listeners and does no I/O; wrapping it with change
//! notification is up to the owner (see `trellis-ui`).

pub mod list_selection;
pub mod span;

pub mod tests;

pub use list_selection::*;
pub use span::*;
