use thiserror::Error;

/// Why a selection controller refused a change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection is disabled for this list")]
    SelectionDisabled,

    #[error("{operation} requires multi-select mode")]
    MultiSelectRequired { operation: &'static str },

    #[error("index {index} is out of bounds for {item_count} items")]
    IndexOutOfBounds { index: usize, item_count: usize },

    #[error("cannot remove {count} items at index {index} from {item_count} items")]
    InvalidRemoval {
        index: usize,
        count: usize,
        item_count: usize,
    },
}

pub type Result<T, E = SelectionError> = std::result::Result<T, E>;
