//! Resumable cursors for the supported sorts.
//!
//! Each cursor performs a single step per call and remembers where it left
//! off, so the caller can render between steps.

mod bubble;
mod selection;

pub use bubble::BubbleCursor;
pub use selection::SelectionCursor;

/// What a cursor did on its last step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Compared,
    PassComplete,
    Done,
}
