//! Panels - the stateful halves of the front-end.
//!
//! A panel owns one cached collection, a loading flag, a single last-error
//! message and the form being edited. Mutations never touch the cache
//! directly: each one makes a single backend call and then re-fetches.

/// Confirmation prompts for deletes
pub mod confirm;
/// Customers panel
pub mod customers;
/// Orders panel
pub mod orders;

pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use customers::CustomerPanel;
pub use orders::OrderPanel;

/// How a panel action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The backend accepted the change and the cache was refreshed
    Done,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// Something failed; the panel's error message says what
    Failed,
}

impl Outcome {
    /// Whether the action failed
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}
