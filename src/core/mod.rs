//! Core logic - framework-agnostic order arithmetic, line editing and form state.

/// Draft/form state for the customer and order panels
pub mod forms;
/// Stateless line-item editor
pub mod line_item;
/// Subtotal, discount and total computation
pub mod totals;
