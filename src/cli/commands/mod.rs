//! Command implementations organized by panel.

/// Customers panel commands
pub mod customer;

/// Backend diagnostics
pub mod general;

/// Orders panel commands
pub mod order;
