//! `OrderDesk` - A terminal front-end for a customer/order management backend
//!
//! This crate provides the two CRUD panels of the demo (customers and orders)
//! against a REST backend, with client-side order totals, a stateless line-item
//! editor, and plain-text rendering driven from the command line.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
)]

/// Backend access - the `Backend` trait and its HTTP implementation
pub mod api;
/// Command-line interface - argument parsing, commands and rendering
pub mod cli;
/// Configuration - backend URL and settings file
pub mod config;
/// Core logic - order totals, line-item editing and form state
pub mod core;
/// Wire models for customers and orders
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Stateful customer and order panels
pub mod panels;

#[cfg(test)]
pub mod test_utils;
