//! Shared domain types and rules for the inventory UI.
//!
//! Everything here is platform independent so the frontend can stay a thin
//! rendering layer over these types.

pub mod domain;
