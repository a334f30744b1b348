//! Spare part information form
//!
//! - type_ahead.rs: spare type search state and keyboard rules
//! - view.rs: Leptos components

mod type_ahead;
mod view;

pub use type_ahead::{KeyAction, TypeAheadState};
pub use view::SparePartInformationForm;
