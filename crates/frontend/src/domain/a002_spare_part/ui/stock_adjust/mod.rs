//! Stock adjustment modal for a single spare part
//!
//! - view_model.rs: draft state, reset-on-open tracking, submit command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::SparePartStockAdjustModal;
pub use view_model::{OpenTracker, StockAdjustVm};
