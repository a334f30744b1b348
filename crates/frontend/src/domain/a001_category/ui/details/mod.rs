//! Category create/edit/delete modal
//!
//! - view_model.rs: form state, delete flow and commands
//! - view.rs: Leptos components (modal shell + form)

mod view;
mod view_model;

pub use view::CategoryFormModal;
pub use view_model::{CategoryFormVm, DeleteStep};
