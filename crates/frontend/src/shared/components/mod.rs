pub mod field_error;

pub use field_error::FieldError;
