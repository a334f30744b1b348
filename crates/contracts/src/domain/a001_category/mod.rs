pub mod aggregate;

pub use aggregate::{
    Category, CategoryDto, CategoryId, CategoryValidationErrors, ColorOption, COLOR_OPTIONS,
    DEFAULT_COLOR,
};
