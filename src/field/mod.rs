pub mod binding;
pub mod definition;
pub mod field;
pub mod validators;
