pub mod base_field;
pub mod date;
pub mod fields;
pub mod template;
pub mod types;
pub mod validate;
