pub mod fields;
pub mod slot;
pub mod story;
