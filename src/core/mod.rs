pub mod form;
pub mod generator;
pub mod lint;
pub mod template;
pub mod word_bank;
