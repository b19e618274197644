pub mod document;
pub mod value;

pub use document::{Document, Record};
pub use value::Value;
