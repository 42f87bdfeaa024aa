pub mod builtin;
pub mod json;

pub use builtin::Dataset;
