//! Data module - CSV loading and preprocessing

mod loader;
mod preprocessor;
pub mod schema;

pub use loader::{DataLoader, LoaderError};
pub use preprocessor::{preprocess, PreprocessError};
