pub mod options;

pub use options::{ArrayStyle, ConvertOptions, OutputFormat};
