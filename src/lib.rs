//! g4hex - PNG to G4 TIFF C arrays
//!
//! Converts PNG images into 1-bit CCITT Group 4 TIFF data rendered as C
//! array literals for e-paper firmware. The binary is a thin CLI over
//! [`services::Converter`]; the modules are public for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::ConvertError;
pub use models::{ArrayStyle, ConvertOptions, OutputFormat};
pub use services::{Conversion, Converter};
