//! File ingestion and output rendering for post datasets

pub mod reader;
pub mod writer;

pub use reader::*;
pub use writer::*;
