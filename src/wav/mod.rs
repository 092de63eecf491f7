pub mod format;
pub mod header;
pub mod writer;
