pub mod archive;
pub mod common;
pub mod compression;
pub mod memory;
