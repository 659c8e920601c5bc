//! Decoded assets the resolvers read from, deduplicated per scene load.
//!
//! Packages and models are fetched from the archives, inflated and decoded on first use, then
//! kept behind an [`std::sync::Arc`] in an [`cache::AssetCache`] until the owning
//! [`crate::context::ResolutionContext`] is cleared or dropped. A scene typically places the
//! same prop dozens of times, so each package is only parsed once.

use placer_files::ParserError;
use thiserror::Error;

pub mod cache;
pub mod generators;
pub mod nodes;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("Failed to decode {path}: {source}")]
    Parser { path: String, source: ParserError },
}
