use std::io::Cursor;

use log::trace;
use placer_files::model::reader::ModelReader;
use placer_files::package::reader::PackageReader;

use crate::asset_graph::DecodeError;
use crate::asset_graph::cache::AssetGenerator;
use crate::asset_graph::nodes::{ModelAssetNode, PackageNode};
use crate::io::common::loader::{RawAsset, RawAssetLoader};
use crate::io::compression;

fn load_inflated(loader: &dyn RawAssetLoader, name: &str) -> Result<Option<RawAsset>, DecodeError> {
    let io_error = |source| DecodeError::Io {
        path: name.to_string(),
        source,
    };

    let Some(raw) = loader.load_raw_owned(name).map_err(io_error)? else {
        return Ok(None);
    };

    let data = compression::decompress(raw.data).map_err(io_error)?;
    trace!("Loaded {} ({} bytes) from {}", name, data.len(), raw.archive);
    Ok(Some(RawAsset {
        archive: raw.archive,
        data,
    }))
}

pub struct PackageGenerator<'a> {
    loader: &'a dyn RawAssetLoader,
}

impl<'a> PackageGenerator<'a> {
    pub fn new(loader: &'a dyn RawAssetLoader) -> Self {
        Self { loader }
    }
}

impl AssetGenerator<PackageNode> for PackageGenerator<'_> {
    fn generate(&self, name: &str) -> Result<Option<PackageNode>, DecodeError> {
        let Some(raw) = load_inflated(self.loader, name)? else {
            return Ok(None);
        };

        let package = PackageReader::parse_asset(&mut Cursor::new(raw.data)).map_err(|source| DecodeError::Parser {
            path: name.to_string(),
            source,
        })?;

        Ok(Some(PackageNode {
            archive: raw.archive,
            path: name.to_string(),
            package,
        }))
    }
}

pub struct ModelGenerator<'a> {
    loader: &'a dyn RawAssetLoader,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(loader: &'a dyn RawAssetLoader) -> Self {
        Self { loader }
    }
}

impl AssetGenerator<ModelAssetNode> for ModelGenerator<'_> {
    fn generate(&self, name: &str) -> Result<Option<ModelAssetNode>, DecodeError> {
        let Some(raw) = load_inflated(self.loader, name)? else {
            return Ok(None);
        };

        let model = ModelReader::parse_asset(&mut Cursor::new(raw.data)).map_err(|source| DecodeError::Parser {
            path: name.to_string(),
            source,
        })?;

        Ok(Some(ModelAssetNode {
            archive: raw.archive,
            path: name.to_string(),
            model,
        }))
    }
}
