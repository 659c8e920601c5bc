//! Everything a resolver may look at while resolving one scene: the archives (through the
//! decode-once caches) and the reference tables.

use std::sync::Arc;

use glam::Vec3;
use log::trace;
use thiserror::Error;

use crate::asset_graph::DecodeError;
use crate::asset_graph::cache::AssetCache;
use crate::asset_graph::generators::{ModelGenerator, PackageGenerator};
use crate::asset_graph::nodes::{ModelAssetNode, PackageNode};
use crate::io::common::loader::RawAssetLoader;
use crate::placement::ParameterError;
use crate::tables::ReferenceTables;


#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No package is registered for object type {0}")]
    UnknownObjectType(String),

    #[error("Package {0} not found")]
    PackageNotFound(String),

    #[error("Package {package} has no category {category}")]
    CategoryNotFound { package: String, category: String },

    #[error("Package {package} has no file {file} in category {category}")]
    FileNotFound {
        package: String,
        category: String,
        file: String,
    },

    #[error("Variant {variant} of {package} does not exist (expected 1..={count})")]
    VariantOutOfRange { package: String, variant: i32, count: usize },

    #[error("Model {0} not found")]
    ModelNotFound(String),

    #[error("Model {model} has no node {node}")]
    NodeNotFound { model: String, node: String },

    #[error("No {table} entry named {name}")]
    TableEntryNotFound { table: &'static str, name: String },

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Per scene-load state. Owns the decoded packages and models, borrows the archives and the
/// reference tables. Not meant to be shared between threads: resolving in parallel requires a
/// context per worker.
pub struct ResolutionContext<'a> {
    packages: AssetCache<PackageGenerator<'a>, PackageNode>,
    models: AssetCache<ModelGenerator<'a>, ModelAssetNode>,
    tables: &'a ReferenceTables,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(loader: &'a dyn RawAssetLoader, tables: &'a ReferenceTables) -> Self {
        Self {
            packages: AssetCache::new(PackageGenerator::new(loader)),
            models: AssetCache::new(ModelGenerator::new(loader)),
            tables,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        self.tables
    }

    /// Decodes the package at `path` on first use. `Ok(None)` if no archive has it.
    pub fn package(&self, path: &str) -> Result<Option<Arc<PackageNode>>, DecodeError> {
        self.packages.resolve(path)
    }

    /// Decodes the model at `path` on first use. `Ok(None)` if no archive has it.
    pub fn model(&self, path: &str) -> Result<Option<Arc<ModelAssetNode>>, DecodeError> {
        self.models.resolve(path)
    }

    /// The package describing `object_type`, found through the type to package map.
    pub fn package_for_type(&self, object_type: &str) -> Result<Arc<PackageNode>, ResolveError> {
        let location = self
            .tables
            .package_location(object_type)
            .ok_or_else(|| ResolveError::UnknownObjectType(object_type.to_string()))?;

        let path = location.path();
        trace!("Package for {} is {}", object_type, path);
        self.package(&path)?
            .ok_or(ResolveError::PackageNotFound(path))
    }

    /// Storage location of `file` inside `category` of a package.
    pub fn file_location<'p>(
        &self,
        package: &'p PackageNode,
        category: &str,
        file: &str,
    ) -> Result<&'p str, ResolveError> {
        let category_entry =
            package
                .package
                .category(category)
                .ok_or_else(|| ResolveError::CategoryNotFound {
                    package: package.path.clone(),
                    category: category.to_string(),
                })?;

        category_entry
            .file(file)
            .map(|entry| entry.location.as_str())
            .ok_or_else(|| ResolveError::FileNotFound {
                package: package.path.clone(),
                category: category.to_string(),
                file: file.to_string(),
            })
    }

    /// Location of the file selected by a 1-based `variant` among `candidates`.
    pub fn variant_location<'p>(
        &self,
        package: &'p PackageNode,
        category: &str,
        candidates: &[impl AsRef<str>],
        variant: i32,
    ) -> Result<&'p str, ResolveError> {
        let candidate = usize::try_from(variant)
            .ok()
            .and_then(|variant| variant.checked_sub(1))
            .and_then(|index| candidates.get(index))
            .ok_or_else(|| ResolveError::VariantOutOfRange {
                package: package.path.clone(),
                variant,
                count: candidates.len(),
            })?;

        self.file_location(package, category, candidate.as_ref())
    }

    /// Local translation of the node `node_name` in the model at `model_path`.
    pub fn node_offset(&self, model_path: &str, node_name: &str) -> Result<Vec3, ResolveError> {
        let model = self
            .model(model_path)?
            .ok_or_else(|| ResolveError::ModelNotFound(model_path.to_string()))?;

        let node = model
            .model
            .find_node_by_name(node_name)
            .ok_or_else(|| ResolveError::NodeNotFound {
                model: model_path.to_string(),
                node: node_name.to_string(),
            })?;

        Ok(Vec3::new(node.translation.x, node.translation.y, node.translation.z))
    }

    pub fn cached_packages(&self) -> usize {
        self.packages.len()
    }

    pub fn cached_models(&self) -> usize {
        self.models.len()
    }

    /// Drops every decoded asset, to be called between independent scene loads.
    pub fn clear(&self) {
        trace!(
            "Dropping {} packages, {} models",
            self.packages.len(),
            self.models.len()
        );
        self.packages.clear();
        self.models.clear();
    }
}

impl std::fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("packages", &self.packages.len())
            .field("models", &self.models.len())
            .finish_non_exhaustive()
    }
}
