use placer_files::model::types::DecodedModel;
use placer_files::package::types::Package;

#[derive(Debug)]
pub struct PackageNode {
    /// archive the package was served from, the files it lists live in the same archive
    pub archive: String,
    pub path: String,
    pub package: Package,
}

#[derive(Debug)]
pub struct ModelAssetNode {
    pub archive: String,
    pub path: String,
    pub model: DecodedModel,
}
