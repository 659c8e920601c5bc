/// Raw bytes of an archive entry, together with the archive that served them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAsset {
    pub archive: String,
    pub data: Vec<u8>,
}

pub trait RawAssetLoader {
    /// Returns `Ok(None)` when no archive contains `path`. Errors are reserved for entries that
    /// exist but cannot be read.
    fn load_raw_owned(&self, path: &str) -> Result<Option<RawAsset>, std::io::Error>;
}
