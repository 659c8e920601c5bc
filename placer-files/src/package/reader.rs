use std::io::Read;

use crate::ParserError;
use crate::common::reader::{Parseable, check_version_chunk, get_chunks_by_name, read_chunk_list, read_cstring};
use crate::package::types::{PACKAGE_VERSION, Package, PackageCategory, PackageEntry};

impl Parseable<PackageCategory> for PackageCategory {
    fn parse<R: Read>(rdr: &mut R) -> Result<PackageCategory, ParserError> {
        let name = read_cstring(rdr)?;
        let count = u32::parse(rdr)?;

        // the count comes from the file, don't trust it for the allocation.
        let mut files = Vec::with_capacity((count as usize).min(256));
        for _ in 0..count {
            let name = read_cstring(rdr)?;
            let location = read_cstring(rdr)?;
            files.push(PackageEntry { name, location });
        }

        Ok(PackageCategory { name, files })
    }
}

pub struct PackageReader {}

impl PackageReader {
    pub fn parse_asset<R: Read>(rdr: &mut R) -> Result<Package, ParserError> {
        let chunk_list = read_chunk_list(rdr)?;
        check_version_chunk(&chunk_list, "PKGV", "package", PACKAGE_VERSION)?;

        let categories = get_chunks_by_name(&chunk_list, "PCAT")
            .map(|chunk| chunk.parse::<PackageCategory>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Package { categories })
    }
}
