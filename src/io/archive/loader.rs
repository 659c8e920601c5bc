use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, trace};

use crate::io::common::loader::{RawAsset, RawAssetLoader};

/// Serves entries from the archives below a data folder. Every sub folder is one archive, entries
/// are looked up in priority order and the first archive that contains an entry wins.
pub struct ArchiveLoader {
    prioritized_archives: Vec<(String, PathBuf)>,
    data_folder: PathBuf,
}

#[derive(Ord, PartialOrd, Eq, PartialEq, Debug)]
enum ArchiveType {
    Patch,
    Unknown,
    Common,
}

impl ArchiveLoader {
    pub fn new(data_folder: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        // load-order: patch-N > ... > patch-1 > patch > everything else (alphabetically) > common
        let data_folder = data_folder.as_ref();

        let prioritized_archives = fs::read_dir(data_folder)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
            .sorted_by(|a, b| ArchiveLoader::sorting_order(&a.0, &b.0))
            .collect_vec();

        debug!(
            "Archive order in {}: {}",
            data_folder.display(),
            prioritized_archives.iter().map(|(name, _)| name).join(", ")
        );

        Ok(ArchiveLoader {
            prioritized_archives,
            data_folder: data_folder.to_path_buf(),
        })
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn archive_names(&self) -> impl Iterator<Item = &str> {
        self.prioritized_archives.iter().map(|(name, _)| name.as_str())
    }

    fn sorting_order(a: &str, b: &str) -> Ordering {
        let type_a = ArchiveLoader::extract_archive_type(a);
        let type_b = ArchiveLoader::extract_archive_type(b);

        if type_a != type_b {
            return type_a.cmp(&type_b);
        }

        let version_a = ArchiveLoader::extract_archive_version(a);
        let version_b = ArchiveLoader::extract_archive_version(b);

        match (type_a, version_a, version_b) {
            // for patches: patch-3 > patch-2 > patch
            (ArchiveType::Patch, Some(version_a), Some(version_b)) => version_b.cmp(&version_a),
            (ArchiveType::Patch, Some(_), None) => Ordering::Less,
            (ArchiveType::Patch, None, Some(_)) => Ordering::Greater,
            // common has inverted ordering: common > common-1 > common-2
            (ArchiveType::Common, Some(version_a), Some(version_b)) => version_a.cmp(&version_b),
            (ArchiveType::Common, Some(_), None) => Ordering::Greater,
            (ArchiveType::Common, None, Some(_)) => Ordering::Less,
            _ => a.cmp(b),
        }
    }

    fn extract_archive_type(name: &str) -> ArchiveType {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("patch") {
            ArchiveType::Patch
        } else if lower.starts_with("common") {
            ArchiveType::Common
        } else {
            ArchiveType::Unknown
        }
    }

    fn extract_archive_version(name: &str) -> Option<u32> {
        let (_, suffix) = name.rsplit_once('-')?;
        suffix.parse().ok()
    }

    /// `None` for paths that would leave the archive root.
    fn entry_path(root: &Path, path: &str) -> Option<PathBuf> {
        path.split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .try_fold(root.to_path_buf(), |acc, segment| {
                (segment != "..").then(|| acc.join(segment))
            })
    }
}

impl RawAssetLoader for ArchiveLoader {
    fn load_raw_owned(&self, path: &str) -> Result<Option<RawAsset>, std::io::Error> {
        let Some((name, entry)) = self
            .prioritized_archives
            .iter()
            .filter_map(|(name, root)| Some((name, ArchiveLoader::entry_path(root, path)?)))
            .find(|(_, entry)| entry.is_file())
        else {
            debug!("Could not locate {}!", path);
            return Ok(None);
        };

        trace!("Loading {} from {}", path, name);
        let data = fs::read(&entry)?;
        Ok(Some(RawAsset {
            archive: name.clone(),
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_priority() {
        let names = ["common", "stage", "patch", "common-1", "enemy", "patch-2", "patch-10"];
        let sorted = names
            .iter()
            .sorted_by(|a, b| ArchiveLoader::sorting_order(a, b))
            .copied()
            .collect_vec();
        assert_eq!(
            sorted,
            vec!["patch-10", "patch-2", "patch", "enemy", "stage", "common", "common-1"]
        );
    }

    #[test]
    fn entry_paths_ignore_separators() {
        let root = Path::new("data").join("stage");
        assert_eq!(
            ArchiveLoader::entry_path(&root, "object/common\\spring.pkg"),
            Some(root.join("object").join("common").join("spring.pkg"))
        );
        assert_eq!(
            ArchiveLoader::entry_path(&root, "./object//ring.pkg"),
            Some(root.join("object").join("ring.pkg"))
        );
    }

    #[test]
    fn entry_paths_stay_inside_the_archive() -> Result<(), std::io::Error> {
        let root = Path::new("data").join("stage");
        assert_eq!(ArchiveLoader::entry_path(&root, "../../etc/passwd"), None);
        assert_eq!(ArchiveLoader::entry_path(&root, "object/../../common/spring.pkg"), None);

        // a real file right next to the data folder must not be reachable
        let data = std::env::temp_dir().join(format!("placer-archive-{}", std::process::id()));
        fs::create_dir_all(data.join("stage"))?;
        fs::write(data.join("secret.pkg"), b"outside")?;

        let loader = ArchiveLoader::new(&data)?;
        let outside = loader.load_raw_owned("../secret.pkg");
        fs::remove_dir_all(&data)?;
        assert!(outside?.is_none());
        Ok(())
    }

    #[test]
    fn missing_data_folder() {
        assert!(ArchiveLoader::new("./definitely/not/a/data/folder").is_err());
    }
}
