use std::io::Write;

use crate::common::writer::{write_chunk, write_cstring, write_version_chunk};

pub const PACKAGE_VERSION: u32 = 1;

/// A decoded package: named categories, each listing named file entries together with the
/// location they are stored at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Package {
    pub categories: Vec<PackageCategory>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackageCategory {
    pub name: String,
    pub files: Vec<PackageEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageEntry {
    pub name: String,
    pub location: String,
}

impl Package {
    pub fn category(&self, name: &str) -> Option<&PackageCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error> {
        write_version_chunk(w, b"PKGV", PACKAGE_VERSION)?;
        for category in &self.categories {
            let mut data = Vec::new();
            write_cstring(&mut data, &category.name)?;
            data.extend_from_slice(&(category.files.len() as u32).to_le_bytes());
            for entry in &category.files {
                write_cstring(&mut data, &entry.name)?;
                write_cstring(&mut data, &entry.location)?;
            }
            write_chunk(w, b"PCAT", &data)?;
        }
        Ok(())
    }
}

impl PackageCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.files.push(PackageEntry {
            name: name.into(),
            location: location.into(),
        });
        self
    }

    pub fn file(&self, name: &str) -> Option<&PackageEntry> {
        self.files.iter().find(|entry| entry.name == name)
    }
}
