//! Read-only lookup tables the resolvers consult: physics and path object parameters, actor
//! definitions and the object type to package map.

use std::collections::HashMap;

use log::trace;
use placer_files::tables::types::ReferenceTablesFile;

#[cfg(test)]
mod tests;

/// Object types and the package they are described by, as (type, group folder, package stem).
const BUILTIN_PACKAGES: &[(&str, &str, &str)] = &[
    ("ring", "common", "ring"),
    ("spring", "common", "spring"),
    ("widespring", "common", "widespring"),
    ("dashpanel", "common", "dashpanel"),
    ("dashring", "common", "dashring"),
    ("itembox", "common", "itembox"),
    ("itemboxa", "common", "itembox"),
    ("savepoint", "common", "savepoint"),
    ("goalring", "common", "goalring"),
    ("jumpselector", "common", "jumpselector"),
    ("switch", "common", "switch"),
    ("brokenpillar", "stage", "brokenpillar"),
    ("crumblingwall", "stage", "crumblingwall"),
    ("lamp", "stage", "lamp"),
    ("wapnet", "stage", "wapnet"),
    ("bungee", "stage", "bungee"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    pub group: String,
    pub stem: String,
}

impl PackageLocation {
    pub fn new(group: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            stem: stem.into(),
        }
    }

    /// Storage path of the package inside the archives.
    pub fn path(&self) -> String {
        format!("object/{}/{}.pkg", self.group, self.stem)
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceTables {
    physics: HashMap<String, String>,
    paths: HashMap<String, String>,
    actors: HashMap<String, Vec<String>>,
    packages: HashMap<String, PackageLocation>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTables {
    /// Empty parameter tables on top of the built-in package map.
    pub fn new() -> Self {
        let packages = BUILTIN_PACKAGES
            .iter()
            .map(|&(object_type, group, stem)| (object_type.to_string(), PackageLocation::new(group, stem)))
            .collect();

        Self {
            physics: HashMap::new(),
            paths: HashMap::new(),
            actors: HashMap::new(),
            packages,
        }
    }

    pub fn from_file(file: ReferenceTablesFile) -> Self {
        let mut tables = ReferenceTables::new();
        for entry in file.physics.entries {
            tables.physics.insert(entry.name, entry.model);
        }
        for entry in file.paths.entries {
            tables.paths.insert(entry.name, entry.model);
        }
        for actor in file.actors.actors {
            let names = actor.parameters.into_iter().map(|param| param.name).collect();
            tables.actors.insert(actor.object_type, names);
        }
        for mapping in file.packages.packages {
            if tables.packages.contains_key(&mapping.object_type) {
                trace!("Package mapping for {} overrides the built-in one", mapping.object_type);
            }
            tables
                .packages
                .insert(mapping.object_type, PackageLocation::new(mapping.group, mapping.stem));
        }
        tables
    }

    pub fn with_physics(mut self, name: impl Into<String>, model: impl Into<String>) -> Self {
        self.physics.insert(name.into(), model.into());
        self
    }

    pub fn with_path(mut self, name: impl Into<String>, model: impl Into<String>) -> Self {
        self.paths.insert(name.into(), model.into());
        self
    }

    pub fn with_actor(mut self, object_type: impl Into<String>, parameter_names: &[&str]) -> Self {
        self.actors.insert(
            object_type.into(),
            parameter_names.iter().map(|name| name.to_string()).collect(),
        );
        self
    }

    pub fn with_package(mut self, object_type: impl Into<String>, group: &str, stem: &str) -> Self {
        self.packages
            .insert(object_type.into(), PackageLocation::new(group, stem));
        self
    }

    pub fn physics_model(&self, name: &str) -> Option<&str> {
        self.physics.get(name).map(String::as_str)
    }

    pub fn path_model(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    pub fn actor_parameters(&self, object_type: &str) -> Option<&[String]> {
        self.actors.get(object_type).map(Vec::as_slice)
    }

    /// Position of the parameter called `parameter_name` in placements of `object_type`.
    pub fn actor_parameter_index(&self, object_type: &str, parameter_name: &str) -> Option<usize> {
        self.actor_parameters(object_type)?
            .iter()
            .position(|name| name == parameter_name)
    }

    pub fn package_location(&self, object_type: &str) -> Option<&PackageLocation> {
        self.packages.get(object_type)
    }
}
