use serde_derive::Deserialize;

/// The raw content of a reference table file. Lookups are built on top of this by the consumer.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ReferenceTablesFile {
    #[serde(rename = "Physics", default)]
    pub physics: EntryList,
    #[serde(rename = "Paths", default)]
    pub paths: EntryList,
    #[serde(rename = "Actors", default)]
    pub actors: ActorList,
    #[serde(rename = "Packages", default)]
    pub packages: PackageList,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct EntryList {
    #[serde(rename = "Entry", default)]
    pub entries: Vec<ModelEntry>,
}

/// A named parameter set that places a single model, e.g. a physics object.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ModelEntry {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@model")]
    pub model: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ActorList {
    #[serde(rename = "Actor", default)]
    pub actors: Vec<ActorDefinition>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ActorDefinition {
    #[serde(rename = "@type")]
    pub object_type: String,
    #[serde(rename = "Param", default)]
    pub parameters: Vec<ActorParameter>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ActorParameter {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PackageList {
    #[serde(rename = "Package", default)]
    pub packages: Vec<PackageMapping>,
}

/// Maps an object type onto the package describing its files.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PackageMapping {
    #[serde(rename = "@type")]
    pub object_type: String,
    #[serde(rename = "@group")]
    pub group: String,
    #[serde(rename = "@stem")]
    pub stem: String,
}
