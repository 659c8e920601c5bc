use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::common::types::{C3Vector, C4Quaternion};
use crate::common::writer::{Writeable, write_chunk, write_cstring, write_version_chunk};

pub const MODEL_VERSION: u32 = 1;

/// The node hierarchy of a model. Meshes and materials live in the same file, but only the nodes
/// are decoded here, since they are what attachment points are read from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedModel {
    pub nodes: Vec<ModelNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub name: String,
    /// local to the parent node
    pub translation: C3Vector,
    pub rotation: C4Quaternion,
    /// -1 for root nodes
    pub parent: i16,
}

impl ModelNode {
    pub fn new(name: impl Into<String>, translation: C3Vector) -> Self {
        Self {
            name: name.into(),
            translation,
            rotation: C4Quaternion::default(),
            parent: -1,
        }
    }
}

impl DecodedModel {
    pub fn find_node_by_name(&self, name: &str) -> Option<&ModelNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error> {
        write_version_chunk(w, b"MDLV", MODEL_VERSION)?;

        let mut data = Vec::new();
        for node in &self.nodes {
            write_cstring(&mut data, &node.name)?;
            node.translation.write(&mut data)?;
            node.rotation.write(&mut data)?;
            data.write_i16::<LittleEndian>(node.parent)?;
        }
        write_chunk(w, b"NODE", &data)
    }
}
