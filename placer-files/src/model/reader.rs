use std::io::Read;

use crate::ParserError;
use crate::common::reader::{
    Parseable, check_version_chunk, get_mandatory_chunk_by_name, read_chunk_array, read_chunk_list, read_cstring,
};
use crate::common::types::{C3Vector, C4Quaternion};
use crate::model::types::{DecodedModel, MODEL_VERSION, ModelNode};

impl Parseable<ModelNode> for ModelNode {
    fn parse<R: Read>(rdr: &mut R) -> Result<ModelNode, ParserError> {
        Ok(ModelNode {
            name: read_cstring(rdr)?,
            translation: C3Vector::parse(rdr)?,
            rotation: C4Quaternion::parse(rdr)?,
            parent: i16::parse(rdr)?,
        })
    }
}

pub struct ModelReader {}

impl ModelReader {
    pub fn parse_asset<R: Read>(rdr: &mut R) -> Result<DecodedModel, ParserError> {
        let chunk_list = read_chunk_list(rdr)?;
        check_version_chunk(&chunk_list, "MDLV", "model", MODEL_VERSION)?;

        let node_chunk = get_mandatory_chunk_by_name(&chunk_list, "NODE")?;
        let nodes = read_chunk_array::<ModelNode>(&node_chunk.data)?;

        if let Some(node) = nodes
            .iter()
            .find(|node| node.parent >= 0 && node.parent as usize >= nodes.len())
        {
            log::trace!("Node {} references parent {} out of range", node.name, node.parent);
            return Err(ParserError::FormatError {
                reason: "Node parent index out of range",
            });
        }

        Ok(DecodedModel { nodes })
    }
}
