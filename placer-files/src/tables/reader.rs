use std::io::BufRead;

use quick_xml::de::Deserializer;
use serde::Deserialize;

use crate::ParserError;
use crate::tables::types::ReferenceTablesFile;

pub struct TablesReader {}

impl TablesReader {
    pub fn parse_asset<R: BufRead>(rdr: R) -> Result<ReferenceTablesFile, ParserError> {
        let mut deserializer = Deserializer::from_reader(rdr);
        let tables = ReferenceTablesFile::deserialize(&mut deserializer)?;

        if tables
            .actors
            .actors
            .iter()
            .any(|actor| actor.object_type.is_empty())
        {
            return Err(ParserError::FormatError {
                reason: "Actor definition without a type",
            });
        }
        Ok(tables)
    }

    pub fn parse_str(xml: &str) -> Result<ReferenceTablesFile, ParserError> {
        TablesReader::parse_asset(xml.as_bytes())
    }
}
