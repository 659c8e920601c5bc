use std::io::BufRead;

use quick_xml::de::Deserializer;
use serde::Deserialize;

use crate::ParserError;
use crate::common::reader::parse_number;
use crate::common::types::{C3Vector, C4Quaternion};
use crate::set::types::{ParameterXml, SetData, SetDataXml, SetObject, SetObjectXml, SetParameter, SetValue};

pub struct SetReader {}

impl SetReader {
    pub fn parse_asset<R: BufRead>(rdr: R) -> Result<SetData, ParserError> {
        let mut deserializer = Deserializer::from_reader(rdr);
        let xml = SetDataXml::deserialize(&mut deserializer)?;

        let objects = xml
            .objects
            .into_iter()
            .map(SetReader::convert_object)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SetData { objects })
    }

    pub fn parse_str(xml: &str) -> Result<SetData, ParserError> {
        SetReader::parse_asset(xml.as_bytes())
    }

    fn convert_object(object: SetObjectXml) -> Result<SetObject, ParserError> {
        let position = object
            .position
            .map(|p| C3Vector { x: p.x, y: p.y, z: p.z })
            .unwrap_or_default();
        let rotation = object
            .rotation
            .map(|r| C4Quaternion {
                x: r.x,
                y: r.y,
                z: r.z,
                w: r.w,
            })
            .unwrap_or_default();

        let parameters = object
            .parameters
            .map(|list| list.elements)
            .unwrap_or_default()
            .into_iter()
            .map(SetReader::convert_parameter)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SetObject {
            object_type: object.object_type,
            name: object.name,
            position,
            rotation,
            parameters,
        })
    }

    fn convert_parameter(parameter: ParameterXml) -> Result<SetParameter, ParserError> {
        let (name, value) = match parameter {
            ParameterXml::Int(param) => {
                let value = parse_number::<i32>(&param.content, "Int parameter is not an integer")?;
                (param.name, SetValue::Int(value))
            }
            ParameterXml::Float(param) => {
                let value = parse_number::<f32>(&param.content, "Float parameter is not a number")?;
                (param.name, SetValue::Float(value))
            }
            ParameterXml::String(param) => (param.name, SetValue::String(param.content)),
        };

        Ok(SetParameter { name, value })
    }
}
