use serde_derive::Deserialize;

use crate::common::types::{C3Vector, C4Quaternion};

/// Decoded placement list of a set file, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetData {
    pub objects: Vec<SetObject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetObject {
    pub object_type: String,
    pub name: Option<String>,
    pub position: C3Vector,
    pub rotation: C4Quaternion,
    pub parameters: Vec<SetParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetParameter {
    pub name: String,
    pub value: SetValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    Int(i32),
    Float(f32),
    String(String),
}

// XML representation, deserialized by quick-xml and converted into the types above.

#[derive(Deserialize, Debug)]
pub(crate) struct SetDataXml {
    #[serde(rename = "Object", default)]
    pub objects: Vec<SetObjectXml>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SetObjectXml {
    #[serde(rename = "@type")]
    pub object_type: String,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<PositionXml>,
    #[serde(rename = "Rotation")]
    pub rotation: Option<RotationXml>,
    #[serde(rename = "Parameters")]
    pub parameters: Option<ParametersXml>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PositionXml {
    #[serde(rename = "@x", default)]
    pub x: f32,
    #[serde(rename = "@y", default)]
    pub y: f32,
    #[serde(rename = "@z", default)]
    pub z: f32,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RotationXml {
    #[serde(rename = "@x", default)]
    pub x: f32,
    #[serde(rename = "@y", default)]
    pub y: f32,
    #[serde(rename = "@z", default)]
    pub z: f32,
    #[serde(rename = "@w")]
    pub w: f32,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ParametersXml {
    #[serde(rename = "$value", default)]
    pub elements: Vec<ParameterXml>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ParameterValueXml {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub(crate) enum ParameterXml {
    Int(ParameterValueXml),
    Float(ParameterValueXml),
    String(ParameterValueXml),
}
